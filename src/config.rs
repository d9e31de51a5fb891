//! Configuration and CLI argument handling

use std::time::Duration;
use clap::Parser;

use crate::state::ModePolicy;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "gaming-timer")]
#[command(about = "A work timer that earns a gaming budget, served over local HTTP")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Milliseconds between timer ticks
    #[arg(long = "tick-ms", default_value = "1000", value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Mode rules: guarded only switches modes while paused, classic always does
    #[arg(long, value_enum, default_value_t = ModePolicy::Guarded)]
    pub policy: ModePolicy,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
