//! Gaming Timer - a work timer that earns a gaming budget
//!
//! Work time counts up once per tick and earns 0.2s of gaming time per tick.
//! Gaming mode spends one second of that budget per tick and stops the timer
//! when it runs out. The timer model is pure; `AppState` mounts it with a
//! cancelable ticker and publishes snapshots and events for any front end.

pub mod config;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{AppState, ModePolicy, TimerEvent, TimerModel, TimerState};
pub use api::create_router;
pub use utils::{format_time, shutdown_signal};
