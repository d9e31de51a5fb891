//! Gaming Timer - host process
//!
//! Mounts one timer and serves it to front ends over local HTTP.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

use gaming_timer::{
    api::create_router,
    config::Config,
    state::AppState,
    tasks::{exhaustion_alert_task, title_watcher_task},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(format!("gaming_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting gaming-timer v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, tick={}ms, policy={:?}",
          config.host, config.port, config.tick_ms, config.policy);

    let state = Arc::new(AppState::new(config.policy, config.tick_interval()));

    // Presentation-side reactions to the timer
    tokio::spawn(exhaustion_alert_task(Arc::clone(&state)));
    tokio::spawn(title_watcher_task(Arc::clone(&state)));

    let app = create_router(Arc::clone(&state));

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /timer              - Current timer, controls and title");
    info!("  POST /timer/start        - Start the timer");
    info!("  POST /timer/pause        - Pause the timer");
    info!("  POST /timer/reset-work   - Reset work time");
    info!("  POST /timer/reset-gaming - Reset gaming time");
    info!("  POST /timer/toggle-mode  - Switch between work and gaming mode");
    info!("  GET  /health             - Health check");

    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    // Unmount the widget so no tick fires after shutdown
    if let Err(e) = state.shutdown() {
        error!("Failed to stop timer: {}", e);
    }

    info!("Server shutdown complete");
    Ok(())
}
