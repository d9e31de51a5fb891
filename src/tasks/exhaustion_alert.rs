//! Exhaustion alert task

use std::sync::Arc;
use chrono::Utc;
use tokio::sync::broadcast::error::RecvError;
use tracing::{error, info, warn};

use crate::{
    state::{AppState, TimerEvent},
    utils::format::format_seconds,
};

/// Background task that surfaces timer events to the user.
///
/// The host has no modal dialogs, so the alert is a log line plus a timestamp
/// the front end can pick up from the status endpoint.
pub async fn exhaustion_alert_task(state: Arc<AppState>) {
    info!("Starting exhaustion alert task");

    let mut events = state.subscribe_events();

    loop {
        match events.recv().await {
            Ok(event @ TimerEvent::GamingTimeExhausted { total_work_seconds }) => {
                warn!(
                    "Gaming time is over! Back to work ({} worked in total)",
                    format_seconds(total_work_seconds)
                );
                if let Err(e) = state.record_alert(event, Utc::now()) {
                    error!("Failed to record alert: {}", e);
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!("Alert task lagged, skipped {} events", skipped);
            }
            Err(RecvError::Closed) => {
                info!("Event channel closed, alert task exiting");
                break;
            }
        }
    }
}
