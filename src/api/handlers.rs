//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::error;

use crate::state::{AppState, CommandResult};
use super::responses::{CommandResponse, HealthResponse, StatusResponse};

type CommandReply = Result<Json<CommandResponse>, StatusCode>;

fn reply(
    result: Result<CommandResult, String>,
    applied_msg: &str,
    ignored_msg: &str,
) -> CommandReply {
    let result = result.map_err(|e| {
        error!("Timer command failed: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let message = if result.applied { applied_msg } else { ignored_msg };
    Ok(Json(CommandResponse::new(
        result.applied,
        message.to_string(),
        result.state,
        result.controls,
    )))
}

/// Handle POST /timer/start
pub async fn start_handler(State(state): State<Arc<AppState>>) -> CommandReply {
    reply(state.start(), "Timer started", "Timer is already running")
}

/// Handle POST /timer/pause
pub async fn pause_handler(State(state): State<Arc<AppState>>) -> CommandReply {
    reply(state.pause(), "Timer paused", "Timer is already paused")
}

/// Handle POST /timer/reset-work
pub async fn reset_work_handler(State(state): State<Arc<AppState>>) -> CommandReply {
    reply(state.reset_work(), "Work time reset", "Work time already reset")
}

/// Handle POST /timer/reset-gaming
pub async fn reset_gaming_handler(State(state): State<Arc<AppState>>) -> CommandReply {
    reply(
        state.reset_gaming(),
        "Gaming time reset",
        "Gaming time already reset",
    )
}

/// Handle POST /timer/toggle-mode
pub async fn toggle_mode_handler(State(state): State<Arc<AppState>>) -> CommandReply {
    reply(
        state.toggle_gaming_mode(),
        "Mode switched",
        "Pause the timer before switching modes",
    )
}

/// Handle GET /timer
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let (timer, controls, policy) = match state.view() {
        Ok(view) => view,
        Err(e) => {
            error!("Failed to get timer state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let title = match state.get_title() {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to get title: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let last_alert = state.get_last_alert();

    Ok(Json(StatusResponse {
        timer: timer.into(),
        controls,
        policy,
        title,
        last_event: last_alert.map(|(event, _)| event),
        last_alert_time: last_alert.map(|(_, at)| at),
        uptime: state.get_uptime(),
    }))
}

/// Handle GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
