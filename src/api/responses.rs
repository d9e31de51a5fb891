//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    state::{Controls, ModePolicy, TimerEvent, TimerPhase, TimerState},
    utils::format::{format_seconds, format_tenths},
};

/// Timer snapshot with everything a front end needs to render it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerView {
    pub work_seconds: u64,
    pub gaming_seconds: f64,
    pub total_work_seconds: u64,
    pub is_running: bool,
    pub is_gaming_mode: bool,
    pub phase: TimerPhase,
    pub work_display: String,
    pub gaming_display: String,
    pub total_work_display: String,
    /// Whichever of work/gaming the big display shows in the current mode
    pub display: String,
}

impl From<TimerState> for TimerView {
    fn from(state: TimerState) -> Self {
        Self {
            work_seconds: state.work_seconds,
            gaming_seconds: state.gaming_seconds(),
            total_work_seconds: state.total_work_seconds,
            is_running: state.is_running,
            is_gaming_mode: state.is_gaming_mode,
            phase: state.phase(),
            work_display: format_seconds(state.work_seconds),
            gaming_display: format_tenths(state.gaming_tenths),
            total_work_display: format_seconds(state.total_work_seconds),
            display: format_tenths(state.displayed_tenths()),
        }
    }
}

/// Response for command endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse {
    /// "applied" or "ignored"
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub timer: TimerView,
    pub controls: Controls,
}

impl CommandResponse {
    pub fn new(applied: bool, message: String, state: TimerState, controls: Controls) -> Self {
        Self {
            status: if applied { "applied" } else { "ignored" }.to_string(),
            message,
            timestamp: Utc::now(),
            timer: state.into(),
            controls,
        }
    }
}

/// Full status response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub timer: TimerView,
    pub controls: Controls,
    pub policy: ModePolicy,
    pub title: String,
    pub last_event: Option<TimerEvent>,
    pub last_alert_time: Option<DateTime<Utc>>,
    pub uptime: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
