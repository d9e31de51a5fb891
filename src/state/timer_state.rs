//! Timer snapshot structure and the views derived from it

use serde::{Deserialize, Serialize};

/// Tenths of a second in one whole second of gaming budget
pub const TENTHS_PER_SECOND: u64 = 10;

/// Read-only snapshot of the timer handed to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimerState {
    /// Elapsed productive time since the last work reset
    pub work_seconds: u64,
    /// Gaming budget in tenths of a second
    pub gaming_tenths: u64,
    /// Work time across all resets, never decremented
    pub total_work_seconds: u64,
    pub is_running: bool,
    pub is_gaming_mode: bool,
}

impl TimerState {
    /// Create a stopped, zeroed timer state
    pub fn new() -> Self {
        Self::default()
    }

    /// Gaming budget as fractional seconds
    pub fn gaming_seconds(&self) -> f64 {
        self.gaming_tenths as f64 / TENTHS_PER_SECOND as f64
    }

    /// Which of the three machine states the snapshot is in
    pub fn phase(&self) -> TimerPhase {
        match (self.is_running, self.is_gaming_mode) {
            (false, _) => TimerPhase::Idle,
            (true, false) => TimerPhase::WorkingRunning,
            (true, true) => TimerPhase::GamingRunning,
        }
    }

    /// The value the widget shows in its big display, in tenths
    pub fn displayed_tenths(&self) -> u64 {
        if self.is_gaming_mode {
            self.gaming_tenths
        } else {
            self.work_seconds * TENTHS_PER_SECOND
        }
    }
}

/// Coarse state machine view of the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerPhase {
    Idle,
    #[serde(rename = "working")]
    WorkingRunning,
    #[serde(rename = "gaming")]
    GamingRunning,
}

impl TimerPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerPhase::Idle => "idle",
            TimerPhase::WorkingRunning => "working",
            TimerPhase::GamingRunning => "gaming",
        }
    }
}

/// Which commands are currently legal, so the presentation layer can enable,
/// disable or hide its buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub can_start: bool,
    pub can_pause: bool,
    pub can_reset_work: bool,
    pub can_reset_gaming: bool,
    pub can_toggle_mode: bool,
}
