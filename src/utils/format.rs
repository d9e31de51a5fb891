//! Display formatting for timer values

use crate::state::{timer_state::TENTHS_PER_SECOND, TimerState};

/// Heading shown next to the work time in the status title
pub const TITLE_SUFFIX: &str = "Max Productivity";

/// Format seconds as `MM:SS`.
///
/// Minutes and seconds are floored; minutes keep counting past 59. Negative or
/// non-finite input renders as `00:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "00:00".to_string();
    }
    format_seconds(seconds.floor() as u64)
}

/// Format a fixed-point tenths value as `MM:SS`
pub fn format_tenths(tenths: u64) -> String {
    format_seconds(tenths / TENTHS_PER_SECOND)
}

/// Format whole seconds as `MM:SS`
pub fn format_seconds(total: u64) -> String {
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Continuous status line reflecting the current work time
pub fn status_title(state: &TimerState) -> String {
    format!("{} | {}", format_seconds(state.work_seconds), TITLE_SUFFIX)
}
