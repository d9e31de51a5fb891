//! State management module
//!
//! The pure timer model, its snapshots, and the mounted widget that owns them.

pub mod timer_state;
pub mod model;
pub mod app_state;

// Re-export main types
pub use timer_state::{Controls, TimerPhase, TimerState};
pub use model::{ModePolicy, TickOutcome, TimerEvent, TimerModel};
pub use app_state::{AppState, CommandResult};
