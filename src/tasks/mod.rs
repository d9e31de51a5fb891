//! Background tasks module
//!
//! The tick source that drives the timer, and the presentation-side tasks
//! that react to its snapshots and events.

pub mod ticker;
pub mod exhaustion_alert;
pub mod title_watcher;

// Re-export main items
pub use ticker::Ticker;
pub use exhaustion_alert::exhaustion_alert_task;
pub use title_watcher::title_watcher_task;
