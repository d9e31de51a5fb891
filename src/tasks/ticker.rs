//! Repeating tick source

use std::{sync::Weak, time::Duration};
use tokio::{
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{debug, error};

use crate::state::AppState;

/// Handle to a running tick task.
///
/// The task is aborted when the handle is dropped. Each ticker carries the run
/// id it was spawned with; the widget ignores ticks from any run other than
/// the one it currently holds.
#[derive(Debug)]
pub struct Ticker {
    run: u64,
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Spawn a ticker that fires every `period`, first firing one period from now.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(state: Weak<AppState>, run: u64, period: Duration) -> Self {
        let handle = tokio::spawn(tick_loop(state, run, period));
        Self { run, handle }
    }

    pub fn run(&self) -> u64 {
        self.run
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        debug!("Releasing ticker run {}", self.run);
        self.handle.abort();
    }
}

async fn tick_loop(state: Weak<AppState>, run: u64, period: Duration) {
    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        let Some(state) = state.upgrade() else {
            debug!("Widget unmounted, ticker run {} exiting", run);
            break;
        };

        match state.tick_for(run) {
            Ok(true) => {}
            Ok(false) => {
                debug!("Ticker run {} finished", run);
                break;
            }
            Err(e) => {
                error!("Tick failed: {}", e);
                break;
            }
        }
    }
}
