//! The mounted timer widget
//!
//! `AppState` is the single owner of the timer model and of the ticker that
//! drives it. Every command and every tick goes through the same mutex, and
//! the resulting snapshot is published to observers before the lock is
//! released, so observers see snapshots in commit order.

use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::{Duration, Instant},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::{broadcast, watch};
use tracing::{debug, info, warn};

use super::{Controls, ModePolicy, TimerEvent, TimerModel, TimerState};
use crate::{tasks::Ticker, utils::format::status_title};

/// Outcome of a user command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    /// False when the command was a no-op or rejected by the mode policy
    pub applied: bool,
    pub state: TimerState,
    /// Commands that are legal after this one
    pub controls: Controls,
}

#[derive(Debug)]
struct Inner {
    model: TimerModel,
    ticker: Option<Ticker>,
    next_run: u64,
}

/// Mounted widget: timer model, tick source and change notifications
#[derive(Debug)]
pub struct AppState {
    inner: Mutex<Inner>,
    tick_interval: Duration,
    /// Mount time, for uptime reporting
    pub start_time: Instant,
    /// Status title kept current by the title watcher
    pub title: Arc<Mutex<String>>,
    /// Last event surfaced to the user and when it was raised
    pub last_alert: Arc<Mutex<Option<(TimerEvent, DateTime<Utc>)>>>,
    /// Snapshot observers
    state_tx: watch::Sender<TimerState>,
    /// Keep the receiver alive to prevent channel closure
    _state_rx: watch::Receiver<TimerState>,
    /// Event observers (exhaustion alerts)
    event_tx: broadcast::Sender<TimerEvent>,
}

impl AppState {
    /// Mount a fresh timer
    pub fn new(policy: ModePolicy, tick_interval: Duration) -> Self {
        Self::with_model(TimerModel::new(policy), tick_interval)
    }

    /// Mount a timer around an existing model
    pub fn with_model(model: TimerModel, tick_interval: Duration) -> Self {
        let initial = model.snapshot();
        let (state_tx, state_rx) = watch::channel(initial);
        let (event_tx, _) = broadcast::channel(16);

        Self {
            inner: Mutex::new(Inner {
                model,
                ticker: None,
                next_run: 0,
            }),
            tick_interval,
            start_time: Instant::now(),
            title: Arc::new(Mutex::new(status_title(&initial))),
            last_alert: Arc::new(Mutex::new(None)),
            state_tx,
            _state_rx: state_rx,
            event_tx,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, String> {
        self.inner
            .lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))
    }

    /// Current timer snapshot
    pub fn snapshot(&self) -> Result<TimerState, String> {
        Ok(self.lock()?.model.snapshot())
    }

    /// Snapshot together with the controls that are legal right now
    pub fn view(&self) -> Result<(TimerState, Controls, ModePolicy), String> {
        let inner = self.lock()?;
        Ok((inner.model.snapshot(), inner.model.controls(), inner.model.policy()))
    }

    /// Whether a ticker is currently held
    pub fn is_ticking(&self) -> Result<bool, String> {
        Ok(self.lock()?.ticker.is_some())
    }

    pub fn subscribe_state(&self) -> watch::Receiver<TimerState> {
        self.state_tx.subscribe()
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<TimerEvent> {
        self.event_tx.subscribe()
    }

    pub fn start(self: &Arc<Self>) -> Result<CommandResult, String> {
        self.apply("start", TimerModel::start)
    }

    pub fn pause(self: &Arc<Self>) -> Result<CommandResult, String> {
        self.apply("pause", TimerModel::pause)
    }

    pub fn reset_work(self: &Arc<Self>) -> Result<CommandResult, String> {
        self.apply("reset-work", TimerModel::reset_work)
    }

    pub fn reset_gaming(self: &Arc<Self>) -> Result<CommandResult, String> {
        self.apply("reset-gaming", TimerModel::reset_gaming)
    }

    pub fn toggle_gaming_mode(self: &Arc<Self>) -> Result<CommandResult, String> {
        self.apply("toggle-mode", TimerModel::toggle_gaming_mode)
    }

    /// Unmount: stop the timer and release the ticker
    pub fn shutdown(&self) -> Result<(), String> {
        let mut inner = self.lock()?;
        let changed = inner.model.pause();
        if inner.ticker.take().is_some() {
            info!("Ticker released on shutdown");
        }
        if changed {
            self.publish(inner.model.snapshot());
        }
        Ok(())
    }

    fn apply<F>(self: &Arc<Self>, action: &str, command: F) -> Result<CommandResult, String>
    where
        F: FnOnce(&mut TimerModel) -> bool,
    {
        let mut inner = self.lock()?;

        let applied = command(&mut inner.model);
        self.sync_ticker(&mut inner);
        let state = inner.model.snapshot();
        let controls = inner.model.controls();

        if applied {
            info!("{} applied, timer is {}", action, state.phase().as_str());
            self.publish(state);
        } else {
            debug!("{} ignored, timer is {}", action, state.phase().as_str());
        }

        Ok(CommandResult { applied, state, controls })
    }

    /// Make the ticker slot agree with the model's running flag
    fn sync_ticker(self: &Arc<Self>, inner: &mut Inner) {
        let running = inner.model.snapshot().is_running;
        match (running, inner.ticker.is_some()) {
            (true, false) => {
                inner.next_run += 1;
                debug!("Spawning ticker run {}", inner.next_run);
                inner.ticker = Some(Ticker::spawn(
                    Arc::downgrade(self),
                    inner.next_run,
                    self.tick_interval,
                ));
            }
            (false, true) => {
                // Dropping the handle aborts the task
                inner.ticker = None;
            }
            _ => {}
        }
    }

    /// Apply one tick on behalf of ticker `run`.
    ///
    /// Returns whether that ticker should keep going. A ticker that is no
    /// longer the one held in the slot is stale and changes nothing.
    pub fn tick_for(&self, run: u64) -> Result<bool, String> {
        let mut inner = self.lock()?;

        if inner.ticker.as_ref().map(Ticker::run) != Some(run) {
            debug!("Dropping stale tick from run {}", run);
            return Ok(false);
        }

        let outcome = inner.model.tick();
        let state = inner.model.snapshot();
        debug!(
            "Tick {:?}: work={}s gaming={:.1}s",
            outcome,
            state.work_seconds,
            state.gaming_seconds()
        );

        let keep_going = state.is_running;
        if !keep_going {
            inner.ticker = None;
        }

        self.publish(state);
        if let Some(event) = outcome.event() {
            info!("Gaming time exhausted, timer stopped");
            if let Err(e) = self.event_tx.send(event) {
                debug!("No listeners for timer event: {}", e);
            }
        }

        Ok(keep_going)
    }

    fn publish(&self, state: TimerState) {
        if let Err(e) = self.state_tx.send(state) {
            warn!("Failed to publish timer snapshot: {}", e);
        }
    }

    /// Latest status title
    pub fn get_title(&self) -> Result<String, String> {
        self.title
            .lock()
            .map(|title| title.clone())
            .map_err(|e| format!("Failed to lock title: {}", e))
    }

    /// Replace the status title, returning whether it changed
    pub fn set_title(&self, title: String) -> Result<bool, String> {
        let mut current = self.title
            .lock()
            .map_err(|e| format!("Failed to lock title: {}", e))?;
        if *current == title {
            return Ok(false);
        }
        *current = title;
        Ok(true)
    }

    pub fn record_alert(&self, event: TimerEvent, at: DateTime<Utc>) -> Result<(), String> {
        let mut last = self.last_alert
            .lock()
            .map_err(|e| format!("Failed to lock last alert: {}", e))?;
        *last = Some((event, at));
        Ok(())
    }

    pub fn get_last_alert(&self) -> Option<(TimerEvent, DateTime<Utc>)> {
        self.last_alert.lock().ok().and_then(|alert| *alert)
    }

    /// Time since mount as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}
