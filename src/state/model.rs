//! Timer transition rules
//!
//! `TimerModel` owns the timer state and is the only place it changes. All
//! commands are total: anything that is not allowed in the current state is a
//! silent no-op reported through the returned `bool`.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::timer_state::{Controls, TimerPhase, TimerState, TENTHS_PER_SECOND};

/// Gaming budget earned per work tick (0.2s)
pub const GAMING_ACCRUAL_TENTHS: u64 = 2;

/// Gaming budget spent per gaming tick (1s)
pub const GAMING_DRAIN_TENTHS: u64 = TENTHS_PER_SECOND;

/// How strict the mode rules are
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModePolicy {
    /// Mode can only be switched while paused; a work reset keeps the mode
    #[default]
    Guarded,
    /// Mode can be switched at any time; a work reset also leaves gaming mode
    Classic,
}

/// Notifications the model emits for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TimerEvent {
    /// The gaming budget ran out and the timer stopped itself
    GamingTimeExhausted { total_work_seconds: u64 },
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer was not running
    Idle,
    /// Work time advanced and gaming budget accrued
    Worked,
    /// Gaming budget was spent and some is left
    Gamed,
    /// Gaming budget hit zero; the timer is now stopped
    Exhausted(TimerEvent),
}

impl TickOutcome {
    pub fn event(&self) -> Option<TimerEvent> {
        match self {
            TickOutcome::Exhausted(event) => Some(*event),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TimerModel {
    state: TimerState,
    policy: ModePolicy,
}

impl TimerModel {
    pub fn new(policy: ModePolicy) -> Self {
        Self {
            state: TimerState::new(),
            policy,
        }
    }

    /// Resume from an existing snapshot
    pub fn from_state(state: TimerState, policy: ModePolicy) -> Self {
        Self { state, policy }
    }

    pub fn policy(&self) -> ModePolicy {
        self.policy
    }

    pub fn snapshot(&self) -> TimerState {
        self.state
    }

    pub fn phase(&self) -> TimerPhase {
        self.state.phase()
    }

    pub fn controls(&self) -> Controls {
        let running = self.state.is_running;
        Controls {
            can_start: !running,
            can_pause: running,
            can_reset_work: true,
            can_reset_gaming: true,
            can_toggle_mode: self.can_toggle_mode(),
        }
    }

    fn can_toggle_mode(&self) -> bool {
        match self.policy {
            ModePolicy::Guarded => !self.state.is_running,
            ModePolicy::Classic => true,
        }
    }

    pub fn start(&mut self) -> bool {
        if self.state.is_running {
            return false;
        }
        self.state.is_running = true;
        true
    }

    pub fn pause(&mut self) -> bool {
        if !self.state.is_running {
            return false;
        }
        self.state.is_running = false;
        true
    }

    /// Zero the work counter and stop. The classic policy also drops back to
    /// work mode.
    pub fn reset_work(&mut self) -> bool {
        let before = self.state;
        self.state.work_seconds = 0;
        self.state.is_running = false;
        if self.policy == ModePolicy::Classic {
            self.state.is_gaming_mode = false;
        }
        before != self.state
    }

    /// Throw away the gaming budget and leave gaming mode. The guarded policy
    /// also stops the timer, since it never switches modes while running.
    pub fn reset_gaming(&mut self) -> bool {
        let before = self.state;
        self.state.gaming_tenths = 0;
        self.state.is_gaming_mode = false;
        if self.policy == ModePolicy::Guarded {
            self.state.is_running = false;
        }
        before != self.state
    }

    pub fn toggle_gaming_mode(&mut self) -> bool {
        if !self.can_toggle_mode() {
            debug!("Ignoring mode toggle while the timer is running");
            return false;
        }
        self.state.is_gaming_mode = !self.state.is_gaming_mode;
        true
    }

    /// Advance the timer by one tick
    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.is_running {
            return TickOutcome::Idle;
        }

        if self.state.is_gaming_mode {
            if self.state.gaming_tenths <= GAMING_DRAIN_TENTHS {
                self.state.gaming_tenths = 0;
                self.state.is_running = false;
                return TickOutcome::Exhausted(TimerEvent::GamingTimeExhausted {
                    total_work_seconds: self.state.total_work_seconds,
                });
            }
            self.state.gaming_tenths -= GAMING_DRAIN_TENTHS;
            TickOutcome::Gamed
        } else {
            self.state.work_seconds += 1;
            self.state.total_work_seconds += 1;
            self.state.gaming_tenths += GAMING_ACCRUAL_TENTHS;
            TickOutcome::Worked
        }
    }
}
