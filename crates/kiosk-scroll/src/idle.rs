//! Idle monitor - brings the kiosk back to its first page
//!
//! One pending countdown at most. Every qualifying interaction cancels it and
//! starts a fresh one. When it fires, the scroll offset is read at that
//! moment; past the threshold the dashboard returns to rest by animating the
//! surface back to offset zero.

use std::time::Duration;

use kiosk_core::{FiredTimer, Interaction, Scheduler, ScrollSurface, TimerId, TimerKind};

/// Idle monitor configuration
#[derive(Clone, Debug)]
pub struct IdleConfig {
    /// Quiet period before the countdown fires
    pub timeout: Duration,
    /// Offsets above this are "away from rest"
    pub threshold_px: f64,
}

impl Default for IdleConfig {
    fn default() -> Self {
        IdleConfig {
            timeout: Duration::from_secs(10),
            threshold_px: 50.0,
        }
    }
}

/// Decision taken when the countdown fires
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IdleVerdict {
    /// Scroll back to offset zero
    ReturnToRest { offset: f64 },
    /// Close enough to the top already
    AtRest { offset: f64 },
}

pub struct IdleMonitor {
    config: IdleConfig,
    pending: Option<TimerId>,
    restarts: u64,
}

impl IdleMonitor {
    pub fn new(config: IdleConfig) -> Self {
        IdleMonitor {
            config,
            pending: None,
            restarts: 0,
        }
    }

    pub fn config(&self) -> &IdleConfig {
        &self.config
    }

    pub fn pending(&self) -> Option<TimerId> {
        self.pending
    }

    pub fn restarts(&self) -> u64 {
        self.restarts
    }

    /// Interaction event. Returns true if the countdown was restarted.
    pub fn on_interaction(&mut self, event: Interaction, sched: &mut dyn Scheduler) -> bool {
        if !event.resets_idle() {
            return false;
        }
        self.restart(sched);
        true
    }

    /// Cancel any pending countdown and start a new one
    pub fn restart(&mut self, sched: &mut dyn Scheduler) {
        if let Some(previous) = self.pending.take() {
            sched.cancel(previous);
        }
        self.pending = Some(sched.schedule_after(self.config.timeout, TimerKind::IdleTimeout));
        self.restarts += 1;
    }

    /// Countdown fired. None for a stale timer.
    pub fn on_timer(&mut self, fired: FiredTimer, surface: &dyn ScrollSurface) -> Option<IdleVerdict> {
        if fired.kind != TimerKind::IdleTimeout || self.pending != Some(fired.id) {
            return None;
        }
        self.pending = None;

        let offset = surface.offset();
        if offset > self.config.threshold_px {
            Some(IdleVerdict::ReturnToRest { offset })
        } else {
            Some(IdleVerdict::AtRest { offset })
        }
    }
}

impl Default for IdleMonitor {
    fn default() -> Self {
        Self::new(IdleConfig::default())
    }
}
