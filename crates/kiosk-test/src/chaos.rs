//! Gesture chaos for the scroll-snap controller
//!
//! Throws seeded random gesture bursts at a simulation:
//! - Drags and wheel steps of random size and direction
//! - Touch releases at random moments, including mid-animation
//! - Pointer noise
//!
//! Structural invariants are checked after every event. After the final
//! burst the surface must come to rest on a page boundary.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use kiosk_core::Interaction;

use crate::Simulation;

/// Gesture chaos configuration
#[derive(Clone, Debug)]
pub struct GestureChaosConfig {
    /// Number of bursts
    pub bursts: u32,
    /// Maximum events per burst
    pub max_events: u32,
    /// Maximum drag distance per event (pixels, either direction)
    pub max_delta_px: f64,
    /// Maximum pause between events
    pub max_gap: Duration,
    /// Pause between bursts
    pub burst_pause: Duration,
    /// Chance that an event is a touch release
    pub touch_end_prob: f64,
    /// Chance that an event is pointer noise
    pub pointer_prob: f64,
    /// Quiet period before the resting check
    pub settle_time: Duration,
}

impl Default for GestureChaosConfig {
    fn default() -> Self {
        GestureChaosConfig {
            bursts: 20,
            max_events: 12,
            max_delta_px: 300.0,
            max_gap: Duration::from_millis(250),
            burst_pause: Duration::from_millis(700),
            touch_end_prob: 0.15,
            pointer_prob: 0.1,
            settle_time: Duration::from_secs(2),
        }
    }
}

impl GestureChaosConfig {
    /// Fast, overlapping gestures that keep interrupting animations
    pub fn frantic() -> Self {
        GestureChaosConfig {
            bursts: 50,
            max_events: 30,
            max_delta_px: 900.0,
            max_gap: Duration::from_millis(60),
            burst_pause: Duration::from_millis(100),
            touch_end_prob: 0.3,
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ChaosReport {
    pub events: u64,
    pub violations: Vec<String>,
    pub animations_started: u64,
    pub final_offset: f64,
    /// Distance from the nearest page boundary after settling
    pub rest_error: f64,
}

impl ChaosReport {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

pub struct GestureChaos {
    config: GestureChaosConfig,
    rng: StdRng,
}

impl GestureChaos {
    pub fn new(config: GestureChaosConfig, seed: u64) -> Self {
        GestureChaos {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn run(&mut self, sim: &mut Simulation) -> ChaosReport {
        let mut report = ChaosReport::default();

        for _ in 0..self.config.bursts {
            let events = self.rng.gen_range(1..=self.config.max_events.max(1));
            for _ in 0..events {
                self.one_event(sim);
                report.events += 1;
                self.record(sim, &mut report);

                let gap = self.random_gap();
                sim.advance(gap);
                self.record(sim, &mut report);
            }
            sim.advance(self.config.burst_pause);
            self.record(sim, &mut report);
        }

        sim.advance(self.config.settle_time);
        self.record(sim, &mut report);

        let dead_zone = sim.dashboard().config().snap.dead_zone_px;
        report.rest_error = sim.distance_from_page();
        if report.rest_error > dead_zone {
            report.violations.push(format!(
                "came to rest {}px from a page boundary at offset {}",
                report.rest_error,
                sim.offset()
            ));
        }
        if sim.dashboard().snap().is_animating() {
            report.violations.push("still animating after settle time".to_string());
        }

        report.animations_started = sim.dashboard().snap().stats().animations_started;
        report.final_offset = sim.offset();
        report
    }

    fn one_event(&mut self, sim: &mut Simulation) {
        let roll: f64 = self.rng.gen();
        if roll < self.config.touch_end_prob {
            sim.interact(Interaction::TouchEnd);
        } else if roll < self.config.touch_end_prob + self.config.pointer_prob {
            sim.interact(Interaction::PointerMove);
        } else {
            let max = self.config.max_delta_px;
            let delta = self.rng.gen_range(-max..=max);
            sim.scroll_by(delta);
        }
    }

    fn random_gap(&mut self) -> Duration {
        let max_ms = self.config.max_gap.as_millis() as u64;
        Duration::from_millis(self.rng.gen_range(0..=max_ms))
    }

    fn record(&self, sim: &Simulation, report: &mut ChaosReport) {
        for violation in sim.check_invariants() {
            report
                .violations
                .push(format!("t={:?}: {}", sim.now(), violation));
        }
    }
}
