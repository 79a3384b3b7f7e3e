//! Dashboard simulator - virtual time, in-memory surfaces
//!
//! Simulates:
//! - The wall clock (a ManualClock advanced in step with virtual time)
//! - The scroll viewport (clamped, paged)
//! - User gestures and interaction events
//! - Weather fetches against a scripted transport
//!
//! Timers run through the same `TimerQueue` the tokio driver uses; the
//! simulation only replaces the clock that advances it.

use std::sync::Arc;
use std::time::Duration;

use kiosk_core::{
    Interaction, KioskResult, MemoryBoard, MonoTime, Scheduler, ScrollSurface, TimerKind,
    TimerQueue, VirtualViewport,
};
use kiosk_runtime::{Dashboard, DashboardConfig, Effect};
use kiosk_scroll::snap_target;
use kiosk_time::ManualClock;
use kiosk_weather::WeatherFetcher;

use crate::ScriptedTransport;

/// Simulation setup
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Wall-clock start, RFC 3339
    pub start: String,
    pub page_height: f64,
    pub pages: u32,
    pub dashboard: DashboardConfig,
    /// Surfaces present on the page
    pub board: MemoryBoard,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            start: "2026-10-19T14:20:00+02:00".to_string(),
            page_height: 800.0,
            pages: 4,
            dashboard: DashboardConfig::default(),
            board: MemoryBoard::full(),
        }
    }
}

pub type SimDashboard = Dashboard<MemoryBoard, VirtualViewport>;

pub struct Simulation {
    dashboard: SimDashboard,
    queue: TimerQueue,
    clock: ManualClock,
    fetcher: WeatherFetcher,
    transport: Arc<ScriptedTransport>,
    pending_fetches: usize,
    fired: u64,
}

impl Simulation {
    pub fn new(config: SimConfig, transport: Arc<ScriptedTransport>) -> KioskResult<Self> {
        let clock = ManualClock::from_rfc3339(&config.start)?;
        let fetcher = WeatherFetcher::new(config.dashboard.weather.clone(), transport.clone());
        let queue = TimerQueue::with_frame_interval(config.dashboard.frame_interval);
        let dashboard = Dashboard::try_new(
            config.dashboard,
            Box::new(clock.clone()),
            config.board,
            VirtualViewport::new(config.page_height, config.pages),
        )?;

        Ok(Simulation {
            dashboard,
            queue,
            clock,
            fetcher,
            transport,
            pending_fetches: 0,
            fired: 0,
        })
    }

    /// Default setup with the given transport
    pub fn with_transport(transport: Arc<ScriptedTransport>) -> KioskResult<Self> {
        Self::new(SimConfig::default(), transport)
    }

    /// Start the dashboard: initial render and periodic timers
    pub fn start(&mut self) {
        if let Some(effect) = self.dashboard.start(&mut self.queue) {
            self.apply_effect(effect);
        }
    }

    /// Advance virtual time, firing every timer due on the way
    pub fn advance(&mut self, dt: Duration) {
        let until = self.queue.now() + dt;

        while let Some(deadline) = self.queue.next_deadline() {
            if deadline > until {
                break;
            }
            self.step_to(deadline);
            while let Some(fired) = self.queue.pop_due() {
                self.fired += 1;
                if let Some(effect) = self.dashboard.on_timer(fired, &mut self.queue) {
                    self.apply_effect(effect);
                }
            }
        }
        self.step_to(until);
    }

    /// Deliver an interaction event at the current instant
    pub fn interact(&mut self, event: Interaction) {
        self.dashboard.on_interaction(event, &mut self.queue);
    }

    /// User drag or wheel: move the viewport and raise a scroll event
    pub fn scroll_by(&mut self, delta: f64) {
        self.dashboard.scroll_by(delta, &mut self.queue);
    }

    /// Move the viewport without raising any event
    pub fn place_viewport(&mut self, offset: f64) {
        self.dashboard.viewport_mut().set_offset(offset);
    }

    /// Run every requested weather fetch to completion and apply the results
    pub async fn complete_fetches(&mut self) -> usize {
        let mut completed = 0;
        while self.pending_fetches > 0 {
            self.pending_fetches -= 1;
            let result = self.fetcher.fetch().await;
            tracing::debug!("simulated fetch finished: ok={}", result.is_ok());
            self.dashboard.apply_weather(result);
            completed += 1;
        }
        completed
    }

    pub fn now(&self) -> MonoTime {
        self.queue.now()
    }

    pub fn dashboard(&self) -> &SimDashboard {
        &self.dashboard
    }

    pub fn board(&self) -> &MemoryBoard {
        self.dashboard.board()
    }

    pub fn offset(&self) -> f64 {
        self.dashboard.viewport().offset()
    }

    pub fn queue(&self) -> &TimerQueue {
        &self.queue
    }

    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }

    pub fn transport(&self) -> &ScriptedTransport {
        &self.transport
    }

    pub fn pending_fetches(&self) -> usize {
        self.pending_fetches
    }

    /// Timers fired so far
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Structural invariants that must hold between any two events
    pub fn check_invariants(&self) -> Vec<String> {
        let mut violations = Vec::new();
        let animating = self.dashboard.snap().is_animating();

        for kind in [
            TimerKind::IdleTimeout,
            TimerKind::SnapDebounce,
            TimerKind::AnimationFrame,
        ] {
            let count = self.queue.count_kind(kind);
            if count > 1 {
                violations.push(format!("{} {:?} timers pending", count, kind));
            }
        }

        let frames = self.queue.count_kind(TimerKind::AnimationFrame);
        if animating != (frames == 1) {
            violations.push(format!(
                "animating={} with {} frame timers pending",
                animating, frames
            ));
        }

        let debounce_held = self.dashboard.snap().pending_debounce().is_some();
        if debounce_held != (self.queue.count_kind(TimerKind::SnapDebounce) == 1) {
            violations.push("debounce handle out of sync with queue".to_string());
        }
        if self.dashboard.idle().pending().is_some()
            != (self.queue.count_kind(TimerKind::IdleTimeout) == 1)
        {
            violations.push("idle handle out of sync with queue".to_string());
        }

        let viewport = self.dashboard.viewport();
        let offset = viewport.offset();
        if !(0.0..=viewport.max_offset()).contains(&offset) {
            violations.push(format!("offset {} outside scroll range", offset));
        }

        violations
    }

    /// Distance from the current offset to its snap target
    pub fn distance_from_page(&self) -> f64 {
        let viewport = self.dashboard.viewport();
        snap_target(viewport.offset(), viewport.page_height())
            .map(|target| (viewport.offset() - target).abs())
            .unwrap_or(0.0)
    }

    fn step_to(&mut self, at: MonoTime) {
        self.clock.advance(at.since(self.queue.now()));
        self.queue.advance_to(at);
    }

    fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::FetchWeather => self.pending_fetches += 1,
        }
    }
}
