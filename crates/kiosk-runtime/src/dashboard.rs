//! Dashboard dispatcher
//!
//! Owns the surfaces, the scroll viewport, the snap controller, the idle
//! monitor and the last weather snapshot. Whoever drives it (the tokio
//! driver, the simulation harness) hands it fired timers and interaction
//! events one at a time; every call runs to completion before the next.
//!
//! Offset changes caused by the dashboard itself are reported back as scroll
//! events, the way a real scroll surface would: they reset the idle countdown
//! and are ignored by the snap controller while an animation runs.

use chrono::{DateTime, FixedOffset};

use kiosk_core::{
    FiredTimer, Interaction, KioskResult, RenderTask, Scheduler, ScrollSurface, SurfaceTree,
    TimerKind,
};
use kiosk_scroll::{IdleMonitor, IdleVerdict, SnapController, SnapOutcome};
use kiosk_time::ClockSource;
use kiosk_weather::WeatherSnapshot;

use crate::{
    render_calendar, render_clock, render_weather, render_weather_failure, render_world_clocks,
    DashboardConfig, RenderReport,
};

/// Work the dashboard asks its driver to do outside the loop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Start a weather fetch and hand the result to `apply_weather`
    FetchWeather,
}

pub struct Dashboard<B, V> {
    config: DashboardConfig,
    clock: Box<dyn ClockSource>,
    board: B,
    viewport: V,
    snap: SnapController,
    idle: IdleMonitor,
    snapshot: Option<WeatherSnapshot>,
    started: bool,
}

impl<B: SurfaceTree, V: ScrollSurface> Dashboard<B, V> {
    pub fn new(config: DashboardConfig, clock: Box<dyn ClockSource>, board: B, viewport: V) -> Self {
        Dashboard {
            snap: SnapController::new(config.snap.clone()),
            idle: IdleMonitor::new(config.idle.clone()),
            config,
            clock,
            board,
            viewport,
            snapshot: None,
            started: false,
        }
    }

    /// Validate the configuration, then build
    pub fn try_new(
        config: DashboardConfig,
        clock: Box<dyn ClockSource>,
        board: B,
        viewport: V,
    ) -> KioskResult<Self> {
        config.validate()?;
        Ok(Self::new(config, clock, board, viewport))
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Direct viewport access. Writes through here raise no scroll event.
    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    pub fn snap(&self) -> &SnapController {
        &self.snap
    }

    pub fn idle(&self) -> &IdleMonitor {
        &self.idle
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn now(&self) -> DateTime<FixedOffset> {
        self.clock.now()
    }

    /// Render everything that needs no fetch, then arm the periodic timers.
    /// The idle countdown stays unarmed until the first interaction.
    pub fn start(&mut self, sched: &mut dyn Scheduler) -> Option<Effect> {
        if self.started {
            tracing::warn!("dashboard already started");
            return None;
        }
        self.started = true;

        let mut report = RenderReport::new();
        for task in [RenderTask::Clock, RenderTask::WorldClocks, RenderTask::Calendar] {
            report.merge(self.render(task));
        }
        if !report.is_complete() {
            tracing::info!("surfaces not on this page: {:?}", report.skipped);
        }
        for task in RenderTask::ALL {
            sched.schedule_repeating(self.config.period(task), TimerKind::Render(task));
        }

        tracing::info!(
            "dashboard started, locale {}, weather for {}",
            self.config.date_locale,
            self.config.weather.location_label
        );
        Some(Effect::FetchWeather)
    }

    /// Run one render task against the current wall clock
    pub fn render(&mut self, task: RenderTask) -> RenderReport {
        let now = self.clock.now();
        let board: &mut dyn SurfaceTree = &mut self.board;

        match task {
            RenderTask::Clock => render_clock(board, &now, &self.config.date_locale),
            RenderTask::WorldClocks => render_world_clocks(board, &now),
            RenderTask::Calendar => render_calendar(board, &now),
            RenderTask::Weather => match &self.snapshot {
                Some(snapshot) => render_weather(
                    board,
                    snapshot,
                    now.naive_local(),
                    &self.config.weather.location_label,
                ),
                None => RenderReport::new(),
            },
        }
    }

    /// Handle a fired timer
    pub fn on_timer(&mut self, fired: FiredTimer, sched: &mut dyn Scheduler) -> Option<Effect> {
        let before = self.viewport.offset();

        let effect = match fired.kind {
            TimerKind::Render(RenderTask::Weather) => Some(Effect::FetchWeather),
            TimerKind::Render(task) => {
                self.render(task);
                None
            }
            TimerKind::IdleTimeout => {
                self.on_idle(fired, sched);
                None
            }
            TimerKind::SnapDebounce | TimerKind::TouchSettle | TimerKind::AnimationFrame => {
                self.snap.on_timer(fired, &mut self.viewport, sched);
                None
            }
        };

        if self.viewport.offset() != before {
            self.on_interaction(Interaction::Scroll, sched);
        }
        effect
    }

    /// Handle an interaction event
    pub fn on_interaction(&mut self, event: Interaction, sched: &mut dyn Scheduler) {
        self.idle.on_interaction(event, sched);

        match event {
            Interaction::Scroll => {
                self.snap.on_scroll(sched);
            }
            Interaction::TouchEnd => {
                self.snap.on_touch_end(sched);
            }
            _ => {}
        }
    }

    /// A user gesture moved the viewport by `delta` pixels
    pub fn scroll_by(&mut self, delta: f64, sched: &mut dyn Scheduler) {
        let before = self.viewport.offset();
        self.viewport.set_offset(before + delta);

        if self.viewport.offset() != before {
            self.on_interaction(Interaction::Scroll, sched);
        }
    }

    /// Store and render a fetch result, or show why it failed
    pub fn apply_weather(&mut self, result: KioskResult<WeatherSnapshot>) -> RenderReport {
        match result {
            Ok(snapshot) => {
                self.snapshot = Some(snapshot);
                self.render(RenderTask::Weather)
            }
            Err(e) => {
                tracing::warn!("weather update failed: {}", e);
                render_weather_failure(&mut self.board, &e)
            }
        }
    }

    fn on_idle(&mut self, fired: FiredTimer, sched: &mut dyn Scheduler) {
        match self.idle.on_timer(fired, &self.viewport) {
            Some(IdleVerdict::ReturnToRest { offset }) => {
                match self.snap.animate_to(0.0, &mut self.viewport, sched) {
                    SnapOutcome::Busy => {
                        tracing::debug!("return to rest from {} dropped, animation running", offset)
                    }
                    outcome => tracing::info!("idle at offset {}, returning to rest: {:?}", offset, outcome),
                }
            }
            Some(IdleVerdict::AtRest { .. }) | None => {}
        }
    }
}
