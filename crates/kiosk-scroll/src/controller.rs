//! Snap controller - settles the scroll surface on a page boundary
//!
//! Inputs are scroll events, touch-end events and fired timers; outputs are
//! writes to the scroll surface. Two triggers feed snap requests:
//! - scroll-settle: every scroll replaces a debounce timer; when it fires
//!   the snap target is computed and requested
//! - touch-end: a fixed delay after release (lets inertial scrolling start),
//!   then the snap target is computed and requested directly
//!
//! While an animation runs, scroll events are ignored entirely: the
//! controller's own writes produce scroll events and must not re-trigger it.
//! The Animating check and the state change happen in one call with no
//! suspension point in between.

use std::time::Duration;

use kiosk_core::{FiredTimer, Scheduler, ScrollSurface, TimerId, TimerKind};

use crate::{plan_snap, Animation, AnimationState, SnapPlan};

/// Snap controller configuration
#[derive(Clone, Debug)]
pub struct SnapConfig {
    /// Quiet period after the last scroll event before settling
    pub debounce: Duration,
    /// Delay between touch release and settling
    pub touch_settle: Duration,
    /// Length of one snap animation
    pub animation_duration: Duration,
    /// No animation if already this close to a page boundary
    pub dead_zone_px: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        SnapConfig {
            debounce: Duration::from_millis(200),
            touch_settle: Duration::from_millis(400),
            animation_duration: Duration::from_millis(400),
            dead_zone_px: 5.0,
        }
    }
}

/// Result of a snap request
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SnapOutcome {
    /// Animation started
    Started { from: f64, to: f64 },
    /// Already on (or within the dead zone of) a page boundary
    Settled { target: f64 },
    /// Another animation is running; the request was dropped
    Busy,
    /// The viewport reported no usable page height
    NoPages,
}

/// What a fired timer did
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SnapTick {
    /// Stale or foreign timer
    Ignored,
    /// A settle timer fired and made a request
    Requested(SnapOutcome),
    /// An animation frame was written
    Frame { offset: f64, last: bool },
}

#[derive(Clone, Debug, Default)]
pub struct SnapStats {
    pub scrolls_ignored: u64,
    pub debounce_restarts: u64,
    pub animations_started: u64,
    pub requests_dropped: u64,
    pub frames: u64,
}

pub struct SnapController {
    config: SnapConfig,
    state: AnimationState,
    debounce: Option<TimerId>,
    frame: Option<TimerId>,
    stats: SnapStats,
}

impl SnapController {
    pub fn new(config: SnapConfig) -> Self {
        SnapController {
            config,
            state: AnimationState::Idle,
            debounce: None,
            frame: None,
            stats: SnapStats::default(),
        }
    }

    pub fn config(&self) -> &SnapConfig {
        &self.config
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    pub fn pending_debounce(&self) -> Option<TimerId> {
        self.debounce
    }

    pub fn stats(&self) -> &SnapStats {
        &self.stats
    }

    /// Scroll event. Returns false if ignored because an animation runs.
    pub fn on_scroll(&mut self, sched: &mut dyn Scheduler) -> bool {
        if self.state.is_animating() {
            self.stats.scrolls_ignored += 1;
            return false;
        }

        if let Some(previous) = self.debounce.take() {
            sched.cancel(previous);
        }
        self.debounce = Some(sched.schedule_after(self.config.debounce, TimerKind::SnapDebounce));
        self.stats.debounce_restarts += 1;
        true
    }

    /// Touch release. The settle check runs after the configured delay.
    pub fn on_touch_end(&mut self, sched: &mut dyn Scheduler) -> TimerId {
        sched.schedule_after(self.config.touch_settle, TimerKind::TouchSettle)
    }

    /// Handle a fired timer addressed to the controller
    pub fn on_timer(
        &mut self,
        fired: FiredTimer,
        surface: &mut dyn ScrollSurface,
        sched: &mut dyn Scheduler,
    ) -> SnapTick {
        match fired.kind {
            TimerKind::SnapDebounce => {
                if self.debounce != Some(fired.id) {
                    return SnapTick::Ignored;
                }
                self.debounce = None;
                SnapTick::Requested(self.settle(surface, sched))
            }
            TimerKind::TouchSettle => SnapTick::Requested(self.settle(surface, sched)),
            TimerKind::AnimationFrame => {
                if self.frame != Some(fired.id) {
                    return SnapTick::Ignored;
                }
                self.frame = None;
                self.step(surface, sched)
            }
            _ => SnapTick::Ignored,
        }
    }

    /// Compute the nearest page boundary and animate to it
    pub fn settle(
        &mut self,
        surface: &mut dyn ScrollSurface,
        sched: &mut dyn Scheduler,
    ) -> SnapOutcome {
        if self.state.is_animating() {
            self.stats.requests_dropped += 1;
            return SnapOutcome::Busy;
        }

        match plan_snap(surface.offset(), surface.page_height(), self.config.dead_zone_px) {
            SnapPlan::Animate { to, .. } => self.animate_to(to, surface, sched),
            SnapPlan::WithinDeadZone { target } => SnapOutcome::Settled { target },
            SnapPlan::NoPages => {
                tracing::debug!("snap skipped: viewport has no page height");
                SnapOutcome::NoPages
            }
        }
    }

    /// Start an eased scroll to `target`. Dropped if one is running.
    pub fn animate_to(
        &mut self,
        target: f64,
        surface: &mut dyn ScrollSurface,
        sched: &mut dyn Scheduler,
    ) -> SnapOutcome {
        let from = surface.offset();
        let animation = Animation::new(from, target, sched.now(), self.config.animation_duration);

        if let Err(e) = self.state.begin(animation) {
            tracing::debug!("snap request to {} dropped: {}", target, e);
            self.stats.requests_dropped += 1;
            return SnapOutcome::Busy;
        }

        tracing::debug!("snap animation {} -> {}", from, target);
        self.stats.animations_started += 1;
        self.frame = Some(sched.request_frame());
        SnapOutcome::Started { from, to: target }
    }

    fn step(&mut self, surface: &mut dyn ScrollSurface, sched: &mut dyn Scheduler) -> SnapTick {
        let Some(animation) = self.state.animation().copied() else {
            return SnapTick::Ignored;
        };

        let frame = animation.frame_at(sched.now());
        surface.set_offset(frame.offset);
        self.stats.frames += 1;

        if frame.is_last() {
            if let Err(e) = self.state.complete() {
                tracing::warn!("snap animation completion rejected: {}", e);
            }
        } else {
            self.frame = Some(sched.request_frame());
        }

        SnapTick::Frame {
            offset: frame.offset,
            last: frame.is_last(),
        }
    }
}

impl Default for SnapController {
    fn default() -> Self {
        Self::new(SnapConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiosk_core::{MonoTime, TimerQueue};

    /// Viewport with a fixed page height and no clamping
    struct Viewport {
        offset: f64,
        height: f64,
        writes: Vec<f64>,
    }

    impl Viewport {
        fn at(offset: f64) -> Self {
            Viewport {
                offset,
                height: 800.0,
                writes: Vec::new(),
            }
        }
    }

    impl ScrollSurface for Viewport {
        fn offset(&self) -> f64 {
            self.offset
        }

        fn set_offset(&mut self, offset: f64) {
            self.offset = offset;
            self.writes.push(offset);
        }

        fn page_height(&self) -> f64 {
            self.height
        }
    }

    /// Advance virtual time to `until`, feeding every due timer to the controller
    fn run_until(
        ctl: &mut SnapController,
        queue: &mut TimerQueue,
        view: &mut Viewport,
        until: MonoTime,
    ) -> Vec<SnapTick> {
        let mut ticks = Vec::new();
        while let Some(deadline) = queue.next_deadline() {
            if deadline > until {
                break;
            }
            queue.advance_to(deadline);
            while let Some(fired) = queue.pop_due() {
                ticks.push(ctl.on_timer(fired, view, queue));
            }
        }
        queue.advance_to(until);
        ticks
    }

    #[test]
    fn test_scroll_settle_snaps_to_nearest_page() {
        let mut ctl = SnapController::default();
        let mut queue = TimerQueue::new();
        let mut view = Viewport::at(760.0);

        assert!(ctl.on_scroll(&mut queue));
        let ticks = run_until(&mut ctl, &mut queue, &mut view, MonoTime::from_millis(1000));

        assert_eq!(
            ticks[0],
            SnapTick::Requested(SnapOutcome::Started {
                from: 760.0,
                to: 800.0
            })
        );
        assert_eq!(view.offset, 800.0);
        assert_eq!(ticks.last(), Some(&SnapTick::Frame { offset: 800.0, last: true }));
        assert!(!ctl.is_animating());
    }

    #[test]
    fn test_scroll_burst_debounces_to_one_settle() {
        let mut ctl = SnapController::default();
        let mut queue = TimerQueue::new();
        let mut view = Viewport::at(300.0);

        for step in 0..5u64 {
            queue.advance_to(MonoTime::from_millis(step * 150));
            assert!(ctl.on_scroll(&mut queue));
        }
        // Last event at 600ms; nothing may settle before 800ms
        let early = run_until(&mut ctl, &mut queue, &mut view, MonoTime::from_millis(799));
        assert!(early.is_empty());
        assert_eq!(queue.count_kind(TimerKind::SnapDebounce), 1);

        let ticks = run_until(&mut ctl, &mut queue, &mut view, MonoTime::from_millis(800));
        assert_eq!(
            ticks,
            vec![SnapTick::Requested(SnapOutcome::Started {
                from: 300.0,
                to: 0.0
            })]
        );
    }

    #[test]
    fn test_dead_zone_starts_nothing() {
        let mut ctl = SnapController::default();
        let mut queue = TimerQueue::new();
        let mut view = Viewport::at(803.0);

        ctl.on_scroll(&mut queue);
        let ticks = run_until(&mut ctl, &mut queue, &mut view, MonoTime::from_millis(500));

        assert_eq!(
            ticks,
            vec![SnapTick::Requested(SnapOutcome::Settled { target: 800.0 })]
        );
        assert!(view.writes.is_empty());
    }

    #[test]
    fn test_scroll_ignored_while_animating() {
        let mut ctl = SnapController::default();
        let mut queue = TimerQueue::new();
        let mut view = Viewport::at(760.0);

        assert_eq!(
            ctl.animate_to(800.0, &mut view, &mut queue),
            SnapOutcome::Started {
                from: 760.0,
                to: 800.0
            }
        );
        assert!(!ctl.on_scroll(&mut queue));
        assert_eq!(ctl.pending_debounce(), None);
        assert_eq!(ctl.stats().scrolls_ignored, 1);
    }

    #[test]
    fn test_request_while_animating_keeps_running_animation() {
        let mut ctl = SnapController::default();
        let mut queue = TimerQueue::new();
        let mut view = Viewport::at(760.0);

        ctl.animate_to(800.0, &mut view, &mut queue);
        let running = *ctl.state().animation().unwrap();

        queue.advance_to(MonoTime::from_millis(100));
        assert_eq!(ctl.animate_to(0.0, &mut view, &mut queue), SnapOutcome::Busy);
        assert_eq!(ctl.settle(&mut view, &mut queue), SnapOutcome::Busy);

        assert_eq!(ctl.state().animation(), Some(&running));
        assert_eq!(ctl.stats().requests_dropped, 2);
        assert_eq!(queue.count_kind(TimerKind::AnimationFrame), 1);
    }

    #[test]
    fn test_touch_end_waits_then_snaps() {
        let mut ctl = SnapController::default();
        let mut queue = TimerQueue::new();
        let mut view = Viewport::at(1300.0);

        ctl.on_touch_end(&mut queue);
        assert!(run_until(&mut ctl, &mut queue, &mut view, MonoTime::from_millis(399)).is_empty());

        let ticks = run_until(&mut ctl, &mut queue, &mut view, MonoTime::from_millis(400));
        assert_eq!(
            ticks,
            vec![SnapTick::Requested(SnapOutcome::Started {
                from: 1300.0,
                to: 1600.0
            })]
        );
    }

    #[test]
    fn test_touch_end_during_animation_is_dropped() {
        let mut ctl = SnapController::default();
        let mut queue = TimerQueue::with_frame_interval(Duration::from_millis(500));
        let mut view = Viewport::at(760.0);

        ctl.animate_to(800.0, &mut view, &mut queue);
        ctl.on_touch_end(&mut queue);

        // Settle fires at 400ms, before the first frame at 500ms
        let ticks = run_until(&mut ctl, &mut queue, &mut view, MonoTime::from_millis(400));
        assert_eq!(ticks, vec![SnapTick::Requested(SnapOutcome::Busy)]);
    }

    #[test]
    fn test_animation_frames_are_monotonic_and_exact() {
        let mut ctl = SnapController::default();
        let mut queue = TimerQueue::new();
        let mut view = Viewport::at(0.0);

        ctl.animate_to(800.0, &mut view, &mut queue);
        run_until(&mut ctl, &mut queue, &mut view, MonoTime::from_millis(1000));

        assert!(view.writes.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(view.writes.last(), Some(&800.0));
        // 400ms at 16ms frames: frames at 16..=400
        assert_eq!(view.writes.len(), 25);
    }

    #[test]
    fn test_stale_debounce_timer_ignored() {
        let mut ctl = SnapController::default();
        let mut queue = TimerQueue::new();
        let mut view = Viewport::at(760.0);

        let stale = FiredTimer {
            id: TimerId(999),
            kind: TimerKind::SnapDebounce,
            deadline: MonoTime::ZERO,
        };
        assert_eq!(ctl.on_timer(stale, &mut view, &mut queue), SnapTick::Ignored);
        assert!(!ctl.is_animating());
    }
}
