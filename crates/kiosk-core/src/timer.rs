//! Scheduling port and timer queue
//!
//! Every deferred action in the dashboard (periodic renders, the idle
//! countdown, the scroll debounce, the touch settle delay and animation
//! frames) goes through the `Scheduler` port. Components never hold
//! callbacks: they schedule a `TimerKind`, keep the returned `TimerId`, and
//! are handed the fired timer back by whoever drives the loop.
//!
//! `TimerQueue` is the one implementation. The tokio driver advances it from
//! the real monotonic clock; the simulation harness advances it virtually.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use crate::MonoTime;

/// Default animation frame cadence (~60 Hz)
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Handle to a scheduled timer
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub u64);

/// Periodic render jobs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RenderTask {
    /// Digital clock, date and analog hands
    Clock,
    /// The four world-clock labels
    WorldClocks,
    /// Month header and day grid
    Calendar,
    /// Weather refresh (fetch, then render)
    Weather,
}

impl RenderTask {
    pub const ALL: [RenderTask; 4] = [
        RenderTask::Clock,
        RenderTask::WorldClocks,
        RenderTask::Calendar,
        RenderTask::Weather,
    ];
}

/// What a timer means to the dashboard when it fires
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    Render(RenderTask),
    IdleTimeout,
    SnapDebounce,
    TouchSettle,
    AnimationFrame,
}

/// A timer that reached its deadline
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FiredTimer {
    pub id: TimerId,
    pub kind: TimerKind,
    pub deadline: MonoTime,
}

/// Scheduling port
///
/// Implementations must be usable from inside a callback body: scheduling
/// or cancelling while handling a fired timer is allowed.
pub trait Scheduler {
    /// Current loop time
    fn now(&self) -> MonoTime;

    /// Fire `kind` once after `delay`
    fn schedule_after(&mut self, delay: Duration, kind: TimerKind) -> TimerId;

    /// Fire `kind` every `period`, first time one period from now
    fn schedule_repeating(&mut self, period: Duration, kind: TimerKind) -> TimerId;

    /// Cancel a pending timer. Returns false if it was not pending.
    fn cancel(&mut self, id: TimerId) -> bool;

    /// Ask for the next animation frame
    fn request_frame(&mut self) -> TimerId {
        self.schedule_after(FRAME_INTERVAL, TimerKind::AnimationFrame)
    }
}

#[derive(Clone, Copy, Debug)]
struct Entry {
    id: TimerId,
    kind: TimerKind,
    period: Option<Duration>,
}

/// Deadline-ordered timer queue
/// Equal deadlines fire in scheduling order.
pub struct TimerQueue {
    now: MonoTime,
    frame_interval: Duration,
    next_id: u64,
    next_seq: u64,
    pending: BTreeMap<(MonoTime, u64), Entry>,
    slots: HashMap<TimerId, (MonoTime, u64)>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::with_frame_interval(FRAME_INTERVAL)
    }

    pub fn with_frame_interval(frame_interval: Duration) -> Self {
        TimerQueue {
            now: MonoTime::ZERO,
            frame_interval,
            next_id: 1,
            next_seq: 0,
            pending: BTreeMap::new(),
            slots: HashMap::new(),
        }
    }

    /// Move the queue's notion of "now" forward. Never moves backwards.
    pub fn advance_to(&mut self, now: MonoTime) {
        if now > self.now {
            self.now = now;
        }
    }

    /// Earliest pending deadline
    pub fn next_deadline(&self) -> Option<MonoTime> {
        self.pending.first_key_value().map(|(key, _)| key.0)
    }

    /// Pop the earliest timer whose deadline is not after "now".
    /// Repeating timers are re-armed under the same id before returning.
    pub fn pop_due(&mut self) -> Option<FiredTimer> {
        let key = *self.pending.first_key_value()?.0;
        if key.0 > self.now {
            return None;
        }

        let entry = self.pending.remove(&key)?;
        self.slots.remove(&entry.id);

        if let Some(period) = entry.period {
            let next = next_occurrence(key.0, period, self.now);
            self.insert(next, entry);
        }

        Some(FiredTimer {
            id: entry.id,
            kind: entry.kind,
            deadline: key.0,
        })
    }

    /// Check whether a timer is still pending
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.slots.contains_key(&id)
    }

    /// Number of pending timers of a kind
    pub fn count_kind(&self, kind: TimerKind) -> usize {
        self.pending.values().filter(|e| e.kind == kind).count()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    fn allocate(&mut self) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        id
    }

    fn insert(&mut self, deadline: MonoTime, entry: Entry) {
        let key = (deadline, self.next_seq);
        self.next_seq += 1;
        self.pending.insert(key, entry);
        self.slots.insert(entry.id, key);
    }
}

impl Default for TimerQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for TimerQueue {
    fn now(&self) -> MonoTime {
        self.now
    }

    fn schedule_after(&mut self, delay: Duration, kind: TimerKind) -> TimerId {
        let id = self.allocate();
        let deadline = self.now + delay;
        self.insert(
            deadline,
            Entry {
                id,
                kind,
                period: None,
            },
        );
        id
    }

    fn schedule_repeating(&mut self, period: Duration, kind: TimerKind) -> TimerId {
        let id = self.allocate();
        let deadline = self.now + period;
        self.insert(
            deadline,
            Entry {
                id,
                kind,
                period: Some(period),
            },
        );
        id
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        match self.slots.remove(&id) {
            Some(key) => {
                self.pending.remove(&key);
                true
            }
            None => false,
        }
    }

    fn request_frame(&mut self) -> TimerId {
        let interval = self.frame_interval;
        self.schedule_after(interval, TimerKind::AnimationFrame)
    }
}

/// Next deadline of a repeating timer strictly after `now`.
/// A loop that fell behind skips missed periods instead of bursting.
fn next_occurrence(deadline: MonoTime, period: Duration, now: MonoTime) -> MonoTime {
    let period_us = (period.as_micros() as u64).max(1);
    let next = deadline.as_micros() + period_us;
    if next > now.as_micros() {
        return MonoTime::from_micros(next);
    }

    let behind = now.as_micros() - deadline.as_micros();
    let skips = behind / period_us + 1;
    tracing::debug!("repeating timer fell behind, skipping {} periods", skips - 1);
    MonoTime::from_micros(deadline.as_micros() + period_us * skips)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn drain(queue: &mut TimerQueue) -> Vec<FiredTimer> {
        let mut fired = Vec::new();
        while let Some(timer) = queue.pop_due() {
            fired.push(timer);
        }
        fired
    }

    #[test]
    fn test_fires_in_deadline_order() {
        let mut queue = TimerQueue::new();
        let late = queue.schedule_after(Duration::from_millis(400), TimerKind::TouchSettle);
        let early = queue.schedule_after(Duration::from_millis(200), TimerKind::SnapDebounce);

        queue.advance_to(MonoTime::from_millis(500));
        let fired: Vec<_> = drain(&mut queue).into_iter().map(|t| t.id).collect();

        assert_eq!(fired, vec![early, late]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_equal_deadlines_fire_fifo() {
        let mut queue = TimerQueue::new();
        let a = queue.schedule_after(Duration::from_millis(10), TimerKind::IdleTimeout);
        let b = queue.schedule_after(Duration::from_millis(10), TimerKind::SnapDebounce);
        let c = queue.schedule_after(Duration::from_millis(10), TimerKind::TouchSettle);

        queue.advance_to(MonoTime::from_millis(10));
        let fired: Vec<_> = drain(&mut queue).into_iter().map(|t| t.id).collect();

        assert_eq!(fired, vec![a, b, c]);
    }

    #[test]
    fn test_nothing_fires_before_deadline() {
        let mut queue = TimerQueue::new();
        queue.schedule_after(Duration::from_millis(200), TimerKind::SnapDebounce);

        queue.advance_to(MonoTime::from_millis(199));
        assert!(queue.pop_due().is_none());
        assert_eq!(queue.next_deadline(), Some(MonoTime::from_millis(200)));
    }

    #[test]
    fn test_cancel_removes_timer() {
        let mut queue = TimerQueue::new();
        let id = queue.schedule_after(Duration::from_millis(200), TimerKind::SnapDebounce);

        assert!(queue.is_pending(id));
        assert!(queue.cancel(id));
        assert!(!queue.is_pending(id));
        assert!(!queue.cancel(id));

        queue.advance_to(MonoTime::from_millis(1000));
        assert!(queue.pop_due().is_none());
    }

    #[test]
    fn test_repeating_rearms_under_same_id() {
        let mut queue = TimerQueue::new();
        let kind = TimerKind::Render(RenderTask::Clock);
        let id = queue.schedule_repeating(Duration::from_secs(1), kind);

        queue.advance_to(MonoTime::from_millis(1000));
        let first = queue.pop_due().unwrap();
        assert_eq!(first.id, id);
        assert_eq!(first.deadline, MonoTime::from_millis(1000));
        assert!(queue.is_pending(id));
        assert_eq!(queue.next_deadline(), Some(MonoTime::from_millis(2000)));
    }

    #[test]
    fn test_repeating_skips_missed_periods() {
        let mut queue = TimerQueue::new();
        let kind = TimerKind::Render(RenderTask::Clock);
        queue.schedule_repeating(Duration::from_secs(1), kind);

        // Loop stalled for 3.5 periods
        queue.advance_to(MonoTime::from_millis(3500));
        let fired = drain(&mut queue);

        assert_eq!(fired.len(), 1);
        assert_eq!(queue.next_deadline(), Some(MonoTime::from_millis(4000)));
    }

    #[test]
    fn test_cancel_repeating_after_fire() {
        let mut queue = TimerQueue::new();
        let kind = TimerKind::Render(RenderTask::Calendar);
        let id = queue.schedule_repeating(Duration::from_secs(60), kind);

        queue.advance_to(MonoTime::from_millis(60_000));
        assert!(queue.pop_due().is_some());
        assert!(queue.cancel(id));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_request_frame_uses_frame_interval() {
        let mut queue = TimerQueue::with_frame_interval(Duration::from_millis(10));
        queue.request_frame();

        assert_eq!(queue.count_kind(TimerKind::AnimationFrame), 1);
        assert_eq!(queue.next_deadline(), Some(MonoTime::from_millis(10)));
    }

    #[test]
    fn test_time_never_moves_backwards() {
        let mut queue = TimerQueue::new();
        queue.advance_to(MonoTime::from_millis(500));
        queue.advance_to(MonoTime::from_millis(100));

        assert_eq!(queue.now(), MonoTime::from_millis(500));
    }

    proptest! {
        #[test]
        fn prop_pops_in_nondecreasing_deadline_order(
            delays in prop::collection::vec(0u64..5_000, 1..40),
            step in 1u64..2_000,
        ) {
            let mut queue = TimerQueue::new();
            for delay in &delays {
                queue.schedule_after(Duration::from_millis(*delay), TimerKind::TouchSettle);
            }

            let mut last = MonoTime::ZERO;
            let mut fired = 0;
            let mut now = 0;
            while !queue.is_empty() {
                now += step;
                queue.advance_to(MonoTime::from_millis(now));
                while let Some(timer) = queue.pop_due() {
                    prop_assert!(timer.deadline >= last);
                    prop_assert!(timer.deadline <= queue.now());
                    last = timer.deadline;
                    fired += 1;
                }
            }
            prop_assert_eq!(fired, delays.len());
        }
    }
}
