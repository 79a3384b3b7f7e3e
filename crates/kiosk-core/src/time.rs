//! Monotonic time for the dashboard event loop
//!
//! Timers, debounce windows and animation progress are measured against a
//! monotonic clock that starts at zero when the loop starts. Wall-clock time
//! (what the renderers display) lives in `kiosk-time`.

use std::ops::{Add, Sub};
use std::time::Duration;

/// Monotonic loop time, microseconds since loop start
/// INVARIANT: never moves backwards within one loop
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MonoTime(pub u64);

impl MonoTime {
    pub const ZERO: MonoTime = MonoTime(0);

    #[inline]
    pub fn from_micros(micros: u64) -> Self {
        MonoTime(micros)
    }

    #[inline]
    pub fn from_millis(millis: u64) -> Self {
        MonoTime(millis * 1000)
    }

    #[inline]
    pub fn from_duration(elapsed: Duration) -> Self {
        MonoTime(elapsed.as_micros() as u64)
    }

    #[inline]
    pub fn as_micros(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn as_millis(self) -> u64 {
        self.0 / 1000
    }

    #[inline]
    pub fn as_duration(self) -> Duration {
        Duration::from_micros(self.0)
    }

    #[inline]
    pub fn saturating_add(self, duration: Duration) -> Self {
        MonoTime(self.0.saturating_add(duration.as_micros() as u64))
    }

    /// Time elapsed since `earlier`, zero if `earlier` is in the future
    #[inline]
    pub fn since(self, earlier: MonoTime) -> Duration {
        self - earlier
    }
}

impl Add<Duration> for MonoTime {
    type Output = MonoTime;

    #[inline]
    fn add(self, rhs: Duration) -> Self::Output {
        self.saturating_add(rhs)
    }
}

impl Sub<MonoTime> for MonoTime {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: MonoTime) -> Self::Output {
        Duration::from_micros(self.0.saturating_sub(rhs.0))
    }
}

impl std::fmt::Debug for MonoTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "t({:.3}ms)", self.0 as f64 / 1000.0)
    }
}
