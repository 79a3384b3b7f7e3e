//! Wall-clock sources for the renderers

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, FixedOffset, Local};
use parking_lot::Mutex;

use kiosk_core::{KioskError, KioskResult};

/// Source of local wall-clock time
/// Renderers read it once per render so every surface agrees on "now".
pub trait ClockSource: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// The operating system's local clock
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        let now = Local::now();
        now.with_timezone(now.offset())
    }
}

/// Settable clock shared between a simulation and the dashboard it drives
#[derive(Clone, Debug)]
pub struct ManualClock {
    current: Arc<Mutex<DateTime<FixedOffset>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<FixedOffset>) -> Self {
        ManualClock {
            current: Arc::new(Mutex::new(start)),
        }
    }

    /// Start at an RFC 3339 timestamp, e.g. "2026-10-19T14:05:09+02:00"
    pub fn from_rfc3339(stamp: &str) -> KioskResult<Self> {
        let start = DateTime::parse_from_rfc3339(stamp)
            .map_err(|e| KioskError::InvalidConfig(format!("bad timestamp {}: {}", stamp, e)))?;
        Ok(Self::new(start))
    }

    pub fn set(&self, now: DateTime<FixedOffset>) {
        *self.current.lock() = now;
    }

    pub fn advance(&self, dt: Duration) {
        let mut current = self.current.lock();
        *current = *current + chrono::Duration::microseconds(dt.as_micros() as i64);
    }
}

impl ClockSource for ManualClock {
    fn now(&self) -> DateTime<FixedOffset> {
        *self.current.lock()
    }
}
