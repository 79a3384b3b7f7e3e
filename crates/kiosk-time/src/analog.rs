//! Analog clock hand angles
//!
//! Degrees clockwise from twelve o'clock. The hour hand uses the raw 24-hour
//! value: afternoon angles land in [360, 720), which a rotation treats the
//! same as the angle modulo 360.

use chrono::Timelike;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandAngles {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl HandAngles {
    pub fn at(hours: u32, minutes: u32, seconds: u32) -> Self {
        let (h, m, s) = (hours as f64, minutes as f64, seconds as f64);
        HandAngles {
            second: (s / 60.0) * 360.0,
            minute: (m / 60.0) * 360.0 + (s / 60.0) * 6.0,
            hour: (h / 12.0) * 360.0 + (m / 60.0) * 30.0,
        }
    }

    pub fn from_time<T: Timelike>(t: &T) -> Self {
        Self::at(t.hour(), t.minute(), t.second())
    }
}
