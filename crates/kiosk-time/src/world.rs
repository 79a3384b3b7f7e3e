//! World clocks
//!
//! Fixed standard-time offsets from UTC. Daylight saving is not
//! modelled: the labels show standard time all year.

use chrono::{DateTime, FixedOffset, NaiveDateTime};

use kiosk_core::SurfaceId;

use crate::hour_minute;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorldCity {
    pub name: &'static str,
    pub surface: SurfaceId,
    /// Hours east of UTC
    pub utc_offset_hours: i32,
}

pub const WORLD_CITIES: [WorldCity; 4] = [
    WorldCity {
        name: "San Juan",
        surface: SurfaceId::TimeSanJuan,
        utc_offset_hours: -4,
    },
    WorldCity {
        name: "New York",
        surface: SurfaceId::TimeNewYork,
        utc_offset_hours: -5,
    },
    WorldCity {
        name: "Los Angeles",
        surface: SurfaceId::TimeLosAngeles,
        utc_offset_hours: -8,
    },
    WorldCity {
        name: "Dubai",
        surface: SurfaceId::TimeDubai,
        utc_offset_hours: 4,
    },
];

impl WorldCity {
    /// Local time in this city for an instant
    pub fn local_time(&self, now: &DateTime<FixedOffset>) -> NaiveDateTime {
        now.naive_utc() + chrono::Duration::hours(self.utc_offset_hours as i64)
    }

    /// "HH:MM" label
    pub fn label(&self, now: &DateTime<FixedOffset>) -> String {
        hour_minute(&self.local_time(now))
    }
}
