//! Forecast alignment
//!
//! Hourly: start at the first slot at or after the current hour
//! ("YYYY-MM-DDTHH:00", compared as strings), show six slots.
//! Daily: skip today and anything earlier, show five days.

use chrono::NaiveDateTime;

use kiosk_core::Tile;

use crate::{day_name, format_temperature, hour_label, weather_icon, DailySeries, HourlySeries};

pub const HOURLY_SLOTS: usize = 6;
pub const DAILY_DAYS: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HourlySlot {
    /// "HH:MM"
    pub label: String,
    pub icon: &'static str,
    /// "12°"
    pub temperature: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DailyRow {
    /// Short German day name, or the raw date if unparsable
    pub day: String,
    pub icon: &'static str,
    /// "14° / 8°"
    pub range: String,
}

/// Index of the first hourly slot at or after the current hour
pub fn first_hour_index(hourly: &HourlySeries, now: NaiveDateTime) -> Option<usize> {
    let key = now.format("%Y-%m-%dT%H:00").to_string();
    hourly.time[..hourly.len()]
        .iter()
        .position(|t| t.as_str() >= key.as_str())
}

pub fn hourly_slots(hourly: &HourlySeries, now: NaiveDateTime) -> Vec<HourlySlot> {
    let Some(start) = first_hour_index(hourly, now) else {
        return Vec::new();
    };

    (start..hourly.len())
        .take(HOURLY_SLOTS)
        .map(|i| HourlySlot {
            label: hour_label(&hourly.time[i]).to_string(),
            icon: weather_icon(hourly.weather_code[i]),
            temperature: format_temperature(hourly.temperature[i]),
        })
        .collect()
}

pub fn daily_rows(daily: &DailySeries, now: NaiveDateTime) -> Vec<DailyRow> {
    let today = now.format("%Y-%m-%d").to_string();

    (0..daily.len())
        .filter(|&i| daily.time[i].as_str() > today.as_str())
        .take(DAILY_DAYS)
        .map(|i| DailyRow {
            day: day_name(&daily.time[i])
                .map(str::to_string)
                .unwrap_or_else(|| daily.time[i].clone()),
            icon: weather_icon(daily.weather_code[i]),
            range: format!(
                "{} / {}",
                format_temperature(daily.temp_max[i]),
                format_temperature(daily.temp_min[i])
            ),
        })
        .collect()
}

impl HourlySlot {
    pub fn to_tile(&self) -> Tile {
        Tile::new("hourly-item")
            .with_line(self.label.as_str())
            .with_line(self.icon)
            .with_line(self.temperature.as_str())
    }
}

impl DailyRow {
    pub fn to_tile(&self) -> Tile {
        Tile::new("daily-item")
            .with_line(self.day.as_str())
            .with_line(self.icon)
            .with_line(self.range.as_str())
    }
}
