//! WMO weather interpretation codes
//!
//! Open-Meteo reports conditions as WMO 4677 codes. Each maps to one icon and
//! one German description; codes outside the table get a neutral pair.

use chrono::{Datelike, NaiveDate};

use kiosk_time::german_weekday_short;

/// Icon and description of a weather code
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Condition {
    pub icon: &'static str,
    pub description: &'static str,
}

const UNKNOWN: Condition = Condition {
    icon: "🌡️",
    description: "Unbekannt",
};

pub fn condition(code: u16) -> Condition {
    let (icon, description) = match code {
        0 => ("☀️", "Klar"),
        1 => ("🌤️", "Überwiegend klar"),
        2 => ("⛅", "Teilweise bewölkt"),
        3 => ("☁️", "Bewölkt"),
        45 | 48 => ("🌫️", "Nebel"),
        51 | 53 | 55 => ("🌦️", "Nieselregen"),
        56 | 57 => ("🌧️", "Gefrierender Nieselregen"),
        61 | 63 | 65 => ("🌧️", "Regen"),
        66 | 67 => ("🌧️", "Gefrierender Regen"),
        71 | 73 | 75 => ("🌨️", "Schneefall"),
        77 => ("🌨️", "Schneegriesel"),
        80..=82 => ("🌦️", "Regenschauer"),
        85 | 86 => ("🌨️", "Schneeschauer"),
        95 => ("⛈️", "Gewitter"),
        96 | 99 => ("⛈️", "Gewitter mit Hagel"),
        _ => return UNKNOWN,
    };
    Condition { icon, description }
}

pub fn weather_icon(code: u16) -> &'static str {
    condition(code).icon
}

pub fn weather_description(code: u16) -> &'static str {
    condition(code).description
}

/// "HH:MM" part of a "YYYY-MM-DDTHH:MM" timestamp.
/// Short or malformed stamps are returned unchanged.
pub fn hour_label(time: &str) -> &str {
    time.get(11..16).unwrap_or(time)
}

/// Short German day name of a "YYYY-MM-DD" date
pub fn day_name(date: &str) -> Option<&'static str> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .map(|d| german_weekday_short(d.weekday()))
}
