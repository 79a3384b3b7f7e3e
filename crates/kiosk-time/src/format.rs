//! Display formatters
//!
//! Pure functions, no state. The dashboard displays German strings; the
//! English tables exist for the alternate `en-US` locale.

use chrono::{Datelike, NaiveDate, Timelike, Weekday};

use kiosk_core::{KioskError, KioskResult};

pub const GERMAN_MONTHS: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Two-digit zero padding; wider numbers pass through unchanged
pub fn pad_zero(n: u32) -> String {
    format!("{:02}", n)
}

/// Digital clock strings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DigitalTime {
    /// "HH:MM"
    pub main: String,
    /// ":SS"
    pub seconds: String,
}

impl DigitalTime {
    pub fn from_time<T: Timelike>(t: &T) -> Self {
        DigitalTime {
            main: hour_minute(t),
            seconds: format!(":{}", pad_zero(t.second())),
        }
    }
}

/// "HH:MM" of any time value
pub fn hour_minute<T: Timelike>(t: &T) -> String {
    format!("{}:{}", pad_zero(t.hour()), pad_zero(t.minute()))
}

/// German month name, 1-based month
pub fn german_month(month: u32) -> &'static str {
    GERMAN_MONTHS[(month.clamp(1, 12) - 1) as usize]
}

pub fn german_weekday(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Montag",
        Weekday::Tue => "Dienstag",
        Weekday::Wed => "Mittwoch",
        Weekday::Thu => "Donnerstag",
        Weekday::Fri => "Freitag",
        Weekday::Sat => "Samstag",
        Weekday::Sun => "Sonntag",
    }
}

pub fn german_weekday_short(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Di",
        Weekday::Wed => "Mi",
        Weekday::Thu => "Do",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "So",
    }
}

fn english_weekday(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Locales with a long date format
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateLocale {
    /// de-DE: "Montag, 19. Oktober 2026"
    German,
    /// en-US: "Monday, October 19, 2026"
    English,
}

impl DateLocale {
    /// Parse a BCP 47 tag
    pub fn parse(tag: &str) -> KioskResult<Self> {
        match tag {
            "de-DE" | "de" => Ok(DateLocale::German),
            "en-US" | "en" => Ok(DateLocale::English),
            other => Err(KioskError::UnsupportedLocale(other.to_string())),
        }
    }

    pub fn long_date(self, date: NaiveDate) -> String {
        let idx = date.month0() as usize;
        match self {
            DateLocale::German => format!(
                "{}, {}. {} {}",
                german_weekday(date.weekday()),
                date.day(),
                GERMAN_MONTHS[idx],
                date.year()
            ),
            DateLocale::English => format!(
                "{}, {} {}, {}",
                english_weekday(date.weekday()),
                ENGLISH_MONTHS[idx],
                date.day(),
                date.year()
            ),
        }
    }
}

/// Locale-agnostic date, e.g. "Mon Oct 19 2026"
pub fn fallback_date(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// Long date in the given locale
pub fn try_long_date(date: NaiveDate, locale_tag: &str) -> KioskResult<String> {
    Ok(DateLocale::parse(locale_tag)?.long_date(date))
}

/// Long date, falling back to the locale-agnostic form
pub fn display_date(date: NaiveDate, locale_tag: &str) -> String {
    match try_long_date(date, locale_tag) {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!("date formatting fell back: {}", e);
            fallback_date(date)
        }
    }
}
