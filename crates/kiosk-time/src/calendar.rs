//! Monday-first month grid

use chrono::{Datelike, NaiveDate};

use kiosk_core::Tile;

use crate::german_month;

/// One day cell of the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarDay {
    pub day: u32,
    pub today: bool,
    pub weekend: bool,
}

/// Layout of the month containing a given date
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Empty cells before the 1st (0 = month starts on Monday)
    pub leading_blanks: u32,
    pub days: Vec<CalendarDay>,
}

impl MonthGrid {
    pub fn for_date(today: NaiveDate) -> Self {
        let (year, month) = (today.year(), today.month());
        let leading_blanks = today
            .with_day(1)
            .map(|first| first.weekday().num_days_from_monday())
            .unwrap_or(0);

        let days = (1..=days_in_month(year, month))
            .map(|day| {
                let column = (leading_blanks + day - 1) % 7;
                CalendarDay {
                    day,
                    today: day == today.day(),
                    weekend: column >= 5,
                }
            })
            .collect();

        MonthGrid {
            year,
            month,
            leading_blanks,
            days,
        }
    }

    /// "Oktober 2026"
    pub fn header(&self) -> String {
        format!("{} {}", german_month(self.month), self.year)
    }

    /// Grid cells in display order
    pub fn tiles(&self) -> Vec<Tile> {
        let blanks = (0..self.leading_blanks).map(|_| Tile::new("calendar-day empty"));
        let days = self.days.iter().map(|d| {
            let mut tile = Tile::new("calendar-day").with_line(d.day.to_string());
            if d.today {
                tile.add_class("today");
            }
            if d.weekend {
                tile.add_class("weekend");
            }
            tile
        });
        blanks.chain(days).collect()
    }
}

/// Number of days in a month (1-based month)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    match (first, next) {
        (Some(first), Some(next)) => (next - first).num_days() as u32,
        _ => 0,
    }
}
