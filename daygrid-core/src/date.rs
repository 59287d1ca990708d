//! ISO date keys and calendar arithmetic.
//!
//! Dates are `chrono::NaiveDate` everywhere; the `YYYY-MM-DD` string form is
//! only produced at the edges (config files, selection callbacks, output).
//! Because the format is fixed-width, ordering of the strings and ordering of
//! the dates agree.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{DayGridError, DayGridResult};

pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date key.
pub fn parse_iso(s: &str) -> DayGridResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), ISO_FORMAT).map_err(|_| DayGridError::InvalidDate(s.to_string()))
}

/// Format a date as its zero-padded `YYYY-MM-DD` key.
pub fn format_iso(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

/// First day of a month. `month0` is 0-based (0 = January).
pub fn month_start(year: i32, month0: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
}

/// Number of days in a month. `month0` is 0-based.
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    let Some(first) = month_start(year, month0) else {
        return 0;
    };
    let next = if month0 == 11 {
        month_start(year + 1, 0)
    } else {
        month_start(year, month0 + 1)
    };
    match next {
        Some(next) => (next - first).num_days() as u32,
        // December 9999 has no successor month in range
        None => 31,
    }
}

/// Every day from `from` to `to` inclusive, walking backward when `to` is
/// earlier than `from`.
pub fn walk_days(from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut day = from;

    if to >= from {
        while day <= to {
            days.push(day);
            match day.checked_add_days(Days::new(1)) {
                Some(next) => day = next,
                None => break,
            }
        }
    } else {
        while day >= to {
            days.push(day);
            match day.checked_sub_days(Days::new(1)) {
                Some(prev) => day = prev,
                None => break,
            }
        }
    }

    days
}

/// Which weekday opens a week row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    /// Monday-first (ISO-8601)
    #[default]
    Iso8601,
    /// Sunday-first
    Us,
}

impl WeekStart {
    /// Column (0..7) of a weekday in a week row.
    pub fn column(self, weekday: Weekday) -> usize {
        match self {
            WeekStart::Iso8601 => weekday.num_days_from_monday() as usize,
            WeekStart::Us => weekday.num_days_from_sunday() as usize,
        }
    }

    /// Whether a column holds Saturday or Sunday.
    pub fn is_weekend_column(self, column: usize) -> bool {
        match self {
            WeekStart::Iso8601 => column == 5 || column == 6,
            WeekStart::Us => column == 0 || column == 6,
        }
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
