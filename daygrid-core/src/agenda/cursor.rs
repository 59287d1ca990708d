//! The day currently shown by an agenda.

use chrono::{Days, Local, NaiveDate};

use crate::date::format_iso;

/// Tracks which day an agenda instance shows. The caller re-fetches and
/// re-lays out the events whenever the day changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgendaCursor {
    day: NaiveDate,
}

impl AgendaCursor {
    pub fn new(day: NaiveDate) -> Self {
        AgendaCursor { day }
    }

    pub fn today() -> Self {
        AgendaCursor::new(Local::now().date_naive())
    }

    pub fn day(&self) -> NaiveDate {
        self.day
    }

    /// `YYYY-MM-DD` key used to look up the day's events.
    pub fn key(&self) -> String {
        format_iso(self.day)
    }

    pub fn next_day(&mut self) -> NaiveDate {
        if let Some(next) = self.day.checked_add_days(Days::new(1)) {
            self.day = next;
        }
        self.day
    }

    pub fn previous_day(&mut self) -> NaiveDate {
        if let Some(prev) = self.day.checked_sub_days(Days::new(1)) {
            self.day = prev;
        }
        self.day
    }

    /// Heading such as `Agenda: Fri     (2022 01 07)`.
    pub fn title(&self) -> String {
        format!("Agenda: {}     ({})", self.day.format("%a"), self.day.format("%Y %m %d"))
    }
}
