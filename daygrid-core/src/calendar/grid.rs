//! Day grid enumeration for the month shown by the calendar.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::calendar::CalendarEngine;
use crate::date::{days_in_month, is_weekend, month_start};

const WEEK_LEN: usize = 7;

/// Which month a grid cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellPosition {
    /// Filler from the previous month
    Prev,
    Current,
    /// Filler from the next month
    Next,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub position: CellPosition,
    pub weekend: bool,
    pub holiday: bool,
    pub today: bool,
    pub selected: bool,
    pub disabled: bool,
}

impl DayCell {
    pub fn day(&self) -> u32 {
        self.date.day()
    }
}

/// Full weeks covering one month, row-major.
#[derive(Debug, Clone, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month0: u32,
    pub cells: Vec<DayCell>,
}

impl MonthGrid {
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(WEEK_LEN)
    }
}

impl CalendarEngine {
    /// Enumerate the selected month as complete week rows, padded with days
    /// of the neighbouring months.
    pub fn month_grid(&self) -> MonthGrid {
        let year = self.state.selected_year;
        let month0 = self.state.selected_month;

        let mut grid = MonthGrid {
            year,
            month0,
            cells: Vec::with_capacity(6 * WEEK_LEN),
        };

        let Some(first) = month_start(year, month0) else {
            return grid;
        };

        let leading = self.config.week_start.column(first.weekday());
        let in_month = days_in_month(year, month0) as usize;
        let rows = (leading + in_month).div_ceil(WEEK_LEN);
        let trailing = rows * WEEK_LEN - leading - in_month;

        for offset in (1..=leading).rev() {
            if let Some(date) = first.checked_sub_days(Days::new(offset as u64)) {
                grid.cells.push(self.day_cell(date, CellPosition::Prev));
            }
        }

        for offset in 0..(in_month + trailing) {
            let Some(date) = first.checked_add_days(Days::new(offset as u64)) else {
                break;
            };
            let position = if offset < in_month {
                CellPosition::Current
            } else {
                CellPosition::Next
            };
            grid.cells.push(self.day_cell(date, position));
        }

        grid
    }

    fn day_cell(&self, date: NaiveDate, position: CellPosition) -> DayCell {
        DayCell {
            date,
            position,
            weekend: is_weekend(date),
            holiday: self.config.selected.holidays.contains(&date),
            today: date == self.today,
            selected: self.state.selected_dates.contains(&date),
            disabled: self.is_disabled(date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::config::CalendarConfig;
    use crate::date::{WeekStart, parse_iso};

    fn d(s: &str) -> NaiveDate {
        parse_iso(s).unwrap()
    }

    fn engine_for(year: i64, month: i64, week_start: WeekStart) -> CalendarEngine {
        let mut config = CalendarConfig {
            today: Some(d("2022-01-07")),
            week_start,
            ..Default::default()
        };
        config.selected.year = Some(year);
        config.selected.month = Some(month);
        CalendarEngine::new(config)
    }

    #[test]
    fn test_january_2022_iso_week_start() {
        let grid = engine_for(2022, 0, WeekStart::Iso8601).month_grid();

        // Jan 1st 2022 is a Saturday: five leading December days
        assert_eq!(grid.cells.len(), 42);
        assert_eq!(grid.cells[5].date, d("2022-01-01"));
        assert_eq!(grid.cells[5].position, CellPosition::Current);
        assert_eq!(grid.cells[0].date, d("2021-12-27"));
        assert_eq!(grid.cells[0].position, CellPosition::Prev);
        assert_eq!(grid.cells[41].date, d("2022-02-06"));
        assert_eq!(grid.cells[41].position, CellPosition::Next);
        assert_eq!(grid.weeks().count(), 6);
        assert!(grid.weeks().all(|w| w.len() == 7));
    }

    #[test]
    fn test_january_2022_us_week_start() {
        let grid = engine_for(2022, 0, WeekStart::Us).month_grid();
        assert_eq!(grid.cells.len(), 42);
        assert_eq!(grid.cells[6].date, d("2022-01-01"));
        assert_eq!(grid.cells[0].date, d("2021-12-26"));
    }

    #[test]
    fn test_month_starting_on_week_start_has_no_leading_days() {
        // Feb 2021 starts on a Monday and has exactly 28 days
        let grid = engine_for(2021, 1, WeekStart::Iso8601).month_grid();
        assert_eq!(grid.cells.len(), 28);
        assert!(grid.cells.iter().all(|c| c.position == CellPosition::Current));
    }

    #[test]
    fn test_weekend_and_today_flags() {
        let grid = engine_for(2022, 0, WeekStart::Iso8601).month_grid();
        let jan1 = &grid.cells[5];
        assert!(jan1.weekend);
        let jan7 = grid.cells.iter().find(|c| c.date == d("2022-01-07")).unwrap();
        assert!(jan7.today);
        assert!(!jan7.weekend);
        assert_eq!(jan7.day(), 7);
    }

    #[test]
    fn test_holiday_selected_and_disabled_flags() {
        let mut config = CalendarConfig {
            today: Some(d("2022-01-07")),
            ..Default::default()
        };
        config.range.min = Some(d("2022-01-01"));
        config.range.max = Some(d("2022-02-12"));
        config.range.disabled = [d("2022-01-25")].into_iter().collect();
        config.selected.dates = vec![d("2022-01-09"), d("2022-01-10")];
        config.selected.holidays = [d("2022-01-03")].into_iter().collect();
        config.selected.month = Some(0);
        config.selected.year = Some(2022);
        let grid = CalendarEngine::new(config).month_grid();

        let cell = |s: &str| grid.cells.iter().find(|c| c.date == d(s)).unwrap().clone();
        assert!(cell("2021-12-31").disabled, "before range min");
        assert!(!cell("2022-01-01").disabled);
        assert!(cell("2022-01-25").disabled, "individually blocked");
        assert!(cell("2022-01-03").holiday);
        assert!(cell("2022-01-09").selected);
        assert!(cell("2022-01-10").selected);
        assert!(!cell("2022-01-11").selected);
    }
}
