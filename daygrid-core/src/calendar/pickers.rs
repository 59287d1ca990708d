//! Month picker, year picker and week header enumeration.

use chrono::Datelike;
use serde::Serialize;

use crate::calendar::{CalendarEngine, YEAR_WINDOW_HALF};
use crate::date::WeekStart;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthCell {
    pub month0: u32,
    pub name: &'static str,
    pub selected: bool,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearCell {
    pub year: i32,
    pub selected: bool,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayLabel {
    pub name: &'static str,
    pub weekend: bool,
}

impl CalendarEngine {
    /// Weekday abbreviations in column order.
    pub fn week_header(&self) -> Vec<WeekdayLabel> {
        let week_start = self.config.week_start;
        let mut names = self.config.locale.names().weekdays.to_vec();
        if week_start == WeekStart::Iso8601 {
            names.rotate_left(1);
        }

        names
            .into_iter()
            .enumerate()
            .map(|(column, name)| WeekdayLabel {
                name,
                weekend: week_start.is_weekend_column(column),
            })
            .collect()
    }

    /// The twelve months of the selected year; months outside the boundary
    /// are disabled.
    pub fn month_picker(&self) -> Vec<MonthCell> {
        let (min, max) = self.boundary();
        let year = self.state.selected_year;

        (0..12)
            .map(|month0| MonthCell {
                month0,
                name: self.config.locale.month_short(month0),
                selected: month0 == self.state.selected_month,
                disabled: (year == min.year() && month0 < min.month0())
                    || (year == max.year() && month0 > max.month0()),
            })
            .collect()
    }

    /// The fifteen years around `view_year`.
    pub fn year_picker(&self) -> Vec<YearCell> {
        let (min, max) = self.boundary();
        let center = self.state.view_year;

        (center - YEAR_WINDOW_HALF..=center + YEAR_WINDOW_HALF)
            .map(|year| YearCell {
                year,
                selected: year == self.state.selected_year,
                disabled: year < min.year() || year > max.year(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::config::{CalendarConfig, DateBounds};
    use crate::date::parse_iso;
    use crate::locale::Locale;

    fn config() -> CalendarConfig {
        CalendarConfig {
            today: Some(parse_iso("2022-06-07").unwrap()),
            date: DateBounds {
                min: parse_iso("2020-04-01").unwrap(),
                max: parse_iso("2030-12-31").unwrap(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_week_header_rotates_for_iso() {
        let engine = CalendarEngine::new(config());
        let header = engine.week_header();
        let names: Vec<_> = header.iter().map(|l| l.name).collect();
        assert_eq!(names, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
        assert!(header[5].weekend && header[6].weekend);
        assert!(!header[0].weekend);
    }

    #[test]
    fn test_week_header_us_and_locale() {
        let mut config = config();
        config.week_start = WeekStart::Us;
        config.locale = Locale::Ru;
        let header = CalendarEngine::new(config).week_header();
        assert_eq!(header[0].name, "Вс");
        assert!(header[0].weekend && header[6].weekend);
    }

    #[test]
    fn test_month_picker_disables_months_before_min() {
        let mut config = config();
        config.selected.year = Some(2020);
        let engine = CalendarEngine::new(config);
        let months = engine.month_picker();

        assert_eq!(months.len(), 12);
        assert_eq!(months[0].name, "Jan");
        assert!(months[..3].iter().all(|m| m.disabled));
        assert!(months[3..].iter().all(|m| !m.disabled));
        assert!(months[5].selected);
    }

    #[test]
    fn test_year_picker_window() {
        let engine = CalendarEngine::new(config());
        let years = engine.year_picker();

        assert_eq!(years.len(), 15);
        assert_eq!(years.first().map(|y| y.year), Some(2015));
        assert_eq!(years.last().map(|y| y.year), Some(2029));
        assert!(years.iter().filter(|y| y.year < 2020).all(|y| y.disabled));
        assert!(years.iter().find(|y| y.year == 2022).unwrap().selected);
    }
}
