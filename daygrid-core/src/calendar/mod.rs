//! Calendar navigation and day selection.
//!
//! `CalendarEngine` is a small state machine over three views (day grid,
//! month picker, year picker). Every public operation either applies a
//! legal transition and returns `true`, or leaves the state untouched and
//! returns `false`; invalid navigation is never an error.

pub mod config;
mod grid;
mod pickers;

use std::collections::BTreeSet;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calendar::config::{CalendarConfig, DaySelection};
use crate::date::walk_days;

pub use grid::{CellPosition, DayCell, MonthGrid};
pub use pickers::{MonthCell, WeekdayLabel, YearCell};

const LAST_MONTH: u32 = 11;
const MAX_YEAR: i32 = 9999;

/// Years shown on each side of `view_year` in the year picker.
pub const YEAR_WINDOW_HALF: i32 = 7;
/// Years shifted by one page of the year picker.
pub const YEAR_WINDOW: i32 = 2 * YEAR_WINDOW_HALF + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
    /// Day picker for one month
    #[default]
    #[serde(rename = "grid", alias = "default")]
    Grid,
    #[serde(rename = "month")]
    MonthPicker,
    #[serde(rename = "year")]
    YearPicker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Which navigation arrows are usable in the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Arrows {
    pub prev: bool,
    pub next: bool,
}

/// Mutable state of one widget instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarState {
    pub view_mode: ViewMode,
    pub selected_dates: Vec<NaiveDate>,
    /// 0-based month shown by the grid
    pub selected_month: u32,
    pub selected_year: i32,
    /// Center of the year picker window
    pub view_year: i32,
    /// View to go back to when a picker closes
    return_view: ViewMode,
    /// Pending first click of a ranged selection
    anchor: Option<NaiveDate>,
}

/// Read-only copy of the state plus derived values, for presentation.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarSnapshot {
    pub view_mode: ViewMode,
    pub selected_dates: Vec<NaiveDate>,
    pub selected_month: u32,
    pub selected_year: i32,
    pub view_year: i32,
    pub arrows: Arrows,
}

type Hook<T> = Option<Box<dyn FnMut(T)>>;

/// Notifications fired after a successful selection.
#[derive(Default)]
struct CalendarHooks {
    on_day: Hook<NaiveDate>,
    on_month: Hook<u32>,
    on_year: Hook<i32>,
}

/// Navigable window after defaults are applied.
#[derive(Debug, Clone)]
struct ResolvedRange {
    min: NaiveDate,
    max: NaiveDate,
    disabled: BTreeSet<NaiveDate>,
}

pub struct CalendarEngine {
    config: CalendarConfig,
    range: ResolvedRange,
    today: NaiveDate,
    state: CalendarState,
    hooks: CalendarHooks,
}

impl CalendarEngine {
    /// Create the engine and seed the selection from the config, falling
    /// back to today's month and year.
    pub fn new(config: CalendarConfig) -> Self {
        let today = config.today.unwrap_or_else(|| Local::now().date_naive());

        let range = ResolvedRange {
            min: config.range.min.unwrap_or(config.date.min),
            max: config.range.max.unwrap_or(config.date.max),
            disabled: config.range.disabled.clone(),
        };

        let selected_month = match config.selected.month {
            Some(m) if (0..=LAST_MONTH as i64).contains(&m) => m as u32,
            Some(m) => {
                warn!(month = m, "ignoring out-of-range initial month");
                today.month0()
            }
            None => today.month0(),
        };

        let selected_year = match config.selected.year {
            Some(y) if (0..=MAX_YEAR as i64).contains(&y) => y as i32,
            Some(y) => {
                warn!(year = y, "ignoring out-of-range initial year");
                today.year()
            }
            None => today.year(),
        };

        let state = CalendarState {
            view_mode: config.view,
            selected_dates: config.selected.dates.clone(),
            selected_month,
            selected_year,
            view_year: selected_year,
            return_view: ViewMode::Grid,
            anchor: None,
        };

        debug!(
            view = ?state.view_mode,
            month = selected_month,
            year = selected_year,
            "calendar initialized"
        );

        CalendarEngine {
            config,
            range,
            today,
            state,
            hooks: CalendarHooks::default(),
        }
    }

    pub fn on_day<F>(mut self, f: F) -> Self
    where
        F: FnMut(NaiveDate) + 'static,
    {
        self.hooks.on_day = Some(Box::new(f));
        self
    }

    pub fn on_month<F>(mut self, f: F) -> Self
    where
        F: FnMut(u32) + 'static,
    {
        self.hooks.on_month = Some(Box::new(f));
        self
    }

    pub fn on_year<F>(mut self, f: F) -> Self
    where
        F: FnMut(i32) + 'static,
    {
        self.hooks.on_year = Some(Box::new(f));
        self
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    pub fn state(&self) -> &CalendarState {
        &self.state
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn snapshot(&self) -> CalendarSnapshot {
        CalendarSnapshot {
            view_mode: self.state.view_mode,
            selected_dates: self.state.selected_dates.clone(),
            selected_month: self.state.selected_month,
            selected_year: self.state.selected_year,
            view_year: self.state.view_year,
            arrows: self.arrows(),
        }
    }

    /// Bounds used for navigation: the whole date range when disabled days
    /// are shown, otherwise the enforced range.
    pub fn boundary(&self) -> (NaiveDate, NaiveDate) {
        if self.config.visibility.disabled {
            (self.config.date.min, self.config.date.max)
        } else {
            (self.range.min, self.range.max)
        }
    }

    /// Whether a day is outside the enforced range or individually blocked.
    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        date < self.range.min || date > self.range.max || self.range.disabled.contains(&date)
    }

    pub fn arrows(&self) -> Arrows {
        let (min, max) = self.boundary();

        match self.state.view_mode {
            ViewMode::Grid => {
                let current = (self.state.selected_year, self.state.selected_month);
                let month_selectable = self.config.selection.month;
                Arrows {
                    prev: month_selectable && current > (min.year(), min.month0()),
                    next: month_selectable && current < (max.year(), max.month0()),
                }
            }
            ViewMode::YearPicker => Arrows {
                prev: self.state.view_year - YEAR_WINDOW_HALF > min.year(),
                next: self.state.view_year + YEAR_WINDOW_HALF < max.year(),
            },
            ViewMode::MonthPicker => Arrows {
                prev: false,
                next: false,
            },
        }
    }

    /// Step the grid one month back or forward.
    ///
    /// Crossing January/December changes the year only when year selection
    /// is enabled; otherwise the month stays put at the boundary.
    pub fn change_month(&mut self, direction: Direction) -> bool {
        if self.state.view_mode != ViewMode::Grid {
            return false;
        }

        let arrows = self.arrows();
        let year_selectable = self.config.selection.year;
        let state = &mut self.state;

        let changed = match direction {
            Direction::Prev if !arrows.prev => false,
            Direction::Next if !arrows.next => false,
            Direction::Prev if state.selected_month > 0 => {
                state.selected_month -= 1;
                true
            }
            Direction::Prev if year_selectable && state.selected_year > 0 => {
                state.selected_year -= 1;
                state.selected_month = LAST_MONTH;
                true
            }
            Direction::Next if state.selected_month < LAST_MONTH => {
                state.selected_month += 1;
                true
            }
            Direction::Next if year_selectable && state.selected_year < MAX_YEAR => {
                state.selected_year += 1;
                state.selected_month = 0;
                true
            }
            _ => false,
        };

        if changed {
            debug!(
                month = state.selected_month,
                year = state.selected_year,
                "changed month"
            );
        }
        changed
    }

    pub fn enter_month_picker(&mut self) -> bool {
        if !self.config.selection.month || self.state.view_mode == ViewMode::MonthPicker {
            return false;
        }
        self.open_picker(ViewMode::MonthPicker);
        true
    }

    pub fn enter_year_picker(&mut self) -> bool {
        if !self.config.selection.year || self.state.view_mode == ViewMode::YearPicker {
            return false;
        }
        self.open_picker(ViewMode::YearPicker);
        self.state.view_year = self.state.selected_year;
        true
    }

    fn open_picker(&mut self, picker: ViewMode) {
        // Switching between pickers keeps the original return target
        if self.state.view_mode == ViewMode::Grid {
            self.state.return_view = ViewMode::Grid;
        }
        self.state.view_mode = picker;
        debug!(view = ?picker, "opened picker");
    }

    /// Close the open picker without choosing anything.
    pub fn leave_picker(&mut self) -> bool {
        if self.state.view_mode == ViewMode::Grid {
            return false;
        }
        self.state.view_mode = self.state.return_view;
        true
    }

    /// Shift the year picker window by one page.
    pub fn page_year_window(&mut self, direction: Direction) -> bool {
        if self.state.view_mode != ViewMode::YearPicker || !self.config.selection.year {
            return false;
        }

        let arrows = self.arrows();
        match direction {
            Direction::Prev if arrows.prev => self.state.view_year -= YEAR_WINDOW,
            Direction::Next if arrows.next => self.state.view_year += YEAR_WINDOW,
            _ => return false,
        }

        debug!(view_year = self.state.view_year, "paged year window");
        true
    }

    pub fn select_month(&mut self, month0: u32) -> bool {
        if self.state.view_mode != ViewMode::MonthPicker
            || !self.config.selection.month
            || month0 > LAST_MONTH
        {
            return false;
        }

        self.state.selected_month = month0;
        self.clamp_month_to_boundary();
        self.state.view_mode = self.state.return_view;

        debug!(month = self.state.selected_month, "selected month");
        if let Some(hook) = self.hooks.on_month.as_mut() {
            hook(month0);
        }
        true
    }

    /// Pick a year from the year picker. Years outside the navigable
    /// boundary are ignored.
    pub fn select_year(&mut self, year: i32) -> bool {
        let (min, max) = self.boundary();
        if self.state.view_mode != ViewMode::YearPicker
            || !self.config.selection.year
            || !(0..=MAX_YEAR).contains(&year)
            || year < min.year()
            || year > max.year()
        {
            return false;
        }

        self.state.selected_year = year;
        self.clamp_month_to_boundary();
        self.state.view_mode = self.state.return_view;

        debug!(year, month = self.state.selected_month, "selected year");
        if let Some(hook) = self.hooks.on_year.as_mut() {
            hook(year);
        }
        true
    }

    /// In a boundary year, pull the month back inside the boundary.
    fn clamp_month_to_boundary(&mut self) {
        let (min, max) = self.boundary();
        let state = &mut self.state;

        if state.selected_year == min.year() && state.selected_month < min.month0() {
            state.selected_month = min.month0();
        }
        if state.selected_year == max.year() && state.selected_month > max.month0() {
            state.selected_month = max.month0();
        }
    }

    /// Apply a click on a day according to the configured selection mode.
    ///
    /// Callers only offer in-range, enabled days; the engine does not check
    /// that again except for skipping disabled days inside a range. Days can
    /// only be clicked from the grid.
    pub fn select_day(&mut self, date: NaiveDate) -> bool {
        if self.state.view_mode != ViewMode::Grid {
            return false;
        }
        let state = &mut self.state;

        match self.config.selection.day {
            DaySelection::Single => {
                if state.selected_dates.as_slice() == [date] {
                    state.selected_dates.clear();
                } else {
                    state.selected_dates = vec![date];
                }
            }
            DaySelection::Multiple => {
                match state.selected_dates.iter().position(|d| *d == date) {
                    Some(idx) => {
                        state.selected_dates.remove(idx);
                    }
                    None => state.selected_dates.push(date),
                }
            }
            DaySelection::RangedMultiple => match state.anchor.take() {
                Some(first) => {
                    state.selected_dates = walk_days(first, date)
                        .into_iter()
                        .filter(|d| !self.range.disabled.contains(d))
                        .collect();
                }
                None => {
                    state.anchor = Some(date);
                    state.selected_dates = vec![date];
                }
            },
        }

        debug!(%date, selected = state.selected_dates.len(), "selected day");
        if let Some(hook) = self.hooks.on_day.as_mut() {
            hook(date);
        }
        true
    }
}
