//! Calendar widget configuration.
//!
//! Every field is optional in a config file; missing values take the
//! defaults below.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::ViewMode;
use crate::date::WeekStart;
use crate::locale::Locale;

fn default_min_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default()
}

fn default_max_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2470, 12, 31).unwrap_or(NaiveDate::MAX)
}

fn default_true() -> bool {
    true
}

/// Static configuration of one calendar widget.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// View shown when the widget is created
    pub view: ViewMode,
    /// Reference date for "today"; the local date when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub today: Option<NaiveDate>,
    pub week_start: WeekStart,
    pub locale: Locale,
    /// Absolute earliest/latest calendar dates
    pub date: DateBounds,
    pub range: RangeBounds,
    pub selection: SelectionModes,
    pub selected: InitialSelection,
    pub visibility: Visibility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateBounds {
    #[serde(default = "default_min_date")]
    pub min: NaiveDate,
    #[serde(default = "default_max_date")]
    pub max: NaiveDate,
}

impl Default for DateBounds {
    fn default() -> Self {
        DateBounds {
            min: default_min_date(),
            max: default_max_date(),
        }
    }
}

/// Navigable window. Unset ends fall back to `DateBounds`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeBounds {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<NaiveDate>,
    /// Individually blocked dates
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub disabled: BTreeSet<NaiveDate>,
}

/// How clicks on days change the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DaySelection {
    #[default]
    #[serde(rename = "single")]
    Single,
    #[serde(rename = "multiple")]
    Multiple,
    #[serde(rename = "multiple-ranged", alias = "ranged")]
    RangedMultiple,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionModes {
    #[serde(default)]
    pub day: DaySelection,
    #[serde(default = "default_true")]
    pub month: bool,
    #[serde(default = "default_true")]
    pub year: bool,
}

impl Default for SelectionModes {
    fn default() -> Self {
        SelectionModes {
            day: DaySelection::Single,
            month: true,
            year: true,
        }
    }
}

/// Initial selection. Out-of-range month/year values are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialSelection {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dates: Vec<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub holidays: BTreeSet<NaiveDate>,
}

/// Rendering hints passed through to the presentation layer.
///
/// `disabled` also widens navigation: when set, the arrows and pickers move
/// across the whole `DateBounds` and out-of-range days are shown disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visibility {
    #[serde(default = "default_true")]
    pub weekend: bool,
    #[serde(default = "default_true")]
    pub today: bool,
    #[serde(default)]
    pub disabled: bool,
}

impl Default for Visibility {
    fn default() -> Self {
        Visibility {
            weekend: true,
            today: true,
            disabled: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_widget_defaults() {
        let config = CalendarConfig::default();
        assert_eq!(config.date.min.to_string(), "1970-01-01");
        assert_eq!(config.date.max.to_string(), "2470-12-31");
        assert_eq!(config.selection.day, DaySelection::Single);
        assert!(config.selection.month && config.selection.year);
        assert!(config.visibility.weekend && config.visibility.today);
        assert!(!config.visibility.disabled);
        assert_eq!(config.view, ViewMode::Grid);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: CalendarConfig = toml::from_str(
            r#"
            week_start = "us"

            [range]
            min = "2022-01-01"
            disabled = ["2022-01-25"]

            [selection]
            day = "multiple-ranged"
            year = false
            "#,
        )
        .unwrap();

        assert_eq!(config.week_start, WeekStart::Us);
        assert_eq!(config.range.min.map(|d| d.to_string()).as_deref(), Some("2022-01-01"));
        assert_eq!(config.range.max, None);
        assert_eq!(config.range.disabled.len(), 1);
        assert_eq!(config.selection.day, DaySelection::RangedMultiple);
        assert!(config.selection.month);
        assert!(!config.selection.year);
        assert_eq!(config.date, DateBounds::default());
    }

    #[test]
    fn test_unknown_locale_falls_back_to_english() {
        let config: CalendarConfig = toml::from_str(r#"locale = "de""#).unwrap();
        assert_eq!(config.locale, Locale::En);

        let config: CalendarConfig = toml::from_str(r#"locale = "ru""#).unwrap();
        assert_eq!(config.locale, Locale::Ru);
    }

    #[test]
    fn test_ranged_alias() {
        let modes: SelectionModes = serde_json::from_str(r#"{"day": "ranged"}"#).unwrap();
        assert_eq!(modes.day, DaySelection::RangedMultiple);
    }
}
