//! Month and weekday name tables.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Names used by one locale.
///
/// `weekdays` is Sunday-first; callers rotate it for Monday-first weeks.
#[derive(Debug)]
pub struct LocaleNames {
    pub months_full: [&'static str; 12],
    pub months_short: [&'static str; 12],
    pub weekdays: [&'static str; 7],
    pub arrow_prev: &'static str,
    pub arrow_next: &'static str,
}

static EN: LocaleNames = LocaleNames {
    months_full: [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ],
    months_short: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    weekdays: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    arrow_prev: "Prev",
    arrow_next: "Next",
};

static RU: LocaleNames = LocaleNames {
    months_full: [
        "Январь", "Февраль", "Март", "Апрель", "Май", "Июнь", "Июль", "Август", "Сентябрь",
        "Октябрь", "Ноябрь", "Декабрь",
    ],
    months_short: [
        "Янв", "Фев", "Мар", "Апр", "Май", "Июн", "Июл", "Авг", "Сен", "Окт", "Ноя", "Дек",
    ],
    weekdays: ["Вс", "Пн", "Вт", "Ср", "Чт", "Пт", "Сб"],
    arrow_prev: "Назад",
    arrow_next: "Вперед",
};

/// Unknown codes read from config fall back to English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl From<String> for Locale {
    fn from(code: String) -> Self {
        Locale::from_code(&code)
    }
}

impl Locale {
    /// Look up a locale by language code, falling back to English.
    pub fn from_code(code: &str) -> Self {
        match code.to_ascii_lowercase().as_str() {
            "en" => Locale::En,
            "ru" => Locale::Ru,
            other => {
                warn!(locale = other, "unknown locale, using English");
                Locale::En
            }
        }
    }

    pub fn names(self) -> &'static LocaleNames {
        match self {
            Locale::En => &EN,
            Locale::Ru => &RU,
        }
    }

    pub fn month_full(self, month0: u32) -> &'static str {
        self.names().months_full[month0 as usize % 12]
    }

    pub fn month_short(self, month0: u32) -> &'static str {
        self.names().months_short[month0 as usize % 12]
    }
}
