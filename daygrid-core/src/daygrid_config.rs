//! Global daygrid configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::agenda::AgendaConfig;
use crate::calendar::config::CalendarConfig;
use crate::error::{DayGridError, DayGridResult};

static DEFAULT_EVENTS_DIR: &str = "~/agenda";

fn default_events_dir() -> PathBuf {
    PathBuf::from(DEFAULT_EVENTS_DIR)
}

fn is_default_events_dir(p: &PathBuf) -> bool {
    *p == default_events_dir()
}

/// Configuration at ~/.config/daygrid/config.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DaygridConfig {
    /// Directory of per-day event files (`YYYY-MM-DD.json`)
    #[serde(default = "default_events_dir", skip_serializing_if = "is_default_events_dir")]
    pub events_dir: PathBuf,

    #[serde(default)]
    pub calendar: CalendarConfig,

    #[serde(default)]
    pub agenda: AgendaConfig,
}

impl Default for DaygridConfig {
    fn default() -> Self {
        DaygridConfig {
            events_dir: default_events_dir(),
            calendar: CalendarConfig::default(),
            agenda: AgendaConfig::default(),
        }
    }
}

impl DaygridConfig {
    pub fn config_path() -> DayGridResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DayGridError::Config("Could not determine config directory".into()))?
            .join("daygrid");

        Ok(config_dir.join("config.toml"))
    }

    /// Write this config to `path`.
    pub fn save(&self, path: &Path) -> DayGridResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| DayGridError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| DayGridError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> DayGridResult<()> {
        let contents = format!(
            "\
# daygrid configuration

# Where per-day event files (YYYY-MM-DD.json) live:
# events_dir = \"{}\"

# [calendar]
# view = \"grid\"            # grid | month | year
# week_start = \"iso8601\"   # iso8601 | us
# locale = \"en\"            # en | ru
#
# [calendar.date]
# min = \"1970-01-01\"
# max = \"2470-12-31\"
#
# [calendar.range]
# disabled = [\"2022-01-25\"]
#
# [calendar.selection]
# day = \"single\"           # single | multiple | multiple-ranged
# month = true
# year = true

# [agenda]
# start_hour = 9
# end_hour = 21
# time_format = 12
",
            DEFAULT_EVENTS_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DayGridError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DayGridError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
