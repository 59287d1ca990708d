//! Loading configuration and per-day event files.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use config::{Config, Environment, File};
use tracing::debug;

use crate::agenda::{AgendaEvent, AgendaLayoutEngine, parse_records};
use crate::calendar::CalendarEngine;
use crate::date::format_iso;
use crate::daygrid_config::DaygridConfig;
use crate::error::{DayGridError, DayGridResult};

#[derive(Debug, Clone)]
pub struct Daygrid {
    config: DaygridConfig,
}

impl Daygrid {
    /// Load ~/.config/daygrid/config.toml, writing a commented default the
    /// first time.
    pub fn load() -> DayGridResult<Self> {
        let config_path = DaygridConfig::config_path()?;

        if !config_path.exists() {
            DaygridConfig::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from an explicit file. `DAYGRID_` environment variables override
    /// file values, with `__` separating sections
    /// (e.g. `DAYGRID_AGENDA__START_HOUR=8`).
    pub fn load_from(path: &Path) -> DayGridResult<Self> {
        let config: DaygridConfig = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(
                Environment::with_prefix("DAYGRID")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| DayGridError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DayGridError::Config(e.to_string()))?;

        config.agenda.validate()?;
        debug!(path = %path.display(), "loaded config");

        Ok(Daygrid { config })
    }

    pub fn from_config(config: DaygridConfig) -> Self {
        Daygrid { config }
    }

    pub fn config(&self) -> &DaygridConfig {
        &self.config
    }

    pub fn events_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.config.events_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn day_file(&self, day: NaiveDate) -> PathBuf {
        self.events_path().join(format!("{}.json", format_iso(day)))
    }

    /// Read a day's events. `Ok(None)` when the file holds `null`.
    pub fn load_day(&self, day: NaiveDate) -> DayGridResult<Option<Vec<AgendaEvent>>> {
        let path = self.day_file(day);
        if !path.exists() {
            return Err(DayGridError::EventsNotFound(format_iso(day)));
        }

        let content = std::fs::read_to_string(&path)?;
        let events = parse_records(&content)?;
        debug!(
            day = %day,
            count = events.as_ref().map_or(0, Vec::len),
            "loaded day events"
        );
        Ok(events)
    }

    pub fn calendar_engine(&self) -> CalendarEngine {
        CalendarEngine::new(self.config.calendar.clone())
    }

    pub fn agenda_engine(&self) -> AgendaLayoutEngine {
        AgendaLayoutEngine::new(self.config.agenda.clone())
    }
}
