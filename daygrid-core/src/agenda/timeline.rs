//! Labels of the agenda's time bar.

use serde::Serialize;

use crate::agenda::{AgendaLayoutEngine, TimeFormat};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeLabel {
    pub text: String,
    /// True for full hours, false for the half-hour marks between them
    pub full_hour: bool,
}

impl AgendaLayoutEngine {
    /// One label per hour from `start_hour` to `end_hour` inclusive, with a
    /// half-hour label between consecutive hours.
    pub fn time_labels(&self) -> Vec<TimeLabel> {
        let config = self.config();
        let mut labels = Vec::new();

        for hour in config.start_hour..=config.end_hour {
            let shown = match config.time_format {
                TimeFormat::H12 if hour > 12 => hour - 12,
                _ => hour,
            };
            let suffix = match config.time_format {
                TimeFormat::H12 if hour >= 12 => "PM",
                TimeFormat::H12 => "AM",
                TimeFormat::H24 => "Hrs",
            };

            labels.push(TimeLabel {
                text: format!("{shown}:00 {suffix}"),
                full_hour: true,
            });

            if hour != config.end_hour {
                labels.push(TimeLabel {
                    text: format!("{shown}:30"),
                    full_hour: false,
                });
            }
        }

        labels
    }
}
