//! Day agenda layout.
//!
//! Given a visible window (`start_hour..end_hour`) and a day's events, the
//! layout engine assigns every event a column so that concurrent events sit
//! side by side, then converts times and columns into pixel boxes inside a
//! fixed-size container.

mod cursor;
mod event;
mod geometry;
mod slots;
mod timeline;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DayGridError, DayGridResult};

pub use cursor::AgendaCursor;
pub use event::{AgendaEvent, AgendaRecord, RecordSpan, parse_records};
pub use geometry::{CollisionAssignment, Dot, EventGeometry, NowMarker, derive_column_geometry};
pub use slots::{SLOT_MINUTES, SlotOccupancy};
pub use timeline::TimeLabel;

/// Pixel height of the current-time line.
const NOW_MARKER_HEIGHT: f64 = 2.0;

/// Clock style of the time bar labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TimeFormat {
    #[default]
    H12,
    H24,
}

impl TryFrom<u8> for TimeFormat {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            12 => Ok(TimeFormat::H12),
            24 => Ok(TimeFormat::H24),
            other => Err(format!("time_format must be 12 or 24, got {other}")),
        }
    }
}

impl From<TimeFormat> for u8 {
    fn from(format: TimeFormat) -> u8 {
        match format {
            TimeFormat::H12 => 12,
            TimeFormat::H24 => 24,
        }
    }
}

/// Visible window and container size of the agenda.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgendaConfig {
    pub start_hour: u32,
    pub end_hour: u32,
    pub container_height: f64,
    pub container_width: f64,
    /// Left padding added to every event box
    pub gutter: f64,
    pub time_format: TimeFormat,
    /// Horizontal position of the now marker (the time bar width)
    pub marker_left: f64,
}

impl Default for AgendaConfig {
    fn default() -> Self {
        AgendaConfig {
            start_hour: 9,
            end_hour: 21,
            container_height: 720.0,
            container_width: 600.0,
            gutter: 10.0,
            time_format: TimeFormat::H12,
            marker_left: 100.0,
        }
    }
}

impl AgendaConfig {
    pub fn validate(&self) -> DayGridResult<()> {
        if self.end_hour > 24 || self.start_hour >= self.end_hour {
            return Err(DayGridError::Config(format!(
                "agenda hours must satisfy start < end <= 24, got {}..{}",
                self.start_hour, self.end_hour
            )));
        }
        if self.container_height <= 0.0 || self.container_width <= 0.0 {
            return Err(DayGridError::Config("agenda container must have a positive size".into()));
        }
        Ok(())
    }

    /// Total minutes in the visible window.
    pub fn window_minutes(&self) -> i64 {
        60 * (self.end_hour as i64 - self.start_hour as i64)
    }

    pub fn slot_count(&self) -> usize {
        (self.window_minutes().max(0) / SLOT_MINUTES) as usize
    }

    /// Minutes between the window start and `time`; negative before it.
    pub fn minutes_from_start(&self, time: NaiveTime) -> i64 {
        (time.hour() as i64 * 60 + time.minute() as i64) - self.start_hour as i64 * 60
    }

    /// Height of one hour row, for the background grid lines.
    pub fn hour_block_height(&self) -> f64 {
        let span = self.end_hour.saturating_sub(self.start_hour);
        if span == 0 {
            return 0.0;
        }
        self.container_height / span as f64
    }

    fn to_pixels(&self, minutes: i64) -> f64 {
        minutes as f64 / self.window_minutes() as f64 * self.container_height
    }
}

/// Lays out one day at a time. The previous result is replaced by every
/// call to `layout`.
#[derive(Debug, Clone, Default)]
pub struct AgendaLayoutEngine {
    config: AgendaConfig,
    assignments: Vec<CollisionAssignment>,
    geometry: Vec<EventGeometry>,
}

impl AgendaLayoutEngine {
    pub fn new(config: AgendaConfig) -> Self {
        AgendaLayoutEngine {
            config,
            assignments: Vec::new(),
            geometry: Vec::new(),
        }
    }

    pub fn config(&self) -> &AgendaConfig {
        &self.config
    }

    pub fn assignments(&self) -> &[CollisionAssignment] {
        &self.assignments
    }

    pub fn geometry(&self) -> &[EventGeometry] {
        &self.geometry
    }

    /// Compute the boxes for a day's events. `None` or an empty list clears
    /// the previous layout and yields nothing.
    ///
    /// Events ending before they start, or lying outside the window, get a
    /// zero-height box instead of an error.
    pub fn layout(&mut self, events: Option<&[AgendaEvent]>) -> &[EventGeometry] {
        self.assignments.clear();
        self.geometry.clear();

        let events = match events {
            Some(events) if !events.is_empty() => events,
            _ => return &self.geometry,
        };
        if self.config.window_minutes() <= 0 {
            return &self.geometry;
        }

        let occupancy = SlotOccupancy::assign(events, &self.config);
        self.assignments = derive_column_geometry(&occupancy, events.len());

        let window = self.config.window_minutes();
        let width = self.config.container_width;
        let gutter = self.config.gutter;

        self.geometry = events
            .iter()
            .zip(&self.assignments)
            .enumerate()
            .map(|(index, (event, assignment))| {
                let start = self.config.minutes_from_start(event.start).clamp(0, window);
                let end = self.config.minutes_from_start(event.end).clamp(start, window);
                let unit = width / assignment.column_count as f64;

                EventGeometry {
                    index,
                    headline: event.headline.clone(),
                    top: self.config.to_pixels(start),
                    height: self.config.to_pixels(end - start),
                    left: unit * (assignment.column - 1) as f64 + gutter,
                    width: unit,
                    column: assignment.column,
                    column_count: assignment.column_count,
                }
            })
            .collect();

        debug!(
            events = events.len(),
            max_columns = self.assignments.iter().map(|a| a.column_count).max().unwrap_or(1),
            "laid out agenda"
        );

        &self.geometry
    }

    /// Geometry of the current-time line, laid out like a zero-length event
    /// spanning the full width.
    pub fn now_marker(&self, now: NaiveTime) -> NowMarker {
        let minutes = self.config.minutes_from_start(now);
        let window = self.config.window_minutes();

        let top = if window > 0 { self.config.to_pixels(minutes) } else { 0.0 };
        let height = NOW_MARKER_HEIGHT;
        let left = self.config.marker_left.max(0.0);
        let size = height * 4.0;

        NowMarker {
            top,
            height,
            left,
            width: self.config.container_width,
            dot: Dot {
                top: top - size / 2.0 + height / 2.0,
                left: (left - size / 2.0).max(0.0),
                size,
            },
            visible: window > 0 && (0..=window).contains(&minutes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn event(name: &str, start: (u32, u32), end: (u32, u32)) -> AgendaEvent {
        AgendaEvent::new(name, at(start.0, start.1), at(end.0, end.1))
    }

    fn sample_day() -> Vec<AgendaEvent> {
        vec![
            event("standup", (9, 0), (10, 0)),
            event("review", (9, 30), (10, 30)),
            event("lunch", (11, 0), (12, 0)),
        ]
    }

    #[test]
    fn test_layout_overlapping_pair() {
        let mut engine = AgendaLayoutEngine::new(AgendaConfig::default());
        let boxes = engine.layout(Some(sample_day().as_slice())).to_vec();

        assert_eq!(boxes.len(), 3);
        assert_eq!((boxes[0].column, boxes[0].column_count), (1, 2));
        assert_eq!((boxes[1].column, boxes[1].column_count), (2, 2));
        assert_eq!((boxes[2].column, boxes[2].column_count), (1, 1));

        // 12h window of 720px: one pixel per minute
        assert_eq!(boxes[0].top, 0.0);
        assert_eq!(boxes[0].height, 60.0);
        assert_eq!(boxes[1].top, 30.0);
        assert_eq!(boxes[0].width, 300.0);
        assert_eq!(boxes[0].left, 10.0);
        assert_eq!(boxes[1].left, 310.0);
        assert_eq!(boxes[2].width, 600.0);
        assert_eq!(boxes[2].left, 10.0);
        assert_eq!(boxes[2].top, 120.0);
    }

    #[test]
    fn test_layout_none_yields_nothing_and_clears_previous() {
        let mut engine = AgendaLayoutEngine::new(AgendaConfig::default());
        engine.layout(Some(sample_day().as_slice()));
        assert_eq!(engine.assignments().len(), 3);

        assert!(engine.layout(None).is_empty());
        assert!(engine.assignments().is_empty());
        assert!(engine.geometry().is_empty());
        let no_events: Vec<AgendaEvent> = Vec::new();
        assert!(engine.layout(Some(no_events.as_slice())).is_empty());
    }

    #[test]
    fn test_layout_is_idempotent() {
        let mut engine = AgendaLayoutEngine::new(AgendaConfig::default());
        let events = sample_day();
        let first = engine.layout(Some(events.as_slice())).to_vec();
        let second = engine.layout(Some(events.as_slice())).to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_malformed_events_have_zero_height() {
        let mut engine = AgendaLayoutEngine::new(AgendaConfig::default());
        let events = vec![
            event("inverted", (11, 0), (10, 0)),
            event("empty", (10, 0), (10, 0)),
            event("early", (6, 0), (7, 0)),
            event("late", (22, 0), (23, 0)),
        ];
        let boxes = engine.layout(Some(events.as_slice())).to_vec();

        assert_eq!(boxes.len(), 4);
        assert!(boxes.iter().all(|b| b.height == 0.0));
        assert!(boxes.iter().all(|b| (b.column, b.column_count) == (1, 1)));
        assert_eq!(boxes[2].top, 0.0);
        assert_eq!(boxes[3].top, 720.0);
    }

    #[test]
    fn test_partially_visible_event_is_clipped() {
        let mut engine = AgendaLayoutEngine::new(AgendaConfig::default());
        let boxes = engine.layout(Some(&[event("early", (8, 0), (9, 30))][..])).to_vec();
        assert_eq!(boxes[0].top, 0.0);
        assert_eq!(boxes[0].height, 30.0);
    }

    #[test]
    fn test_scaled_container() {
        let config = AgendaConfig {
            start_hour: 8,
            end_hour: 12,
            container_height: 480.0,
            container_width: 300.0,
            gutter: 0.0,
            ..Default::default()
        };
        let mut engine = AgendaLayoutEngine::new(config);
        let boxes = engine.layout(Some(&[event("a", (9, 0), (9, 45))][..])).to_vec();
        assert_eq!(boxes[0].top, 120.0);
        assert_eq!(boxes[0].height, 90.0);
        assert_eq!(boxes[0].left, 0.0);
        assert_eq!(boxes[0].width, 300.0);
    }

    #[test]
    fn test_now_marker() {
        let engine = AgendaLayoutEngine::new(AgendaConfig::default());
        let marker = engine.now_marker(at(10, 30));

        assert!(marker.visible);
        assert_eq!(marker.top, 90.0);
        assert_eq!(marker.height, 2.0);
        assert_eq!(marker.left, 100.0);
        assert_eq!(marker.width, 600.0);
        assert_eq!(marker.dot.size, 8.0);
        assert_eq!(marker.dot.top, 87.0);
        assert_eq!(marker.dot.left, 96.0);
    }

    #[test]
    fn test_now_marker_offset_never_negative() {
        let config = AgendaConfig {
            marker_left: 2.0,
            ..Default::default()
        };
        let engine = AgendaLayoutEngine::new(config);
        let marker = engine.now_marker(at(7, 0));
        assert_eq!(marker.dot.left, 0.0);
        assert!(marker.left >= 0.0);
        assert!(!marker.visible);
    }

    #[test]
    fn test_validate() {
        assert!(AgendaConfig::default().validate().is_ok());
        let bad = AgendaConfig {
            start_hour: 21,
            end_hour: 9,
            ..Default::default()
        };
        assert!(matches!(bad.validate(), Err(DayGridError::Config(_))));
    }

    #[test]
    fn test_time_format_from_toml() {
        let config: AgendaConfig = toml::from_str("time_format = 24\nstart_hour = 8").unwrap();
        assert_eq!(config.time_format, TimeFormat::H24);
        assert_eq!(config.start_hour, 8);
        assert_eq!(config.end_hour, 21);
        assert!(toml::from_str::<AgendaConfig>("time_format = 13").is_err());
    }

    #[test]
    fn test_hour_block_height() {
        assert_eq!(AgendaConfig::default().hour_block_height(), 60.0);
    }
}
