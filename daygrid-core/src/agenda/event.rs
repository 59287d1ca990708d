//! Agenda events and the upstream record shape they are converted from.

use chrono::{DateTime, FixedOffset, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{DayGridError, DayGridResult};

/// One time-bounded event within a day. Times are naive wall-clock values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaEvent {
    pub headline: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl AgendaEvent {
    pub fn new(headline: impl Into<String>, start: NaiveTime, end: NaiveTime) -> Self {
        AgendaEvent {
            headline: headline.into(),
            start,
            end,
        }
    }
}

/// A todo returned by the upstream day query:
/// `{"Headline": "...", "Date": {"Start": RFC3339, "End": RFC3339}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AgendaRecord {
    pub headline: String,
    pub date: RecordSpan,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecordSpan {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

impl From<&AgendaRecord> for AgendaEvent {
    /// Keeps the wall-clock time as written; no timezone conversion.
    fn from(record: &AgendaRecord) -> Self {
        AgendaEvent {
            headline: record.headline.clone(),
            start: record.date.start.time(),
            end: record.date.end.time(),
        }
    }
}

/// Parse a day's query result. A JSON `null` means the day has no events.
pub fn parse_records(json: &str) -> DayGridResult<Option<Vec<AgendaEvent>>> {
    let records: Option<Vec<AgendaRecord>> =
        serde_json::from_str(json).map_err(|e| DayGridError::Serialization(e.to_string()))?;

    Ok(records.map(|records| records.iter().map(AgendaEvent::from).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_records_keeps_wall_clock_time() {
        let json = r#"[
            {"Headline": "Standup", "Date": {"Start": "2022-01-07T09:30:00-05:00", "End": "2022-01-07T10:00:00-05:00"}},
            {"Headline": "Review", "Date": {"Start": "2022-01-07T14:00:00Z", "End": "2022-01-07T15:15:00Z"}}
        ]"#;

        let events = parse_records(json).unwrap().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].headline, "Standup");
        assert_eq!(events[0].start, NaiveTime::from_hms_opt(9, 30, 0).unwrap());
        assert_eq!(events[1].end, NaiveTime::from_hms_opt(15, 15, 0).unwrap());
    }

    #[test]
    fn test_parse_records_null_is_no_events() {
        assert!(parse_records("null").unwrap().is_none());
        assert_eq!(parse_records("[]").unwrap(), Some(vec![]));
    }

    #[test]
    fn test_parse_records_rejects_bad_shape() {
        let err = parse_records(r#"[{"Headline": "x"}]"#).unwrap_err();
        assert!(matches!(err, DayGridError::Serialization(_)));
    }
}
