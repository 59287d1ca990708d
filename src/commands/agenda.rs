use anyhow::Result;
use chrono::Local;
use daygrid_core::agenda::{AgendaCursor, EventGeometry, NowMarker, TimeLabel};
use daygrid_core::date::parse_iso;
use daygrid_core::daygrid::Daygrid;
use daygrid_core::error::DayGridError;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::warn;

use crate::render::Render;

#[derive(Serialize)]
struct AgendaOutput {
    day: String,
    title: String,
    events: Vec<EventGeometry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    now_marker: Option<NowMarker>,
    time_labels: Vec<TimeLabel>,
    hour_block_height: f64,
}

pub fn run(daygrid: &Daygrid, date: Option<&str>, next: bool, prev: bool, json: bool) -> Result<()> {
    let mut cursor = match date {
        Some(s) => AgendaCursor::new(parse_iso(s)?),
        None => AgendaCursor::today(),
    };
    if next {
        cursor.next_day();
    } else if prev {
        cursor.previous_day();
    }

    let events = match daygrid.load_day(cursor.day()) {
        Ok(events) => events,
        Err(DayGridError::EventsNotFound(day)) => {
            warn!(%day, dir = %daygrid.events_path().display(), "no events file for day");
            None
        }
        Err(e) => return Err(e.into()),
    };

    let mut engine = daygrid.agenda_engine();
    let boxes = engine.layout(events.as_deref()).to_vec();

    // The now marker only belongs on today's agenda
    let now = Local::now();
    let now_marker = (now.date_naive() == cursor.day()).then(|| engine.now_marker(now.time()));

    if json {
        let output = AgendaOutput {
            day: cursor.key(),
            title: cursor.title(),
            events: boxes,
            now_marker,
            time_labels: engine.time_labels(),
            hour_block_height: engine.config().hour_block_height(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", cursor.title().bold());

    let labels: Vec<String> = engine.time_labels().iter().map(Render::render).collect();
    println!("{}", labels.join(" "));
    println!();

    if boxes.is_empty() {
        println!("{}", "No events".dimmed());
    }
    for geometry in &boxes {
        println!("  {}", geometry.render());
    }

    if let Some(marker) = now_marker {
        println!();
        println!("  {}", marker.render());
    }

    Ok(())
}
