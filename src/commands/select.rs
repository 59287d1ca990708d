use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use daygrid_core::calendar::CalendarEngine;
use daygrid_core::calendar::config::DaySelection;
use daygrid_core::date::{format_iso, parse_iso};
use daygrid_core::daygrid::Daygrid;
use owo_colors::OwoColorize;
use tracing::info;

use crate::render::render_calendar;

pub fn run(daygrid: &Daygrid, dates: &[String], mode: Option<DaySelection>) -> Result<()> {
    let clicks = dates
        .iter()
        .map(|s| parse_iso(s))
        .collect::<Result<Vec<_>, _>>()?;

    let (engine, skipped) = replay_clicks(daygrid, &clicks, mode);

    for date in skipped {
        println!("{} {} is disabled, skipping", "!".yellow(), format_iso(date));
    }

    let selected = &engine.state().selected_dates;
    if selected.is_empty() {
        println!("{}", "Nothing selected".dimmed());
    } else {
        let keys: Vec<String> = selected.iter().copied().map(format_iso).collect();
        println!("{} {}", "Selected:".bold(), keys.join(", "));
    }
    println!();
    println!("{}", render_calendar(&engine));

    Ok(())
}

/// Click each date in order on a fresh engine. Returns the engine and the
/// dates that were skipped because they are disabled.
fn replay_clicks(
    daygrid: &Daygrid,
    clicks: &[NaiveDate],
    mode: Option<DaySelection>,
) -> (CalendarEngine, Vec<NaiveDate>) {
    let mut config = daygrid.config().calendar.clone();
    if let Some(mode) = mode {
        config.selection.day = mode;
    }
    // Show the month of the last click
    if let Some(last) = clicks.last() {
        config.selected.year = Some(last.year() as i64);
        config.selected.month = Some(last.month0() as i64);
    }

    let mut engine = CalendarEngine::new(config).on_day(|date| info!(%date, "clicked day"));
    let mut skipped = Vec::new();

    for &date in clicks {
        // Disabled days are not clickable in the widget
        if engine.is_disabled(date) {
            skipped.push(date);
            continue;
        }
        engine.select_day(date);
    }

    (engine, skipped)
}
