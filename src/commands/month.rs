use anyhow::Result;
use daygrid_core::calendar::{CalendarEngine, Direction, ViewMode};
use daygrid_core::daygrid::Daygrid;
use owo_colors::OwoColorize;

use crate::render::render_calendar;

pub fn run(
    daygrid: &Daygrid,
    year: Option<i32>,
    month0: Option<u32>,
    shift: i32,
    view: Option<ViewMode>,
) -> Result<()> {
    let mut config = daygrid.config().calendar.clone();
    if let Some(year) = year {
        config.selected.year = Some(year as i64);
    }
    if let Some(month0) = month0 {
        config.selected.month = Some(month0 as i64);
    }

    let mut engine = CalendarEngine::new(config);

    let direction = if shift < 0 { Direction::Prev } else { Direction::Next };
    for moved in 0..shift.unsigned_abs() {
        if !engine.change_month(direction) {
            println!(
                "{}",
                format!("Stopped after {} of {} months: end of the navigable range", moved, shift.unsigned_abs())
                    .dimmed()
            );
            break;
        }
    }

    match view {
        Some(ViewMode::MonthPicker) => {
            if !engine.enter_month_picker() && engine.state().view_mode != ViewMode::MonthPicker {
                anyhow::bail!("Month selection is disabled in the calendar config");
            }
        }
        Some(ViewMode::YearPicker) => {
            if !engine.enter_year_picker() && engine.state().view_mode != ViewMode::YearPicker {
                anyhow::bail!("Year selection is disabled in the calendar config");
            }
        }
        Some(ViewMode::Grid) => {
            engine.leave_picker();
        }
        None => {}
    }

    println!("{}", render_calendar(&engine));
    Ok(())
}
