//! Draws the month grid, the pickers and the agenda boxes as colored terminal
//! text. Today is green and bold, selected days are inverted, and weekends,
//! holidays and disabled days each get their own color.

use daygrid_core::agenda::{EventGeometry, NowMarker, TimeLabel};
use daygrid_core::calendar::config::Visibility;
use daygrid_core::calendar::{
    Arrows, CalendarEngine, CellPosition, DayCell, MonthCell, ViewMode, WeekdayLabel, YearCell,
};
use owo_colors::OwoColorize;

/// Width of one day column.
const CELL_WIDTH: usize = 4;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for WeekdayLabel {
    fn render(&self) -> String {
        let text = format!("{:>width$}", self.name, width = CELL_WIDTH);
        if self.weekend {
            text.red().to_string()
        } else {
            text.dimmed().to_string()
        }
    }
}

impl Render for MonthCell {
    fn render(&self) -> String {
        let text = format!(" {:<4}", self.name);
        if self.selected {
            text.reversed().to_string()
        } else if self.disabled {
            text.dimmed().strikethrough().to_string()
        } else {
            text
        }
    }
}

impl Render for YearCell {
    fn render(&self) -> String {
        let text = format!(" {:>5}", self.year);
        if self.selected {
            text.reversed().to_string()
        } else if self.disabled {
            text.dimmed().strikethrough().to_string()
        } else {
            text
        }
    }
}

impl Render for EventGeometry {
    fn render(&self) -> String {
        let lane = format!("[{}/{}]", self.column, self.column_count);
        let boxed = format!(
            "top {:>6.1}  height {:>6.1}  left {:>6.1}  width {:>6.1}",
            self.top, self.height, self.left, self.width
        );
        let headline = if self.height == 0.0 {
            self.headline.dimmed().to_string()
        } else {
            self.headline.bold().to_string()
        };
        format!("{} {} {}", lane.cyan(), headline, boxed.dimmed())
    }
}

impl Render for NowMarker {
    fn render(&self) -> String {
        let line = format!("now at top {:.1}", self.top);
        if self.visible {
            line.red().to_string()
        } else {
            format!("{} (outside window)", line).dimmed().to_string()
        }
    }
}

impl Render for TimeLabel {
    fn render(&self) -> String {
        if self.full_hour {
            self.text.clone()
        } else {
            self.text.dimmed().to_string()
        }
    }
}

/// A grid day honoring the visibility hints; filler days are dimmed.
fn render_day(cell: &DayCell, visibility: Visibility) -> String {
    let text = format!("{:>width$}", cell.day(), width = CELL_WIDTH);

    if cell.position != CellPosition::Current {
        return text.dimmed().to_string();
    }
    if cell.selected {
        return text.reversed().to_string();
    }
    if cell.disabled {
        return text.dimmed().strikethrough().to_string();
    }
    if visibility.today && cell.today {
        return text.green().bold().to_string();
    }
    if cell.holiday {
        return text.magenta().to_string();
    }
    if visibility.weekend && cell.weekend {
        return text.red().to_string();
    }
    text
}

fn render_arrows(engine: &CalendarEngine, arrows: Arrows, title: &str) -> String {
    let names = engine.config().locale.names();
    let prev = if arrows.prev {
        format!("< {}", names.arrow_prev)
    } else {
        format!("< {}", names.arrow_prev).dimmed().to_string()
    };
    let next = if arrows.next {
        format!("{} >", names.arrow_next)
    } else {
        format!("{} >", names.arrow_next).dimmed().to_string()
    };
    format!("{}   {}   {}", prev, title.bold(), next)
}

/// Render whichever view the calendar is in.
pub fn render_calendar(engine: &CalendarEngine) -> String {
    let state = engine.state();
    let locale = engine.config().locale;
    let title = format!(
        "{} {}",
        locale.month_full(state.selected_month),
        state.selected_year
    );

    let mut lines = vec![render_arrows(engine, engine.arrows(), &title)];

    match state.view_mode {
        ViewMode::Grid => {
            let visibility = engine.config().visibility;
            lines.push(engine.week_header().iter().map(Render::render).collect());
            let grid = engine.month_grid();
            for week in grid.weeks() {
                lines.push(week.iter().map(|cell| render_day(cell, visibility)).collect());
            }
        }
        ViewMode::MonthPicker => {
            for row in engine.month_picker().chunks(4) {
                lines.push(row.iter().map(Render::render).collect());
            }
        }
        ViewMode::YearPicker => {
            for row in engine.year_picker().chunks(5) {
                lines.push(row.iter().map(Render::render).collect());
            }
        }
    }

    lines.join("\n")
}
