mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use daygrid_core::calendar::ViewMode;
use daygrid_core::calendar::config::DaySelection;
use daygrid_core::daygrid::Daygrid;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "daygrid")]
#[command(about = "Browse a calendar month and lay out a day agenda without overlapping events")]
struct Cli {
    /// Config file to use instead of ~/.config/daygrid/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month grid, month picker or year picker
    Month {
        /// Year to show (defaults to the configured or current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Month to show, 1-12
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        /// Move this many months forward (negative: backward) using the arrows
        #[arg(long, allow_hyphen_values = true, default_value_t = 0)]
        shift: i32,

        #[arg(long, value_enum)]
        view: Option<ViewArg>,
    },
    /// Click through days and print the resulting selection
    Select {
        /// Dates to click, in order (YYYY-MM-DD)
        #[arg(required = true)]
        dates: Vec<String>,

        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
    },
    /// Lay out the events of one day
    Agenda {
        /// Day to show (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Show the day after
        #[arg(long, conflicts_with = "prev")]
        next: bool,

        /// Show the day before
        #[arg(long)]
        prev: bool,

        /// Print geometry as JSON
        #[arg(long)]
        json: bool,
    },
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file location
    Path,
    /// Write a commented default config file
    Init,
}

#[derive(Clone, Copy, ValueEnum)]
enum ViewArg {
    Grid,
    Month,
    Year,
}

impl From<ViewArg> for ViewMode {
    fn from(view: ViewArg) -> Self {
        match view {
            ViewArg::Grid => ViewMode::Grid,
            ViewArg::Month => ViewMode::MonthPicker,
            ViewArg::Year => ViewMode::YearPicker,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Single,
    Multiple,
    Ranged,
}

impl From<ModeArg> for DaySelection {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Single => DaySelection::Single,
            ModeArg::Multiple => DaySelection::Multiple,
            ModeArg::Ranged => DaySelection::RangedMultiple,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Config { action } => match action {
            ConfigAction::Path => commands::config::path(cli.config.as_deref()),
            ConfigAction::Init => commands::config::init(cli.config.as_deref()),
        },
        Commands::Month {
            year,
            month,
            shift,
            view,
        } => {
            let daygrid = load(cli.config.as_deref())?;
            commands::month::run(&daygrid, year, month.map(|m| m - 1), shift, view.map(Into::into))
        }
        Commands::Select { dates, mode } => {
            let daygrid = load(cli.config.as_deref())?;
            commands::select::run(&daygrid, &dates, mode.map(Into::into))
        }
        Commands::Agenda {
            date,
            next,
            prev,
            json,
        } => {
            let daygrid = load(cli.config.as_deref())?;
            commands::agenda::run(&daygrid, date.as_deref(), next, prev, json)
        }
    }
}

fn load(config_path: Option<&std::path::Path>) -> Result<Daygrid> {
    let daygrid = match config_path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!(
                    "Config file '{}' not found.\n\n\
                    Create it with:\n  \
                    daygrid --config {} config init",
                    path.display(),
                    path.display()
                );
            }
            Daygrid::load_from(path)?
        }
        None => Daygrid::load()?,
    };
    Ok(daygrid)
}
