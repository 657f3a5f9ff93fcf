mod commands;
mod render;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, Weekday};
use clap::{Parser, Subcommand};
use monthcal_core::EventCandidate;
use monthcal_core::config::MonthcalConfig;
use monthcal_core::month::MonthGrid;
use monthcal_core::storage::FileStore;
use monthcal_core::store::{EventStore, load_predefined};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "monthcal")]
#[command(about = "Browse a month of events and add your own")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month grid with event counts per day
    Month {
        /// Month to show (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Show one day's events and their columns
    Day {
        /// Day to show (YYYY-MM-DD)
        date: String,

        /// Print the day layout as JSON
        #[arg(long)]
        json: bool,
    },
    /// List events grouped by day
    Events {
        /// First day to list (YYYY-MM-DD), defaults to the start of the current month
        #[arg(long)]
        from: Option<String>,

        /// Last day to list (YYYY-MM-DD), defaults to the end of the current month
        #[arg(long)]
        to: Option<String>,
    },
    /// Create a new event
    New {
        title: String,

        /// Date of the event (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Start time (HH:MM)
        #[arg(short, long)]
        start: Option<String>,

        /// Duration in minutes (defaults to 60)
        #[arg(long)]
        duration: Option<String>,
    },
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = MonthcalConfig::load()?;
    let week_start: Weekday = config.week_start.into();

    let predefined = load_predefined(&config.predefined_source());
    let mut store = EventStore::open(predefined, FileStore::new(config.data_path()));
    debug!(
        "Loaded {} predefined and {} user events",
        store.predefined().len(),
        store.user_events().len()
    );

    let today = Local::now().date_naive();

    match cli.command {
        Commands::Month { month } => {
            let grid = match month {
                Some(s) => parse_month(&s, week_start)?,
                None => MonthGrid::containing(today, week_start),
            };
            commands::month::run(&store, grid, today)
        }
        Commands::Day { date, json } => commands::day::run(&store, parse_date(&date)?, json),
        Commands::Events { from, to } => {
            let current = MonthGrid::containing(today, week_start);
            let from = match from {
                Some(s) => parse_date(&s)?,
                None => current.first_day(),
            };
            let to = match to {
                Some(s) => parse_date(&s)?,
                None => current.last_day(),
            };
            commands::events::run(&store, from, to, today)
        }
        Commands::New {
            title,
            date,
            start,
            duration,
        } => {
            let candidate = EventCandidate {
                title,
                date: date.unwrap_or_default(),
                start: start.unwrap_or_default(),
                duration: duration.unwrap_or_default(),
            };
            commands::new::run(&mut store, &candidate)
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
}

fn parse_month(s: &str, week_start: Weekday) -> Result<MonthGrid> {
    let first = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
        .with_context(|| format!("Invalid month format '{}'. Expected YYYY-MM", s))?;
    Ok(MonthGrid::containing(first, week_start))
}
