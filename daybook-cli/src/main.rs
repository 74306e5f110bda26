mod render;

use anyhow::{Context, Result, anyhow};
use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};
use daybook_core::calendar::{DateIndex, MonthCursor};
use daybook_core::{Config, Daybook};
use render::{ColorMode, RenderOptions, Renderer};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// daybook — calendar and streak analytics over exported journals and notes
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
    /// JSON array of journal entries (overrides `journals_file` from the config)
    #[arg(long, global = true, env = "DAYBOOK_JOURNALS")]
    journals: Option<PathBuf>,
    /// JSON array of notes (overrides `notes_file` from the config)
    #[arg(long, global = true, env = "DAYBOOK_NOTES")]
    notes: Option<PathBuf>,
    /// Count streaks and pick the default month as if today were this date (YYYY-MM-DD)
    #[arg(long, global = true)]
    today: Option<NaiveDate>,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,
    /// Log debug information to stderr. `RUST_LOG` takes precedence.
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Streak, totals, rankings and word statistics (default)
    Overview,
    /// Month grid with entry counts per day
    Calendar {
        /// Month to show (e.g. `2025-08`). Defaults to the current month.
        #[arg(long)]
        month: Option<String>,
        /// Move the viewed month by this many months (e.g. `--shift -1`)
        #[arg(long, allow_hyphen_values = true, default_value_t = 0)]
        shift: i32,
    },
    /// Entries written on a date
    On {
        /// The date to show (YYYY-MM-DD)
        date: NaiveDate,
        /// Show every entry instead of the first few
        #[arg(long, short)]
        all: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("daybook: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = apply_overrides(Config::load()?, &cli);
    let daybook = Daybook::with_config(config);
    let renderer = Renderer::new(RenderOptions {
        date_format: daybook.config.date_format.clone(),
        use_color: cli.color.enabled(),
    });

    debug!(
        journals = %daybook.config.journals_file.display(),
        notes = %daybook.config.notes_file.display(),
        today = %daybook.config.reference_date,
        "loading collections"
    );
    let data = daybook.load();
    match cli.command.unwrap_or(Command::Overview) {
        Command::Overview => {
            let overview = daybook.overview(&data);
            renderer.print_overview(&overview);
        }
        Command::Calendar { month, shift } => {
            let cursor = match month.as_deref() {
                Some(month) => parse_month(month)?,
                None => daybook.current_month(),
            };
            let cursor = cursor
                .shift(shift)
                .ok_or_else(|| anyhow!("cannot shift the calendar by {shift} months"))?;
            let grid = daybook.calendar(&data, cursor)?;
            renderer.print_calendar(&grid);
        }
        Command::On { date, all } => {
            let index = DateIndex::build(&data.journals, &data.notes);
            let day = daybook.day(&index, date, all);
            renderer.print_day(&day);
        }
    }
    renderer.print_errors(&data.errors);
    Ok(())
}

fn apply_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(path) = &cli.journals {
        config.journals_file = path.clone();
    }
    if let Some(path) = &cli.notes {
        config.notes_file = path.clone();
    }
    if let Some(today) = cli.today {
        config.reference_date = today;
    }
    config
}

/// Parses `YYYY-MM` into a cursor.
fn parse_month(input: &str) -> Result<MonthCursor> {
    let first = NaiveDate::parse_from_str(&format!("{input}-01"), "%Y-%m-%d")
        .with_context(|| format!("'{input}' is not a month, expected YYYY-MM"))?;
    MonthCursor::new(first.year(), first.month0())
        .ok_or_else(|| anyhow!("'{input}' is not a month, expected YYYY-MM"))
}
