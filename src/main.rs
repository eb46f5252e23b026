mod aggregate;
mod input;
mod model;
mod report;
mod tracing;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::input::load_rows;
use crate::report::{ReportMode, build_leaderboard, write_reports};

#[derive(Debug, Parser)]
#[command(name = "xm-leaderboard", version, about = "Exchange marathon leaderboard aggregation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Aggregate a leaderboard CSV export and write JSON/text reports.
    Run {
        /// Path to the spreadsheet CSV export.
        #[arg(long)]
        input: PathBuf,
        /// Directory receiving leaderboard.json and leaderboard.txt.
        #[arg(long)]
        out: PathBuf,
        /// Report granularity: entity totals only, or with per-entity
        /// function breakdowns.
        #[arg(long, value_enum, default_value = "entity")]
        mode: Mode,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Entity,
    Function,
}

impl From<Mode> for ReportMode {
    fn from(value: Mode) -> Self {
        match value {
            Mode::Entity => ReportMode::Entity,
            Mode::Function => ReportMode::Function,
        }
    }
}

fn main() {
    crate::tracing::init();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    match cli.command {
        Command::Run { input, out, mode } => {
            let rows = load_rows(&input).map_err(|e| e.to_string())?;
            let data = build_leaderboard(&rows, mode.into());
            write_reports(&data, &out).map_err(|e| e.to_string())?;
            Ok(())
        }
    }
}
