use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};

use holidaychecker::time::calendar::unitedstates::UNITED_STATES_FEDERAL;

/// Weekend and U.S. federal holiday checks for alarm dates.
#[derive(Parser)]
#[command(
    name = "holidaychecker",
    version,
    about = "Weekend and U.S. federal holiday checks for alarm dates"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// JSON file with additional holiday calendars.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Name of the calendar to use.
    #[arg(long, global = true, default_value = UNITED_STATES_FEDERAL)]
    pub calendar: String,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Classify a date as weekend and/or holiday.
    Check(CheckArgs),
    /// List the observed holidays of a year.
    List(ListArgs),
}

/// Arguments for the `check` subcommand.
#[derive(clap::Args)]
pub struct CheckArgs {
    /// Date to check, as YYYY-MM-DD.
    pub date: NaiveDate,

    /// Print the verdict as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` subcommand.
#[derive(clap::Args)]
pub struct ListArgs {
    /// Calendar year.
    #[arg(value_parser = clap::value_parser!(i32).range(
        NaiveDate::MIN.year() as i64..=NaiveDate::MAX.year() as i64
    ))]
    pub year: i32,
}
