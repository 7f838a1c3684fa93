mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use tracing::debug;

use holidaychecker::configuration::Configuration;
use holidaychecker::time::calendar::holidaycalendar::HolidayCalendar;

use crate::cli::{CheckArgs, Cli, Command, ListArgs};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Configuration::new();
    if let Some(path) = &cli.config {
        config
            .from_reader(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?;
    }
    let calendar = config
        .holiday_calendar(&cli.calendar)
        .with_context(|| format!("unknown calendar '{}'", cli.calendar))?;
    debug!(calendar = %cli.calendar, "using calendar");

    match cli.command {
        Command::Check(args) => check(calendar.as_ref(), args),
        Command::List(args) => list(calendar.as_ref(), args),
    }
}

fn check(calendar: &dyn HolidayCalendar, args: CheckArgs) -> Result<()> {
    let classification = calendar.classify(args.date);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&classification)?);
        return Ok(());
    }

    println!("{classification}");
    if classification.requires_confirmation() {
        println!("confirm alarm: {}", classification.reasons().join(", "));
        if let Some(next) = calendar.next_business_day(args.date) {
            println!("next working day: {} ({})", next, next.weekday());
        }
    }
    Ok(())
}

fn list(calendar: &dyn HolidayCalendar, args: ListArgs) -> Result<()> {
    for (date, name) in calendar.holidays_in_year(args.year) {
        println!("{} ({})  {}", date, date.weekday(), name);
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("holidaychecker").chain(args.iter().copied()))
    }

    fn run_args(args: &[&str]) -> Result<()> {
        run(parse(args).unwrap())
    }

    #[test]
    fn check_and_list_succeed_with_built_in_calendar() {
        assert!(run_args(&["check", "2025-01-01"]).is_ok());
        assert!(run_args(&["check", "--json", "2022-01-01"]).is_ok());
        assert!(run_args(&["list", "2024"]).is_ok());
    }

    #[test]
    fn unknown_calendar_is_reported() {
        let e = run_args(&["--calendar", "Atlantis", "check", "2025-01-01"]).unwrap_err();
        let message = format!("{e:#}");
        assert!(message.contains("unknown calendar 'Atlantis'"), "{}", message);
    }

    #[test]
    fn unreadable_config_is_reported() {
        let e = run_args(&["--config", "does/not/exist.json", "list", "2025"]).unwrap_err();
        let message = format!("{e:#}");
        assert!(message.contains("failed to load configuration from does/not/exist.json"), "{}", message);
    }

    #[test]
    fn calendar_from_config_file() {
        assert!(run_args(&[
            "--config", "json/calendar.json",
            "--calendar", "UnitedStatesFederalJson",
            "check", "2024-12-25"
        ]).is_ok());
    }

    #[test]
    fn unparsable_date_is_rejected() {
        assert!(parse(&["check", "2025-13-40"]).is_err());
        assert!(parse(&["check", "tomorrow"]).is_err());
    }

    #[test]
    fn year_outside_chrono_range_is_rejected() {
        assert!(parse(&["list", "2147483647"]).is_err());
        assert!(parse(&["list", "-2147483648"]).is_err());
        assert!(parse(&["list", "2024"]).is_ok());
    }
}
