use std::net::IpAddr;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::pairing::parse_date;

/// Finds the pair of employees who worked together the longest
#[derive(Debug, Parser)]
#[command(name = "pairs", version, about)]
pub struct Cli {
    /// Log level spec, e.g. `info` or `employee_pairs=debug`
    #[arg(long, global = true, env = "PAIRS_LOG", default_value = crate::logging::DEFAULT_LOG_SPEC)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyse a CSV file and print the report
    Report(ReportArgs),
    /// Serve the upload page and JSON API
    Serve(ServeArgs),
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// CSV file with EmpID, ProjectID, DateFrom, DateTo columns
    pub csv: PathBuf,

    /// Date used for open-ended assignments, defaults to the local date
    #[arg(long, value_parser = parse_today)]
    pub today: Option<NaiveDate>,

    /// Also write the report as text to this file
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Also write the report as CSV to this file
    #[arg(long)]
    pub csv_out: Option<PathBuf>,

    /// Print the report as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    #[arg(long, env = "PAIRS_PORT", default_value_t = 8080)]
    pub port: u16,

    #[arg(long, env = "PAIRS_BIND", default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// Pin the date used for open-ended assignments instead of reading the clock per upload
    #[arg(long, value_parser = parse_today)]
    pub today: Option<NaiveDate>,
}

fn parse_today(value: &str) -> Result<NaiveDate, String> {
    parse_date(value).ok_or_else(|| format!("`{value}` is not a date"))
}

/// The processing date: the pinned one if given, else the local calendar date
pub fn resolve_today(pinned: Option<NaiveDate>) -> NaiveDate {
    pinned.unwrap_or_else(|| chrono::Local::now().date_naive())
}
