use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use log::LevelFilter;

use crate::aggregator::ScanMode;
use crate::validate;

/// Find the most active cookie(s) in a cookie log on a given day.
#[derive(Parser, Debug)]
#[command(name = "most_active_cookie", version, about)]
pub struct Cli {
    /// The cookie log csv file to be searched
    #[arg(value_name = "FILE", value_parser = parse_file_name)]
    pub file: PathBuf,

    /// Day on which the most active cookie is searched (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_date)]
    pub date: NaiveDate,

    /// Read the whole log instead of stopping after the requested day.
    /// Needed when the log is not sorted newest first.
    #[arg(long)]
    pub full_scan: bool,

    /// Raise diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub file: PathBuf,
    pub date: NaiveDate,
    pub scan_mode: ScanMode,
    pub log_level: LevelFilter,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            file: cli.file,
            date: cli.date,
            scan_mode: if cli.full_scan {
                ScanMode::Full
            } else {
                ScanMode::EarlyExit
            },
            log_level: match cli.verbose {
                0 => LevelFilter::Warn,
                1 => LevelFilter::Info,
                2 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            },
        }
    }
}

pub fn parse_args<I, T>(args: I) -> Result<Config, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args).map(Config::from)
}

fn parse_file_name(value: &str) -> Result<PathBuf, String> {
    validate::validate_file_name(value).map_err(|err| err.to_string())
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    validate::validate_date_now(value).map_err(|err| err.to_string())
}
