//! Command-line interface definition.

use std::path::PathBuf;
use std::str::FromStr;

use agenda_core::{day_end, local_midnight};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use clap::{Parser, Subcommand};

/// agenda - appointments and weekly busy time from your calendar
#[derive(Debug, Parser)]
#[command(name = "agenda")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "AGENDA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Calendar to query (overrides the configured one)
    #[arg(long, global = true)]
    pub calendar: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List calendars, hidden ones included
    Calendars,

    /// List appointments (today by default)
    Appointments {
        /// Start of the range: YYYY-MM-DD or an RFC 3339 timestamp
        #[arg(long)]
        from: Option<DateArg>,

        /// End of the range: YYYY-MM-DD (end of that day) or an RFC 3339 timestamp
        #[arg(long)]
        to: Option<DateArg>,
    },

    /// Show busy hours for seven days (starting today by default)
    Busy {
        /// First day of the report: YYYY-MM-DD or an RFC 3339 timestamp
        #[arg(long)]
        from: Option<DateArg>,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration
    Dump,

    /// Validate configuration
    Validate,

    /// Show configuration file path
    Path,
}

/// A date or timestamp given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateArg {
    /// A whole local day.
    Day(NaiveDate),
    /// An exact instant.
    Instant(DateTime<Utc>),
}

impl DateArg {
    /// The first instant this argument denotes.
    pub fn start_in<Tz: TimeZone>(&self, tz: &Tz) -> DateTime<Utc> {
        match self {
            Self::Day(date) => local_midnight(tz, *date),
            Self::Instant(instant) => *instant,
        }
    }

    /// The last instant this argument denotes: the end of a day, or the
    /// instant itself.
    pub fn end_in<Tz: TimeZone>(&self, tz: &Tz) -> DateTime<Utc> {
        match self {
            Self::Day(date) => day_end(tz, local_midnight(tz, *date)),
            Self::Instant(instant) => *instant,
        }
    }
}

impl FromStr for DateArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(Self::Day(date));
        }
        DateTime::parse_from_rfc3339(s)
            .map(|dt| Self::Instant(dt.with_timezone(&Utc)))
            .map_err(|_| format!("expected YYYY-MM-DD or an RFC 3339 timestamp, got {:?}", s))
    }
}
