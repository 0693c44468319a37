//! Command-line interface definitions for cbsnews_watch.
//!
//! The only knob is how long to keep polling. Diagnostic verbosity is
//! controlled separately through `RUST_LOG`.

use chrono::TimeDelta;
use clap::Parser;

/// Command-line arguments for cbsnews_watch.
///
/// # Examples
///
/// ```sh
/// # Poll for the default four hours
/// cbsnews_watch
///
/// # Poll for ninety minutes
/// cbsnews_watch --duration-hours 1.5
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// How long to keep polling, in hours (fractions allowed)
    #[arg(short, long = "duration-hours", value_name = "HOURS", default_value = "4", value_parser = parse_duration_hours)]
    pub duration_hours: TimeDelta,
}

fn parse_duration_hours(s: &str) -> Result<TimeDelta, String> {
    let hours: f64 = s
        .trim()
        .parse()
        .map_err(|e| format!("`{s}` is not a number of hours: {e}"))?;
    if !hours.is_finite() || hours < 0.0 {
        return Err(format!("duration must be a non-negative number of hours, got `{s}`"));
    }
    let millis = hours * 3_600_000.0;
    if millis > i64::MAX as f64 {
        return Err(format!("duration of {s} hours is too long"));
    }
    TimeDelta::try_milliseconds(millis.round() as i64)
        .ok_or_else(|| format!("duration of {s} hours is too long"))
}
