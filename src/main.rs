//! # cbsnews_watch
//!
//! Polls the CBS News homepage on a fixed interval, fetches every newly
//! listed article, and appends the ones that mention party keywords
//! ("Republican", "Democratic", "GOP", "Democrats") to a time-stamped
//! plain-text log in the working directory.
//!
//! ## Usage
//!
//! ```sh
//! cbsnews_watch --duration-hours 4
//! ```
//!
//! ## Architecture
//!
//! Each cycle is a strictly sequential pipeline:
//! 1. **Listing**: fetch the homepage and collect article links not seen yet
//! 2. **Details**: fetch each article page for byline and paragraph text
//! 3. **Filtering**: keep articles whose text contains at least one keyword
//! 4. **Output**: append the survivors to the run's log file
//!
//! Cycles repeat every ten minutes until the requested duration has elapsed.

use clap::Parser;
use std::error::Error;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod dedup;
mod fetcher;
mod keywords;
mod models;
mod outputs;
mod runner;
mod schedule;
mod scrapers;
mod utils;

use cli::Cli;
use fetcher::HttpFetcher;
use runner::RunConfig;
use schedule::SystemSchedule;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("cbsnews_watch starting up");

    let args = Cli::parse();
    info!(duration = %args.duration_hours, "Parsed CLI arguments");

    let config = RunConfig::new(args.duration_hours);
    let fetcher = HttpFetcher::new();
    let mut schedule = SystemSchedule;

    let summary = runner::run(&config, &fetcher, &mut schedule).await?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        cycles = summary.cycles,
        records_logged = summary.records_logged,
        log = %summary.log_path.display(),
        "Execution complete"
    );

    Ok(())
}
