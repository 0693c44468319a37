//! The polling loop: INIT, then POLLING until the deadline, then DONE.
//!
//! - **INIT**: note the start time, create the log file with its start
//!   marker, and compute `deadline = start + duration`.
//! - **POLLING**: while `now < deadline`, run one cycle (homepage, new
//!   articles, keyword filter, log append) and pause for the poll interval.
//! - **DONE**: write the end marker.
//!
//! The deadline is checked before each cycle, so a zero duration runs no
//! cycles at all. Fetch failures never stop the loop, and neither does a
//! failed log append; only failing to create the log file aborts the run.

use crate::dedup::SeenUrls;
use crate::fetcher::FetchHtml;
use crate::outputs::log_file::LogFile;
use crate::schedule::Schedule;
use crate::scrapers::cbsnews::{self, HOMEPAGE_URL};
use chrono::TimeDelta;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info, instrument};

/// Pause between the end of one cycle and the next deadline check.
pub const POLL_INTERVAL: Duration = Duration::from_secs(10 * 60);

/// Everything a run needs besides the fetcher and the clock.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub duration: TimeDelta,
    pub poll_interval: Duration,
    pub homepage_url: String,
    /// Directory the log file is created in.
    pub log_dir: PathBuf,
}

impl RunConfig {
    /// Production settings for a run of `duration`, logging to the working
    /// directory.
    pub fn new(duration: TimeDelta) -> Self {
        Self {
            duration,
            poll_interval: POLL_INTERVAL,
            homepage_url: HOMEPAGE_URL.to_string(),
            log_dir: PathBuf::from("."),
        }
    }
}

/// What a finished run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub log_path: PathBuf,
    pub cycles: usize,
    pub records_logged: usize,
}

#[instrument(level = "info", skip_all, fields(duration = %config.duration, homepage = %config.homepage_url))]
pub async fn run(
    config: &RunConfig,
    fetcher: &impl FetchHtml,
    schedule: &mut impl Schedule,
) -> io::Result<RunSummary> {
    // INIT
    let started = schedule.now();
    let deadline = started.checked_add_signed(config.duration).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("run duration {} is out of range", config.duration),
        )
    })?;
    let log = LogFile::create(&config.log_dir, &started).await?;
    let log_path = log.path().to_path_buf();
    let mut seen = SeenUrls::new();
    info!(path = %log_path.display(), %deadline, "Log started");

    // POLLING
    let mut cycles = 0usize;
    let mut records_logged = 0usize;
    while schedule.now() < deadline {
        cycles += 1;
        let news = cbsnews::fetch_news(fetcher, &config.homepage_url, &mut seen).await;
        match log.append_records(&news).await {
            Ok(written) => records_logged += written,
            Err(e) => error!(
                path = %log_path.display(),
                error = %e,
                "Failed to append records to log"
            ),
        }
        info!(
            cycle = cycles,
            matched = news.len(),
            seen = seen.len(),
            "Cycle complete"
        );
        schedule.pause(config.poll_interval).await;
    }

    // DONE
    let ended = schedule.now();
    if let Err(e) = log.finish(&ended).await {
        error!(path = %log_path.display(), error = %e, "Failed to write end marker");
    }
    info!(cycles, records_logged, "Log ended");

    Ok(RunSummary {
        log_path,
        cycles,
        records_logged,
    })
}
