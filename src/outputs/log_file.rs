//! Append-only plain-text log of matching articles.
//!
//! One file per run, named after the run start time and created fresh in the
//! target directory. Layout:
//!
//! ```text
//! Log started at 2024-05-06 14:30:05.123456
//! --------------------------------------------------------
//! Title: Senate passes budget
//! Author: Jane Doe
//! Summary: Vote split along party lines
//! URL: https://www.cbsnews.com/news/senate-budget/
//! Found Keywords: Republican, Democrats
//! --------------------------------------------------------
//! Log ended at 2024-05-06 18:30:07.654321
//! ```
//!
//! The file is reopened in append mode for every batch, so each batch is
//! visible on disk as soon as the call returns.

use crate::models::ArticleSummary;
use crate::utils::{log_file_name, marker_timestamp};
use chrono::{DateTime, TimeZone};
use itertools::Itertools;
use std::fmt::{Display, Write as _};
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{info, instrument, warn};

const DELIMITER: &str = "--------------------------------------------------------";

/// Render one record block, including both delimiter lines.
pub fn format_record(article: &ArticleSummary) -> String {
    let mut block = String::new();
    writeln!(block, "{DELIMITER}").unwrap();
    writeln!(block, "Title: {}", article.title).unwrap();
    writeln!(block, "Author: {}", article.author).unwrap();
    writeln!(block, "Summary: {}", article.summary).unwrap();
    writeln!(block, "URL: {}", article.url).unwrap();
    writeln!(
        block,
        "Found Keywords: {}",
        article.matched_keywords.iter().join(", ")
    )
    .unwrap();
    writeln!(block, "{DELIMITER}").unwrap();
    block
}

/// Handle to the run's log file.
#[derive(Debug)]
pub struct LogFile {
    path: PathBuf,
}

impl LogFile {
    /// Create (or truncate) the log file for a run starting at `start` inside
    /// `dir`, and write the start marker.
    #[instrument(level = "info", skip_all, fields(dir = %dir.display()))]
    pub async fn create<Tz>(dir: &Path, start: &DateTime<Tz>) -> io::Result<Self>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let path = dir.join(log_file_name(start));
        let marker = format!("Log started at {}\n", marker_timestamp(start));
        fs::write(&path, marker).await?;
        info!(path = %path.display(), "Created log file");
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append every record that has at least one matched keyword. Returns the
    /// number of records written; an empty batch does not touch the file.
    #[instrument(level = "info", skip_all, fields(path = %self.path.display()))]
    pub async fn append_records(&self, records: &[ArticleSummary]) -> io::Result<usize> {
        let mut text = String::new();
        let mut written = 0usize;
        for record in records {
            if !record.has_matches() {
                warn!(url = %record.url, "Refusing to log article without keyword matches");
                continue;
            }
            text.push_str(&format_record(record));
            written += 1;
        }
        if written == 0 {
            return Ok(0);
        }

        self.append(&text).await?;
        info!(records = written, "Appended records to log");
        Ok(written)
    }

    /// Write the end marker. The handle is consumed; the path is returned.
    #[instrument(level = "info", skip_all, fields(path = %self.path.display()))]
    pub async fn finish<Tz>(self, end: &DateTime<Tz>) -> io::Result<PathBuf>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        self.append(&format!("Log ended at {}\n", marker_timestamp(end)))
            .await?;
        Ok(self.path)
    }

    async fn append(&self, text: &str) -> io::Result<()> {
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(text.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}
