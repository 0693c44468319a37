//! Clock and pause source for the polling loop.
//!
//! The run loop never calls `Local::now()` or `sleep` directly; it goes
//! through [`Schedule`] so tests can drive a multi-hour run on a virtual clock.

use chrono::{DateTime, Local};
use std::time::Duration;
use tracing::debug;

pub trait Schedule {
    /// Current wall-clock time.
    fn now(&self) -> DateTime<Local>;

    /// Suspend the caller for `period`.
    async fn pause(&mut self, period: Duration);
}

/// Real time: `chrono::Local` for the clock, `tokio::time::sleep` for pauses.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSchedule;

impl Schedule for SystemSchedule {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }

    async fn pause(&mut self, period: Duration) {
        debug!(?period, "Sleeping until next cycle");
        tokio::time::sleep(period).await;
    }
}

/// Virtual clock that only moves when paused or advanced by hand.
#[cfg(test)]
#[derive(Debug)]
pub(crate) struct ManualSchedule {
    now: DateTime<Local>,
    pub pauses: Vec<Duration>,
}

#[cfg(test)]
impl ManualSchedule {
    pub fn starting_at(now: DateTime<Local>) -> Self {
        Self {
            now,
            pauses: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Schedule for ManualSchedule {
    fn now(&self) -> DateTime<Local> {
        self.now
    }

    async fn pause(&mut self, period: Duration) {
        self.pauses.push(period);
        self.now += chrono::TimeDelta::from_std(period).unwrap();
    }
}
