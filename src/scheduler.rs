use std::time::Duration;

use chrono::{NaiveDateTime, NaiveTime};

use crate::error::{AppError, Result};

/// Fixed daily trigger checked by a coarse polling loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    run_at: NaiveTime,
    poll_interval: Duration,
}

impl Schedule {
    pub fn new(run_at: NaiveTime, poll_interval: Duration) -> Self {
        Self {
            run_at,
            poll_interval,
        }
    }

    pub fn parse(run_at: &str, poll_interval: Duration) -> Result<Self> {
        let run_at = NaiveTime::parse_from_str(run_at.trim(), "%H:%M")
            .map_err(|e| AppError::Config(format!("invalid run_at {:?}: {}", run_at, e)))?;
        if poll_interval.is_zero() {
            return Err(AppError::Config("poll interval must be positive".to_string()));
        }
        Ok(Self::new(run_at, poll_interval))
    }

    pub fn run_at(&self) -> NaiveTime {
        self.run_at
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// True once the wall clock has reached the trigger time for the day.
    pub fn is_due(&self, now: NaiveDateTime) -> bool {
        now.time() >= self.run_at
    }
}
