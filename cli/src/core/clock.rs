//! # Packup Clock
//!
//! File: cli/src/core/clock.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Archive names embed the time of the build at one-second resolution.
//! The time source is passed into the builder as a `Clock` so that tests can
//! pin it with `FixedClock` instead of racing the wall clock.
//!
use chrono::{Local, NaiveDateTime};

/// Format used for the timestamp portion of archive names (`20251110_142233`).
pub const ARCHIVE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// A source of "now" in local time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the local wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Builds `<prefix>_<YYYYMMDD_HHMMSS>.zip` from the clock's current time.
pub fn archive_file_name(prefix: &str, clock: &dyn Clock) -> String {
    format!(
        "{}_{}.zip",
        prefix,
        clock.now().format(ARCHIVE_TIMESTAMP_FORMAT)
    )
}
