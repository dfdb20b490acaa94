//! The hour range a calendar view renders.

use chrono::{NaiveTime, Timelike};
use qtty::{Hour, Quantity};
use thiserror::Error;

use crate::clip::adjust_partitions;
use crate::partition::Partition;
use crate::slot::Slot;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WindowError {
    #[error("Window hours must satisfy 0 <= min < max <= 24, got {min}..{max}")]
    InvalidRange { min: u32, max: u32 },

    #[error("Invalid slot time '{0}', expected HH:mm or HH:mm:ss")]
    InvalidTime(String),
}

/// Visible hours `[min_hour, max_hour]` of a day view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewWindow {
    min_hour: u32,
    max_hour: u32,
}

impl ViewWindow {
    pub fn new(min_hour: u32, max_hour: u32) -> Result<Self, WindowError> {
        if min_hour >= max_hour || max_hour > 24 {
            return Err(WindowError::InvalidRange {
                min: min_hour,
                max: max_hour,
            });
        }
        Ok(Self { min_hour, max_hour })
    }

    /// Builds a window from calendar slot times such as `"07:00:00"`.
    pub fn from_slot_times(min_time: &str, max_time: &str) -> Result<Self, WindowError> {
        Self::new(parse_slot_time(min_time)?, parse_slot_time(max_time)?)
    }

    pub const fn min_hour(&self) -> u32 {
        self.min_hour
    }

    pub const fn max_hour(&self) -> u32 {
        self.max_hour
    }

    pub fn hours(&self) -> Quantity<Hour> {
        Quantity::new(f64::from(self.max_hour - self.min_hour))
    }

    /// Returns true if `hour` lies within the rendered hours.
    pub const fn contains(&self, hour: u32) -> bool {
        self.min_hour <= hour && hour <= self.max_hour
    }

    /// Partitions of `slot` as they appear in this window.
    pub fn clip(&self, slot: &Slot) -> Option<Vec<Partition>> {
        adjust_partitions(slot, self.min_hour, self.max_hour)
    }
}

impl Default for ViewWindow {
    fn default() -> Self {
        Self {
            min_hour: 7,
            max_hour: 22,
        }
    }
}

/// Parses `HH:mm` or `HH:mm:ss` into its whole hour count.
///
/// Minutes and seconds are validated but dropped. `24:00:00` is accepted and
/// yields 24.
pub fn parse_slot_time(value: &str) -> Result<u32, WindowError> {
    let trimmed = value.trim();
    if matches!(trimmed, "24:00" | "24:00:00") {
        return Ok(24);
    }
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map(|time| time.hour())
        .map_err(|_| WindowError::InvalidTime(value.to_string()))
}
