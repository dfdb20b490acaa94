//! Reservation slots and wall-clock spans.

use std::fmt::Display;

use chrono::{NaiveDateTime, TimeDelta, Timelike};
use qtty::{Hour, Quantity};

use crate::partition::{validate_partitions, Partition};
use crate::units::delta_to_hours;
use crate::window::ViewWindow;
use crate::{generate_id, Id};

mod error;
pub use error::SlotError;

/// Wall-clock range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl Span {
    /// Creates span `[start, end)`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        assert!(start <= end, "Span start must be <= end");
        Self { start, end }
    }

    pub const fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub const fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Returns the non-empty overlap of both spans, if any.
    pub fn intersection(&self, other: &Span) -> Option<Span> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then(|| Span::new(start, end))
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// A reservation slot as rendered by a calendar view.
///
/// `partitions` is `None` when the slot carries no occupancy information, in
/// which case nothing is clipped or rendered per partition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot {
    id: Id,
    start: NaiveDateTime,
    end: NaiveDateTime,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    partitions: Option<Vec<Partition>>,
}

impl Slot {
    /// Creates a slot with a generated id and no partitions.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, SlotError> {
        if end <= start {
            return Err(SlotError::EmptySpan { start, end });
        }
        Ok(Self {
            id: generate_id(),
            start,
            end,
            partitions: None,
        })
    }

    pub fn with_id(mut self, id: impl Into<Id>) -> Self {
        self.id = id.into();
        self
    }

    /// Attaches partitions after checking they are non-empty, positive and
    /// add up to 100.
    pub fn with_partitions(self, partitions: Vec<Partition>) -> Result<Self, SlotError> {
        validate_partitions(&partitions)?;
        Ok(self.with_partitions_unchecked(partitions))
    }

    /// Attaches partitions as given.
    pub fn with_partitions_unchecked(mut self, partitions: Vec<Partition>) -> Self {
        self.partitions = Some(partitions);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub const fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub const fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    pub fn partitions(&self) -> Option<&[Partition]> {
        self.partitions.as_deref()
    }

    pub fn duration(&self) -> Quantity<Hour> {
        delta_to_hours(self.end - self.start)
    }

    /// Hour of day the slot starts at.
    pub fn start_hour(&self) -> u32 {
        self.start.hour()
    }

    /// Hour of day the slot ends at, with midnight counted as hour 24 of the
    /// starting day.
    pub fn end_hour(&self) -> u32 {
        match self.end.hour() {
            0 => 24,
            hour => hour,
        }
    }

    /// Partitions as they appear inside `window`.
    pub fn adjusted_partitions(&self, window: &ViewWindow) -> Option<Vec<Partition>> {
        window.clip(self)
    }
}
