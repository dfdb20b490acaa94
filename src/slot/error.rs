use chrono::NaiveDateTime;
use thiserror::Error;

use crate::partition::PartitionError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SlotError {
    #[error("Slot must end after it starts (start {start}, end {end})")]
    EmptySpan {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("Invalid partitions: {0}")]
    Partitions(#[from] PartitionError),
}
