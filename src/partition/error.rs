use thiserror::Error;

/// Errors raised when building or validating a partition list.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PartitionError {
    #[error("Partition list is empty")]
    Empty,

    #[error("Partition {index} has a non-positive size: {size}")]
    NonPositiveSize { index: usize, size: f64 },

    #[error("Partition sizes add up to {0}, expected 100")]
    InvalidTotal(f64),

    #[error("Allocation must end after it starts")]
    EmptyAllocation,
}
