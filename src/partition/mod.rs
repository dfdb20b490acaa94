//! Free/reserved partitions of a reservation slot.
//!
//! A slot's partitions are contiguous, chronologically ordered shares of the
//! slot. Each share is a percentage of the whole slot and the shares of an
//! unclipped slot add up to 100.

mod availability;
mod error;

pub use availability::availability_partitions;
pub use error::PartitionError;

/// Tolerance used when checking that partition sizes add up to 100.
pub const TOTAL_TOLERANCE: f64 = 0.01;

/// One contiguous share of a slot.
///
/// At the serialization boundary a partition is the pair `[size, reserved]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Partition {
    /// Share of the slot in percent.
    pub size: f64,
    /// Whether this share is already occupied.
    pub reserved: bool,
}

impl Partition {
    pub const fn new(size: f64, reserved: bool) -> Self {
        Self { size, reserved }
    }

    pub const fn free(size: f64) -> Self {
        Self::new(size, false)
    }

    pub const fn reserved(size: f64) -> Self {
        Self::new(size, true)
    }
}

impl From<(f64, bool)> for Partition {
    fn from((size, reserved): (f64, bool)) -> Self {
        Self { size, reserved }
    }
}

impl From<Partition> for (f64, bool) {
    fn from(partition: Partition) -> Self {
        (partition.size, partition.reserved)
    }
}

/// Sum of all partition sizes.
pub fn sum_partitions(partitions: &[Partition]) -> f64 {
    partitions.iter().map(|p| p.size).sum()
}

/// Rounds half away from zero to two decimal places.
///
/// The decimal point is shifted on the shortest decimal representation of
/// `value` rather than by multiplying, so `1.005` rounds to `1.01` even though
/// `1.005 * 100.0` is slightly below `100.5`.
///
/// Only meant for comparisons; sizes themselves keep full precision.
pub fn round_to_hundredths(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let shifted = format!("{value}e2")
        .parse::<f64>()
        .unwrap_or(value * 100.0)
        .round();
    format!("{shifted}e-2")
        .parse()
        .unwrap_or(shifted / 100.0)
}

/// Scales the sizes in place so they add up to 100.
///
/// Leaves the partitions untouched when their total is not positive.
pub fn renormalize(partitions: &mut [Partition]) {
    let total = sum_partitions(partitions);
    if total <= 0.0 {
        return;
    }
    for partition in partitions.iter_mut() {
        partition.size = partition.size / total * 100.0;
    }
}

/// Checks the invariants of an unclipped partition list: non-empty, strictly
/// positive sizes, total of 100 within [`TOTAL_TOLERANCE`].
pub fn validate_partitions(partitions: &[Partition]) -> Result<(), PartitionError> {
    if partitions.is_empty() {
        return Err(PartitionError::Empty);
    }
    if let Some((index, p)) = partitions
        .iter()
        .enumerate()
        .find(|(_, p)| p.size.is_nan() || p.size <= 0.0)
    {
        return Err(PartitionError::NonPositiveSize {
            index,
            size: p.size,
        });
    }
    let total = sum_partitions(partitions);
    if (total - 100.0).abs() > TOTAL_TOLERANCE {
        return Err(PartitionError::InvalidTotal(total));
    }
    Ok(())
}

// =============================================================================
// Partition Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Partition {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeTuple;
        let mut t = serializer.serialize_tuple(2)?;
        t.serialize_element(&self.size)?;
        t.serialize_element(&self.reserved)?;
        t.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Partition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = <(f64, bool)>::deserialize(deserializer)?;
        Ok(raw.into())
    }
}
