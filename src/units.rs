//! Unit helpers for slot durations.
//!
//! Wall-clock arithmetic happens in `chrono`, while durations handed to the
//! rest of the crate are `qtty` quantities. These helpers bridge the two and
//! allow conversions between units of the same dimension (seconds, minutes,
//! hours).

use chrono::TimeDelta;
use qtty::{Hour, Quantity, Second, Unit};

/// Marker trait for units that share the same physical dimension.
///
/// Automatically implemented for any pair of units where
/// `From::Dim == To::Dim`.
///
/// ```ignore
/// use qtty::{Hour, Minute};
/// use slotview::units::SameDim;
///
/// fn accepts_same_dim<From, To>()
/// where
///     From: SameDim<To>,
/// {}
///
/// accepts_same_dim::<Minute, Hour>(); // OK
/// ```
pub trait SameDim<To: Unit>: Unit<Dim = To::Dim> {}

impl<From, To> SameDim<To> for From
where
    From: Unit,
    To: Unit<Dim = From::Dim>,
{
}

/// Converts a quantity from one unit to another unit of the same dimension.
#[inline]
pub const fn convert<From, To>(q: Quantity<From>) -> Quantity<To>
where
    From: SameDim<To>,
    To: Unit,
{
    q.to_const::<To>()
}

/// Length of a `chrono` delta as an hour quantity, with sub-second precision.
pub fn delta_to_hours(delta: TimeDelta) -> Quantity<Hour> {
    let seconds = delta.num_milliseconds() as f64 / 1000.0;
    convert(Quantity::<Second>::new(seconds))
}

/// Inverse of [`delta_to_hours`], rounded to the nearest millisecond.
pub fn hours_to_delta(hours: Quantity<Hour>) -> TimeDelta {
    let seconds: Quantity<Second> = convert(hours);
    TimeDelta::milliseconds((seconds.value() * 1000.0).round() as i64)
}
