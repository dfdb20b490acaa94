//! Clipping a slot's partitions to the visible hours of a view.
//!
//! Partitions describe the whole slot. When a view renders only
//! `[min_hour, max_hour]` and the slot sticks out at the top or bottom, the
//! hidden percentage is trimmed off the front and back of the partition list
//! and the remainder is scaled back up to 100%.

use crate::partition::{renormalize, round_to_hundredths, sum_partitions, Partition};
use crate::slot::Slot;

#[cfg(test)]
mod tests;

/// Partitions of `slot` as they appear in a view showing `min_hour..max_hour`.
///
/// Returns `None` when the slot has no partitions. The slot's own partitions
/// are never modified; the result is always a fresh copy.
///
/// - If the slot fits the window, or it has at most one partition, the copy
///   is returned unchanged.
/// - Otherwise the share of the slot before `min_hour` is removed from the
///   front, the share after `max_hour` from the back, and the surviving sizes
///   are scaled to add up to 100. If nothing survives the result is empty.
///
/// Hours are whole hours of day; a slot ending at midnight ends at hour 24.
/// The slot must end after it starts on that scale.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use slotview::{adjust_partitions, Partition, Slot};
///
/// let day = NaiveDate::from_ymd_opt(2015, 8, 28).unwrap();
/// let slot = Slot::new(
///     day.and_hms_opt(6, 0, 0).unwrap(),
///     day.and_hms_opt(10, 0, 0).unwrap(),
/// )
/// .unwrap()
/// .with_partitions(vec![Partition::free(25.0), Partition::reserved(75.0)])
/// .unwrap();
///
/// let visible = adjust_partitions(&slot, 7, 22).unwrap();
/// assert_eq!(visible, vec![Partition::reserved(100.0)]);
/// ```
pub fn adjust_partitions(slot: &Slot, min_hour: u32, max_hour: u32) -> Option<Vec<Partition>> {
    let mut partitions = slot.partitions()?.to_vec();

    let start_hour = slot.start_hour();
    let end_hour = slot.end_hour();

    if min_hour <= start_hour && end_hour <= max_hour {
        return Some(partitions);
    }

    // a single homogeneous partition looks the same however it's cut
    if partitions.len() <= 1 {
        return Some(partitions);
    }

    let duration = f64::from(end_hour) - f64::from(start_hour);
    let percent_per_hour = 100.0 / duration;

    let top_margin = if start_hour < min_hour {
        f64::from(min_hour - start_hour) * percent_per_hour
    } else {
        0.0
    };
    let bottom_margin = if end_hour > max_hour {
        f64::from(end_hour - max_hour) * percent_per_hour
    } else {
        0.0
    };

    tracing::debug!(
        slot = slot.id(),
        start_hour,
        end_hour,
        min_hour,
        max_hour,
        top_margin,
        bottom_margin,
        "clipping partitions"
    );

    partitions = remove_margin_from_partitions(partitions, top_margin);
    partitions.reverse();
    partitions = remove_margin_from_partitions(partitions, bottom_margin);
    partitions.reverse();

    if sum_partitions(&partitions) <= 0.0 {
        tracing::warn!(slot = slot.id(), "clipping removed every partition");
        return Some(Vec::new());
    }

    renormalize(&mut partitions);
    Some(partitions)
}

/// Removes `margin` percent from the front of `partitions`.
///
/// Leading partitions smaller than the remaining margin are dropped whole.
/// The first partition at least as large as what remains absorbs it and the
/// scan stops there. Sizes are compared rounded to two decimals, but the
/// subtraction itself keeps full precision.
///
/// A partition that absorbs the margin and is left with 0.00 is dropped
/// instead of being kept as a zero-size entry, so every returned size stays
/// positive. A margin that ends exactly on a partition boundary therefore
/// removes that partition entirely: `[25 free, 75 reserved]` minus 25 is
/// `[75 reserved]`, not `[0 free, 75 reserved]`.
pub fn remove_margin_from_partitions(partitions: Vec<Partition>, margin: f64) -> Vec<Partition> {
    if margin == 0.0 {
        return partitions;
    }

    let mut remaining = margin;
    let mut removed = 0.0;
    let mut kept = Vec::with_capacity(partitions.len());
    let mut rest = partitions.into_iter();

    for partition in rest.by_ref() {
        if round_to_hundredths(partition.size) >= round_to_hundredths(remaining) {
            let size = partition.size - remaining;
            if round_to_hundredths(size) > 0.0 {
                kept.push(Partition { size, ..partition });
            }
            break;
        }

        removed += partition.size;
        remaining -= partition.size;
        tracing::trace!(size = partition.size, remaining, "dropped partition");

        if removed >= margin {
            break;
        }
    }

    kept.extend(rest);
    kept
}
