//! Building partitions from an allocation and its reservations.

use super::{round_to_hundredths, sum_partitions, Partition, PartitionError};
use crate::slot::Span;

/// Splits `allocation` into ordered free and reserved blocks.
///
/// Each block's size is its share of the allocation in percent, rounded to
/// two decimals; the last block takes whatever remains so the sizes add up to
/// exactly 100. Blocks too short to show up at that precision are left out,
/// so every size is positive. Reservations are clipped to the allocation, and
/// overlapping or touching reservations are merged into a single reserved
/// block.
///
/// An allocation of 08:00-09:00 with a reservation of 08:15-08:30 yields
/// `[(25, free), (25, reserved), (50, free)]`.
pub fn availability_partitions(
    allocation: Span,
    reserved: &[Span],
) -> Result<Vec<Partition>, PartitionError> {
    if allocation.end() <= allocation.start() {
        return Err(PartitionError::EmptyAllocation);
    }

    let mut clipped: Vec<Span> = reserved
        .iter()
        .filter_map(|span| span.intersection(&allocation))
        .collect();
    clipped.sort_by_key(|span| span.start());

    let mut merged: Vec<Span> = Vec::with_capacity(clipped.len());
    for span in clipped {
        if let Some(last) = merged.last_mut() {
            if last.end() >= span.start() {
                if span.end() > last.end() {
                    *last = Span::new(last.start(), span.end());
                }
                continue;
            }
        }
        merged.push(span);
    }

    let mut blocks = Vec::with_capacity(merged.len() * 2 + 1);
    let mut cursor = allocation.start();
    for span in &merged {
        if span.start() > cursor {
            blocks.push((Span::new(cursor, span.start()), false));
        }
        blocks.push((*span, true));
        cursor = span.end();
    }
    if cursor < allocation.end() {
        blocks.push((Span::new(cursor, allocation.end()), false));
    }

    let total = allocation.duration().num_milliseconds() as f64;
    let longest = blocks
        .iter()
        .enumerate()
        .max_by_key(|(_, (block, _))| block.duration())
        .map_or(0, |(index, _)| index);
    let mut partitions: Vec<Partition> = Vec::with_capacity(blocks.len());

    for (index, (block, is_reserved)) in blocks.into_iter().enumerate() {
        let size =
            round_to_hundredths(block.duration().num_milliseconds() as f64 / total * 100.0);
        if size <= 0.0 && index != longest {
            continue;
        }
        match partitions.last_mut() {
            Some(last) if last.reserved == is_reserved => last.size += size,
            _ => partitions.push(Partition::new(size, is_reserved)),
        }
    }

    // the last block absorbs the rounding remainder, unless nothing is left for it
    while let Some(last) = partitions.pop() {
        let rest = round_to_hundredths(100.0 - sum_partitions(&partitions));
        if rest > 0.0 {
            partitions.push(Partition { size: rest, ..last });
            break;
        }
    }

    tracing::trace!(
        reservations = reserved.len(),
        blocks = partitions.len(),
        "built availability partitions"
    );

    Ok(partitions)
}
