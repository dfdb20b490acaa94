//! Turning partitions into renderable blocks.
//!
//! A calendar draws a slot as a stack of blocks, one per visible partition,
//! each as tall as its share of the slot. Free blocks additionally get a
//! wall-clock span so a reservation can be started from them.

use qtty::Quantity;

use crate::slot::{Slot, Span};
use crate::units::hours_to_delta;
use crate::window::ViewWindow;

/// One block of a rendered slot.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Height in percent of the rendered slot.
    pub height: f64,
    pub reserved: bool,
}

/// Blocks of `slot` as drawn inside `window`, top to bottom.
pub fn segments(slot: &Slot, window: &ViewWindow) -> Option<Vec<Segment>> {
    let partitions = window.clip(slot)?;
    Some(
        partitions
            .into_iter()
            .map(|p| Segment {
                height: p.size,
                reserved: p.reserved,
            })
            .collect(),
    )
}

/// Wall-clock spans of the free partitions of `slot`.
///
/// Computed from the unclipped partitions, so the spans cover the real
/// free time even where the view cuts the slot off. Span boundaries are kept
/// within the slot; free partitions that cover no time yield no span.
pub fn free_spans(slot: &Slot) -> Vec<Span> {
    let Some(partitions) = slot.partitions() else {
        return Vec::new();
    };

    let duration = slot.duration().value();
    let at = |fraction: f64| {
        let delta = hours_to_delta(Quantity::new(duration * fraction.clamp(0.0, 1.0)));
        slot.start()
            .checked_add_signed(delta)
            .unwrap_or(slot.end())
            .clamp(slot.start(), slot.end())
    };

    let mut spans = Vec::new();
    let mut offset = 0.0;
    for partition in partitions {
        let share = partition.size / 100.0;
        if !partition.reserved {
            let (start, end) = (at(offset), at(offset + share));
            if start < end {
                spans.push(Span::new(start, end));
            }
        }
        offset += share;
    }
    spans
}
