//! Test suite for partition clipping.

use super::*;
use crate::partition::sum_partitions;
use crate::window::ViewWindow;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

fn hour(h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2015, 8, 28)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        + TimeDelta::hours(i64::from(h))
}

/// Slot from `start` to `end` o'clock on the same day; 24 means midnight.
fn slot(start: u32, end: u32, partitions: &[(f64, bool)]) -> Slot {
    Slot::new(hour(start), hour(end))
        .unwrap()
        .with_partitions_unchecked(partitions.iter().map(|&p| p.into()).collect())
}

fn sizes(partitions: &[Partition]) -> Vec<f64> {
    partitions.iter().map(|p| p.size).collect()
}

fn flags(partitions: &[Partition]) -> Vec<bool> {
    partitions.iter().map(|p| p.reserved).collect()
}

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 0.01, "{actual:?} vs {expected:?}");
    }
}

#[cfg(test)]
mod short_circuits {
    use super::*;

    #[test]
    fn test_missing_partitions_yield_none() {
        let slot = Slot::new(hour(6), hour(10)).unwrap();
        assert_eq!(adjust_partitions(&slot, 7, 22), None);
    }

    #[test]
    fn test_fully_visible_is_unchanged() {
        let slot = slot(8, 10, &[(50.0, false), (50.0, true)]);
        let result = adjust_partitions(&slot, 7, 22).unwrap();
        assert_eq!(result, vec![Partition::free(50.0), Partition::reserved(50.0)]);
    }

    #[test]
    fn test_exactly_on_window_edges_is_unchanged() {
        let slot = slot(7, 22, &[(30.0, true), (70.0, false)]);
        let result = adjust_partitions(&slot, 7, 22).unwrap();
        assert_eq!(result.as_slice(), slot.partitions().unwrap());
    }

    #[test]
    fn test_single_partition_is_unchanged_outside_window() {
        let slot = slot(5, 24, &[(100.0, true)]);
        let result = adjust_partitions(&slot, 7, 22).unwrap();
        assert_eq!(result, vec![Partition::reserved(100.0)]);
    }

    #[test]
    fn test_malformed_single_partition_passes_through() {
        let slot = slot(5, 9, &[(40.0, false)]);
        let result = adjust_partitions(&slot, 7, 22).unwrap();
        assert_eq!(result, vec![Partition::free(40.0)]);
    }
}

#[cfg(test)]
mod clipping {
    use super::*;

    #[test]
    fn test_top_clip_consumes_whole_partition() {
        let slot = slot(6, 10, &[(25.0, false), (75.0, true)]);
        let result = adjust_partitions(&slot, 7, 22).unwrap();
        assert_eq!(result, vec![Partition::reserved(100.0)]);
    }

    #[test]
    fn test_top_clip_trims_partition() {
        let slot = slot(6, 10, &[(50.0, false), (50.0, true)]);
        let result = adjust_partitions(&slot, 7, 22).unwrap();
        assert_eq!(flags(&result), vec![false, true]);
        assert_close(&sizes(&result), &[33.33, 66.67]);
    }

    #[test]
    fn test_bottom_clip_trims_last_partition() {
        let slot = slot(8, 23, &[(80.0, false), (20.0, true)]);
        let result = adjust_partitions(&slot, 7, 22).unwrap();
        assert_eq!(flags(&result), vec![false, true]);
        assert_close(&sizes(&result), &[85.71, 14.29]);
    }

    #[test]
    fn test_clip_both_edges() {
        let slot = slot(
            6,
            23,
            &[(10.0, false), (30.0, true), (40.0, false), (20.0, true)],
        );
        let result = adjust_partitions(&slot, 7, 22).unwrap();
        assert_eq!(flags(&result), vec![false, true, false, true]);

        let hidden = 100.0 / 17.0;
        let total = 100.0 - 2.0 * hidden;
        assert_close(
            &sizes(&result),
            &[
                (10.0 - hidden) / total * 100.0,
                30.0 / total * 100.0,
                40.0 / total * 100.0,
                (20.0 - hidden) / total * 100.0,
            ],
        );
        assert!((sum_partitions(&result) - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_midnight_end_clips_bottom() {
        let slot = slot(20, 24, &[(25.0, true), (25.0, false), (50.0, true)]);
        assert_eq!(slot.end_hour(), 24);
        let result = adjust_partitions(&slot, 7, 22).unwrap();
        assert_eq!(result, vec![Partition::reserved(50.0), Partition::free(50.0)]);
    }

    #[test]
    fn test_whole_partitions_removed_keep_ratio() {
        let slot = slot(
            4,
            12,
            &[(10.0, false), (15.0, true), (30.0, false), (45.0, true)],
        );
        let result = adjust_partitions(&slot, 6, 22).unwrap();
        assert_eq!(flags(&result), vec![false, true]);
        assert_close(&sizes(&result), &[40.0, 60.0]);
        assert!((result[1].size / result[0].size - 45.0 / 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_slot_outside_window_is_empty() {
        let slot = slot(6, 8, &[(50.0, false), (50.0, true)]);
        let result = adjust_partitions(&slot, 10, 22).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_input_is_not_modified() {
        let slot = slot(6, 10, &[(50.0, false), (50.0, true)]);
        let before = slot.clone();
        let _ = adjust_partitions(&slot, 7, 22);
        assert_eq!(slot, before);
    }

    #[test]
    fn test_view_window_forwards() {
        let slot = slot(6, 10, &[(25.0, false), (75.0, true)]);
        let window = ViewWindow::default();
        assert_eq!(window.clip(&slot), adjust_partitions(&slot, 7, 22));
        assert_eq!(slot.adjusted_partitions(&window), window.clip(&slot));
    }
}

#[cfg(test)]
mod margin_removal {
    use super::*;

    #[test]
    fn test_zero_margin_is_identity() {
        let partitions = vec![Partition::free(50.0), Partition::reserved(50.0)];
        assert_eq!(
            remove_margin_from_partitions(partitions.clone(), 0.0),
            partitions
        );
    }

    #[test]
    fn test_subtraction_keeps_full_precision() {
        let partitions = vec![Partition::free(50.0), Partition::reserved(50.0)];
        let result = remove_margin_from_partitions(partitions, 6.666666);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].size, 50.0 - 6.666666);
        assert_eq!(result[1].size, 50.0);
    }

    #[test]
    fn test_near_equal_sizes_compare_equal() {
        let partitions = vec![Partition::free(19.999999999), Partition::reserved(80.0)];
        let result = remove_margin_from_partitions(partitions, 20.0);
        assert_eq!(result, vec![Partition::reserved(80.0)]);
    }

    #[test]
    fn test_margin_spanning_several_partitions() {
        let partitions = vec![
            Partition::free(10.0),
            Partition::reserved(10.0),
            Partition::free(80.0),
        ];
        let result = remove_margin_from_partitions(partitions, 25.0);
        assert_eq!(result.len(), 1);
        assert!(!result[0].reserved);
        assert!((result[0].size - 75.0).abs() < 1e-12);
    }

    #[test]
    fn test_margin_larger_than_everything() {
        let partitions = vec![Partition::free(30.0), Partition::reserved(20.0)];
        assert!(remove_margin_from_partitions(partitions, 120.0).is_empty());
    }

    #[test]
    fn test_margin_on_boundary_drops_absorbing_partition() {
        let partitions = vec![Partition::free(25.0), Partition::reserved(75.0)];
        let result = remove_margin_from_partitions(partitions, 25.0);
        assert_eq!(result, vec![Partition::reserved(75.0)]);
        assert!(result.iter().all(|p| p.size > 0.0));
    }

    #[test]
    fn test_tiny_overshoot_is_absorbed() {
        let partitions = vec![
            Partition::free(10.0),
            Partition::reserved(5.0),
            Partition::free(85.0),
        ];
        let result = remove_margin_from_partitions(partitions, 10.001);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0], Partition::reserved(5.0));
        assert_eq!(result[1], Partition::free(85.0));
    }
}

#[cfg(test)]
mod properties {
    use super::*;

    const PARTITIONS: [(f64, bool); 4] = [(20.0, false), (30.0, true), (10.0, false), (40.0, true)];

    fn every_slot_and_window() -> impl Iterator<Item = (u32, u32, u32, u32)> {
        (0..24).flat_map(|start| {
            (start + 1..=24).flat_map(move |end| {
                (0..24).flat_map(move |min| (min + 1..=24).map(move |max| (start, end, min, max)))
            })
        })
    }

    #[test]
    fn test_visible_slots_are_unchanged() {
        for (start, end, min, max) in every_slot_and_window() {
            if min <= start && end <= max {
                let slot = slot(start, end, &PARTITIONS);
                let result = adjust_partitions(&slot, min, max).unwrap();
                assert_eq!(result.as_slice(), slot.partitions().unwrap());
            }
        }
    }

    #[test]
    fn test_clipped_sizes_sum_to_100() {
        for (start, end, min, max) in every_slot_and_window() {
            let slot = slot(start, end, &PARTITIONS);
            let result = adjust_partitions(&slot, min, max).unwrap();
            if !result.is_empty() {
                let total = sum_partitions(&result);
                assert!(
                    (total - 100.0).abs() < 0.01,
                    "{start}-{end} in {min}-{max}: {total}"
                );
            }
        }
    }

    #[test]
    fn test_order_is_preserved() {
        let input = flags(&PARTITIONS.map(Partition::from));
        for (start, end, min, max) in every_slot_and_window() {
            let slot = slot(start, end, &PARTITIONS);
            let output = flags(&adjust_partitions(&slot, min, max).unwrap());
            if !output.is_empty() {
                assert!(
                    input.windows(output.len()).any(|w| w == output.as_slice()),
                    "{start}-{end} in {min}-{max}: {output:?}"
                );
            }
        }
    }

    #[test]
    fn test_single_partition_never_changes() {
        for (start, end, min, max) in every_slot_and_window() {
            let slot = slot(start, end, &[(100.0, false)]);
            let result = adjust_partitions(&slot, min, max).unwrap();
            assert_eq!(result, vec![Partition::free(100.0)]);
        }
    }
}
