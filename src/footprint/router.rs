//! Routes copper traces between vertically adjacent pads in each column.

use std::collections::BTreeMap;

use super::{units, PadPosition, Point, Segment, SegmentClass};

/// Scale used to bucket x coordinates into columns (5 decimal places, mm).
///
/// The tolerance is load-bearing: without it, pads nominally in the same
/// column can be split into spurious singleton columns by rounding noise
/// from the inch-to-millimetre conversion.
const COLUMN_KEY_SCALE: f64 = 1e5;

/// Trace endpoint inset, in inches, so the stroke terminates inside the pad
/// body rather than at its exact centre.
const TRACE_END_INSET_IN: f64 = 0.001;

/// Emits one trace segment between each vertically adjacent pad pair in
/// every column.
///
/// Pads are grouped by x rounded to five decimal places; columns are
/// processed in ascending x order, pads within a column in ascending y
/// order. A column with fewer than two pads yields no segments, and an
/// empty input yields an empty vec.
///
/// `trace_width` must be positive; this precondition is documented rather
/// than checked.
#[must_use]
pub fn route(positions: &[PadPosition], trace_width: f64) -> Vec<Segment> {
    let mut columns: BTreeMap<i64, Vec<&PadPosition>> = BTreeMap::new();
    for pad in positions {
        columns.entry(column_key(pad.x)).or_default().push(pad);
    }

    let inset = units::in_to_mm(TRACE_END_INSET_IN);
    let mut traces = Vec::new();
    for pads in columns.values_mut() {
        pads.sort_by(|a, b| a.y.total_cmp(&b.y));
        for pair in pads.windows(2) {
            traces.push(Segment::new(
                Point::new(pair[0].x, pair[0].y + inset),
                Point::new(pair[1].x, pair[1].y - inset),
                trace_width,
                SegmentClass::Trace,
            ));
        }
    }
    traces
}

/// Maps an x coordinate to its column bucket.
#[allow(clippy::cast_possible_truncation)] // Footprint coordinates stay far below the i64 range
fn column_key(x: f64) -> i64 {
    (x * COLUMN_KEY_SCALE).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::footprint::{layout::layout, PadArrayParams};

    fn grid(pads_per_column: u32, column_count: u32) -> Vec<PadPosition> {
        layout(&PadArrayParams {
            pads_per_column,
            column_count,
            pitch_x: 1.0,
            pitch_y: 1.0,
            ..PadArrayParams::default()
        })
    }

    #[test]
    fn one_segment_per_adjacent_pair() {
        let traces = route(&grid(4, 3), 0.1);
        assert_eq!(traces.len(), 3 * (4 - 1));
        for trace in &traces {
            assert_eq!(trace.class, SegmentClass::Trace);
            assert!((trace.width - 0.1).abs() < 1e-12);
        }
    }

    #[test]
    fn two_columns_two_segments() {
        let traces = route(&grid(2, 2), 0.1);
        assert_eq!(traces.len(), 2);
        // One segment per column, left column first.
        assert!((traces[0].start.x - 0.0).abs() < 1e-12);
        assert!((traces[1].start.x - 1.0).abs() < 1e-12);
    }

    #[test]
    fn endpoints_are_inset_into_the_pads() {
        let traces = route(&grid(2, 1), 0.1);
        let inset = units::in_to_mm(0.001);
        assert_eq!(traces.len(), 1);
        assert!((traces[0].start.y - inset).abs() < 1e-12);
        assert!((traces[0].end.y - (1.0 - inset)).abs() < 1e-12);
    }

    #[test]
    fn rounding_noise_merges_into_one_column() {
        // 1e-6 apart: rounds to the same 5-decimal bucket.
        let positions = vec![
            PadPosition::new(1, 1.000_001, 0.0),
            PadPosition::new(2, 1.000_002, 1.0),
        ];
        assert_eq!(route(&positions, 0.1).len(), 1);
    }

    #[test]
    fn distinct_columns_stay_apart() {
        let positions = vec![
            PadPosition::new(1, 0.0, 0.0),
            PadPosition::new(2, 0.001, 1.0),
        ];
        assert!(route(&positions, 0.1).is_empty());
    }

    #[test]
    fn pads_are_connected_in_ascending_y_order() {
        let positions = vec![
            PadPosition::new(1, 0.0, 2.0),
            PadPosition::new(2, 0.0, 0.0),
            PadPosition::new(3, 0.0, 1.0),
        ];
        let traces = route(&positions, 0.1);
        assert_eq!(traces.len(), 2);
        assert!(traces[0].start.y < traces[0].end.y);
        assert!(traces[0].end.y < traces[1].end.y);
    }

    #[test]
    fn single_pad_and_empty_inputs_yield_nothing() {
        assert!(route(&grid(1, 3), 0.1).is_empty());
        assert!(route(&[], 0.1).is_empty());
    }
}
