//! Rectangular board outline derived from the pad extents.

use super::{PadPosition, Point, Segment, SegmentClass};

/// Stroke width for outline segments (mm), matching the KiCad `Edge.Cuts`
/// convention.
const OUTLINE_LINE_WIDTH: f64 = 0.15;

/// Emits the four edges of the pad bounding box grown by the clearances.
///
/// The box is `[min(x) - clearance_x, max(x) + clearance_x]` by
/// `[min(y) - clearance_y, max(y) + clearance_y]`, drawn in a fixed winding
/// order (bottom-left, bottom-right, top-right, top-left, closed): each
/// segment's end is the next segment's start. An empty input yields an
/// empty vec.
#[must_use]
pub fn outline(positions: &[PadPosition], clearance_x: f64, clearance_y: f64) -> Vec<Segment> {
    if positions.is_empty() {
        return Vec::new();
    }

    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for pad in positions {
        min_x = min_x.min(pad.x);
        max_x = max_x.max(pad.x);
        min_y = min_y.min(pad.y);
        max_y = max_y.max(pad.y);
    }
    min_x -= clearance_x;
    max_x += clearance_x;
    min_y -= clearance_y;
    max_y += clearance_y;

    let corners = [
        Point::new(min_x, min_y),
        Point::new(max_x, min_y),
        Point::new(max_x, max_y),
        Point::new(min_x, max_y),
    ];
    (0..corners.len())
        .map(|i| {
            Segment::new(
                corners[i],
                corners[(i + 1) % corners.len()],
                OUTLINE_LINE_WIDTH,
                SegmentClass::Outline,
            )
        })
        .collect()
}
