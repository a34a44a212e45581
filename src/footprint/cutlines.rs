//! Strip cut-line alignment pads.
//!
//! Cut pads are paired markers placed just outside the left and right
//! extremes of the pad array, showing where a production strip or panel is
//! cut. Two placement cadences exist: uniform (one pair per column
//! position, stepped by the pad pitch) and wrap (stepped by the blank-fold
//! spacing of a wrapped flexible strip). The two variants are selected by
//! configuration and never both emitted for one footprint.

use super::params::PadArrayParams;
use super::{CutPad, PadPosition};

/// Emits cut-pad pairs at uniform vertical pitch.
///
/// Pairs start at `y = 0` and step by `pitch_y`; `column_count` pairs are
/// emitted, numbered continuing from the last array pad with two numbers
/// per pair (left, then right).
///
/// Returns an empty vec when `positions` is empty or either cut dimension
/// is zero (cut lines disabled).
#[must_use]
pub fn cut_lines_uniform(
    positions: &[PadPosition],
    cut_pad_width: f64,
    cut_pad_height: f64,
    pitch_y: f64,
    column_count: u32,
) -> Vec<CutPad> {
    if positions.is_empty() || cut_pad_width == 0.0 || cut_pad_height == 0.0 {
        return Vec::new();
    }

    let (left_x, right_x) = pair_extremes(positions, cut_pad_width);
    let mut number = next_number(positions);
    let mut y = 0.0;

    let mut pads = Vec::with_capacity(2 * column_count as usize);
    for _ in 0..column_count {
        pads.push(CutPad::new(number, left_x, y, cut_pad_width, cut_pad_height));
        pads.push(CutPad::new(
            number + 1,
            right_x,
            y,
            cut_pad_width,
            cut_pad_height,
        ));
        y += pitch_y;
        number += 2;
    }
    pads
}

/// Emits cut-pad pairs following the wrap cadence.
///
/// The first pair is centred just outside the top edge of the first pad,
/// pushed out by the configured offset; subsequent pairs step by
/// `blank_size` (the folded-strip spacing), not the pad pitch.
/// `column_count / 2 + 1` pairs are emitted, numbered continuing from the
/// last array pad.
///
/// Returns an empty vec when `positions` is empty or any of
/// `cut_line_y_offset`, `cut_pad_width`, `cut_pad_height` is zero.
#[must_use]
pub fn cut_lines_wrap(positions: &[PadPosition], params: &PadArrayParams) -> Vec<CutPad> {
    if positions.is_empty()
        || params.cut_line_y_offset == 0.0
        || params.cut_pad_width == 0.0
        || params.cut_pad_height == 0.0
    {
        return Vec::new();
    }

    let (left_x, right_x) = pair_extremes(positions, params.cut_pad_width);
    let mut number = next_number(positions);

    // Walk up to the top edge of the first pad, then out by the offset
    // measured to the cut-pad centre.
    let mut y = -(params.pad_height / 2.0) - (params.cut_pad_height / 2.0);
    y -= params.cut_line_y_offset - params.cut_pad_height / 2.0;

    let pairs = params.column_count / 2 + 1;
    let mut pads = Vec::with_capacity(2 * pairs as usize);
    for _ in 0..pairs {
        pads.push(CutPad::new(
            number,
            left_x,
            y,
            params.cut_pad_width,
            params.cut_pad_height,
        ));
        pads.push(CutPad::new(
            number + 1,
            right_x,
            y,
            params.cut_pad_width,
            params.cut_pad_height,
        ));
        y += params.blank_size;
        number += 2;
    }
    pads
}

/// Left/right cut-pad centres: the pad-array x extremes pushed outward by
/// one cut-pad width.
fn pair_extremes(positions: &[PadPosition], cut_pad_width: f64) -> (f64, f64) {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    for pad in positions {
        min_x = min_x.min(pad.x);
        max_x = max_x.max(pad.x);
    }
    (min_x - cut_pad_width, max_x + cut_pad_width)
}

/// First free designator after the main array.
fn next_number(positions: &[PadPosition]) -> u32 {
    positions.iter().map(|p| p.number).max().unwrap_or(0) + 1
}
