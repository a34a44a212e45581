//! Pad array layout engine.
//!
//! Produces the ordered pad-position list that every downstream derivation
//! (router, cut lines, outline) consumes read-only.

use tracing::debug;

use super::params::PadArrayParams;
use super::PadPosition;

/// Computes every pad centre for the configured array.
///
/// The cursor starts at the origin and pad numbering at 1. For each group
/// the cursor first advances in x by the group-gap rule (see
/// [`group_gap_advance`]), then columns are laid out left to right: each
/// column stacks `pads_per_column` pads bottom to top, after which y resets
/// to zero and x advances by one column pitch.
///
/// Vertical advance within a column is `pitch_y`, except when `blank_size`
/// is configured: then every second pad in emission order sits on the
/// folded blank region of the strip and advances by `blank_size - pitch_y`
/// instead. The alternation state carries across column and group
/// boundaries.
///
/// A zero `pads_per_column` or `column_count` yields an empty sequence.
/// A zero `group_gap` with more than one group produces overlapping groups;
/// that is a caller error and is not validated here.
#[must_use]
pub fn layout(params: &PadArrayParams) -> Vec<PadPosition> {
    let groups = params.effective_groups();
    let blank_step = params.blank_size - params.pitch_y;

    let mut pads = Vec::with_capacity(params.pad_count() as usize);
    let mut number = 1_u32;
    let mut x = 0.0;
    let mut y = 0.0;
    let mut on_blank = false;

    for group in 0..groups {
        x += group_gap_advance(group, params);
        for _ in 0..params.column_count {
            for _ in 0..params.pads_per_column {
                pads.push(PadPosition::new(number, x, y));
                number += 1;
                if params.blank_size == 0.0 {
                    y += params.pitch_y;
                } else if on_blank {
                    y += blank_step;
                    on_blank = false;
                } else {
                    y += params.pitch_y;
                    on_blank = true;
                }
            }
            x += params.pitch_x;
            y = 0.0;
        }
    }

    debug!(pads = pads.len(), groups, "laid out pad array");
    pads
}

/// X advance applied before laying out a group.
///
/// The first group moves by the full gap; every subsequent group subtracts
/// one column pitch to compensate the trailing pitch advance left by the
/// previous group's last column, so consecutive groups end up separated by
/// exactly `group_gap`.
fn group_gap_advance(group: u32, params: &PadArrayParams) -> f64 {
    if group == 0 {
        params.group_gap
    } else {
        params.group_gap - params.pitch_x
    }
}
