//! Orchestrates layout, routing, cut lines and outline into one plan.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::StyleConfig;
use crate::kicad;

use super::cutlines::{cut_lines_uniform, cut_lines_wrap};
use super::layout::layout;
use super::outline::outline;
use super::params::PadArrayParams;
use super::router::route;
use super::{CutPad, PadPosition, Segment, SegmentClass};

/// Complete derived geometry for one footprint generation run.
///
/// Everything a renderer needs: the pad positions, the derived trace and
/// outline segments, the cut pads, and the parameters that carry the pad
/// dimensions. All data is discarded after the run; nothing persists
/// between generations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FootprintPlan {
    /// The frozen parameters the plan was derived from.
    pub params: PadArrayParams,
    /// Pad centre positions, in emission order.
    pub pads: Vec<PadPosition>,
    /// Copper traces connecting pads within each column.
    pub traces: Vec<Segment>,
    /// Strip cut-line alignment pads.
    pub cut_pads: Vec<CutPad>,
    /// Board outline segments.
    pub outline: Vec<Segment>,
}

/// Sequences the derivation pipeline against one frozen parameter set.
#[derive(Debug, Clone)]
pub struct FootprintAssembler {
    name: String,
    params: PadArrayParams,
}

impl FootprintAssembler {
    /// Creates an assembler for the given footprint name and parameters.
    #[must_use]
    pub fn new(name: impl Into<String>, params: PadArrayParams) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    /// The footprint name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs layout, router, cut lines and outline, in that order.
    ///
    /// The pad list is computed once, in full, before any derivation runs,
    /// and is shared read-only with all of them. The wrap cut-line variant
    /// is selected when `cut_line_y_offset` is configured, the uniform
    /// variant otherwise; either variant still no-ops on its own disabled
    /// dimensions. An empty layout makes every derivation a no-op, never a
    /// fault.
    #[must_use]
    pub fn assemble(&self) -> FootprintPlan {
        let pads = layout(&self.params);
        let traces = route(&pads, self.params.trace_width);
        let cut_pads = if self.params.cut_line_y_offset > 0.0 {
            cut_lines_wrap(&pads, &self.params)
        } else {
            cut_lines_uniform(
                &pads,
                self.params.cut_pad_width,
                self.params.cut_pad_height,
                self.params.pitch_y,
                self.params.column_count,
            )
        };
        let outline = outline(&pads, self.params.clearance_x, self.params.clearance_y);

        info!(
            name = %self.name,
            pads = pads.len(),
            traces = traces.len(),
            cut_pads = cut_pads.len(),
            "assembled footprint plan"
        );

        FootprintPlan {
            params: self.params.clone(),
            pads,
            traces,
            cut_pads,
            outline,
        }
    }
}

impl FootprintPlan {
    /// Renders the plan into KiCad footprint primitives.
    ///
    /// Array pads and cut pads become SMT rectangles on `F.Cu`/`F.Mask`
    /// with the configured solder mask margin; trace segments become
    /// `F.Cu` lines and outline segments `Edge.Cuts` lines, each at its
    /// own stroke width.
    #[must_use]
    pub fn render(&self, name: &str, style: &StyleConfig) -> kicad::Footprint {
        let mut footprint = kicad::Footprint::new(name);
        footprint.description = format!("footprint for {name}");
        footprint.tags = format!("{} {name}", style.tag_prefix);

        for pad in &self.pads {
            footprint.add_pad(with_margin(
                kicad::Pad::smt_rect(
                    pad.number,
                    pad.x,
                    pad.y,
                    self.params.pad_width,
                    self.params.pad_height,
                ),
                style,
            ));
        }
        for cut in &self.cut_pads {
            footprint.add_pad(with_margin(
                kicad::Pad::smt_rect(cut.number, cut.x, cut.y, cut.width, cut.height),
                style,
            ));
        }
        for segment in self.traces.iter().chain(&self.outline) {
            footprint.add_line(kicad::Line::new(
                segment.start.x,
                segment.start.y,
                segment.end.x,
                segment.end.y,
                layer_for(segment.class),
                segment.width,
            ));
        }
        footprint
    }
}

/// Applies the style's solder mask margin unless it is zero.
fn with_margin(pad: kicad::Pad, style: &StyleConfig) -> kicad::Pad {
    if style.solder_mask_margin == 0.0 {
        pad
    } else {
        pad.with_solder_mask_margin(style.solder_mask_margin)
    }
}

/// KiCad layer a segment class renders on.
const fn layer_for(class: SegmentClass) -> kicad::Layer {
    match class {
        SegmentClass::Trace => kicad::Layer::FCu,
        SegmentClass::CutLine | SegmentClass::Outline => kicad::Layer::EdgeCuts,
    }
}
