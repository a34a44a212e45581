//! Footprint primitive types emitted into `.kicad_mod` files.
//!
//! Only the primitives this generator needs are modelled: SMT rectangular
//! pads and straight graphic lines on the standard front-side and board
//! outline layers.

use serde::{Deserialize, Serialize};

/// A KiCad layer a primitive can sit on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    /// Front copper.
    FCu,
    /// Front solder mask.
    FMask,
    /// Front silkscreen.
    FSilkS,
    /// Front fabrication drawing.
    FFab,
    /// Board outline.
    EdgeCuts,
}

impl Layer {
    /// The layer name as written in KiCad files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FCu => "F.Cu",
            Self::FMask => "F.Mask",
            Self::FSilkS => "F.SilkS",
            Self::FFab => "F.Fab",
            Self::EdgeCuts => "Edge.Cuts",
        }
    }
}

/// An SMT rectangular pad.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pad {
    /// Pad designator.
    pub number: u32,

    /// Centre X position in mm (from footprint origin).
    pub x: f64,

    /// Centre Y position in mm (from footprint origin).
    pub y: f64,

    /// Pad width in mm.
    pub width: f64,

    /// Pad height in mm.
    pub height: f64,

    /// Layers the pad participates in.
    pub layers: Vec<Layer>,

    /// Solder mask margin in mm. None uses design rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solder_mask_margin: Option<f64>,
}

impl Pad {
    /// Creates a front-side SMT rectangular pad on `F.Cu`/`F.Mask`.
    #[must_use]
    pub fn smt_rect(number: u32, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            number,
            x,
            y,
            width,
            height,
            layers: vec![Layer::FCu, Layer::FMask],
            solder_mask_margin: None,
        }
    }

    /// Sets the solder mask margin.
    #[must_use]
    pub fn with_solder_mask_margin(mut self, margin: f64) -> Self {
        self.solder_mask_margin = Some(margin);
        self
    }
}

/// A straight graphic line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Start X in mm.
    pub x1: f64,
    /// Start Y in mm.
    pub y1: f64,
    /// End X in mm.
    pub x2: f64,
    /// End Y in mm.
    pub y2: f64,
    /// Layer the line is drawn on.
    pub layer: Layer,
    /// Stroke width in mm.
    pub width: f64,
}

impl Line {
    /// Creates a new line.
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, layer: Layer, width: f64) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            layer,
            width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_names_match_kicad() {
        assert_eq!(Layer::FCu.name(), "F.Cu");
        assert_eq!(Layer::FMask.name(), "F.Mask");
        assert_eq!(Layer::EdgeCuts.name(), "Edge.Cuts");
    }

    #[test]
    fn smt_rect_defaults() {
        let pad = Pad::smt_rect(3, 1.0, 2.0, 0.5, 3.5);
        assert_eq!(pad.layers, vec![Layer::FCu, Layer::FMask]);
        assert!(pad.solder_mask_margin.is_none());
    }

    #[test]
    fn solder_mask_margin_is_opt_in() {
        let pad = Pad::smt_rect(1, 0.0, 0.0, 1.0, 1.0).with_solder_mask_margin(0.25);
        assert_eq!(pad.solder_mask_margin, Some(0.25));
    }
}
