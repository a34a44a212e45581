//! Pad array footprint computation.
//!
//! This module computes the geometry of a rectangular elastomeric-connector
//! pad array and derives everything a production footprint needs from it:
//!
//! - [`layout`] — pad centre positions for the parameterised array,
//!   optionally repeated across groups with configurable gaps
//! - [`router`] — copper trace segments connecting pads within a column
//! - [`cutlines`] — paired alignment pads marking strip/panel cut positions
//! - [`outline`] — a rectangular board outline with clearance
//! - [`assembler`] — sequences the above into one [`FootprintPlan`]
//!
//! All coordinates are in millimetres; conversion from the inch dimensions
//! on connector drawings happens once, in the [`PadArrayBuilder`] setters
//! (see [`units`]).
//!
//! # Example
//!
//! ```
//! use elastomer_footprints::footprint::{FootprintAssembler, PadArrayParams};
//!
//! let params = PadArrayParams::builder()
//!     .pads_per_column(10)
//!     .column_count(5)
//!     .pitch_x(0.008)
//!     .pitch_y(0.275)
//!     .pad_width(0.004)
//!     .pad_height(0.15)
//!     .trace_width(0.004)
//!     .build();
//!
//! let plan = FootprintAssembler::new("zfill-test", params).assemble();
//! assert_eq!(plan.pads.len(), 50);
//! ```

pub mod assembler;
pub mod cutlines;
pub mod layout;
pub mod outline;
pub mod params;
pub mod router;
pub mod units;

pub use assembler::{FootprintAssembler, FootprintPlan};
pub use params::{PadArrayBuilder, PadArrayParams};

use serde::{Deserialize, Serialize};

/// A 2D point in millimetres.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate (mm).
    pub x: f64,
    /// Y coordinate (mm).
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A single pad centre in the array.
///
/// Produced by [`layout::layout`] and shared read-only with every
/// downstream derivation; the sequence is append-only and numbers are
/// strictly increasing from 1 with no gaps or reuse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PadPosition {
    /// Pad designator.
    pub number: u32,
    /// Centre X coordinate (mm).
    pub x: f64,
    /// Centre Y coordinate (mm).
    pub y: f64,
}

impl PadPosition {
    /// Creates a new pad position.
    #[must_use]
    pub const fn new(number: u32, x: f64, y: f64) -> Self {
        Self { number, x, y }
    }
}

/// Stroke class of a derived segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentClass {
    /// Copper trace between pads in a column.
    Trace,
    /// Scribe line marking a cut position.
    CutLine,
    /// Board outline edge.
    Outline,
}

/// A straight stroke derived from the pad layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start point (mm).
    pub start: Point,
    /// End point (mm).
    pub end: Point,
    /// Stroke width (mm).
    pub width: f64,
    /// What the segment represents.
    pub class: SegmentClass,
}

impl Segment {
    /// Creates a new segment.
    #[must_use]
    pub const fn new(start: Point, end: Point, width: f64, class: SegmentClass) -> Self {
        Self {
            start,
            end,
            width,
            class,
        }
    }
}

/// An auxiliary alignment pad marking a strip or panel cut position.
///
/// Structurally a [`PadPosition`] with explicit dimensions; always emitted
/// in left/right pairs sharing one `y`, numbered continuing from the last
/// array pad.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutPad {
    /// Pad designator, continuing after the main array.
    pub number: u32,
    /// Centre X coordinate (mm).
    pub x: f64,
    /// Centre Y coordinate (mm).
    pub y: f64,
    /// Pad width (mm).
    pub width: f64,
    /// Pad height (mm).
    pub height: f64,
}

impl CutPad {
    /// Creates a new cut pad.
    #[must_use]
    pub const fn new(number: u32, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            number,
            x,
            y,
            width,
            height,
        }
    }
}
