//! elastomer-footprints: KiCad footprint generator for elastomeric pad arrays
//!
//! This library computes the geometry of rectangular elastomeric-connector
//! pad arrays (zebra strips, wrapped FPC panels) and writes them out as
//! KiCad footprint files, replacing manual footprint editing with a
//! deterministic, dimensionally exact generation pass.
//!
//! # Architecture
//!
//! One generation run is a pure computation followed by a single write:
//!
//! - **Pad array core**: lay out pad positions (with group repetition and
//!   blank-fold spacing), route traces within each column, place strip
//!   cut-line pads, and derive a clearance outline
//! - **KiCad emission**: collect the resulting shapes into a footprint
//!   and persist it as a `.kicad_mod` file
//!
//! Dimensions enter in inches (the unit on connector drawings) and are
//! converted to millimetres exactly once, inside the parameter builder.
//!
//! # Modules
//!
//! - [`config`] — Configuration file loading and validation
//! - [`error`] — Error types
//! - [`footprint`] — Pad array layout and derivation core
//! - [`kicad`] — KiCad footprint primitives and the `.kicad_mod` writer

pub mod config;
pub mod error;
pub mod footprint;
pub mod kicad;
