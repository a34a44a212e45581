//! KiCad footprint emission.
//!
//! This module is the boundary between the geometry core and the CAD file
//! format: a [`Footprint`] collects primitives append-only (the shape
//! sink), and [`Footprint::save_in`] persists the collection as a
//! `.kicad_mod` file (the writer). The core never assumes a write
//! succeeded and performs no retry; a failed write leaves no valid partial
//! file from the caller's point of view.

mod error;
pub mod primitives;
mod writer;

pub use error::{KicadError, KicadResult};
pub use primitives::{Layer, Line, Pad};
pub use writer::encode_footprint;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

/// A complete KiCad footprint module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    /// Footprint name (also the output file stem).
    pub name: String,

    /// Description shown in the KiCad footprint browser.
    #[serde(default)]
    pub description: String,

    /// Search tags.
    #[serde(default)]
    pub tags: String,

    /// Pads in the footprint.
    #[serde(default)]
    pub pads: Vec<Pad>,

    /// Graphic lines in the footprint.
    #[serde(default)]
    pub lines: Vec<Line>,
}

impl Footprint {
    /// Creates a new empty footprint with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Adds a pad to the footprint.
    pub fn add_pad(&mut self, pad: Pad) {
        self.pads.push(pad);
    }

    /// Adds a line to the footprint.
    pub fn add_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Writes the footprint to `<dir>/<name>.kicad_mod` and returns the
    /// written path.
    ///
    /// # Errors
    ///
    /// Returns [`KicadError::InvalidParameter`] when the footprint name is
    /// empty, or [`KicadError::FileWrite`] when the file cannot be written.
    pub fn save_in(&self, dir: &Path) -> KicadResult<PathBuf> {
        if self.name.is_empty() {
            return Err(KicadError::invalid_parameter(
                "name",
                "footprint name must not be empty",
            ));
        }

        let path = dir.join(format!("{}.kicad_mod", self.name));
        let contents = writer::encode_footprint(self);
        std::fs::write(&path, contents).map_err(|e| KicadError::file_write(&path, e))?;

        info!(
            path = %path.display(),
            pads = self.pads.len(),
            lines = self.lines.len(),
            "Wrote footprint"
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes_append_in_order() {
        let mut footprint = Footprint::new("t");
        footprint.add_pad(Pad::smt_rect(1, 0.0, 0.0, 1.0, 1.0));
        footprint.add_pad(Pad::smt_rect(2, 1.0, 0.0, 1.0, 1.0));
        footprint.add_line(Line::new(0.0, 0.0, 1.0, 0.0, Layer::FCu, 0.1));
        assert_eq!(footprint.pads.len(), 2);
        assert_eq!(footprint.pads[0].number, 1);
        assert_eq!(footprint.pads[1].number, 2);
        assert_eq!(footprint.lines.len(), 1);
    }

    #[test]
    fn save_rejects_empty_name() {
        let footprint = Footprint::new("");
        let err = footprint.save_in(Path::new(".")).unwrap_err();
        assert!(matches!(err, KicadError::InvalidParameter { .. }));
    }
}
