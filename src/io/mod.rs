//! Drawing backends.
//!
//! The layout engine only produces [`PlacedShape`]s. A backend owns the output
//! document: it records primitives on its forms layer, hatch lines on its hatch layer,
//! and persists the result.

use crate::errors::ExportError;
use crate::float_types::Real;
use crate::layout::PlacedShape;
use geo::MultiLineString;
use std::path::Path;

#[cfg(feature = "dxf-io")]
pub mod dxf;

pub trait DrawingBackend {
    /// Records one primitive on the forms layer.
    fn draw(&mut self, shape: &PlacedShape);

    /// Records hatch overlay lines on the hatch layer.
    fn hatch(&mut self, lines: &MultiLineString<Real>);

    /// Writes the document to `path`.
    fn save(&mut self, path: &Path) -> Result<(), ExportError>;
}

/// Backend that only remembers what it was given. Useful for previews and tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    pub shapes: Vec<PlacedShape>,
    pub hatch_lines: Vec<MultiLineString<Real>>,
    pub saved_to: Vec<std::path::PathBuf>,
}

impl DrawingBackend for RecordingBackend {
    fn draw(&mut self, shape: &PlacedShape) {
        self.shapes.push(*shape);
    }

    fn hatch(&mut self, lines: &MultiLineString<Real>) {
        self.hatch_lines.push(lines.clone());
    }

    fn save(&mut self, path: &Path) -> Result<(), ExportError> {
        self.saved_to.push(path.to_path_buf());
        Ok(())
    }
}
