//! Export driver: lays plates out, feeds the drawing backend, hatches and saves.

use crate::config::ExportConfig;
use crate::errors::{ExportError, LayoutError};
use crate::float_types::Real;
use crate::io::DrawingBackend;
use crate::layout::{PlacedShape, layout_with};
use crate::rectangle::Rectangle;
use crate::sketch::Sketch;
use nalgebra::Point2;
use std::path::PathBuf;
use tracing::info;

#[cfg(feature = "dxf-io")]
use crate::io::dxf::DxfBackend;

/// Collects plates into one drawing.
///
/// Each call to [`ExportDriver::add_rectangle`] is independent: a plate that fails to
/// lay out is rejected before anything reaches the backend.
pub struct ExportDriver<B: DrawingBackend> {
    config: ExportConfig,
    backend: B,
    sketch: Sketch,
    rectangles: usize,
}

#[cfg(feature = "dxf-io")]
impl ExportDriver<DxfBackend> {
    /// Driver writing DXF files as described by `config`.
    pub fn new(config: ExportConfig) -> Result<Self, ExportError> {
        let backend = DxfBackend::new(&config);
        Self::with_backend(config, backend)
    }
}

impl<B: DrawingBackend> ExportDriver<B> {
    /// Fails with [`ExportError::Config`] if `config` does not validate.
    pub fn with_backend(config: ExportConfig, backend: B) -> Result<Self, ExportError> {
        config.validate()?;
        let sketch = Sketch::new(config.layout.circle_segments);
        Ok(Self {
            config,
            backend,
            sketch,
            rectangles: 0,
        })
    }

    pub const fn config(&self) -> &ExportConfig {
        &self.config
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Number of plates drawn so far.
    pub const fn rectangle_count(&self) -> usize {
        self.rectangles
    }

    /// Lays `rectangle` out with its bottom-left corner at `origin` and draws it.
    pub fn add_rectangle(
        &mut self,
        rectangle: &Rectangle,
        origin: Point2<Real>,
    ) -> Result<Vec<PlacedShape>, LayoutError> {
        let shapes = layout_with(rectangle, origin, &self.config.layout.options())?;
        for shape in &shapes {
            self.backend.draw(shape);
            self.sketch.push_shape(shape);
        }
        self.rectangles += 1;
        info!(
            width = rectangle.width(),
            height = rectangle.height(),
            holes = rectangle.holes().len(),
            x = origin.x,
            y = origin.y,
            "added rectangle"
        );
        Ok(shapes)
    }

    /// Hatches every closed shape drawn so far, then writes
    /// `<directory>/<name>.<extension>`.
    pub fn save(&mut self, name: &str) -> Result<PathBuf, ExportError> {
        if self.config.hatch.enabled {
            let lines = self
                .sketch
                .hatch(self.config.hatch.spacing, self.config.hatch.angle);
            self.backend.hatch(&lines);
            // hatched once; a second save must not overlay them again
            self.sketch.regions.clear();
        }

        let path = self.config.output_path(name);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        self.backend.save(&path)?;
        info!(path = %path.display(), rectangles = self.rectangles, "saved drawing");
        Ok(path)
    }
}
