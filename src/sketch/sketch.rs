use crate::float_types::Real;
use crate::layout::PlacedShape;
use crate::sketch::{hatch::hatch_lines, shapes};
use geo::{Area, MultiLineString, Polygon as GeoPolygon};
use tracing::warn;

/// The fillable regions of a drawing: one polygon per closed primitive.
///
/// Regions are kept separate rather than merged, so a hole drawn inside a plate gets an
/// overlay of its own on top of the plate's.
#[derive(Clone, Debug, Default)]
pub struct Sketch {
    pub regions: Vec<GeoPolygon<Real>>,
    circle_segments: usize,
}

impl Sketch {
    pub const fn new(circle_segments: usize) -> Self {
        Self {
            regions: Vec::new(),
            circle_segments,
        }
    }

    pub fn from_shapes<'a>(
        shapes: impl IntoIterator<Item = &'a PlacedShape>,
        circle_segments: usize,
    ) -> Self {
        let mut sketch = Self::new(circle_segments);
        for shape in shapes {
            sketch.push_shape(shape);
        }
        sketch
    }

    /// Adds the region bounded by `shape`. Open shapes are ignored.
    pub fn push_shape(&mut self, shape: &PlacedShape) {
        let region = match shape {
            PlacedShape::Outline { corners } => Some(shapes::quad(corners)),
            PlacedShape::Circle { center, radius } => {
                shapes::circle(*center, *radius, self.circle_segments)
            },
            PlacedShape::Line { .. } => return,
        };
        match region {
            Some(region) if region.unsigned_area() > 0.0 => self.regions.push(region),
            _ => warn!(?shape, "skipping degenerate region"),
        }
    }

    /// Hatch lines for every region, `spacing` apart at `angle_degrees`.
    pub fn hatch(&self, spacing: Real, angle_degrees: Real) -> MultiLineString<Real> {
        let lines = self
            .regions
            .iter()
            .flat_map(|region| hatch_lines(region, spacing, angle_degrees).0)
            .collect();
        MultiLineString::new(lines)
    }
}
