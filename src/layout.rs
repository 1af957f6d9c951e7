//! Even-spacing placement of a plate's hole row.
//!
//! Spacing is uniform between hole *edges*, not centers. With
//!
//! ```text
//! free_span = width − 2·offset_from_side − Σ hole widths
//! gap       = free_span / (count − 1)
//! ```
//!
//! hole `i` is centered at
//!
//! ```text
//! x_i = start_x + offset_from_side + Σ_{j<i} width_j + width_i/2 + i·gap
//! y_i = start_y + offset_from_bottom + height_i/2
//! ```
//!
//! so the first hole touches the left side offset, the last hole touches the right one,
//! and holes of different sizes still get equal clearance between them.

use crate::errors::LayoutError;
use crate::float_types::Real;
use crate::hole::Hole;
use crate::rectangle::Rectangle;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A primitive handed to the drawing backend, in absolute drawing coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacedShape {
    /// Plate outline, counter-clockwise starting at the bottom-left corner.
    Outline { corners: [Point2<Real>; 4] },
    Circle { center: Point2<Real>, radius: Real },
    Line { start: Point2<Real>, end: Point2<Real> },
}

impl PlacedShape {
    /// Outlines and circles bound a region; lines do not.
    pub const fn is_closed(&self) -> bool {
        matches!(self, PlacedShape::Outline { .. } | PlacedShape::Circle { .. })
    }
}

/// Where one hole ended up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HolePlacement {
    pub hole: Hole,
    /// Bounding-box center; for a slot, the midpoint between its end circles.
    pub center: Point2<Real>,
}

impl HolePlacement {
    /// Left edge of the hole's bounding box.
    pub fn min_x(&self) -> Real {
        self.center.x - self.hole.width() / 2.0
    }

    /// Right edge of the hole's bounding box.
    pub fn max_x(&self) -> Real {
        self.center.x + self.hole.width() / 2.0
    }

    /// Primitives that draw this hole: one circle for a round hole; the two end circles
    /// (left, then right) and optionally the two tangent edges for a slot.
    pub fn shapes(&self, options: &LayoutOptions) -> Vec<PlacedShape> {
        match self.hole {
            Hole::Circle(circle) => vec![PlacedShape::Circle {
                center: self.center,
                radius: circle.radius(),
            }],
            Hole::Slot(slot) => {
                let (left, right) = slot.end_centers(self.center);
                let mut shapes = vec![
                    PlacedShape::Circle {
                        center: left,
                        radius: slot.radius(),
                    },
                    PlacedShape::Circle {
                        center: right,
                        radius: slot.radius(),
                    },
                ];
                if options.slot_edges && slot.length() > 0.0 {
                    shapes.extend(
                        slot.tangent_edges(self.center)
                            .into_iter()
                            .map(|(start, end)| PlacedShape::Line { start, end }),
                    );
                }
                shapes
            }
        }
    }
}

/// Knobs for turning placements into primitives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Join each slot's end circles with their two tangent edges. Without them a slot
    /// is drawn as two bare circles.
    pub slot_edges: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self { slot_edges: true }
    }
}

/// Edge-to-edge distance between neighbouring holes.
pub fn hole_gap(rectangle: &Rectangle) -> Result<Real, LayoutError> {
    // offsets may have been changed since the holes were attached
    rectangle.validate()?;
    let count = rectangle.holes().len();
    if count < 2 {
        return Err(LayoutError::InsufficientHoles { count });
    }
    Ok(rectangle.free_span() / (count - 1) as Real)
}

/// Computes the center of every attached hole with the rectangle's bottom-left corner
/// at `origin`.
pub fn place_holes(
    rectangle: &Rectangle,
    origin: Point2<Real>,
) -> Result<Vec<HolePlacement>, LayoutError> {
    let gap = hole_gap(rectangle)?;

    let mut cursor = origin.x + rectangle.offset_from_side();
    let baseline = origin.y + rectangle.offset_from_bottom();

    let placements = rectangle
        .holes()
        .iter()
        .enumerate()
        .map(|(i, hole)| {
            let center = Point2::new(cursor + hole.width() / 2.0, baseline + hole.height() / 2.0);
            debug!(i, x = center.x, y = center.y, "placed hole");
            cursor += hole.width() + gap;
            HolePlacement { hole: *hole, center }
        })
        .collect();

    Ok(placements)
}

/// Plate outline with its bottom-left corner at `origin`.
pub fn outline(rectangle: &Rectangle, origin: Point2<Real>) -> PlacedShape {
    let (w, h) = (rectangle.width(), rectangle.height());
    PlacedShape::Outline {
        corners: [
            origin,
            Point2::new(origin.x + w, origin.y),
            Point2::new(origin.x + w, origin.y + h),
            Point2::new(origin.x, origin.y + h),
        ],
    }
}

/// Lays out `rectangle` at `origin` with [`LayoutOptions::default`].
pub fn layout(
    rectangle: &Rectangle,
    origin: Point2<Real>,
) -> Result<Vec<PlacedShape>, LayoutError> {
    layout_with(rectangle, origin, &LayoutOptions::default())
}

/// The outline first, then every hole's primitives from left to right.
pub fn layout_with(
    rectangle: &Rectangle,
    origin: Point2<Real>,
    options: &LayoutOptions,
) -> Result<Vec<PlacedShape>, LayoutError> {
    let placements = place_holes(rectangle, origin)?;

    let mut shapes = Vec::with_capacity(1 + 4 * placements.len());
    shapes.push(outline(rectangle, origin));
    for placement in &placements {
        shapes.extend(placement.shapes(options));
    }
    Ok(shapes)
}
