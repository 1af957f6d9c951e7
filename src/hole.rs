//! Hole shapes cut into a plate.
//!
//! Every hole exposes the axis-aligned bounding box it occupies on the plate through
//! [`Hole::width`] and [`Hole::height`]. The layout engine only ever reasons about
//! those two numbers; the shape itself only matters again when it is drawn.

use crate::errors::LayoutError;
use crate::float_types::Real;
use nalgebra::{Point2, Vector2};

fn check_positive(name: &'static str, value: Real) -> Result<Real, LayoutError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(LayoutError::InvalidDimension { name, value })
    }
}

/// A round hole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: Real,
}

impl Circle {
    /// Creates a circular hole. `radius` must be finite and positive.
    pub fn new(radius: Real) -> Result<Self, LayoutError> {
        Ok(Self {
            radius: check_positive("radius", radius)?,
        })
    }

    pub const fn radius(&self) -> Real {
        self.radius
    }

    pub fn width(&self) -> Real {
        2.0 * self.radius
    }

    pub fn height(&self) -> Real {
        2.0 * self.radius
    }
}

/// An elongated hole: two end circles of `radius` whose centers are `length` apart,
/// tilted by `angle` degrees.
///
/// A positive angle lowers the right end: relative to the slot midpoint the end
/// centers sit at `∓(length/2)·(cos θ, −sin θ)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    radius: Real,
    length: Real,
    angle: Real,
}

impl Slot {
    /// Creates a slot. `radius` must be positive, `length` non-negative (a zero-length
    /// slot degenerates to a circle), `angle` is in degrees.
    pub fn new(radius: Real, length: Real, angle: Real) -> Result<Self, LayoutError> {
        let radius = check_positive("radius", radius)?;
        if !length.is_finite() || length < 0.0 {
            return Err(LayoutError::InvalidDimension {
                name: "length",
                value: length,
            });
        }
        if !angle.is_finite() {
            return Err(LayoutError::InvalidDimension {
                name: "angle",
                value: angle,
            });
        }
        Ok(Self {
            radius,
            length,
            angle,
        })
    }

    pub const fn radius(&self) -> Real {
        self.radius
    }

    /// Center-to-center distance between the two end circles.
    pub const fn length(&self) -> Real {
        self.length
    }

    /// Tilt in degrees.
    pub const fn angle(&self) -> Real {
        self.angle
    }

    pub fn angle_radians(&self) -> Real {
        self.angle.to_radians()
    }

    /// Offset from the slot midpoint to its right end center. The left end sits at the
    /// negated offset.
    pub fn half_axis(&self) -> Vector2<Real> {
        let theta = self.angle_radians();
        let half = self.length / 2.0;
        Vector2::new(half * theta.cos(), -half * theta.sin())
    }

    /// Unit normal of the slot axis, pointing to the upper side for angles in (-90°, 90°).
    pub fn axis_normal(&self) -> Vector2<Real> {
        let theta = self.angle_radians();
        Vector2::new(theta.sin(), theta.cos())
    }

    /// End circle centers `(left, right)` for a slot whose midpoint is `center`.
    pub fn end_centers(&self, center: Point2<Real>) -> (Point2<Real>, Point2<Real>) {
        let half = self.half_axis();
        (center - half, center + half)
    }

    /// The two straight edges tangent to both end circles, as `(start, end)` pairs.
    pub fn tangent_edges(
        &self,
        center: Point2<Real>,
    ) -> [(Point2<Real>, Point2<Real>); 2] {
        let (left, right) = self.end_centers(center);
        let n = self.axis_normal() * self.radius;
        [(left + n, right + n), (left - n, right - n)]
    }

    /// Bounding-box width: both end-circle centers spread `length·|cos θ|` apart, plus
    /// one radius on either side.
    pub fn width(&self) -> Real {
        2.0 * self.half_axis().x.abs() + 2.0 * self.radius
    }

    /// Bounding-box height, `length·|sin θ| + 2·radius`.
    pub fn height(&self) -> Real {
        2.0 * self.half_axis().y.abs() + 2.0 * self.radius
    }
}

/// Any hole the layout engine can place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hole {
    Circle(Circle),
    Slot(Slot),
}

impl Hole {
    /// Shorthand for `Hole::Circle(Circle::new(radius)?)`.
    pub fn circle(radius: Real) -> Result<Self, LayoutError> {
        Circle::new(radius).map(Hole::Circle)
    }

    /// Shorthand for `Hole::Slot(Slot::new(radius, length, angle)?)`.
    pub fn slot(radius: Real, length: Real, angle: Real) -> Result<Self, LayoutError> {
        Slot::new(radius, length, angle).map(Hole::Slot)
    }

    pub fn width(&self) -> Real {
        match self {
            Hole::Circle(circle) => circle.width(),
            Hole::Slot(slot) => slot.width(),
        }
    }

    pub fn height(&self) -> Real {
        match self {
            Hole::Circle(circle) => circle.height(),
            Hole::Slot(slot) => slot.height(),
        }
    }

    /// Radius of the circle(s) that make up the hole.
    pub const fn radius(&self) -> Real {
        match self {
            Hole::Circle(circle) => circle.radius(),
            Hole::Slot(slot) => slot.radius(),
        }
    }
}

impl From<Circle> for Hole {
    fn from(circle: Circle) -> Self {
        Hole::Circle(circle)
    }
}

impl From<Slot> for Hole {
    fn from(slot: Slot) -> Self {
        Hole::Slot(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_slot_is_as_wide_as_its_length_plus_diameter() {
        let slot = Slot::new(5.0, 10.0, 0.0).unwrap();
        assert!((slot.width() - 20.0).abs() < 1e-9);
        assert!((slot.height() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn vertical_slot_swaps_extents() {
        let slot = Slot::new(5.0, 10.0, 90.0).unwrap();
        assert!((slot.width() - 10.0).abs() < 1e-9);
        assert!((slot.height() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_non_positive_radius() {
        assert!(matches!(
            Circle::new(0.0),
            Err(LayoutError::InvalidDimension { name: "radius", .. })
        ));
        assert!(Slot::new(-1.0, 10.0, 0.0).is_err());
        assert!(Slot::new(1.0, -10.0, 0.0).is_err());
        assert!(Circle::new(Real::NAN).is_err());
    }
}
