//! The flat plate and its hole row.

use crate::errors::{FitViolationKind, LayoutError};
use crate::float_types::Real;
use crate::hole::Hole;
use tracing::debug;

/// A flat plate with a single horizontal row of holes.
///
/// `offset_from_side` is the clearance between each side edge and the nearest hole
/// *edge* (not its center). `offset_from_bottom` is the clearance between the bottom
/// edge and the lower edge of every hole.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    width: Real,
    height: Real,
    thickness: Real,
    offset_from_side: Real,
    offset_from_bottom: Real,
    holes: Vec<Hole>,
    holes_total_width: Real,
}

impl Rectangle {
    /// A plate of `width` × `height`, thickness 1, zero offsets and no holes.
    pub const fn new(width: Real, height: Real) -> Self {
        Self {
            width,
            height,
            thickness: 1.0,
            offset_from_side: 0.0,
            offset_from_bottom: 0.0,
            holes: Vec::new(),
            holes_total_width: 0.0,
        }
    }

    pub fn with_thickness(mut self, thickness: Real) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn with_offsets(mut self, offset_from_side: Real, offset_from_bottom: Real) -> Self {
        self.offset_from_side = offset_from_side;
        self.offset_from_bottom = offset_from_bottom;
        self
    }

    /// Offsets are only checked when holes are attached, so set them before
    /// calling [`Rectangle::add_holes`].
    pub const fn set_offset_from_side(&mut self, offset: Real) {
        self.offset_from_side = offset;
    }

    pub const fn set_offset_from_bottom(&mut self, offset: Real) {
        self.offset_from_bottom = offset;
    }

    pub const fn width(&self) -> Real {
        self.width
    }

    pub const fn height(&self) -> Real {
        self.height
    }

    pub const fn thickness(&self) -> Real {
        self.thickness
    }

    pub const fn offset_from_side(&self) -> Real {
        self.offset_from_side
    }

    pub const fn offset_from_bottom(&self) -> Real {
        self.offset_from_bottom
    }

    /// Attached holes, left to right.
    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }

    /// Sum of the widths of every attached hole.
    pub const fn holes_total_width(&self) -> Real {
        self.holes_total_width
    }

    /// Width left over for the gaps between holes once both side offsets and every hole
    /// width are taken out.
    pub fn free_span(&self) -> Real {
        self.width - 2.0 * self.offset_from_side - self.holes_total_width
    }

    /// Rejects dimensions that cannot describe a plate.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let lengths = [("width", self.width), ("height", self.height)];
        for (name, value) in lengths {
            if !(value.is_finite() && value > 0.0) {
                return Err(LayoutError::InvalidDimension { name, value });
            }
        }
        let offsets = [
            ("offset_from_side", self.offset_from_side),
            ("offset_from_bottom", self.offset_from_bottom),
        ];
        for (name, value) in offsets {
            if !(value.is_finite() && value >= 0.0) {
                return Err(LayoutError::InvalidDimension { name, value });
            }
        }
        Ok(())
    }

    /// Appends `holes` in order, re-checking the fit after every single hole.
    ///
    /// The first hole that breaks either invariant stops the batch:
    /// - `width > 2·offset_from_side + holes_total_width`
    /// - `height >= offset_from_bottom + hole.height`
    ///
    /// The plate itself is checked first: width and height must be finite and positive,
    /// both offsets finite and non-negative.
    ///
    /// On error the rectangle is left exactly as it was before the call.
    pub fn add_holes<I>(&mut self, holes: I) -> Result<(), LayoutError>
    where
        I: IntoIterator,
        I::Item: Into<Hole>,
    {
        self.validate()?;

        let mut staged = self.holes.clone();
        let mut total = self.holes_total_width;

        for hole in holes {
            let hole = hole.into();
            let index = staged.len();
            total += hole.width();

            let required = 2.0 * self.offset_from_side + total;
            if !(self.width > required) {
                return Err(LayoutError::FitViolation {
                    index,
                    reason: FitViolationKind::Horizontal {
                        required,
                        available: self.width,
                    },
                });
            }

            let required = self.offset_from_bottom + hole.height();
            if !(self.height >= required) {
                return Err(LayoutError::FitViolation {
                    index,
                    reason: FitViolationKind::Vertical {
                        required,
                        available: self.height,
                    },
                });
            }

            debug!(index, width = hole.width(), height = hole.height(), "attached hole");
            staged.push(hole);
        }

        self.holes = staged;
        self.holes_total_width = total;
        Ok(())
    }
}

/// By-value form of [`Rectangle::add_holes`].
pub fn attach_holes<I>(mut rectangle: Rectangle, holes: I) -> Result<Rectangle, LayoutError>
where
    I: IntoIterator,
    I::Item: Into<Hole>,
{
    rectangle.add_holes(holes)?;
    Ok(rectangle)
}
