//! Bent frame profiles and their flat patterns.
//!
//! A frame is measured leg by leg to the outer corner. Unbending it into a single
//! plate loses a little length at each bend; that correction is the bend allowance.
//!
//! All angles are in degrees.

use crate::float_types::{RIGHT_ANGLE_DEG, Real, approx_eq};
use crate::rectangle::Rectangle;
use serde::{Deserialize, Serialize};
use tracing::debug;

const fn default_thickness() -> Real {
    1.0
}

/// An L-shaped bracket: one horizontal and one vertical leg joined by a single bend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LFrame {
    pub width: Real,
    pub horizontal_length: Real,
    pub vertical_length: Real,
    /// Bend angle in degrees.
    pub angle: Real,
    #[serde(default = "default_thickness")]
    pub thickness: Real,
}

impl LFrame {
    pub const fn new(
        width: Real,
        horizontal_length: Real,
        vertical_length: Real,
        angle: Real,
    ) -> Self {
        Self {
            width,
            horizontal_length,
            vertical_length,
            angle,
            thickness: default_thickness(),
        }
    }

    pub const fn with_thickness(mut self, thickness: Real) -> Self {
        self.thickness = thickness;
        self
    }
}

/// A U-shaped bracket: a horizontal base with a vertical leg bent up at each end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UFrame {
    pub width: Real,
    pub horizontal_length: Real,
    pub vertical_length_left: Real,
    pub vertical_length_right: Real,
    /// Left bend angle in degrees.
    pub angle_left: Real,
    /// Right bend angle in degrees.
    pub angle_right: Real,
    #[serde(default = "default_thickness")]
    pub thickness: Real,
}

impl UFrame {
    pub const fn new(
        width: Real,
        horizontal_length: Real,
        vertical_length_left: Real,
        vertical_length_right: Real,
        angle_left: Real,
        angle_right: Real,
    ) -> Self {
        Self {
            width,
            horizontal_length,
            vertical_length_left,
            vertical_length_right,
            angle_left,
            angle_right,
            thickness: default_thickness(),
        }
    }

    pub const fn with_thickness(mut self, thickness: Real) -> Self {
        self.thickness = thickness;
        self
    }
}

/// Either supported profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frame {
    L(LFrame),
    U(UFrame),
}

impl From<LFrame> for Frame {
    fn from(frame: LFrame) -> Self {
        Frame::L(frame)
    }
}

impl From<UFrame> for Frame {
    fn from(frame: UFrame) -> Self {
        Frame::U(frame)
    }
}

/// Length subtracted from the summed leg lengths for one bend.
pub trait BendAllowance {
    fn allowance(&self, angle_degrees: Real) -> Real;
}

/// Two-way lookup: one value for a right-angle bend, another for every other angle.
///
/// The defaults (1 at 90°, 0.5 otherwise) are empirical workshop values; there is no
/// continuous formula behind them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableBendAllowance {
    pub right_angle: Real,
    pub other: Real,
}

impl Default for TableBendAllowance {
    fn default() -> Self {
        Self {
            right_angle: 1.0,
            other: 0.5,
        }
    }
}

impl BendAllowance for TableBendAllowance {
    fn allowance(&self, angle_degrees: Real) -> Real {
        if approx_eq(angle_degrees, RIGHT_ANGLE_DEG) {
            self.right_angle
        } else {
            self.other
        }
    }
}

impl<F: Fn(Real) -> Real> BendAllowance for F {
    fn allowance(&self, angle_degrees: Real) -> Real {
        self(angle_degrees)
    }
}

impl LFrame {
    /// Unbent length of both legs.
    pub fn flat_length(&self, policy: &impl BendAllowance) -> Real {
        self.horizontal_length + self.vertical_length - policy.allowance(self.angle)
    }
}

impl UFrame {
    /// Unbent length of the base and both legs; each bend is corrected on its own.
    pub fn flat_length(&self, policy: &impl BendAllowance) -> Real {
        self.horizontal_length + self.vertical_length_left + self.vertical_length_right
            - policy.allowance(self.angle_left)
            - policy.allowance(self.angle_right)
    }
}

impl Frame {
    pub const fn width(&self) -> Real {
        match self {
            Frame::L(frame) => frame.width,
            Frame::U(frame) => frame.width,
        }
    }

    pub const fn thickness(&self) -> Real {
        match self {
            Frame::L(frame) => frame.thickness,
            Frame::U(frame) => frame.thickness,
        }
    }

    pub fn flat_length(&self, policy: &impl BendAllowance) -> Real {
        match self {
            Frame::L(frame) => frame.flat_length(policy),
            Frame::U(frame) => frame.flat_length(policy),
        }
    }
}

/// Flattens `frame` into a plate using the default bend-allowance table.
///
/// The plate is as wide as the frame cross-section and as high as the unbent length.
/// Offsets start at zero and no holes are attached.
pub fn flatten(frame: impl Into<Frame>) -> Rectangle {
    flatten_with(frame, &TableBendAllowance::default())
}

/// Flattens `frame` with a caller-supplied bend-allowance policy.
pub fn flatten_with(frame: impl Into<Frame>, policy: &impl BendAllowance) -> Rectangle {
    let frame = frame.into();
    let height = frame.flat_length(policy);
    debug!(?frame, height, "flattened frame");
    Rectangle::new(frame.width(), height).with_thickness(frame.thickness())
}

impl Rectangle {
    pub fn from_l_frame(frame: LFrame) -> Self {
        flatten(frame)
    }

    pub fn from_u_frame(frame: UFrame) -> Self {
        flatten(frame)
    }

    pub fn from_frame(frame: Frame) -> Self {
        flatten(frame)
    }
}
