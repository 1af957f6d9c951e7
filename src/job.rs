//! Job files: a batch of plates described in TOML.
//!
//! ```toml
//! name = "brackets"
//! gap = 20.0
//!
//! [[plate]]
//! l_frame = { width = 200, horizontal_length = 50, vertical_length = 10, angle = 90 }
//! offset_from_side = 6
//! offset_from_bottom = 10
//! holes = [{ kind = "circle", radius = 5, count = 7 }]
//!
//! [[plate]]
//! width = 150
//! height = 50
//! offset_from_side = 40
//! offset_from_bottom = 5
//! holes = [{ kind = "slot", radius = 5, length = 10, angle = 45, count = 3 }]
//! ```
//!
//! Every plate takes exactly one source: `l_frame`, `u_frame`, or `width` + `height`.
//! Plates without an explicit `origin` are stacked upwards from (0, 0), each starting
//! `gap` above the top of the previous one.

use crate::errors::{ExportError, LayoutError};
use crate::float_types::Real;
use crate::frame::{LFrame, UFrame, flatten};
use crate::hole::Hole;
use crate::io::DrawingBackend;
use crate::driver::ExportDriver;
use crate::rectangle::Rectangle;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

const fn default_gap() -> Real {
    20.0
}

const fn default_count() -> usize {
    1
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HoleSpec {
    Circle {
        radius: Real,
        #[serde(default = "default_count")]
        count: usize,
    },
    Slot {
        radius: Real,
        length: Real,
        /// Degrees.
        angle: Real,
        #[serde(default = "default_count")]
        count: usize,
    },
}

impl HoleSpec {
    pub const fn count(&self) -> usize {
        match self {
            HoleSpec::Circle { count, .. } | HoleSpec::Slot { count, .. } => *count,
        }
    }

    pub fn hole(&self) -> Result<Hole, LayoutError> {
        match *self {
            HoleSpec::Circle { radius, .. } => Hole::circle(radius),
            HoleSpec::Slot {
                radius,
                length,
                angle,
                ..
            } => Hole::slot(radius, length, angle),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlateSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub l_frame: Option<LFrame>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub u_frame: Option<UFrame>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Real>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Real>,
    /// Overrides the frame thickness (or the default of 1 for a bare plate).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<Real>,
    #[serde(default)]
    pub offset_from_side: Real,
    #[serde(default)]
    pub offset_from_bottom: Real,
    /// Bottom-left corner; stacked automatically when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<[Real; 2]>,
    #[serde(default)]
    pub holes: Vec<HoleSpec>,
}

impl PlateSpec {
    /// The bare plate, before offsets and holes.
    pub fn source(&self) -> Result<Rectangle, String> {
        let rectangle = match (self.l_frame, self.u_frame, self.width, self.height) {
            (Some(frame), None, None, None) => flatten(frame),
            (None, Some(frame), None, None) => flatten(frame),
            (None, None, Some(width), Some(height)) => Rectangle::new(width, height),
            (None, None, Some(_), None) | (None, None, None, Some(_)) => {
                return Err("a bare plate needs both width and height".to_string());
            },
            (None, None, None, None) => {
                return Err("needs one of l_frame, u_frame or width + height".to_string());
            },
            _ => {
                return Err("l_frame, u_frame and width/height are mutually exclusive".to_string());
            },
        };
        Ok(match self.thickness {
            Some(thickness) => rectangle.with_thickness(thickness),
            None => rectangle,
        })
    }

    /// Holes in order, with every `count` expanded lazily.
    ///
    /// Every entry is validated up front; the repetitions are only produced as they
    /// are consumed, so attaching them stops at the first hole that no longer fits.
    pub fn holes(&self) -> Result<impl Iterator<Item = Hole> + '_, LayoutError> {
        let entries = self
            .holes
            .iter()
            .map(|spec| Ok((spec.hole()?, spec.count())))
            .collect::<Result<Vec<_>, LayoutError>>()?;
        Ok(entries
            .into_iter()
            .flat_map(|(hole, count)| std::iter::repeat_n(hole, count)))
    }

    /// The populated plate.
    pub fn build(&self) -> Result<Rectangle, ExportError> {
        let mut rectangle = self
            .source()
            .map_err(ExportError::Job)?
            .with_offsets(self.offset_from_side, self.offset_from_bottom);
        rectangle.add_holes(self.holes()?)?;
        Ok(rectangle)
    }
}

/// A built plate and where it goes in the drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedPlate {
    pub rectangle: Rectangle,
    pub origin: Point2<Real>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Job {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Vertical distance between automatically stacked plates.
    #[serde(default = "default_gap")]
    pub gap: Real,
    #[serde(rename = "plate", default)]
    pub plates: Vec<PlateSpec>,
}

impl Default for Job {
    fn default() -> Self {
        Self {
            name: None,
            gap: default_gap(),
            plates: Vec::new(),
        }
    }
}

impl Job {
    pub fn from_toml_str(content: &str) -> Result<Self, ExportError> {
        let job: Self = toml::from_str(content)
            .map_err(|e| ExportError::Job(format!("invalid TOML job: {}", e)))?;
        for (index, plate) in job.plates.iter().enumerate() {
            plate
                .source()
                .map_err(|reason| ExportError::Job(format!("plate #{}: {}", index, reason)))?;
        }
        Ok(job)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, ExportError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// The two sample plates: an L-frame flattened to 200 × 59 with seven Ø10 holes, and
    /// a 150 × 50 plate with three 45° slots stacked above it.
    pub fn demo() -> Self {
        Self {
            name: Some("demo".to_string()),
            gap: default_gap(),
            plates: vec![
                PlateSpec {
                    l_frame: Some(LFrame::new(200.0, 50.0, 10.0, 90.0)),
                    offset_from_side: 6.0,
                    offset_from_bottom: 10.0,
                    holes: vec![HoleSpec::Circle { radius: 5.0, count: 7 }],
                    ..Default::default()
                },
                PlateSpec {
                    width: Some(150.0),
                    height: Some(50.0),
                    offset_from_side: 40.0,
                    offset_from_bottom: 5.0,
                    holes: vec![HoleSpec::Slot {
                        radius: 5.0,
                        length: 10.0,
                        angle: 45.0,
                        count: 3,
                    }],
                    ..Default::default()
                },
            ],
        }
    }

    /// Builds each plate on its own. A failed plate still occupies its slot in the
    /// stack, so the plates above it land where they would have anyway.
    pub fn build_each(&self) -> Vec<Result<PlacedPlate, ExportError>> {
        let mut next_y: Real = 0.0;
        self.plates
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                let origin = match spec.origin {
                    Some([x, y]) => Point2::new(x, y),
                    None => Point2::new(0.0, next_y),
                };
                if let Ok(bare) = spec.source() {
                    next_y = next_y.max(origin.y + bare.height() + self.gap);
                }
                let rectangle = spec.build().map_err(|e| match e {
                    ExportError::Layout(source) => ExportError::Plate { index, source },
                    ExportError::Job(reason) => {
                        ExportError::Job(format!("plate #{}: {}", index, reason))
                    },
                    other => other,
                })?;
                debug!(index, x = origin.x, y = origin.y, "built plate");
                Ok(PlacedPlate { rectangle, origin })
            })
            .collect()
    }

    /// Builds every plate, failing on the first one that does not fit.
    pub fn build(&self) -> Result<Vec<PlacedPlate>, ExportError> {
        self.build_each().into_iter().collect()
    }

    /// Builds every plate and draws them all into `driver`. Nothing is drawn unless
    /// every plate builds and lays out.
    pub fn render<B: DrawingBackend>(
        &self,
        driver: &mut ExportDriver<B>,
    ) -> Result<Vec<PlacedPlate>, ExportError> {
        let plates = self.build()?;
        for (index, plate) in plates.iter().enumerate() {
            crate::layout::hole_gap(&plate.rectangle)
                .map_err(|source| ExportError::Plate { index, source })?;
        }
        for (index, plate) in plates.iter().enumerate() {
            driver
                .add_rectangle(&plate.rectangle, plate.origin)
                .map_err(|source| ExportError::Plate { index, source })?;
        }
        Ok(plates)
    }
}
