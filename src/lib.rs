//! Flat-pattern **plate layouts** for bent L- and U-frames.
//!
//! A bent frame is flattened into a rectangular plate, the plate gets a single
//! horizontal row of holes (round or slotted) spaced evenly edge to edge, and the
//! result is drawn through a [drawing backend](io::DrawingBackend), by default a DXF
//! document with a hatch overlay.
//!
//! ```no_run
//! use bentplate::{ExportConfig, ExportDriver, Hole, LFrame, flatten};
//! use nalgebra::Point2;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut plate = flatten(LFrame::new(200.0, 50.0, 10.0, 90.0)).with_offsets(6.0, 10.0);
//! plate.add_holes(vec![Hole::circle(5.0)?; 7])?;
//!
//! let mut driver = ExportDriver::new(ExportConfig::in_directory("out"))?;
//! driver.add_rectangle(&plate, Point2::origin())?;
//! driver.save("bracket")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**dxf-io**](https://en.wikipedia.org/wiki/AutoCAD_DXF): `.dxf` export
//! - **cli**: the `bentplate` command-line tool
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//!
//! # Units
//! Lengths are unit-agnostic (millimetres by convention). Every angle in the public API
//! is in **degrees**: frame bend angles as well as slot tilt.

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod config;
pub mod driver;
pub mod errors;
pub mod float_types;
pub mod frame;
pub mod hole;
pub mod io;
pub mod job;
pub mod layout;
pub mod rectangle;
pub mod sketch;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use config::ExportConfig;
pub use driver::ExportDriver;
pub use errors::{ExportError, FitViolationKind, LayoutError};
pub use frame::{BendAllowance, Frame, LFrame, TableBendAllowance, UFrame, flatten, flatten_with};
pub use hole::{Circle, Hole, Slot};
pub use job::Job;
pub use layout::{HolePlacement, LayoutOptions, PlacedShape, layout, layout_with, place_holes};
pub use rectangle::{Rectangle, attach_holes};
