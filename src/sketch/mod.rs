//! Closed regions built from placed shapes, and the hatch lines that fill them.

pub mod hatch;
pub mod shapes;
#[allow(clippy::module_inception)]
pub mod sketch;

pub use hatch::hatch_lines;
pub use sketch::Sketch;
