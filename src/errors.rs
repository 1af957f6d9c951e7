//! Layout and export errors

use crate::float_types::Real;

/// Which fit invariant a hole broke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FitViolationKind {
    /// `2·offset_from_side + holes_total_width` reached or exceeded the plate width
    Horizontal { required: Real, available: Real },
    /// `offset_from_bottom + hole.height` exceeded the plate height
    Vertical { required: Real, available: Real },
}

impl std::fmt::Display for FitViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FitViolationKind::Horizontal { required, available } => write!(
                f,
                "holes don't fit into the rectangle: side offsets plus hole widths need {} of {} available width",
                required, available
            ),
            FitViolationKind::Vertical { required, available } => write!(
                f,
                "hole too large: bottom offset plus hole height needs {} of {} available height",
                required, available
            ),
        }
    }
}

/// Input-validation failures raised while building or laying out a plate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// (FitViolation) The hole at `index` does not fit the rectangle
    #[error("(FitViolation) hole #{index}: {reason}")]
    FitViolation { index: usize, reason: FitViolationKind },
    /// (InsufficientHoles) Uniform spacing needs at least two holes
    #[error("(InsufficientHoles) need at least two holes to lay out a row, got {count}")]
    InsufficientHoles { count: usize },
    /// (InvalidDimension) A dimension is negative, zero where it must not be, or not finite
    #[error("(InvalidDimension) {name} is out of range, got {value}")]
    InvalidDimension { name: &'static str, value: Real },
}

/// Failures surfaced by the export driver and its drawing backend.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error("plate #{index}: {source}")]
    Plate {
        index: usize,
        #[source]
        source: LayoutError,
    },
    /// The drawing backend failed to serialize the document
    #[error("drawing backend error: {0}")]
    Backend(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("invalid job: {0}")]
    Job(String),
}

#[cfg(feature = "dxf-io")]
impl From<dxf::DxfError> for ExportError {
    fn from(err: dxf::DxfError) -> Self {
        ExportError::Backend(format!("DXF: {}", err))
    }
}
