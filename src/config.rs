//! Export configuration.
//!
//! Everything the drawing backend needs beyond the geometry itself: where the file
//! goes, what the layers are called and colored, how hatching looks. The config is
//! passed explicitly to [`crate::driver::ExportDriver`]; there is no global default
//! output directory.
//!
//! ```toml
//! [output]
//! directory = "drawings"
//! extension = "dxf"
//!
//! [hatch]
//! spacing = 1.5
//! angle = 45.0
//! ```

use crate::errors::ExportError;
use crate::float_types::Real;
use crate::layout::LayoutOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Smallest accepted `[hatch] spacing`.
pub const MIN_HATCH_SPACING: Real = 1e-3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub directory: PathBuf,
    /// File extension without the leading dot.
    pub extension: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            extension: "dxf".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerSettings {
    /// Layer holding outlines, holes and slot edges.
    pub forms: String,
    /// ACI color index of the forms layer.
    pub forms_color: u8,
    /// Layer holding the hatch overlay.
    pub hatches: String,
    /// ACI color index of the hatch lines.
    pub hatch_color: u8,
}

impl Default for LayerSettings {
    fn default() -> Self {
        Self {
            forms: "FORMS".to_string(),
            forms_color: 1,
            hatches: "HATCHES".to_string(),
            hatch_color: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HatchSettings {
    pub enabled: bool,
    /// Distance between neighbouring hatch lines.
    pub spacing: Real,
    /// Hatch direction in degrees from the +X axis.
    pub angle: Real,
}

impl Default for HatchSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            spacing: 1.0,
            angle: 45.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Sides of the polygon that stands in for a circle when hatching.
    pub circle_segments: usize,
    /// Draw the tangent edges that join a slot's end circles.
    pub slot_edges: bool,
}

impl LayoutSettings {
    pub const fn options(&self) -> LayoutOptions {
        LayoutOptions {
            slot_edges: self.slot_edges,
        }
    }
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            circle_segments: 64,
            slot_edges: LayoutOptions::default().slot_edges,
        }
    }
}

/// Initial view of the saved drawing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    pub center_x: Real,
    pub center_y: Real,
    pub height: Real,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            center_x: 4.0,
            center_y: 4.0,
            height: 15.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub output: OutputSettings,
    pub layers: LayerSettings,
    pub hatch: HatchSettings,
    pub layout: LayoutSettings,
    pub viewport: ViewportSettings,
}

impl ExportConfig {
    /// Defaults, writing into `directory`.
    pub fn in_directory(directory: impl Into<PathBuf>) -> Self {
        let mut config = Self::default();
        config.output.directory = directory.into();
        config
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ExportError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ExportError::Config(format!("invalid TOML config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, ExportError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String, ExportError> {
        toml::to_string_pretty(self)
            .map_err(|e| ExportError::Config(format!("failed to serialize config: {}", e)))
    }

    pub fn validate(&self) -> Result<(), ExportError> {
        if self.output.extension.trim_start_matches('.').is_empty() {
            return Err(ExportError::Config("output extension must not be empty".to_string()));
        }
        if self.hatch.enabled
            && !(self.hatch.spacing >= MIN_HATCH_SPACING && self.hatch.spacing.is_finite())
        {
            return Err(ExportError::Config(format!(
                "hatch spacing must be at least {}, got {}",
                MIN_HATCH_SPACING, self.hatch.spacing
            )));
        }
        if self.layout.circle_segments < 3 {
            return Err(ExportError::Config(format!(
                "circle_segments must be at least 3, got {}",
                self.layout.circle_segments
            )));
        }
        if !(self.viewport.height > 0.0) {
            return Err(ExportError::Config(format!(
                "viewport height must be > 0, got {}",
                self.viewport.height
            )));
        }
        Ok(())
    }

    /// `<directory>/<name>.<extension>`
    pub fn output_path(&self, name: &str) -> PathBuf {
        let extension = self.output.extension.trim_start_matches('.');
        self.output.directory.join(format!("{}.{}", name, extension))
    }
}
