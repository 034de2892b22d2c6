use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_BACKGROUND_GRAY, DEFAULT_CANVAS_SIZE, DEFAULT_CHECKERBOARD_SIZE,
    DEFAULT_HISTOGRAM_BINS, DEFAULT_SCALE, ZOOM_STEP,
};
use crate::error::{Result, SlideviewError};
use crate::geometry::Size;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    #[serde(default)]
    pub zoom: ZoomConfig,
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Scale multiplier per zoom-in step (> 1.0).
    pub step: f64,
    /// Scale of a newly created canvas.
    pub default_scale: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            step: ZOOM_STEP,
            default_scale: DEFAULT_SCALE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_SIZE.0,
            height: DEFAULT_CANVAS_SIZE.1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Gray level behind the image, in [0.0, 1.0].
    pub background_gray: f32,
    pub checkerboard_size: u32,
    pub histogram_bins: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background_gray: DEFAULT_BACKGROUND_GRAY,
            checkerboard_size: DEFAULT_CHECKERBOARD_SIZE,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
        }
    }
}

impl ViewerConfig {
    /// Parse and validate a TOML document. Missing sections use defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: ViewerConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.zoom.step.is_finite() && self.zoom.step > 1.0) {
            return Err(SlideviewError::InvalidConfig(format!(
                "zoom.step must be > 1.0, got {}",
                self.zoom.step
            )));
        }
        if !(self.zoom.default_scale.is_finite() && self.zoom.default_scale > 0.0) {
            return Err(SlideviewError::InvalidConfig(format!(
                "zoom.default_scale must be > 0.0, got {}",
                self.zoom.default_scale
            )));
        }
        if self.canvas_size().is_empty() {
            return Err(SlideviewError::InvalidConfig(format!(
                "canvas size must be non-zero, got {}",
                self.canvas_size()
            )));
        }
        if !(0.0..=1.0).contains(&self.render.background_gray) {
            return Err(SlideviewError::InvalidConfig(format!(
                "render.background_gray must be in [0, 1], got {}",
                self.render.background_gray
            )));
        }
        if self.render.checkerboard_size == 0 {
            return Err(SlideviewError::InvalidConfig(
                "render.checkerboard_size must be > 0".into(),
            ));
        }
        if self.render.histogram_bins == 0 {
            return Err(SlideviewError::InvalidConfig(
                "render.histogram_bins must be > 0".into(),
            ));
        }
        Ok(())
    }

    pub fn canvas_size(&self) -> Size {
        Size::new(self.canvas.width, self.canvas.height)
    }
}
