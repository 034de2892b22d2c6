use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlideviewError};
use crate::geometry::{Point, Size};
use crate::interaction::{Button, Buttons, MarkerState, Modifiers, PointerEvent, WheelEvent};
use crate::layers::SizedLayer;

/// A recorded or hand-written sequence of canvas input.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Canvas size; the configured size hint when absent.
    pub canvas: Option<Size>,
    #[serde(default)]
    pub layers: Vec<LayerSpec>,
    #[serde(default)]
    pub events: Vec<InputEvent>,
}

/// A layer to load before replaying. Either explicit dimensions or a `path`
/// to an image whose dimensions are read by the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub name: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub path: Option<PathBuf>,
}

impl LayerSpec {
    pub fn to_layer(&self) -> Result<SizedLayer> {
        match (self.width, self.height) {
            (Some(width), Some(height)) => SizedLayer::try_new(&self.name, width, height),
            _ => Err(SlideviewError::InvalidSession(format!(
                "layer '{}' has no dimensions",
                self.name
            ))),
        }
    }
}

/// One input step: pointer/wheel/resize input or a programmatic command.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputEvent {
    Press {
        x: i32,
        y: i32,
        #[serde(default)]
        buttons: Vec<Button>,
        #[serde(default)]
        shift: bool,
    },
    Move {
        x: i32,
        y: i32,
        #[serde(default)]
        buttons: Vec<Button>,
        #[serde(default)]
        shift: bool,
    },
    Release {
        x: i32,
        y: i32,
        #[serde(default)]
        buttons: Vec<Button>,
        #[serde(default)]
        shift: bool,
    },
    Wheel {
        x: i32,
        y: i32,
        delta: i32,
    },
    Resize {
        width: u32,
        height: u32,
    },
    ZoomIn,
    ZoomOut,
    SetZoom {
        scale: f64,
    },
    FitToWindow,
    FitToImage,
    CenterImage,
    NextLayer,
    PreviousLayer,
    RemoveLayer,
    /// Offsets reported by a scrollbar drag.
    Scroll {
        offset_x: f64,
        offset_y: f64,
    },
    SetMarker {
        x: i32,
        y: i32,
        #[serde(default = "default_true")]
        active: bool,
    },
}

fn default_true() -> bool {
    true
}

fn pointer(x: i32, y: i32, buttons: &[Button], shift: bool) -> PointerEvent {
    let modifiers = if shift {
        Modifiers::Shift
    } else {
        Modifiers::None
    };
    PointerEvent::new(
        Point::new(x, y),
        buttons.iter().copied().collect::<Buttons>(),
        modifiers,
    )
}

impl InputEvent {
    /// Pointer payload of press/move/release steps.
    pub fn pointer(&self) -> Option<PointerEvent> {
        match self {
            Self::Press {
                x,
                y,
                buttons,
                shift,
            }
            | Self::Move {
                x,
                y,
                buttons,
                shift,
            }
            | Self::Release {
                x,
                y,
                buttons,
                shift,
            } => Some(pointer(*x, *y, buttons, *shift)),
            _ => None,
        }
    }

    pub fn wheel(&self) -> Option<WheelEvent> {
        match self {
            Self::Wheel { x, y, delta } => Some(WheelEvent {
                position: Point::new(*x, *y),
                delta: *delta,
            }),
            _ => None,
        }
    }

    pub fn marker(&self) -> Option<MarkerState> {
        match self {
            Self::SetMarker { x, y, active } => Some(MarkerState {
                active: *active,
                x: *x,
                y: *y,
            }),
            _ => None,
        }
    }
}

impl Session {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let session: Session = toml::from_str(s)?;
        session.validate()?;
        Ok(session)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        for layer in &self.layers {
            let has_dims = layer.width.is_some() && layer.height.is_some();
            if !has_dims && layer.path.is_none() {
                return Err(SlideviewError::InvalidSession(format!(
                    "layer '{}' needs width and height or a path",
                    layer.name
                )));
            }
        }
        for (i, event) in self.events.iter().enumerate() {
            if let InputEvent::SetZoom { scale } = event {
                if !(scale.is_finite() && *scale > 0.0) {
                    return Err(SlideviewError::InvalidSession(format!(
                        "event {i}: zoom scale must be > 0, got {scale}"
                    )));
                }
            }
        }
        Ok(())
    }
}
