use tracing::{debug, warn};

use crate::consts::ZOOM_STEP;
use crate::geometry::{Point, Size};
use crate::viewport::state::sanitize_scale;
use crate::viewport::{ViewGeometry, ViewportState};

/// Direction of a relative zoom step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Direction for a signed wheel delta; `None` for a zero delta.
    pub fn from_delta(delta: i32) -> Option<Self> {
        match delta.signum() {
            1 => Some(Self::In),
            -1 => Some(Self::Out),
            _ => None,
        }
    }
}

/// Computes new scale/offset pairs for the zoom operations of a canvas.
///
/// Every operation mutates the given [`ViewportState`] in place and leaves it
/// untouched when the geometry cannot support the computation (no image, or a
/// zero-sized canvas where the operation divides by the canvas extent).
#[derive(Clone, Debug, PartialEq)]
pub struct ZoomController {
    step: f64,
}

impl Default for ZoomController {
    fn default() -> Self {
        Self { step: ZOOM_STEP }
    }
}

impl ZoomController {
    /// Controller multiplying or dividing the scale by `step` per relative
    /// zoom. Steps that would not change the scale fall back to the default.
    pub fn new(step: f64) -> Self {
        if step.is_finite() && step > 1.0 {
            Self { step }
        } else {
            warn!(step, "Ignoring zoom step <= 1, using default");
            Self::default()
        }
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Zoom one step in or out, keeping the image point under `anchor` fixed
    /// on screen.
    ///
    /// When `anchor` is not over the image the view is re-centered instead.
    /// Returns whether the viewport changed.
    pub fn zoom_relative(
        &self,
        viewport: &mut ViewportState,
        geometry: &ViewGeometry,
        anchor: Point,
        direction: ZoomDirection,
    ) -> bool {
        if !geometry.is_available() || geometry.canvas.is_empty() {
            debug!("Relative zoom skipped: no image or empty canvas");
            return false;
        }

        let old_scale = viewport.scale;
        let new_scale = sanitize_scale(match direction {
            ZoomDirection::In => old_scale * self.step,
            ZoomDirection::Out => old_scale / self.step,
        });

        let canvas_w = geometry.canvas.width_f64();
        let canvas_h = geometry.canvas.height_f64();
        let mperc_x = anchor.x as f64 / canvas_w - 0.5;
        let mperc_y = anchor.y as f64 / canvas_h - 0.5;

        let anchor_img = geometry.screen_to_image(viewport, anchor);
        if geometry.contains_image_point(anchor_img) {
            let delta = 1.0 / new_scale - 1.0 / old_scale;
            viewport.offset_x += canvas_w * delta * mperc_x;
            viewport.offset_y -= canvas_h * delta * mperc_y;
        } else {
            viewport.center();
        }
        viewport.scale = new_scale;

        debug!(
            old_scale,
            new_scale,
            offset_x = viewport.offset_x,
            offset_y = viewport.offset_y,
            "Relative zoom"
        );
        true
    }

    /// Set the scale directly, without anchoring.
    pub fn zoom_absolute(&self, viewport: &mut ViewportState, scale: f64) {
        viewport.set_scale(scale);
    }

    /// Largest scale at which the whole image fits the canvas, centered.
    pub fn fit_to_window(&self, viewport: &mut ViewportState, geometry: &ViewGeometry) -> bool {
        let Some(image) = geometry.image() else {
            return false;
        };
        if geometry.canvas.is_empty() {
            warn!("Fit to window skipped: empty canvas");
            return false;
        }

        let zoom_width = geometry.canvas.width_f64() / image.width_f64();
        let zoom_height = geometry.canvas.height_f64() / image.height_f64();
        viewport.set_scale(zoom_width.min(zoom_height));
        viewport.center();
        true
    }

    /// Host window size for which the canvas shows the scaled image exactly.
    ///
    /// `host` is the current outer size of the window hosting the canvas; the
    /// difference to the canvas size is the chrome kept around it.
    pub fn container_size_for_image(
        &self,
        viewport: &ViewportState,
        geometry: &ViewGeometry,
        host: Size,
    ) -> Option<Size> {
        let image = geometry.image()?;
        let img_width = (image.width_f64() * viewport.scale) as i64;
        let img_height = (image.height_f64() * viewport.scale) as i64;

        let padding_w = host.width as i64 - geometry.canvas.width as i64;
        let padding_h = host.height as i64 - geometry.canvas.height as i64;

        let clamp = |v: i64| v.clamp(1, u32::MAX as i64) as u32;
        Some(Size::new(
            clamp(img_width + padding_w + 1),
            clamp(img_height + padding_h + 1),
        ))
    }

    pub fn center(&self, viewport: &mut ViewportState) {
        viewport.center();
    }
}
