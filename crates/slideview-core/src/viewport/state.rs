use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_SCALE;

/// Scale and pan of the canvas over the current image.
///
/// `scale` is screen pixels per image pixel. The offsets are in image pixels
/// and move the image center away from the canvas center; `(0, 0)` is
/// centered. Values are copied out to observers, never shared.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl ViewportState {
    pub fn new(scale: f64, offset_x: f64, offset_y: f64) -> Self {
        Self {
            scale: sanitize_scale(scale),
            offset_x,
            offset_y,
        }
    }

    /// Replace the scale, falling back to the default for non-positive values.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = sanitize_scale(scale);
    }

    pub fn set_offset(&mut self, offset_x: f64, offset_y: f64) {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
    }

    pub fn center(&mut self) {
        self.set_offset(0.0, 0.0);
    }

    pub fn is_centered(&self) -> bool {
        self.offset_x == 0.0 && self.offset_y == 0.0
    }

    /// Copy with the scale invariant restored.
    pub fn sanitized(self) -> Self {
        Self::new(self.scale, self.offset_x, self.offset_y)
    }
}

/// Scales must stay strictly positive and finite.
pub fn sanitize_scale(scale: f64) -> f64 {
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        DEFAULT_SCALE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_scale_resets_to_default() {
        assert_eq!(ViewportState::new(0.0, 1.0, 2.0).scale, DEFAULT_SCALE);
        assert_eq!(ViewportState::new(-3.0, 0.0, 0.0).scale, DEFAULT_SCALE);
        assert_eq!(ViewportState::new(f64::NAN, 0.0, 0.0).scale, DEFAULT_SCALE);
        assert_eq!(ViewportState::new(2.5, 0.0, 0.0).scale, 2.5);
    }
}
