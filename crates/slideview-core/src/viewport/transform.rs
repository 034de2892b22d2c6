use crate::geometry::{Point, PointF, Rect, Size};
use crate::layers::LayerStack;
use crate::viewport::ViewportState;

/// Canvas and image extents that, together with a [`ViewportState`], define
/// the mapping between screen and image coordinates.
///
/// Screen space has its origin in the top-left canvas pixel. Image space has
/// its origin in the top-left image pixel. The renderer works in a Y-up
/// system, so the vertical offset enters the mapping with the opposite sign
/// of the horizontal one; the `-1`/`+1` terms align discrete pixel centers
/// with the continuous canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewGeometry {
    pub canvas: Size,
    pub image: Option<Size>,
}

impl ViewGeometry {
    pub fn new(canvas: Size, image: Option<Size>) -> Self {
        Self { canvas, image }
    }

    /// Geometry of `canvas` showing the current layer of `stack`.
    pub fn from_stack(canvas: Size, stack: &impl LayerStack) -> Self {
        Self::new(canvas, stack.image_size())
    }

    /// Image size, or `None` when no image is available or it has a zero edge.
    pub fn image(&self) -> Option<Size> {
        self.image.filter(|s| !s.is_empty())
    }

    pub fn is_available(&self) -> bool {
        self.image().is_some()
    }

    fn padding(&self, image: Size, scale: f64) -> (f64, f64) {
        let padding_w = 0.5 * (image.width_f64() * scale - (self.canvas.width_f64() - 1.0));
        let padding_h = 0.5 * (image.height_f64() * scale - (self.canvas.height_f64() - 1.0));
        (padding_w, padding_h)
    }

    /// Sub-pixel image coordinate under screen point `p`.
    pub fn screen_to_image_f(&self, viewport: &ViewportState, p: PointF) -> Option<PointF> {
        let image = self.image()?;
        let scale = viewport.scale;
        let (padding_w, padding_h) = self.padding(image, scale);

        Some(PointF::new(
            (p.x + padding_w) / scale - viewport.offset_x,
            (p.y - 1.0 + padding_h) / scale + viewport.offset_y,
        ))
    }

    /// Sub-pixel screen coordinate of image point `p`.
    pub fn image_to_screen_f(&self, viewport: &ViewportState, p: PointF) -> Option<PointF> {
        let image = self.image()?;
        let scale = viewport.scale;
        let (padding_w, padding_h) = self.padding(image, scale);

        Some(PointF::new(
            (p.x + viewport.offset_x) * scale - padding_w,
            (p.y - viewport.offset_y) * scale - padding_h + 1.0,
        ))
    }

    /// Image pixel under screen pixel `p`, `(0, 0)` without an image.
    pub fn screen_to_image(&self, viewport: &ViewportState, p: Point) -> Point {
        self.screen_to_image_f(viewport, p.to_f64())
            .map_or(Point::ZERO, PointF::truncate)
    }

    /// Screen pixel showing image pixel `p`, `(0, 0)` without an image.
    pub fn image_to_screen(&self, viewport: &ViewportState, p: Point) -> Point {
        self.image_to_screen_f(viewport, p.to_f64())
            .map_or(Point::ZERO, PointF::truncate)
    }

    /// Whether `p` lies on the image, i.e. in `[0, width) x [0, height)`.
    pub fn contains_image_point(&self, p: Point) -> bool {
        match self.image() {
            Some(image) => {
                p.x >= 0
                    && p.y >= 0
                    && (p.x as i64) < image.width as i64
                    && (p.y as i64) < image.height as i64
            }
            None => false,
        }
    }

    /// Bounding box, in image coordinates, of the four canvas corners.
    pub fn visible_region(&self, viewport: &ViewportState) -> Option<Rect> {
        if self.canvas.is_empty() || !self.is_available() {
            return None;
        }
        let right = self.canvas.width as i32 - 1;
        let bottom = self.canvas.height as i32 - 1;
        let corners = [
            Point::new(0, 0),
            Point::new(right, 0),
            Point::new(0, bottom),
            Point::new(right, bottom),
        ]
        .map(|c| self.screen_to_image(viewport, c));

        Rect::bounding(&corners)
    }
}

/// Image-space anchor captured when a pan drag starts at screen point `screen`.
pub fn drag_anchor(viewport: &ViewportState, screen: Point) -> PointF {
    PointF::new(
        screen.x as f64 / viewport.scale - viewport.offset_x,
        -(screen.y as f64) / viewport.scale - viewport.offset_y,
    )
}

/// Offsets that keep `anchor` under the pointer once it has moved to `screen`.
pub fn drag_offset(scale: f64, screen: Point, anchor: PointF) -> (f64, f64) {
    (
        screen.x as f64 / scale - anchor.x,
        -(screen.y as f64) / scale - anchor.y,
    )
}
