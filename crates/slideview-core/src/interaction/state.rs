use serde::{Deserialize, Serialize};

use crate::geometry::{Point, PointF, Rect, Size};

/// Pan gesture in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    pub active: bool,
    /// Image-space anchor captured at drag start.
    pub anchor: PointF,
}

/// Shift-drag rectangle in image coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SelectionState {
    pub active: bool,
    pub rect: Rect,
}

impl SelectionState {
    pub fn begin(&mut self, at: Point) {
        self.active = true;
        self.rect = Rect::at(at);
    }

    /// Selection center as a fraction of the image extent on each axis.
    pub fn fraction_of(&self, image: Size) -> Option<(f64, f64)> {
        if image.is_empty() {
            return None;
        }
        let center = self.rect.center();
        Some((
            center.x as f64 / image.width_f64(),
            center.y as f64 / image.height_f64(),
        ))
    }
}

/// Single point of interest in image space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerState {
    pub active: bool,
    pub x: i32,
    pub y: i32,
}

impl MarkerState {
    /// Show the marker at `p`.
    pub fn place(&mut self, p: Point) {
        self.active = true;
        self.x = p.x;
        self.y = p.y;
    }

    pub fn toggle(&mut self) {
        self.active = !self.active;
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Pointer shape the canvas asks its host to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorShape {
    Arrow,
    Move,
}
