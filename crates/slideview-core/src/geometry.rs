use serde::{Deserialize, Serialize};

/// Integer point, used for both screen and image pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn to_f64(self) -> PointF {
        PointF::new(self.x as f64, self.y as f64)
    }
}

/// Sub-pixel point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointF {
    pub x: f64,
    pub y: f64,
}

impl PointF {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Truncate toward zero, matching how pixel coordinates are derived.
    pub fn truncate(self) -> Point {
        Point::new(self.x as i32, self.y as i32)
    }
}

/// Extent of a canvas or an image in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A size with a zero edge cannot take part in any viewport computation.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn width_f64(&self) -> f64 {
        self.width as f64
    }

    pub fn height_f64(&self) -> f64 {
        self.height as f64
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Rectangle spanned by two inclusive corner points.
///
/// The corners are kept as given, so a rectangle grown up or to the left of
/// its anchor has `bottom_right` above or left of `top_left`. Use
/// [`Rect::normalized`] when an ordered rectangle is needed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl Rect {
    pub const fn new(top_left: Point, bottom_right: Point) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Zero-extent rectangle anchored at `p`.
    pub const fn at(p: Point) -> Self {
        Self::new(p, p)
    }

    pub fn set_bottom_right(&mut self, p: Point) {
        self.bottom_right = p;
    }

    pub fn left(&self) -> i32 {
        self.top_left.x
    }

    pub fn top(&self) -> i32 {
        self.top_left.y
    }

    pub fn right(&self) -> i32 {
        self.bottom_right.x
    }

    pub fn bottom(&self) -> i32 {
        self.bottom_right.y
    }

    /// Signed horizontal extent between the corners, which may span the
    /// full `i32` range.
    pub fn width(&self) -> i64 {
        self.right() as i64 - self.left() as i64
    }

    /// Signed vertical extent between the corners.
    pub fn height(&self) -> i64 {
        self.bottom() as i64 - self.top() as i64
    }

    /// Integer midpoint of the two corners, truncated toward zero.
    pub fn center(&self) -> Point {
        Point::new(
            midpoint(self.left(), self.right()),
            midpoint(self.top(), self.bottom()),
        )
    }

    /// Same area with `top_left` <= `bottom_right` on both axes.
    pub fn normalized(&self) -> Rect {
        Rect::new(
            Point::new(self.left().min(self.right()), self.top().min(self.bottom())),
            Point::new(self.left().max(self.right()), self.top().max(self.bottom())),
        )
    }

    pub fn contains(&self, p: Point) -> bool {
        let n = self.normalized();
        p.x >= n.left() && p.x <= n.right() && p.y >= n.top() && p.y <= n.bottom()
    }

    /// Smallest rectangle containing every point, `None` for an empty slice.
    pub fn bounding(points: &[Point]) -> Option<Rect> {
        let first = *points.first()?;
        let (mut min, mut max) = (first, first);
        for p in &points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(Rect::new(min, max))
    }
}

fn midpoint(a: i32, b: i32) -> i32 {
    // The mean of two i32 values always fits back into i32.
    ((a as i64 + b as i64) / 2) as i32
}
