//! Pixel coordinates on the canvas.

use serde::Serialize;

/// A pixel position, origin at the top-left of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned square on the canvas, from `top_left` to `bottom_right`.
///
/// Both corners are part of the region when it is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PixelRegion {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl PixelRegion {
    pub const fn new(top_left: Point, bottom_right: Point) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Horizontal distance between the corners. Zero for an inverted region.
    pub fn width(&self) -> u32 {
        self.bottom_right.x.saturating_sub(self.top_left.x)
    }

    /// Vertical distance between the corners. Zero for an inverted region.
    pub fn height(&self) -> u32 {
        self.bottom_right.y.saturating_sub(self.top_left.y)
    }

    /// Geometric area (`width * height`).
    pub fn area(&self) -> u32 {
        self.width().saturating_mul(self.height())
    }

    /// Whether a pixel falls inside the region (corners inclusive).
    pub fn contains(&self, x: u32, y: u32) -> bool {
        (self.top_left.x..=self.bottom_right.x).contains(&x)
            && (self.top_left.y..=self.bottom_right.y).contains(&y)
    }

    /// Whether two regions share at least one pixel.
    pub fn intersects(&self, other: &PixelRegion) -> bool {
        self.top_left.x <= other.bottom_right.x
            && other.top_left.x <= self.bottom_right.x
            && self.top_left.y <= other.bottom_right.y
            && other.top_left.y <= self.bottom_right.y
    }
}
