//! Grid geometry primitives.
//!
//! All geometry is in integer pixels. Boxes are half-open: a box at
//! `x = 0` with `width = 100` covers `[0, 100)`, so two boxes that only
//! share an edge do not overlap.

use serde::{Deserialize, Serialize};

/// A top-left pixel position on the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Time-axis offset (px).
    pub x: i64,
    /// Lane-axis offset (px).
    pub y: i64,
}

impl Position {
    /// Creates a position.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Position shifted by `(dx, dy)` pixels.
    #[inline]
    pub fn offset(self, dx: i64, dy: i64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    /// Creates a rectangle.
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> i64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> i64 {
        self.y + self.height
    }

    /// Strict overlap on both axes. Touching edges do not count.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// Grid parameters: cell edge and current pixel bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Pixel edge of one cell.
    pub cell_size: i64,
    /// Current grid width (px).
    pub width: i64,
    /// Current grid height (px).
    pub height: i64,
}

impl GridSpec {
    /// Creates grid parameters.
    pub const fn new(cell_size: i64, width: i64, height: i64) -> Self {
        Self {
            cell_size,
            width,
            height,
        }
    }

    /// Whether an item of `width_units` cells at `pos` lies fully inside
    /// `[0, width] x [0, height]`.
    pub fn contains(&self, pos: Position, width_units: u32) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && pos.x + i64::from(width_units) * self.cell_size <= self.width
            && pos.y + self.cell_size <= self.height
    }
}
