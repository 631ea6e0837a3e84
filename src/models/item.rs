//! Item model.
//!
//! An item is a rectangular, time-spanning unit of work placed on the
//! lane/time grid. Its horizontal extent is `width_units` cells; its
//! vertical extent is always exactly one cell (one lane).
//!
//! # Coordinates
//! `x` (time axis) and `y` (lane axis) are pixel offsets from the grid
//! origin. Items at rest are snapped: both are multiples of the cell size.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Position, Rect};

/// A work item placed on the lane/time grid.
///
/// `name`, `color` and `attributes` are display payload. The layout engine
/// carries them through every operation untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique, stable item identifier.
    pub id: String,
    /// Pixel offset along the time axis.
    pub x: i64,
    /// Pixel offset along the lane axis.
    pub y: i64,
    /// Horizontal span in grid cells (positive).
    pub width_units: u32,
    /// Human-readable label.
    #[serde(default)]
    pub name: String,
    /// Display color (e.g. `"#3b82f6"`).
    #[serde(default)]
    pub color: Option<String>,
    /// Domain-specific metadata.
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

impl Item {
    /// Creates a new item at `(x, y)` spanning `width_units` cells.
    pub fn new(id: impl Into<String>, x: i64, y: i64, width_units: u32) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            width_units,
            name: String::new(),
            color: None,
            attributes: HashMap::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Adds a domain-specific attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Width in pixels.
    #[inline]
    pub fn width_px(&self, cell_size: i64) -> i64 {
        i64::from(self.width_units) * cell_size
    }

    /// Pixel x of the right edge (exclusive).
    #[inline]
    pub fn right_edge(&self, cell_size: i64) -> i64 {
        self.x + self.width_px(cell_size)
    }

    /// Twice the horizontal center, kept integral for exact comparisons.
    #[inline]
    pub(crate) fn double_center_x(&self, cell_size: i64) -> i64 {
        2 * self.x + self.width_px(cell_size)
    }

    /// Current top-left position.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    /// Bounding box on a grid with the given cell size.
    pub fn rect(&self, cell_size: i64) -> Rect {
        Rect::new(self.x, self.y, self.width_px(cell_size), cell_size)
    }

    /// Returns a copy of this item moved to `(x, y)`, payload included.
    pub fn moved_to(&self, x: i64, y: i64) -> Self {
        Self {
            x,
            y,
            ..self.clone()
        }
    }
}
