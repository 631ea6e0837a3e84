//! Backfill compaction.
//!
//! When an item leaves its slot, the run of items packed immediately to
//! the right of the hole slides left to close it. A block separated from
//! the hole by its own gap stays where it is.
//!
//! # Algorithm
//!
//! 1. Collect items in the gap's lane whose x ≥ the gap's right edge.
//! 2. Sort them by x (stable).
//! 3. Walk from the gap's right edge: while the next item starts where the
//!    previous one ended (within `chain_tolerance`), add it to the chain.
//! 4. Shift every chained item left by the gap width.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::config::LayoutConfig;
use crate::models::{Item, Rect};

/// A vacated span in one lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gap {
    /// Left edge (px).
    pub x: i64,
    /// Lane offset (px).
    pub y: i64,
    /// Width in cells.
    pub width_units: u32,
}

impl Gap {
    /// Creates a gap.
    pub const fn new(x: i64, y: i64, width_units: u32) -> Self {
        Self { x, y, width_units }
    }

    /// The footprint `item` occupied before it moved.
    pub fn left_by(item: &Item) -> Self {
        Self::new(item.x, item.y, item.width_units)
    }

    /// Width in pixels.
    #[inline]
    pub fn width_px(&self, cell_size: i64) -> i64 {
        i64::from(self.width_units) * cell_size
    }

    /// Right edge (px, exclusive).
    #[inline]
    pub fn right_edge(&self, cell_size: i64) -> i64 {
        self.x + self.width_px(cell_size)
    }

    /// Bounding box of the gap.
    pub fn rect(&self, cell_size: i64) -> Rect {
        Rect::new(self.x, self.y, self.width_px(cell_size), cell_size)
    }
}

/// Closes `gap` with the default [`LayoutConfig`].
pub fn resolve_backfill(gap: Gap, items: &[Item], cell_size: i64) -> Vec<Item> {
    resolve_backfill_with(gap, items, cell_size, &LayoutConfig::default())
}

/// Closes `gap` by sliding the adjacent contiguous chain left.
///
/// Returns fresh copies of `items` in input order; only chained items move.
pub fn resolve_backfill_with(
    gap: Gap,
    items: &[Item],
    cell_size: i64,
    config: &LayoutConfig,
) -> Vec<Item> {
    let chain = contiguous_chain(gap, items, cell_size, config);
    let shift = gap.width_px(cell_size);

    items
        .iter()
        .map(|item| {
            if chain.contains(item.id.as_str()) {
                tracing::trace!(item = %item.id, from = item.x, to = item.x - shift, "backfill");
                item.moved_to(item.x - shift, item.y)
            } else {
                item.clone()
            }
        })
        .collect()
}

/// IDs of the run packed against the gap's right edge.
fn contiguous_chain<'a>(
    gap: Gap,
    items: &'a [Item],
    cell_size: i64,
    config: &LayoutConfig,
) -> HashSet<&'a str> {
    let gap_right = gap.right_edge(cell_size);

    let mut lane: Vec<&Item> = items
        .iter()
        .filter(|item| (item.y - gap.y).abs() < config.row_tolerance && item.x >= gap_right)
        .collect();
    lane.sort_by_key(|item| item.x);

    let mut chain = HashSet::new();
    let mut expected = gap_right;
    for item in lane {
        if (item.x - expected).abs() >= config.chain_tolerance {
            break;
        }
        chain.insert(item.id.as_str());
        expected = item.right_edge(cell_size);
    }
    chain
}
