//! Request and result types for layout resolution.
//!
//! A request is a list of [`DragTarget`]s plus [`LayoutOptions`]; the
//! result is a [`LayoutOutcome`] holding the complete replacement layout.

use serde::{Deserialize, Serialize};

use super::Item;

/// Proposed target position for one dragged item.
///
/// For a multi-item drag the targets are already rigid offsets of the
/// anchor's target (see [`crate::drag::group_targets`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragTarget {
    /// Dragged item ID.
    pub id: String,
    /// Proposed x (px, snapped).
    pub target_x: i64,
    /// Proposed y (px, snapped).
    pub target_y: i64,
}

impl DragTarget {
    /// Creates a drag target.
    pub fn new(id: impl Into<String>, target_x: i64, target_y: i64) -> Self {
        Self {
            id: id.into(),
            target_x,
            target_y,
        }
    }
}

/// Per-call mode flags and current grid bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutOptions {
    /// Pull the contiguous chain right of a vacated slot left to close it.
    pub backfill: bool,
    /// Cascade pushes through colliding neighbours instead of relocating
    /// the dragged group.
    pub bump: bool,
    /// Current grid width (px).
    pub grid_width: i64,
    /// Current grid height (px).
    pub grid_height: i64,
}

impl LayoutOptions {
    /// Plain mode (no backfill, no bump) on a grid of the given bounds.
    pub fn new(grid_width: i64, grid_height: i64) -> Self {
        Self {
            backfill: false,
            bump: false,
            grid_width,
            grid_height,
        }
    }

    /// Enables or disables backfill mode.
    pub fn with_backfill(mut self, enabled: bool) -> Self {
        self.backfill = enabled;
        self
    }

    /// Enables or disables bump mode.
    pub fn with_bump(mut self, enabled: bool) -> Self {
        self.bump = enabled;
        self
    }
}

/// Authoritative result of a proposed move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutOutcome {
    /// Every input item exactly once, in input order, at its resolved position.
    pub items: Vec<Item>,
    /// `false` only when none of the dragged IDs were found.
    pub is_valid: bool,
    /// Final positions of the dragged set, in drag-target order.
    pub dragged_items: Vec<Item>,
    /// Grid width the caller should adopt (px). Never smaller than the
    /// width passed in.
    pub grid_width: i64,
    /// Whether the layout still contains collisions the engine gave up on.
    pub has_conflicts: bool,
}

impl LayoutOutcome {
    /// Outcome that leaves `items` unchanged and reports `is_valid = false`.
    pub fn rejected(items: &[Item], grid_width: i64) -> Self {
        Self {
            items: items.to_vec(),
            is_valid: false,
            dragged_items: Vec::new(),
            grid_width,
            has_conflicts: false,
        }
    }

    /// Finds a resolved item by ID.
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Whether the caller must widen the grid to fit the result.
    pub fn grid_grew(&self, previous_width: i64) -> bool {
        self.grid_width > previous_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builder() {
        let opts = LayoutOptions::new(1000, 300).with_backfill(true).with_bump(true);
        assert!(opts.backfill);
        assert!(opts.bump);
        assert_eq!(opts.grid_width, 1000);
        assert_eq!(opts.grid_height, 300);

        let plain = LayoutOptions::new(1000, 300);
        assert!(!plain.backfill && !plain.bump);
    }

    #[test]
    fn test_rejected_outcome() {
        let items = vec![Item::new("A", 0, 0, 1)];
        let outcome = LayoutOutcome::rejected(&items, 500);
        assert!(!outcome.is_valid);
        assert!(outcome.dragged_items.is_empty());
        assert_eq!(outcome.items, items);
        assert!(!outcome.grid_grew(500));
    }

    #[test]
    fn test_outcome_lookup() {
        let outcome = LayoutOutcome {
            items: vec![Item::new("A", 0, 0, 1), Item::new("B", 50, 0, 1)],
            is_valid: true,
            dragged_items: vec![],
            grid_width: 600,
            has_conflicts: false,
        };
        assert_eq!(outcome.item("B").map(|i| i.x), Some(50));
        assert!(outcome.item("Z").is_none());
        assert!(outcome.grid_grew(500));
    }

    #[test]
    fn test_options_json_shape() {
        let opts = LayoutOptions::new(800, 200).with_bump(true);
        let json = serde_json::to_value(opts).unwrap();
        assert_eq!(json["bump"], true);
        assert_eq!(json["backfill"], false);
        assert_eq!(json["grid_width"], 800);
    }
}
