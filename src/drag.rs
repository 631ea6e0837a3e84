//! Drag input helpers.
//!
//! Converts raw pointer offsets into the snapped, rigid-group targets that
//! [`crate::layout::calculate_layout_outcome`] expects.

use std::collections::HashSet;

use crate::models::{DragTarget, Item, Position};

/// Rounds a pixel offset to the nearest multiple of `cell_size`.
///
/// Halfway values round away from zero. A non-positive cell size leaves
/// the offset unchanged.
pub fn snap_to_grid(px: i64, cell_size: i64) -> i64 {
    if cell_size <= 0 {
        return px;
    }
    let value = i128::from(px);
    let cell = i128::from(cell_size);
    let mut snapped = (value.abs() * 2 + cell) / (2 * cell) * cell;
    if value < 0 {
        snapped = -snapped;
    }
    // Rounding past the i64 range falls back to the next multiple inward.
    i64::try_from(snapped).unwrap_or_else(|_| (snapped - snapped.signum() * cell) as i64)
}

/// Snaps both coordinates of `pos`.
pub fn snap_position(pos: Position, cell_size: i64) -> Position {
    Position::new(snap_to_grid(pos.x, cell_size), snap_to_grid(pos.y, cell_size))
}

/// Builds drag targets for a multi-item selection moving rigidly with its
/// anchor.
///
/// The anchor comes first, followed by the rest of `selection` in order.
/// Unknown IDs and repeats are dropped. Returns nothing if the anchor is
/// not among `items`.
pub fn group_targets<S: AsRef<str>>(
    anchor_id: &str,
    anchor_target: Position,
    selection: &[S],
    items: &[Item],
) -> Vec<DragTarget> {
    let Some(anchor) = items.iter().find(|i| i.id == anchor_id) else {
        return Vec::new();
    };
    let dx = anchor_target.x - anchor.x;
    let dy = anchor_target.y - anchor.y;

    let mut seen: HashSet<&str> = HashSet::new();
    seen.insert(anchor_id);
    let mut targets = vec![DragTarget::new(anchor_id, anchor_target.x, anchor_target.y)];

    for member_id in selection {
        let id: &str = member_id.as_ref();
        if !seen.insert(id) {
            continue;
        }
        if let Some(member) = items.iter().find(|i| i.id == id) {
            targets.push(DragTarget::new(id, member.x + dx, member.y + dy));
        }
    }
    targets
}
