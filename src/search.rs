//! Nearest free slot search.
//!
//! # Algorithm
//!
//! 1. If the target is collision-free, keep it.
//! 2. Otherwise scan concentric square rings of Chebyshev radius
//!    `r = 1..=search_radius` (in cells) around the target.
//! 3. Within a ring, iterate `dx` from `-r` to `r`, and for each `dx`
//!    iterate `dy` from `-r` to `r`, keeping only cells on the ring
//!    (`max(|dx|, |dy|) == r`). This order is the tie-break between
//!    equally distant free cells.
//! 4. Skip out-of-bounds candidates; return the first free one.
//! 5. If none is free, fall back to the item's current position, or the
//!    origin when the item is unknown. The search never fails.
//!
//! # Complexity
//! O(R² · n) where R = search radius, n = items. Exits at the first hit.

use crate::collision::check_collision;
use crate::config::LayoutConfig;
use crate::models::{GridSpec, Item, Position};

/// Cell offsets on the ring of Chebyshev radius `radius`, in search order.
///
/// Radius 0 yields the single offset `(0, 0)`.
pub fn ring_offsets(radius: i64) -> impl Iterator<Item = (i64, i64)> {
    (-radius..=radius).flat_map(move |dx| {
        (-radius..=radius)
            .filter(move |dy| dx.abs().max(dy.abs()) == radius)
            .map(move |dy| (dx, dy))
    })
}

/// Cell offsets on every ring from `first` to `last` inclusive.
pub fn ring_offsets_between(first: i64, last: i64) -> impl Iterator<Item = (i64, i64)> {
    (first..=last).flat_map(ring_offsets)
}

/// Finds the nearest collision-free, in-bounds slot for item `id`.
///
/// Uses the default [`LayoutConfig`].
pub fn find_closest_valid_position(
    id: &str,
    items: &[Item],
    target: Position,
    width_units: u32,
    grid: &GridSpec,
) -> Position {
    find_closest_valid_position_with(
        id,
        items,
        target,
        width_units,
        grid,
        &LayoutConfig::default(),
    )
}

/// Finds the nearest collision-free, in-bounds slot for item `id`,
/// probing up to `config.search_radius` rings.
pub fn find_closest_valid_position_with(
    id: &str,
    items: &[Item],
    target: Position,
    width_units: u32,
    grid: &GridSpec,
    config: &LayoutConfig,
) -> Position {
    let cell = grid.cell_size;
    let mut footprint = Item::new(id, target.x, target.y, width_units);
    if !check_collision(&footprint, items, cell) {
        return target;
    }

    for (dx, dy) in ring_offsets_between(1, i64::from(config.search_radius)) {
        let candidate = target.offset(dx * cell, dy * cell);
        if !grid.contains(candidate, width_units) {
            continue;
        }
        footprint.x = candidate.x;
        footprint.y = candidate.y;
        if !check_collision(&footprint, items, cell) {
            return candidate;
        }
    }

    let fallback = items
        .iter()
        .find(|item| item.id == id)
        .map(Item::position)
        .unwrap_or_default();
    tracing::debug!(
        id,
        target_x = target.x,
        target_y = target.y,
        fallback_x = fallback.x,
        fallback_y = fallback.y,
        "no free slot within search radius, falling back"
    );
    fallback
}
