//! Collision detection.
//!
//! Two items collide when their bounding boxes overlap strictly on both
//! axes. Identity wins over geometry: an item never collides with another
//! record carrying its own ID, so a stale copy of the item being moved
//! never blocks it.

use crate::models::Item;

/// Whether `a` and `b` collide on a grid with the given cell size.
#[inline]
pub fn items_overlap(a: &Item, b: &Item, cell_size: i64) -> bool {
    a.id != b.id && a.rect(cell_size).overlaps(&b.rect(cell_size))
}

/// Whether `candidate` collides with any item in `others`.
pub fn check_collision(candidate: &Item, others: &[Item], cell_size: i64) -> bool {
    others
        .iter()
        .any(|other| items_overlap(candidate, other, cell_size))
}

/// IDs of every item in `others` that `candidate` collides with.
pub fn colliding_ids<'a>(candidate: &Item, others: &'a [Item], cell_size: i64) -> Vec<&'a str> {
    others
        .iter()
        .filter(|other| items_overlap(candidate, other, cell_size))
        .map(|other| other.id.as_str())
        .collect()
}
