//! Bump propagation.
//!
//! Candidates are placed at their decided targets; anything they overlap is
//! pushed out of the way along the time axis, and every pushed item becomes
//! a bumper in turn.
//!
//! # Algorithm
//!
//! 1. Track clones of world ∪ candidates by ID (insertion ordered).
//! 2. Seed a FIFO queue with the candidates.
//! 3. Dequeue a bumper. For each other tracked item overlapping it:
//!    - bumper center ≤ item center: item's left edge := bumper's right edge
//!    - otherwise: item's right edge := bumper's left edge
//!    - clamp x to ≥ 0; enqueue the item if it moved.
//! 4. Stop when the queue drains or the dequeue ceiling is reached.
//!
//! Lanes never change. There is no right-edge clamp: the grid grows to fit
//! and the caller is told through the outcome.
//!
//! # Complexity
//! O(s · n) where s = dequeues (≤ ceiling), n = tracked items.

use indexmap::IndexMap;
use std::collections::{HashSet, VecDeque};

use crate::collision::check_collision;
use crate::config::LayoutConfig;
use crate::models::Item;

/// Result of a bump propagation pass.
#[derive(Debug, Clone)]
pub struct BumpResolution {
    /// World items (input order) followed by candidates, at resolved positions.
    pub items: Vec<Item>,
    /// Number of bumpers processed.
    pub steps: usize,
    /// Whether the dequeue ceiling stopped propagation early.
    pub exhausted: bool,
    /// Whether a candidate or pushed item still overlaps another item,
    /// e.g. after a left push clamped at the origin.
    pub overlapping: bool,
}

/// Resolves bumps with the default [`LayoutConfig`].
pub fn resolve_bumps(candidates: &[Item], world: &[Item], cell_size: i64) -> Vec<Item> {
    propagate_bumps(candidates, world, cell_size, &LayoutConfig::default()).items
}

/// Cascades pushes from `candidates` through `world`.
pub fn propagate_bumps(
    candidates: &[Item],
    world: &[Item],
    cell_size: i64,
    config: &LayoutConfig,
) -> BumpResolution {
    let mut tracked: IndexMap<String, Item> =
        IndexMap::with_capacity(world.len() + candidates.len());
    for item in world.iter().chain(candidates) {
        tracked.insert(item.id.clone(), item.clone());
    }

    let mut queue: VecDeque<String> = candidates.iter().map(|c| c.id.clone()).collect();
    let mut touched: HashSet<String> = queue.iter().cloned().collect();
    let mut steps = 0;
    let mut exhausted = false;

    while !queue.is_empty() {
        if steps >= config.max_bump_steps {
            exhausted = true;
            tracing::warn!(
                steps,
                pending = queue.len(),
                "bump propagation hit its step ceiling"
            );
            break;
        }
        steps += 1;

        let Some(bumper) = queue.pop_front().and_then(|id| tracked.get(&id).cloned()) else {
            continue;
        };
        let bumper_rect = bumper.rect(cell_size);
        let bumper_center = bumper.double_center_x(cell_size);

        for (id, connection) in tracked.iter_mut() {
            if *id == bumper.id || !bumper_rect.overlaps(&connection.rect(cell_size)) {
                continue;
            }

            let new_x = if bumper_center <= connection.double_center_x(cell_size) {
                bumper.right_edge(cell_size)
            } else {
                bumper.x - connection.width_px(cell_size)
            }
            .max(0);

            if new_x != connection.x {
                tracing::trace!(bumper = %bumper.id, item = %id, from = connection.x, to = new_x, "bump");
                connection.x = new_x;
                touched.insert(id.clone());
                queue.push_back(id.clone());
            }
        }
    }

    let items: Vec<Item> = tracked.into_values().collect();
    let overlapping = items
        .iter()
        .filter(|item| touched.contains(&item.id))
        .any(|item| check_collision(item, &items, cell_size));

    BumpResolution {
        items,
        steps,
        exhausted,
        overlapping,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CELL: i64 = 50;

    fn x_of(items: &[Item], id: &str) -> i64 {
        items.iter().find(|i| i.id == id).unwrap().x
    }

    #[test]
    fn test_push_right() {
        let world = vec![Item::new("B", 100, 0, 2)];
        let moved = vec![Item::new("A", 80, 0, 2)];

        let out = resolve_bumps(&moved, &world, CELL);
        assert_eq!(x_of(&out, "A"), 80);
        assert_eq!(x_of(&out, "B"), 180); // A's right edge
    }

    #[test]
    fn test_chain_propagation() {
        let world = vec![Item::new("B", 100, 0, 2), Item::new("C", 200, 0, 2)];
        let moved = vec![Item::new("A", 50, 0, 2)];

        let out = resolve_bumps(&moved, &world, CELL);
        assert_eq!(x_of(&out, "B"), 150);
        assert_eq!(x_of(&out, "C"), 250);
    }

    #[test]
    fn test_push_left() {
        let world = vec![Item::new("B", 100, 0, 2)];
        let moved = vec![Item::new("A", 150, 0, 2)];

        let out = resolve_bumps(&moved, &world, CELL);
        assert_eq!(x_of(&out, "B"), 50); // right edge meets A's left edge
    }

    #[test]
    fn test_push_left_clamps_at_zero() {
        let world = vec![Item::new("B", 0, 0, 4)];
        let moved = vec![Item::new("A", 150, 0, 1)];

        let res = propagate_bumps(&moved, &world, CELL, &LayoutConfig::default());
        assert_eq!(x_of(&res.items, "B"), 0);
        assert_eq!(x_of(&res.items, "A"), 150);
        assert!(res.overlapping);
        assert!(!res.exhausted);
    }

    #[test]
    fn test_other_rows_untouched() {
        let world = vec![Item::new("B", 100, 50, 2), Item::new("C", 100, 0, 2)];
        let moved = vec![Item::new("A", 80, 0, 2)];

        let out = resolve_bumps(&moved, &world, CELL);
        let b = out.iter().find(|i| i.id == "B").unwrap();
        assert_eq!((b.x, b.y), (100, 50));
        assert_eq!(x_of(&out, "C"), 180);
        assert!(out.iter().all(|i| i.id == "B" || i.y == 0));
    }

    #[test]
    fn test_output_order_and_payload() {
        let world = vec![
            Item::new("B", 100, 0, 2).with_name("Beta").with_color("#00f"),
            Item::new("Z", 500, 0, 1),
        ];
        let moved = vec![Item::new("A", 80, 0, 2)];

        let out = resolve_bumps(&moved, &world, CELL);
        let ids: Vec<_> = out.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "Z", "A"]);
        assert_eq!(out[0].name, "Beta");
        assert_eq!(out[0].color.as_deref(), Some("#00f"));
        // Inputs untouched
        assert_eq!(world[0].x, 100);
    }

    #[test]
    fn test_step_ceiling() {
        let world = vec![Item::new("B", 100, 0, 2), Item::new("C", 200, 0, 2)];
        let moved = vec![Item::new("A", 50, 0, 2)];
        let cfg = LayoutConfig::new().with_max_bump_steps(1);

        let res = propagate_bumps(&moved, &world, CELL, &cfg);
        assert!(res.exhausted);
        assert_eq!(res.steps, 1);
        assert_eq!(x_of(&res.items, "B"), 150);
        assert_eq!(x_of(&res.items, "C"), 200); // B never got to bump
    }

    #[test]
    fn test_no_overlap_no_steps_beyond_candidates() {
        let world = vec![Item::new("B", 300, 0, 2)];
        let moved = vec![Item::new("A", 0, 0, 2)];

        let res = propagate_bumps(&moved, &world, CELL, &LayoutConfig::default());
        assert!(!res.exhausted);
        assert!(!res.overlapping);
        assert_eq!(res.steps, 1);
        assert_eq!(x_of(&res.items, "B"), 300);
    }
}
