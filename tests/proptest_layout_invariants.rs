//! Property-based invariant tests for the layout engine.
//!
//! These tests verify structural invariants that must hold for any
//! well-formed board (unique IDs, snapped, pairwise non-overlapping):
//!
//! 1. No member of a non-overlapping board collides with the rest.
//! 2. An item never collides with a record sharing its ID.
//! 3. Position search returns a free, in-bounds, aligned slot whenever one
//!    exists within the search radius, and the fallback otherwise.
//! 4. Bump propagation never changes lanes and never touches other lanes.
//! 5. Backfill only moves items in the gap's lane, left by the gap width.
//! 6. The orchestrator returns every input item once, in order, with its
//!    payload, leaves its inputs untouched, and is deterministic.

use proptest::prelude::*;
use u_timeline::collision::check_collision;
use u_timeline::models::{DragTarget, GridSpec, Item, LayoutOptions, Position};
use u_timeline::search::{find_closest_valid_position, ring_offsets_between};
use u_timeline::{calculate_layout_outcome, resolve_backfill, resolve_bumps, Gap};

const CELL: i64 = 50;
const LANES: i64 = 4;
const GRID_CELLS: i64 = 24;

// ── Helpers ─────────────────────────────────────────────────────────────

/// Boards built lane by lane from (leading gap, width) pairs, so items
/// never overlap.
fn board() -> impl Strategy<Value = Vec<Item>> {
    proptest::collection::vec(
        proptest::collection::vec((0u32..3, 1u32..4), 0..5),
        LANES as usize,
    )
    .prop_map(|lanes| {
        let mut items = Vec::new();
        for (lane, runs) in lanes.into_iter().enumerate() {
            let mut cursor = 0i64;
            for (i, (gap, width)) in runs.into_iter().enumerate() {
                cursor += i64::from(gap) * CELL;
                items.push(
                    Item::new(format!("L{lane}-{i}"), cursor, lane as i64 * CELL, width)
                        .with_name(format!("item {lane}/{i}")),
                );
                cursor += i64::from(width) * CELL;
            }
        }
        items
    })
}

fn grid() -> GridSpec {
    GridSpec::new(CELL, GRID_CELLS * CELL, LANES * CELL)
}

fn cell_position() -> impl Strategy<Value = Position> {
    (0..GRID_CELLS - 4, 0..LANES).prop_map(|(cx, cy)| Position::new(cx * CELL, cy * CELL))
}

fn is_free(id: &str, pos: Position, width_units: u32, items: &[Item]) -> bool {
    !check_collision(&Item::new(id, pos.x, pos.y, width_units), items, CELL)
}

// ═════════════════════════════════════════════════════════════════════════
// 1-2. Collision detection
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn non_overlapping_board_has_no_collisions(items in board()) {
        for item in &items {
            prop_assert!(
                !check_collision(item, &items, CELL),
                "{} collides on a non-overlapping board", item.id
            );
        }
    }

    #[test]
    fn self_exclusion_ignores_geometry(
        items in board(),
        pick in any::<prop::sample::Index>(),
        pos in cell_position(),
        width in 1u32..6,
    ) {
        prop_assume!(!items.is_empty());
        let original = &items[pick.index(items.len())];
        let candidate = Item::new(original.id.clone(), pos.x, pos.y, width);
        prop_assert!(!check_collision(&candidate, std::slice::from_ref(original), CELL));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Position search
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn search_finds_free_slot_or_falls_back(
        items in board(),
        target in cell_position(),
        width in 1u32..4,
    ) {
        let grid = grid();
        let found = find_closest_valid_position("candidate", &items, target, width, &grid);

        let first_free = ring_offsets_between(0, 10)
            .map(|(dx, dy)| target.offset(dx * CELL, dy * CELL))
            .find(|&pos| grid.contains(pos, width) && is_free("candidate", pos, width, &items));

        if let Some(expected) = first_free {
            prop_assert_eq!(found, expected, "not the first free cell in ring order");
            prop_assert!(grid.contains(found, width));
            prop_assert!(is_free("candidate", found, width, &items));
            prop_assert_eq!(found.x % CELL, 0);
            prop_assert_eq!(found.y % CELL, 0);
        } else {
            prop_assert_eq!(found, Position::new(0, 0));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4-5. Displacement passes
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn bumps_stay_in_lane(
        items in board(),
        pick in any::<prop::sample::Index>(),
        new_cell in 0..GRID_CELLS,
    ) {
        prop_assume!(!items.is_empty());
        let moved = &items[pick.index(items.len())];
        let candidate = moved.moved_to(new_cell * CELL, moved.y);
        let world: Vec<Item> = items.iter().filter(|i| i.id != moved.id).cloned().collect();

        let out = resolve_bumps(std::slice::from_ref(&candidate), &world, CELL);
        prop_assert_eq!(out.len(), items.len());

        for before in &world {
            let after = out.iter().find(|i| i.id == before.id).unwrap();
            prop_assert_eq!(after.y, before.y);
            prop_assert!(after.x >= 0);
            if before.y != moved.y {
                prop_assert_eq!(after.x, before.x);
            }
        }
    }

    #[test]
    fn backfill_moves_only_gap_lane_left(
        items in board(),
        gap_cell in 0..GRID_CELLS,
        lane in 0..LANES,
        gap_width in 1u32..4,
    ) {
        let gap = Gap::new(gap_cell * CELL, lane * CELL, gap_width);
        let out = resolve_backfill(gap, &items, CELL);
        prop_assert_eq!(out.len(), items.len());

        for (before, after) in items.iter().zip(&out) {
            prop_assert_eq!(&before.id, &after.id);
            prop_assert_eq!(after.y, before.y);
            if after.x != before.x {
                prop_assert_eq!(before.y, gap.y);
                prop_assert_eq!(after.x, before.x - i64::from(gap_width) * CELL);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Orchestrator
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn outcome_is_complete_pure_and_deterministic(
        items in board(),
        pick in any::<prop::sample::Index>(),
        target in cell_position(),
        backfill in any::<bool>(),
        bump in any::<bool>(),
    ) {
        prop_assume!(!items.is_empty());
        let snapshot = items.clone();
        let dragged = &items[pick.index(items.len())];
        let drags = vec![DragTarget::new(dragged.id.clone(), target.x, target.y)];
        let grid = grid();
        let options = LayoutOptions::new(grid.width, grid.height)
            .with_backfill(backfill)
            .with_bump(bump);

        let first = calculate_layout_outcome(&drags, &items, CELL, &options);
        let second = calculate_layout_outcome(&drags, &items, CELL, &options);

        prop_assert_eq!(&items, &snapshot);
        prop_assert_eq!(&first, &second);
        prop_assert!(first.is_valid);
        prop_assert!(first.grid_width >= grid.width);
        prop_assert_eq!(first.items.len(), items.len());
        prop_assert_eq!(first.dragged_items.len(), 1);

        let overlapping = first
            .items
            .iter()
            .any(|item| check_collision(item, &first.items, CELL));
        if overlapping {
            prop_assert!(first.has_conflicts, "overlap left without has_conflicts");
        }
        if !bump {
            prop_assert_eq!(first.has_conflicts, overlapping);
        }

        for (before, after) in items.iter().zip(&first.items) {
            prop_assert_eq!(&before.id, &after.id);
            prop_assert_eq!(&before.name, &after.name);
            prop_assert_eq!(before.width_units, after.width_units);
            prop_assert_eq!(after.x % CELL, 0);
            prop_assert_eq!(after.y % CELL, 0);
        }
    }
}
