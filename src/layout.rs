//! Layout outcome orchestration.
//!
//! The single entry point the drag layer calls: once per pointer move for a
//! preview, once on release for the commit. Both calls are the same pure
//! computation; the caller decides whether to adopt the result.
//!
//! # Algorithm
//!
//! 1. Resolve each drag target against the authoritative items. Unknown
//!    IDs are skipped; if none resolve, the outcome is rejected.
//! 2. Everything not dragged forms the world.
//! 3. Backfill mode: every dragged item whose target box no longer overlaps
//!    its original box leaves a gap. Gaps are closed rightmost first, each
//!    pass feeding the next.
//! 4. Bump mode: dragged items bump the world.
//!    Plain mode: if any dragged item collides, search rings around the
//!    targets for an offset that places the whole group collision-free and
//!    in bounds; keep the targets if there is none.
//! 5. Merge world and dragged items back into input order.

use std::collections::{HashMap, HashSet};

use crate::collision::check_collision;
use crate::config::LayoutConfig;
use crate::models::{DragTarget, GridSpec, Item, LayoutOptions, LayoutOutcome};
use crate::resolve::{propagate_bumps, resolve_backfill_with, Gap};
use crate::search::ring_offsets_between;

/// Stateless layout resolver.
///
/// # Example
///
/// ```
/// use u_timeline::layout::LayoutEngine;
/// use u_timeline::models::{DragTarget, Item, LayoutOptions};
///
/// let items = vec![
///     Item::new("A", 0, 0, 2),
///     Item::new("B", 100, 0, 2),
///     Item::new("C", 200, 0, 2),
/// ];
/// let options = LayoutOptions::new(1000, 200).with_backfill(true);
///
/// let engine = LayoutEngine::new();
/// let outcome = engine.calculate(&[DragTarget::new("B", 200, 0)], &items, 50, &options);
///
/// assert!(outcome.is_valid);
/// assert_eq!(outcome.item("C").unwrap().x, 100);
/// assert_eq!(outcome.item("B").unwrap().x, 200);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    /// Creates an engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the engine configuration.
    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Computes the full layout resulting from moving the dragged items to
    /// their targets.
    pub fn calculate(
        &self,
        drags: &[DragTarget],
        items: &[Item],
        cell_size: i64,
        options: &LayoutOptions,
    ) -> LayoutOutcome {
        let by_id: HashMap<&str, &Item> = items.iter().map(|i| (i.id.as_str(), i)).collect();

        let mut dragged_ids: HashSet<&str> = HashSet::new();
        let mut originals: Vec<&Item> = Vec::new();
        let mut dragged: Vec<Item> = Vec::new();
        for drag in drags {
            let Some(&original) = by_id.get(drag.id.as_str()) else {
                continue;
            };
            if !dragged_ids.insert(original.id.as_str()) {
                continue;
            }
            originals.push(original);
            dragged.push(original.moved_to(drag.target_x, drag.target_y));
        }

        if dragged.is_empty() {
            tracing::debug!(requested = drags.len(), "no dragged item resolved");
            return LayoutOutcome::rejected(items, options.grid_width);
        }

        let mut world: Vec<Item> = items
            .iter()
            .filter(|i| !dragged_ids.contains(i.id.as_str()))
            .cloned()
            .collect();

        if options.backfill {
            world = self.backfill_vacancies(&originals, &dragged, world, cell_size);
        }

        let mut has_conflicts = false;
        if options.bump {
            let resolution = propagate_bumps(&dragged, &world, cell_size, &self.config);
            has_conflicts = resolution.exhausted || resolution.overlapping;
            let (bumped, rest): (Vec<Item>, Vec<Item>) = resolution
                .items
                .into_iter()
                .partition(|i| dragged_ids.contains(i.id.as_str()));
            dragged = bumped;
            world = rest;
        } else if dragged.iter().any(|d| check_collision(d, &world, cell_size)) {
            match self.relocate_group(&dragged, &world, cell_size, options) {
                Some((dx, dy)) => {
                    for item in &mut dragged {
                        item.x += dx;
                        item.y += dy;
                    }
                }
                None => {
                    tracing::debug!(
                        dragged = dragged.len(),
                        "no collision-free group placement, keeping targets"
                    );
                    has_conflicts = true;
                }
            }
        }

        let resolved: HashMap<&str, &Item> = world
            .iter()
            .chain(&dragged)
            .map(|i| (i.id.as_str(), i))
            .collect();
        let layout: Vec<Item> = items
            .iter()
            .map(|i| {
                resolved
                    .get(i.id.as_str())
                    .map_or_else(|| i.clone(), |&r| r.clone())
            })
            .collect();
        let grid_width = required_grid_width(&layout, cell_size, options.grid_width);

        tracing::debug!(
            dragged = dragged.len(),
            backfill = options.backfill,
            bump = options.bump,
            has_conflicts,
            grid_width,
            "layout resolved"
        );

        LayoutOutcome {
            items: layout,
            is_valid: true,
            dragged_items: dragged,
            grid_width,
            has_conflicts,
        }
    }

    /// Closes the slots vacated by dragged items, rightmost first.
    ///
    /// An item whose target box still overlaps its original box by any
    /// amount did not vacate anything.
    fn backfill_vacancies(
        &self,
        originals: &[&Item],
        dragged: &[Item],
        world: Vec<Item>,
        cell_size: i64,
    ) -> Vec<Item> {
        let mut gaps: Vec<Gap> = originals
            .iter()
            .zip(dragged)
            .filter(|(original, moved)| !original.rect(cell_size).overlaps(&moved.rect(cell_size)))
            .map(|(original, _)| Gap::left_by(original))
            .collect();
        gaps.sort_by(|a, b| b.x.cmp(&a.x));

        gaps.into_iter().fold(world, |world, gap| {
            resolve_backfill_with(gap, &world, cell_size, &self.config)
        })
    }

    /// Finds the first ring offset (px) that places every dragged item
    /// collision-free and inside the grid.
    fn relocate_group(
        &self,
        dragged: &[Item],
        world: &[Item],
        cell_size: i64,
        options: &LayoutOptions,
    ) -> Option<(i64, i64)> {
        let grid = GridSpec::new(cell_size, options.grid_width, options.grid_height);
        ring_offsets_between(0, i64::from(self.config.search_radius))
            .map(|(dx, dy)| (dx * cell_size, dy * cell_size))
            .find(|&(dx, dy)| {
                dragged.iter().all(|member| {
                    let pos = member.position().offset(dx, dy);
                    let footprint = Item::new(member.id.as_str(), pos.x, pos.y, member.width_units);
                    grid.contains(pos, member.width_units)
                        && !check_collision(&footprint, world, cell_size)
                })
            })
    }
}

/// Resolves a proposed move with the default [`LayoutConfig`].
pub fn calculate_layout_outcome(
    drags: &[DragTarget],
    items: &[Item],
    cell_size: i64,
    options: &LayoutOptions,
) -> LayoutOutcome {
    LayoutEngine::default().calculate(drags, items, cell_size, options)
}

/// Grid width needed to show every item: the rightmost item edge, or
/// `current` if that is already wider.
pub fn required_grid_width(items: &[Item], cell_size: i64, current: i64) -> i64 {
    items
        .iter()
        .map(|i| i.right_edge(cell_size))
        .fold(current, i64::max)
}
