//! Lane/time grid layout engine for the U-Engine ecosystem.
//!
//! Places rectangular, time-spanning items on a discrete lane/time grid and
//! keeps the layout conflict-free while items are dragged around. Every
//! entry point is a pure function: it borrows a snapshot of the board and
//! returns a complete replacement, so preview and commit are the same call.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Item`, `Position`, `Rect`, `GridSpec`,
//!   `DragTarget`, `LayoutOptions`, `LayoutOutcome`
//! - **`collision`**: Strict AABB overlap with self-exclusion by ID
//! - **`search`**: Ring search for the nearest free, in-bounds slot
//! - **`resolve`**: Bump propagation and backfill compaction
//! - **`layout`**: `LayoutEngine`, the orchestrator composing the passes
//! - **`drag`**: Pointer snapping and rigid-group drag targets
//! - **`config`**: Search radius, bump ceiling, tolerances
//! - **`validation`**: Input integrity checks (duplicate IDs, snapping)
//!
//! # Guarantees
//!
//! Resolution is deterministic and locally greedy, not globally optimal.
//! Lanes never change during bump or backfill; the grid may need to grow
//! to the right, which is reported in the outcome rather than applied.

pub mod collision;
pub mod config;
pub mod drag;
pub mod layout;
pub mod models;
pub mod resolve;
pub mod search;
pub mod validation;

pub use collision::check_collision;
pub use config::LayoutConfig;
pub use layout::{calculate_layout_outcome, LayoutEngine};
pub use resolve::{resolve_backfill, resolve_bumps, Gap};
pub use search::find_closest_valid_position;
