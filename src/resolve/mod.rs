//! Displacement passes.
//!
//! Two complementary policies for keeping a lane conflict-free after a
//! move:
//!
//! - **Bump** ([`resolve_bumps`]): the moved items win; whatever they hit is
//!   pushed aside, transitively.
//! - **Backfill** ([`resolve_backfill`]): the slot an item left behind is
//!   closed by pulling the adjacent run left.
//!
//! Both are pure: they clone their inputs and return a fresh item set.

mod backfill;
mod bump;

pub use backfill::{resolve_backfill, resolve_backfill_with, Gap};
pub use bump::{propagate_bumps, resolve_bumps, BumpResolution};
