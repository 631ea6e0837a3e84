//! Engine tuning constants.
//!
//! [`LayoutConfig::default`] reproduces the stock behaviour; callers only
//! override it for unusually dense boards or coarse pointer snapping.

use serde::{Deserialize, Serialize};

/// Limits and tolerances used by the resolution passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Largest Chebyshev ring radius (cells) probed by position searches.
    pub search_radius: u32,
    /// Dequeue ceiling for bump propagation.
    pub max_bump_steps: usize,
    /// Rows match when their y offsets differ by less than this (px).
    pub row_tolerance: i64,
    /// Backfill chain links when the next start is off by less than this (px).
    pub chain_tolerance: i64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            search_radius: 10,
            max_bump_steps: 1000,
            row_tolerance: 1,
            chain_tolerance: 2,
        }
    }
}

impl LayoutConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search radius (cells).
    pub fn with_search_radius(mut self, radius: u32) -> Self {
        self.search_radius = radius;
        self
    }

    /// Sets the bump dequeue ceiling.
    pub fn with_max_bump_steps(mut self, steps: usize) -> Self {
        self.max_bump_steps = steps;
        self
    }

    /// Sets the row match tolerance (px).
    pub fn with_row_tolerance(mut self, px: i64) -> Self {
        self.row_tolerance = px;
        self
    }

    /// Sets the backfill chain tolerance (px).
    pub fn with_chain_tolerance(mut self, px: i64) -> Self {
        self.chain_tolerance = px;
        self
    }
}
