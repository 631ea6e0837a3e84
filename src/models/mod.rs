//! Layout domain models.
//!
//! Plain data records exchanged with the engine. The engine never holds
//! on to them: every call borrows a snapshot and returns fresh copies.
//!
//! # Domain Mappings
//!
//! | u-timeline | Project planning | Broadcast | Manufacturing |
//! |------------|------------------|-----------|---------------|
//! | Item | Task bar | Programme slot | Job run |
//! | Lane (row) | Assignee | Channel | Machine |
//! | Cell | Day | Half hour | Shift |

mod geometry;
mod item;
mod outcome;

pub use geometry::{GridSpec, Position, Rect};
pub use item::Item;
pub use outcome::{DragTarget, LayoutOptions, LayoutOutcome};
