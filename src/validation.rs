//! Input validation for layout requests.
//!
//! The engine trusts its inputs and never fails; callers that load items
//! from outside (saved boards, imports) run these checks first. Detects:
//! - Duplicate item IDs
//! - Zero-width items
//! - Negative or unsnapped coordinates
//! - Non-positive cell size
//! - Drag targets naming unknown or repeated items

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{DragTarget, Item};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationErrorKind {
    /// Two items (or two drag targets) share the same ID.
    #[error("duplicate id")]
    DuplicateId,
    /// An item spans zero cells.
    #[error("zero width")]
    ZeroWidth,
    /// An item sits off the cell grid.
    #[error("unaligned position")]
    UnalignedPosition,
    /// An item sits left of or above the grid origin.
    #[error("negative position")]
    NegativePosition,
    /// The cell size is zero or negative.
    #[error("invalid cell size")]
    InvalidCellSize,
    /// A drag target names an item that does not exist.
    #[error("unknown item")]
    UnknownItem,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates an item set before handing it to the engine.
///
/// Checks:
/// 1. Cell size is positive
/// 2. No duplicate item IDs
/// 3. Every item spans at least one cell
/// 4. No negative coordinates
/// 5. Coordinates are multiples of the cell size
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_items(items: &[Item], cell_size: i64) -> ValidationResult {
    let mut errors = Vec::new();

    if cell_size <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidCellSize,
            format!("Cell size must be positive, got {cell_size}"),
        ));
    }

    let mut ids = HashSet::new();
    for item in items {
        if !ids.insert(item.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate item ID: {}", item.id),
            ));
        }

        if item.width_units == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroWidth,
                format!("Item '{}' has zero width", item.id),
            ));
        }

        if item.x < 0 || item.y < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativePosition,
                format!("Item '{}' at ({}, {}) is outside the grid", item.id, item.x, item.y),
            ));
        }

        if cell_size > 0 && (item.x % cell_size != 0 || item.y % cell_size != 0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnalignedPosition,
                format!(
                    "Item '{}' at ({}, {}) is not aligned to {}px cells",
                    item.id, item.x, item.y, cell_size
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates drag targets against the item set.
///
/// Checks that every target names an existing item and that no item is
/// targeted twice.
pub fn validate_drag_targets(targets: &[DragTarget], items: &[Item]) -> ValidationResult {
    let known: HashSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
    let mut seen = HashSet::new();
    let mut errors = Vec::new();

    for target in targets {
        if !known.contains(target.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownItem,
                format!("Drag target references unknown item '{}'", target.id),
            ));
        } else if !seen.insert(target.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Item '{}' is dragged more than once", target.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
