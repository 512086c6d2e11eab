//! # Error Types
//!
//! Domain-specific error types for shoplist-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shoplist-core errors (this file)                                      │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Empty required form fields                     │
//! │                                                                         │
//! │  shell errors (apps/cli)                                               │
//! │  └── ApiError         - What the terminal shows (code + message)       │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Terminal               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Quantity parse failures are not errors: the quantity silently becomes
//! [`crate::FALLBACK_QUANTITY`].

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::ItemId;

// =============================================================================
// Form Fields
// =============================================================================

/// A field of the item form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Quantity,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::Quantity => write!(f, "quantity"),
        }
    }
}

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No item carries the given id.
    ///
    /// The store itself treats unknown ids as no-ops; this variant is for
    /// callers that need the item to exist, such as opening the edit form.
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// The name must be non-empty after trimming and the quantity text non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: Field },
}

impl ValidationError {
    /// The form field that failed validation.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Required { field } => *field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
