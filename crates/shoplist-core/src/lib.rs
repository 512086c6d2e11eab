//! # shoplist-core: Pure Reducer Logic for Shoplist
//!
//! This crate holds every state transition of the shopping list as plain
//! synchronous methods on owned state. It performs no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shoplist Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Terminal Shell (apps/cli)                    │   │
//! │  │    parse line ──► command ──► ListResponse ──► render           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ &mut ListState                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shoplist-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   store   │  │  session  │  │ validation│  │   │
//! │  │   │ Shopping  │  │ ItemStore │  │  Dialog   │  │  required │  │   │
//! │  │   │   Item    │  │  IdPolicy │  │ Controller│  │  fields   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO CONCURRENCY                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `ShoppingItem` and `ItemId`
//! - [`store`] - The ordered item sequence and its create/update/delete transitions
//! - [`session`] - The modal form's edit session and its confirm/cancel logic
//! - [`validation`] - Required-field checks and permissive quantity parsing
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use shoplist_core::{DialogController, ItemStore};
//!
//! let mut store = ItemStore::default();
//! let mut dialog = DialogController::new();
//!
//! dialog.open_for_create();
//! dialog.set_draft_name("Milk");
//! dialog.set_draft_quantity("2");
//! dialog.confirm(&mut store).unwrap();
//!
//! assert_eq!(store.list().len(), 1);
//! assert_eq!(store.list()[0].quantity, 2);
//! assert!(!dialog.is_open());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod session;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, Field, ValidationError};
pub use session::{ConfirmOutcome, DialogController, DialogMode, DialogState, Draft};
pub use store::{IdPolicy, ItemStore};
pub use types::{ItemId, ShoppingItem};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Quantity stored when the quantity text is not a valid integer.
///
/// Parsing is permissive: "a dozen" and "3000000000" become 0 rather than an error.
pub const FALLBACK_QUANTITY: i64 = 0;
