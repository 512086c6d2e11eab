//! # Item Store
//!
//! The authoritative ordered sequence of shopping items.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Item Store Operations                                │
//! │                                                                         │
//! │  User Action              Store Method            Sequence Change       │
//! │  ───────────              ────────────            ───────────────       │
//! │                                                                         │
//! │  Confirm "Add Item" ─────► create() ────────────► items.push(item)     │
//! │                                                                         │
//! │  Confirm "Save" ─────────► update() ────────────► items[i] replaced    │
//! │                                                                         │
//! │  Click delete on row ────► delete() ────────────► items.remove(i)      │
//! │                                                                         │
//! │  Render list ────────────► list() ──────────────► (read only)          │
//! │                                                                         │
//! │  NOTE: Empty name/quantity is rejected before any change.              │
//! │        Unknown ids make update/delete silent no-ops.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Id Assignment
//! [`IdPolicy::LengthPlusOne`] assigns `len + 1`, which repeats an id that is
//! still in use once an earlier row has been deleted:
//!
//! ```rust
//! use shoplist_core::{IdPolicy, ItemId, ItemStore};
//!
//! let mut store = ItemStore::with_policy(IdPolicy::LengthPlusOne);
//! store.create("Milk", "1").unwrap();
//! store.create("Bread", "1").unwrap();
//! store.delete(ItemId::new(1));
//! let eggs = store.create("Eggs", "12").unwrap();
//! assert_eq!(eggs.id, ItemId::new(2)); // same id as Bread
//! ```
//!
//! [`IdPolicy::Monotonic`] never hands out an id twice.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{ItemId, ShoppingItem};
use crate::validation::{validate_item_input, ValidationResult};

// =============================================================================
// Id Policy
// =============================================================================

/// How the store picks the id of a new item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
    /// `id = current length + 1`. Can collide after a deletion.
    #[default]
    #[serde(alias = "length")]
    LengthPlusOne,

    /// A counter starting at 1 that deletions never reset.
    Monotonic,
}

impl fmt::Display for IdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdPolicy::LengthPlusOne => write!(f, "length"),
            IdPolicy::Monotonic => write!(f, "monotonic"),
        }
    }
}

/// Returned when an id policy name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown id policy: '{0}'. Valid options: length, monotonic")]
pub struct ParseIdPolicyError(String);

impl FromStr for IdPolicy {
    type Err = ParseIdPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "length" | "length_plus_one" | "length-plus-one" => Ok(IdPolicy::LengthPlusOne),
            "monotonic" | "counter" => Ok(IdPolicy::Monotonic),
            other => Err(ParseIdPolicyError(other.to_string())),
        }
    }
}

// =============================================================================
// Item Store
// =============================================================================

/// The shopping list.
///
/// ## Invariants
/// - Items keep insertion order; updates replace values in place
/// - Ids never change after creation
/// - Under [`IdPolicy::Monotonic`] no two items share an id
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<ShoppingItem>,

    id_policy: IdPolicy,

    /// Next id under [`IdPolicy::Monotonic`].
    next_id: u32,
}

impl ItemStore {
    /// Creates an empty store using the given id policy.
    pub fn with_policy(id_policy: IdPolicy) -> Self {
        ItemStore {
            items: Vec::new(),
            id_policy,
            next_id: 1,
        }
    }

    /// Validates the input and appends a new item.
    ///
    /// ## Behavior
    /// - Name blank or quantity text empty: returns the error, list unchanged
    /// - Quantity text not a 32-bit integer: item gets quantity 0
    /// - Otherwise: new item appended at the end and returned
    pub fn create(&mut self, name: &str, quantity_text: &str) -> ValidationResult<ShoppingItem> {
        let (name, quantity) = validate_item_input(name, quantity_text)?;

        let item = ShoppingItem {
            id: self.assign_id(),
            name,
            quantity,
        };

        self.items.push(item.clone());
        Ok(item)
    }

    /// Replaces the name and quantity of the item with `id`.
    ///
    /// ## Returns
    /// - `Err` if the name is blank or the quantity text empty (checked before the id lookup)
    /// - `Ok(false)` if no item has this id; nothing changes
    /// - `Ok(true)` once the item has been replaced
    ///
    /// Should length-plus-one ids have collided, every item carrying `id` is
    /// replaced.
    pub fn update(&mut self, id: ItemId, name: &str, quantity_text: &str) -> ValidationResult<bool> {
        let (name, quantity) = validate_item_input(name, quantity_text)?;

        let mut applied = false;
        for item in self.items.iter_mut().filter(|i| i.id == id) {
            item.name = name.clone();
            item.quantity = quantity;
            applied = true;
        }

        Ok(applied)
    }

    /// Removes the first item with `id` and returns it, or `None` if absent.
    pub fn delete(&mut self, id: ItemId) -> Option<ShoppingItem> {
        let index = self.items.iter().position(|i| i.id == id)?;
        Some(self.items.remove(index))
    }

    /// All items in insertion order.
    pub fn list(&self) -> &[ShoppingItem] {
        &self.items
    }

    /// Looks up the first item with `id`.
    pub fn get(&self, id: ItemId) -> Option<&ShoppingItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn id_policy(&self) -> IdPolicy {
        self.id_policy
    }

    fn assign_id(&mut self) -> ItemId {
        match self.id_policy {
            IdPolicy::LengthPlusOne => {
                let len = u32::try_from(self.items.len()).unwrap_or(u32::MAX);
                ItemId::new(len.saturating_add(1))
            }
            IdPolicy::Monotonic => {
                // A default-constructed store starts from zero
                let id = self.next_id.max(1);
                self.next_id = id.saturating_add(1);
                ItemId::new(id)
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
