//! # Domain Types
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            ShoppingItem                 │
//! │  ─────────────────────────────────────  │
//! │  id        ItemId (assigned at create)  │
//! │  name      String (as typed, not blank) │
//! │  quantity  i64    (0 if not an i32)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! `id` never changes after creation. `name` and `quantity` change only
//! through [`crate::ItemStore::update`].

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// =============================================================================
// Item Id
// =============================================================================

/// Identifier of a shopping item, displayed as a plain decimal number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u32);

impl ItemId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        ItemId(raw)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = ParseIntError;

    /// Accepts an optional leading `#`, as rows are rendered `#3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        s.strip_prefix('#').unwrap_or(s).parse().map(ItemId)
    }
}

// =============================================================================
// Shopping Item
// =============================================================================

/// An entry on the shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    /// Assigned by the store at creation.
    pub id: ItemId,

    /// Display name.
    pub name: String,

    /// Quantity to buy. May be zero or negative; the form does not restrict it.
    pub quantity: i64,
}

impl ShoppingItem {
    /// The quantity as the form shows it when editing.
    pub fn quantity_text(&self) -> String {
        self.quantity.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_parsing() {
        assert_eq!("3".parse::<ItemId>().unwrap(), ItemId::new(3));
        assert_eq!("#12".parse::<ItemId>().unwrap(), ItemId::new(12));
        assert_eq!(" 5 ".parse::<ItemId>().unwrap(), ItemId::new(5));
        assert!("".parse::<ItemId>().is_err());
        assert!("-1".parse::<ItemId>().is_err());
        assert!("milk".parse::<ItemId>().is_err());
    }

    #[test]
    fn test_quantity_text() {
        let item = ShoppingItem {
            id: ItemId::new(1),
            name: "Milk".to_string(),
            quantity: -4,
        };
        assert_eq!(item.quantity_text(), "-4");
    }

    #[test]
    fn test_item_serializes_camel_case_with_plain_id() {
        let item = ShoppingItem {
            id: ItemId::new(1),
            name: "Milk".to_string(),
            quantity: 2,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"id":1,"name":"Milk","quantity":2}"#);
    }
}
