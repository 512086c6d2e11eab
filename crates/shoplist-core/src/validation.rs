//! # Validation Module
//!
//! Input handling for the item form.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Form field        Rule                         On failure              │
//! │  ──────────        ────                         ──────────              │
//! │  name              non-empty after trim         ValidationError         │
//! │  quantity text     non-empty                    ValidationError         │
//! │  quantity value    parses as 32-bit integer     becomes 0 (no error)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shoplist_core::validation::{parse_quantity, validate_item_input};
//!
//! let (name, qty) = validate_item_input(" Milk ", "2").unwrap();
//! assert_eq!(name, " Milk ");
//! assert_eq!(qty, 2);
//!
//! assert_eq!(parse_quantity("lots"), 0);
//! assert_eq!(parse_quantity(" 5"), 0);
//! assert!(validate_item_input("", "2").is_err());
//! ```

use crate::error::{Field, ValidationError};
use crate::FALLBACK_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Checks that a form field is non-empty after trimming.
///
/// Returns `text` as given; trimming only decides emptiness.
pub fn require(field: Field, text: &str) -> ValidationResult<&str> {
    if text.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }

    Ok(text)
}

/// Parses quantity text permissively.
///
/// The text must be a signed 32-bit integer with no surrounding whitespace.
/// Anything else, including `" 5"` and values outside `i32`, yields
/// [`FALLBACK_QUANTITY`].
pub fn parse_quantity(text: &str) -> i64 {
    text.parse::<i32>()
        .map(i64::from)
        .unwrap_or(FALLBACK_QUANTITY)
}

/// Validates both form fields and returns the name as typed and the parsed quantity.
///
/// The name must be non-empty after trimming; the quantity text only has to be
/// non-empty, so `"   "` is accepted and parses to 0. The name is checked
/// first, so a form with both fields empty reports the name.
pub fn validate_item_input(name: &str, quantity_text: &str) -> ValidationResult<(String, i64)> {
    let name = require(Field::Name, name)?;

    if quantity_text.is_empty() {
        return Err(ValidationError::Required {
            field: Field::Quantity,
        });
    }

    Ok((name.to_string(), parse_quantity(quantity_text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require() {
        assert_eq!(require(Field::Name, " Bread ").unwrap(), " Bread ");
        assert_eq!(
            require(Field::Name, "").unwrap_err(),
            ValidationError::Required { field: Field::Name }
        );
        assert!(require(Field::Name, "   ").is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("12"), 12);
        assert_eq!(parse_quantity("-3"), -3);
        assert_eq!(parse_quantity("+7"), 7);
        assert_eq!(parse_quantity("2147483647"), 2147483647);
        assert_eq!(parse_quantity("2.5"), 0);
        assert_eq!(parse_quantity("two"), 0);
    }

    #[test]
    fn test_parse_quantity_is_strict_about_width_and_whitespace() {
        assert_eq!(parse_quantity(" 5"), 0);
        assert_eq!(parse_quantity("5 "), 0);
        assert_eq!(parse_quantity("   "), 0);
        assert_eq!(parse_quantity("2147483648"), 0);
        assert_eq!(parse_quantity("3000000000"), 0);
        assert_eq!(parse_quantity("-2147483649"), 0);
    }

    #[test]
    fn test_validate_item_input() {
        assert_eq!(
            validate_item_input("Eggs", "12").unwrap(),
            ("Eggs".to_string(), 12)
        );
        assert_eq!(
            validate_item_input("Eggs", "a dozen").unwrap(),
            ("Eggs".to_string(), 0)
        );

        let err = validate_item_input("", "").unwrap_err();
        assert_eq!(err.field(), Field::Name);

        let err = validate_item_input("Bread", "").unwrap_err();
        assert_eq!(err.field(), Field::Quantity);

        let err = validate_item_input("  ", "2").unwrap_err();
        assert_eq!(err.field(), Field::Name);
    }

    #[test]
    fn test_validate_item_input_whitespace_quantity_is_zero() {
        assert_eq!(
            validate_item_input("Milk", "   ").unwrap(),
            ("Milk".to_string(), 0)
        );
    }
}
