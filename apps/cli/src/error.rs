//! # API Error Type
//!
//! Unified error type for shell commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Shoplist                               │
//! │                                                                         │
//! │  Input line "edit 9"                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<ListResponse, ApiError>                                  │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Unknown row? ─── CoreError::ItemNotFound ────────┐              │  │
//! │  │         │                                         │              │  │
//! │  │         ▼                                         ▼              │  │
//! │  │  Blank field? ─── ValidationError::Required ─── ApiError ──────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Terminal: "error: [NOT_FOUND] Item not found: 9", then re-render      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! In JSON output mode the error is printed as
//! `{"error":{"code":"NOT_FOUND","message":"Item not found: 9"}}`.

use serde::Serialize;
use shoplist_core::{CoreError, ValidationError};

/// API error returned from shell commands.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No row with the requested id
    NotFound,

    /// A required form field is blank
    ValidationError,

    /// Input line could not be parsed as a command
    InvalidCommand,

    /// Rendering or terminal failure
    Internal,
}

impl ErrorCode {
    /// The code as it appears on the wire, e.g. `VALIDATION_ERROR`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::InvalidCommand => "INVALID_COMMAND",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an invalid command error.
    pub fn invalid_command(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidCommand, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ItemNotFound(id) => {
                ApiError::new(ErrorCode::NotFound, format!("Item not found: {}", id))
            }
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("Response serialization failed: {}", err);
        ApiError::internal("Failed to render response")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use shoplist_core::{Field, ItemId};

    #[test]
    fn test_not_found_conversion() {
        let err: ApiError = CoreError::ItemNotFound(ItemId::new(9)).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.to_string(), "[NOT_FOUND] Item not found: 9");
    }

    #[test]
    fn test_validation_conversion() {
        let err: ApiError = ValidationError::Required {
            field: Field::Quantity,
        }
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "quantity is required");

        let wrapped: ApiError = CoreError::Validation(ValidationError::Required {
            field: Field::Name,
        })
        .into();
        assert_eq!(wrapped.message, "name is required");
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::invalid_command("Unknown command: 'buy'");
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(
            json,
            r#"{"code":"INVALID_COMMAND","message":"Unknown command: 'buy'"}"#
        );
    }

    #[test]
    fn test_display_matches_serialized_code() {
        for code in [
            ErrorCode::NotFound,
            ErrorCode::ValidationError,
            ErrorCode::InvalidCommand,
            ErrorCode::Internal,
        ] {
            let serialized = serde_json::to_string(&code).unwrap();
            assert_eq!(serialized, format!("\"{}\"", code));
        }

        let err = ApiError::validation("quantity is required");
        assert_eq!(err.to_string(), "[VALIDATION_ERROR] quantity is required");
    }
}
