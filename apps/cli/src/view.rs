//! # View
//!
//! Turns a [`ListResponse`] into terminal output. The shell calls
//! [`render`] after every command, so the screen always reflects the state
//! the last command left behind.
//!
//! ## Text Layout
//! ```text
//! [ Add an Item ]                          ◄── `add`
//!   #1  Name: Milk  Quantity: 2            ◄── `edit 1` / `delete 1`
//!   #2  Name: Eggs  Quantity: 12
//!
//! ┌─ Add Shopping Item                     ◄── only while the form is open
//! │  Name:     Bread
//! │  Quantity:
//! └─ [ok] Add Item   [cancel] Cancel
//! ```

use std::fmt;

use serde_json::json;

use crate::commands::{DialogView, ListResponse};
use crate::error::ApiError;
use crate::state::OutputFormat;

/// Renders a response in the configured format.
pub fn render(response: &ListResponse, format: OutputFormat) -> Result<String, ApiError> {
    match format {
        OutputFormat::Text => Ok(TextView(response).to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(response)?),
    }
}

/// Renders a command error in the configured format.
pub fn render_error(err: &ApiError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("error: {}", err),
        OutputFormat::Json => json!({ "error": err }).to_string(),
    }
}

/// Text rendering of the list screen.
pub struct TextView<'a>(pub &'a ListResponse);

impl fmt::Display for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[ Add an Item ]")?;

        if self.0.items.is_empty() {
            writeln!(f, "  (no items)")?;
        }
        for item in &self.0.items {
            writeln!(
                f,
                "  #{}  Name: {}  Quantity: {}",
                item.id, item.name, item.quantity
            )?;
        }

        if let Some(dialog) = &self.0.dialog {
            writeln!(f)?;
            write!(f, "{}", DialogText(dialog))?;
        }

        Ok(())
    }
}

struct DialogText<'a>(&'a DialogView);

impl fmt::Display for DialogText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dialog = self.0;
        writeln!(f, "┌─ {}", dialog.title)?;
        writeln!(f, "│  Name:     {}", dialog.draft.name)?;
        writeln!(f, "│  Quantity: {}", dialog.draft.quantity)?;
        writeln!(f, "└─ [ok] {}   [cancel] Cancel", dialog.confirm_label)
    }
}
