//! # Shell Commands
//!
//! One function per user action. The shell parses a line, calls the matching
//! command with the list state, and renders what the command returns.
//!
//! ## Command Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Architecture                                 │
//! │                                                                         │
//! │  Input line                                                             │
//! │  ──────────                                                             │
//! │  "qty 5"                                                                │
//! │         │                                                               │
//! │         │ (shell::Command::from_str)                                    │
//! │         ▼                                                               │
//! │  Command::Quantity("5")                                                 │
//! │         │                                                               │
//! │         │ (shell::dispatch)                                             │
//! │         ▼                                                               │
//! │  fn set_draft_quantity(                                                 │
//! │      list: &mut ListState,  ◄── owned by the shell loop                │
//! │      text: String,          ◄── rest of the input line                 │
//! │  ) -> ListResponse                                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  view::render(&response)   ◄── immediate re-render                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod dialog;
pub mod items;

use serde::Serialize;
use shoplist_core::{DialogMode, DialogState, Draft, ItemId, ShoppingItem};

use crate::state::ListState;

/// Snapshot of the screen after a command: the list plus the form, if open.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub items: Vec<ShoppingItem>,
    pub dialog: Option<DialogView>,
}

/// The open form as the screen shows it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogView {
    pub mode: DialogMode,
    pub title: &'static str,
    pub confirm_label: &'static str,
    pub selected_id: Option<ItemId>,
    pub draft: Draft,
}

impl From<&ListState> for ListResponse {
    fn from(list: &ListState) -> Self {
        let dialog = list.dialog();
        ListResponse {
            items: list.store().list().to_vec(),
            dialog: dialog.mode().map(|mode| DialogView {
                mode,
                title: mode.title(),
                confirm_label: mode.confirm_label(),
                selected_id: match dialog.state() {
                    DialogState::OpenEdit(id) => Some(id),
                    _ => None,
                },
                draft: dialog.draft().clone(),
            }),
        }
    }
}
