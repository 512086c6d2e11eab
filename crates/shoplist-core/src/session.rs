//! # Dialog Session
//!
//! Transient state of the modal item form and the transitions that commit
//! it to the [`ItemStore`].
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │             open_for_create()                open_for_edit(item)        │
//! │   ┌────────┐ ─────────────► ┌────────────┐   ─────────────► ┌─────────┐ │
//! │   │ Closed │                │ OpenCreate │                  │OpenEdit │ │
//! │   └────────┘ ◄───────────── └────────────┘   ◄───────────── │  (id)   │ │
//! │       ▲      confirm ok /         │           open_for_     └─────────┘ │
//! │       │      cancel               │           create()          │       │
//! │       │                           │ confirm with blank field    │       │
//! │       │                           └──► stays open               │       │
//! │       │                                                         │       │
//! │       └──────────── confirm (item present or not) / cancel ─────┘       │
//! │                                                                         │
//! │  set_draft_name / set_draft_quantity: edit drafts while open           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::store::ItemStore;
use crate::types::{ItemId, ShoppingItem};
use crate::validation::ValidationResult;

// =============================================================================
// Dialog State
// =============================================================================

/// Whether the form is shown, and for which purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "selectedId", rename_all = "snake_case")]
pub enum DialogState {
    #[default]
    Closed,

    /// Adding a new item.
    OpenCreate,

    /// Editing the item with this id. The item may have been deleted since.
    OpenEdit(ItemId),
}

impl DialogState {
    pub fn is_open(&self) -> bool {
        !matches!(self, DialogState::Closed)
    }

    /// The form mode, or `None` when closed.
    pub fn mode(&self) -> Option<DialogMode> {
        match self {
            DialogState::Closed => None,
            DialogState::OpenCreate => Some(DialogMode::Create),
            DialogState::OpenEdit(_) => Some(DialogMode::Edit),
        }
    }
}

/// Purpose of an open form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogMode {
    Create,
    Edit,
}

impl DialogMode {
    /// Heading of the form.
    pub fn title(&self) -> &'static str {
        match self {
            DialogMode::Create => "Add Shopping Item",
            DialogMode::Edit => "Edit Shopping Item",
        }
    }

    /// Label of the confirm button.
    pub fn confirm_label(&self) -> &'static str {
        match self {
            DialogMode::Create => "Add Item",
            DialogMode::Edit => "Save",
        }
    }
}

// =============================================================================
// Draft Fields
// =============================================================================

/// Text typed into the form, not yet committed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub name: String,
    pub quantity: String,
}

impl Draft {
    fn from_item(item: &ShoppingItem) -> Self {
        Draft {
            name: item.name.clone(),
            quantity: item.quantity_text(),
        }
    }
}

// =============================================================================
// Confirm Outcome
// =============================================================================

/// What a successful [`DialogController::confirm`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// A new item was appended.
    Created(ShoppingItem),

    /// The edit was committed. `applied` is false when the item no longer exists.
    Updated { id: ItemId, applied: bool },

    /// The form was closed; nothing happened.
    NotOpen,
}

// =============================================================================
// Dialog Controller
// =============================================================================

/// Owns the edit session and dispatches confirmed input to the store.
#[derive(Debug, Clone, Default)]
pub struct DialogController {
    state: DialogState,
    draft: Draft,
}

impl DialogController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens an empty form for a new item.
    pub fn open_for_create(&mut self) {
        self.state = DialogState::OpenCreate;
        self.draft = Draft::default();
    }

    /// Opens the form for `item`, preloaded with its current values.
    pub fn open_for_edit(&mut self, item: &ShoppingItem) {
        self.state = DialogState::OpenEdit(item.id);
        self.draft = Draft::from_item(item);
    }

    /// Replaces the draft name. Ignored while closed.
    pub fn set_draft_name(&mut self, text: impl Into<String>) {
        if self.is_open() {
            self.draft.name = text.into();
        }
    }

    /// Replaces the draft quantity text. Ignored while closed.
    pub fn set_draft_quantity(&mut self, text: impl Into<String>) {
        if self.is_open() {
            self.draft.quantity = text.into();
        }
    }

    /// Commits the drafts to `store`.
    ///
    /// ## Behavior
    /// - Blank name or empty quantity text: returns the error and stays open, drafts kept
    /// - Create mode: appends the item, closes
    /// - Edit mode: updates the item if it still exists, closes either way
    /// - Closed: [`ConfirmOutcome::NotOpen`]
    pub fn confirm(&mut self, store: &mut ItemStore) -> ValidationResult<ConfirmOutcome> {
        let outcome = match self.state {
            DialogState::Closed => return Ok(ConfirmOutcome::NotOpen),
            DialogState::OpenCreate => {
                let item = store.create(&self.draft.name, &self.draft.quantity)?;
                ConfirmOutcome::Created(item)
            }
            DialogState::OpenEdit(id) => {
                let applied = store.update(id, &self.draft.name, &self.draft.quantity)?;
                ConfirmOutcome::Updated { id, applied }
            }
        };

        self.close();
        Ok(outcome)
    }

    /// Closes the form, discarding the drafts.
    pub fn cancel(&mut self) {
        self.close();
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn mode(&self) -> Option<DialogMode> {
        self.state.mode()
    }

    fn close(&mut self) {
        self.state = DialogState::Closed;
        self.draft = Draft::default();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
