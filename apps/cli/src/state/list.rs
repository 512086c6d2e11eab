//! # List State
//!
//! The shopping list screen's state: the item store and the dialog session.
//!
//! ## Ownership
//! One `ListState` exists per shell run. The shell loop owns it and lends
//! `&mut ListState` to exactly one command at a time, so no locking is
//! involved. Commands never touch the store or the session directly; they go
//! through the methods below.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ListState                                                              │
//! │  ├── store:  ItemStore         (ordered items, id policy)              │
//! │  └── dialog: DialogController  (Closed | OpenCreate | OpenEdit(id))    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use shoplist_core::{
    ConfirmOutcome, CoreError, CoreResult, DialogController, IdPolicy, ItemId, ItemStore,
    ShoppingItem, ValidationError,
};

/// Owned state of the shopping list screen.
#[derive(Debug, Default)]
pub struct ListState {
    store: ItemStore,
    dialog: DialogController,
}

impl ListState {
    /// Creates an empty list whose new items get ids per `id_policy`.
    pub fn new(id_policy: IdPolicy) -> Self {
        ListState {
            store: ItemStore::with_policy(id_policy),
            dialog: DialogController::new(),
        }
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn dialog(&self) -> &DialogController {
        &self.dialog
    }

    pub fn open_for_create(&mut self) {
        self.dialog.open_for_create();
    }

    /// Opens the edit form for the row with `id`.
    ///
    /// Rows are only editable while they exist, so an unknown id is an error
    /// here even though the store treats it as a no-op.
    pub fn open_for_edit(&mut self, id: ItemId) -> CoreResult<&ShoppingItem> {
        let item = self.store.get(id).ok_or(CoreError::ItemNotFound(id))?;
        self.dialog.open_for_edit(item);
        Ok(item)
    }

    pub fn set_draft_name(&mut self, text: impl Into<String>) {
        self.dialog.set_draft_name(text);
    }

    pub fn set_draft_quantity(&mut self, text: impl Into<String>) {
        self.dialog.set_draft_quantity(text);
    }

    pub fn confirm(&mut self) -> Result<ConfirmOutcome, ValidationError> {
        self.dialog.confirm(&mut self.store)
    }

    pub fn cancel(&mut self) {
        self.dialog.cancel();
    }

    /// Deletes the row with `id`. An open edit form targeting it stays open.
    pub fn delete(&mut self, id: ItemId) -> Option<ShoppingItem> {
        self.store.delete(id)
    }
}
