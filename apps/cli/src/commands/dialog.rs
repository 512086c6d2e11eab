//! # Dialog Commands
//!
//! Commands that drive the item form.
//!
//! ## Form Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────┐  add / edit <id>  ┌──────────┐  ok (valid)   ┌──────────┐ │
//! │  │  Closed  │──────────────────►│   Open   │──────────────►│  Closed  │ │
//! │  └──────────┘                   └──────────┘               └──────────┘ │
//! │                                   │  ▲   │                              │
//! │                      name / qty   │  │   │ ok (blank field):            │
//! │                                   └──┘   │ ValidationError, stays open  │
//! │                                          │                              │
//! │                                          └── cancel ──► Closed          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use shoplist_core::{ConfirmOutcome, ItemId};
use tracing::debug;

use super::ListResponse;
use crate::error::ApiError;
use crate::state::ListState;

/// Opens an empty "Add Shopping Item" form.
pub fn open_create_dialog(list: &mut ListState) -> ListResponse {
    debug!("open_create_dialog command");
    list.open_for_create();
    ListResponse::from(&*list)
}

/// Opens the "Edit Shopping Item" form preloaded with row `id`.
///
/// ## Errors
/// `NOT_FOUND` if no row has this id; the form state is left as it was.
pub fn open_edit_dialog(list: &mut ListState, id: ItemId) -> Result<ListResponse, ApiError> {
    debug!(id = %id, "open_edit_dialog command");
    list.open_for_edit(id)?;
    Ok(ListResponse::from(&*list))
}

/// Replaces the draft name. Ignored while the form is closed.
pub fn set_draft_name(list: &mut ListState, text: String) -> ListResponse {
    debug!(text = %text, "set_draft_name command");
    list.set_draft_name(text);
    ListResponse::from(&*list)
}

/// Replaces the draft quantity text. Ignored while the form is closed.
pub fn set_draft_quantity(list: &mut ListState, text: String) -> ListResponse {
    debug!(text = %text, "set_draft_quantity command");
    list.set_draft_quantity(text);
    ListResponse::from(&*list)
}

/// Commits the form.
///
/// ## Errors
/// `VALIDATION_ERROR` if the name or quantity is blank. The form stays open
/// with its drafts and the list is unchanged.
pub fn confirm_dialog(list: &mut ListState) -> Result<ListResponse, ApiError> {
    debug!("confirm_dialog command");

    match list.confirm()? {
        ConfirmOutcome::Created(item) => {
            debug!(id = %item.id, name = %item.name, quantity = item.quantity, "Item created")
        }
        ConfirmOutcome::Updated { id, applied: true } => debug!(id = %id, "Item updated"),
        ConfirmOutcome::Updated { id, applied: false } => {
            debug!(id = %id, "Edited item no longer exists, nothing updated")
        }
        ConfirmOutcome::NotOpen => debug!("No form open"),
    }

    Ok(ListResponse::from(&*list))
}

/// Closes the form without committing.
pub fn cancel_dialog(list: &mut ListState) -> ListResponse {
    debug!("cancel_dialog command");
    list.cancel();
    ListResponse::from(&*list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::items::{delete_item, get_list};
    use crate::error::ErrorCode;
    use shoplist_core::{DialogMode, IdPolicy, ShoppingItem};

    fn item(id: u32, name: &str, quantity: i64) -> ShoppingItem {
        ShoppingItem {
            id: ItemId::new(id),
            name: name.to_string(),
            quantity,
        }
    }

    fn fill(list: &mut ListState, name: &str, qty: &str) {
        set_draft_name(list, name.to_string());
        set_draft_quantity(list, qty.to_string());
    }

    #[test]
    fn test_create_flow() {
        let mut list = ListState::default();

        let response = open_create_dialog(&mut list);
        let dialog = response.dialog.unwrap();
        assert_eq!(dialog.mode, DialogMode::Create);
        assert_eq!(dialog.title, "Add Shopping Item");
        assert_eq!(dialog.selected_id, None);

        fill(&mut list, "Milk", "2");
        let response = confirm_dialog(&mut list).unwrap();

        assert_eq!(response.items, vec![item(1, "Milk", 2)]);
        assert!(response.dialog.is_none());
    }

    #[test]
    fn test_confirm_blank_quantity_keeps_form_open() {
        let mut list = ListState::default();
        open_create_dialog(&mut list);
        fill(&mut list, "Milk", "2");
        confirm_dialog(&mut list).unwrap();

        open_create_dialog(&mut list);
        fill(&mut list, "Bread", "");
        let err = confirm_dialog(&mut list).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        let response = get_list(&list);
        assert_eq!(response.items, vec![item(1, "Milk", 2)]);
        assert_eq!(response.dialog.unwrap().draft.name, "Bread");
    }

    #[test]
    fn test_edit_flow() {
        let mut list = ListState::default();
        open_create_dialog(&mut list);
        fill(&mut list, "Milk", "2");
        confirm_dialog(&mut list).unwrap();

        let response = open_edit_dialog(&mut list, ItemId::new(1)).unwrap();
        let dialog = response.dialog.unwrap();
        assert_eq!(dialog.confirm_label, "Save");
        assert_eq!(dialog.selected_id, Some(ItemId::new(1)));
        assert_eq!(dialog.draft.quantity, "2");

        set_draft_quantity(&mut list, "5".to_string());
        let response = confirm_dialog(&mut list).unwrap();

        assert_eq!(response.items, vec![item(1, "Milk", 5)]);
    }

    #[test]
    fn test_open_edit_unknown_row() {
        let mut list = ListState::default();

        let err = open_edit_dialog(&mut list, ItemId::new(3)).unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_edit_then_cancel() {
        let mut list = ListState::default();
        open_create_dialog(&mut list);
        fill(&mut list, "Milk", "2");
        confirm_dialog(&mut list).unwrap();

        open_edit_dialog(&mut list, ItemId::new(1)).unwrap();
        set_draft_name(&mut list, "Cream".to_string());
        let response = cancel_dialog(&mut list);

        assert_eq!(response.items, vec![item(1, "Milk", 2)]);
        assert!(response.dialog.is_none());
    }

    #[test]
    fn test_delete_then_create_reuses_id() {
        let mut list = ListState::default();
        open_create_dialog(&mut list);
        fill(&mut list, "Milk", "2");
        confirm_dialog(&mut list).unwrap();

        delete_item(&mut list, ItemId::new(1));
        open_create_dialog(&mut list);
        fill(&mut list, "Eggs", "12");
        let response = confirm_dialog(&mut list).unwrap();

        assert_eq!(response.items, vec![item(1, "Eggs", 12)]);
    }

    #[test]
    fn test_delete_then_create_with_monotonic_ids() {
        let mut list = ListState::new(IdPolicy::Monotonic);
        open_create_dialog(&mut list);
        fill(&mut list, "Milk", "2");
        confirm_dialog(&mut list).unwrap();

        delete_item(&mut list, ItemId::new(1));
        open_create_dialog(&mut list);
        fill(&mut list, "Eggs", "12");
        let response = confirm_dialog(&mut list).unwrap();

        assert_eq!(response.items, vec![item(2, "Eggs", 12)]);
    }
}
