//! # Item Commands
//!
//! Row-level actions that do not go through the form.

use shoplist_core::ItemId;
use tracing::debug;

use super::ListResponse;
use crate::state::ListState;

/// Gets the current list and form.
pub fn get_list(list: &ListState) -> ListResponse {
    debug!("get_list command");
    ListResponse::from(list)
}

/// Deletes a row immediately.
///
/// Deleting an id with no row changes nothing and is not an error.
pub fn delete_item(list: &mut ListState, id: ItemId) -> ListResponse {
    debug!(id = %id, "delete_item command");

    match list.delete(id) {
        Some(item) => debug!(id = %id, name = %item.name, "Item deleted"),
        None => debug!(id = %id, "No item to delete"),
    }

    ListResponse::from(&*list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::dialog::{confirm_dialog, open_create_dialog, set_draft_name, set_draft_quantity};

    fn add(list: &mut ListState, name: &str, qty: &str) {
        open_create_dialog(list);
        set_draft_name(list, name.to_string());
        set_draft_quantity(list, qty.to_string());
        confirm_dialog(list).unwrap();
    }

    #[test]
    fn test_get_list_empty() {
        let list = ListState::default();

        let response = get_list(&list);

        assert!(response.items.is_empty());
        assert!(response.dialog.is_none());
    }

    #[test]
    fn test_delete_item() {
        let mut list = ListState::default();
        add(&mut list, "Milk", "2");
        add(&mut list, "Bread", "1");

        let response = delete_item(&mut list, ItemId::new(1));

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].name, "Bread");
    }

    #[test]
    fn test_delete_missing_item_is_noop() {
        let mut list = ListState::default();
        add(&mut list, "Milk", "2");

        let response = delete_item(&mut list, ItemId::new(7));

        assert_eq!(response.items.len(), 1);
    }
}
