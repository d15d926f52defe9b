//! Widget State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Each mounted widget provides its own store through context.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::list::{append_row, remove_row};
use crate::models::Item;

/// Rows owned by one widget instance
#[derive(Clone, Debug, Default, Store)]
pub struct WidgetState {
    /// Rows in display order (newest last)
    pub rows: Vec<Item>,
}

/// Type alias for the store
pub type WidgetStore = Store<WidgetState>;

/// Get the widget store from context
pub fn use_widget_store() -> WidgetStore {
    expect_context::<WidgetStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a row to the store, returns its id
pub fn store_append_row(store: &WidgetStore, label: String) -> u32 {
    append_row(&mut store.rows().write(), label)
}

/// Remove a row from the store by id
pub fn store_remove_row(store: &WidgetStore, row_id: u32) -> bool {
    remove_row(&mut store.rows().write(), row_id).is_some()
}

/// Untracked row count, for logging from event handlers
pub fn store_row_count(store: &WidgetStore) -> usize {
    store.rows().with_untracked(|rows| rows.len())
}
