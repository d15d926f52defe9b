//! Task List Widget
//!
//! Form followed by the list. Owns the rows of this instance: the store is
//! provided through context, so two mounted widgets never share rows.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{TaskForm, TaskList};
use crate::config::WidgetConfig;
use crate::store::{store_append_row, store_remove_row, store_row_count, WidgetState};

#[component]
pub fn TaskListWidget(#[prop(optional)] config: WidgetConfig) -> impl IntoView {
    let store = Store::new(WidgetState::default());
    provide_context(store);

    let add_row = move |label: String| {
        let id = store_append_row(&store, label);
        let count = store_row_count(&store);
        web_sys::console::log_1(&format!("[LIST] Added row #{} ({} rows)", id, count).into());
    };

    let remove_row = move |id: u32| {
        if store_remove_row(&store, id) {
            let count = store_row_count(&store);
            web_sys::console::log_1(&format!("[LIST] Removed row #{} ({} rows)", id, count).into());
        }
    };

    view! {
        <TaskForm config=config on_submit=add_row />
        <TaskList on_remove=remove_row />
    }
}
