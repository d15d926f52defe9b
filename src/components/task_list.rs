//! Task List Component
//!
//! Unbulleted list of rows, rendered from the widget store.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::store::{use_widget_store, WidgetStateStoreFields};
use crate::style::LIST_STYLE;

#[component]
pub fn TaskList(#[prop(into)] on_remove: Callback<u32>) -> impl IntoView {
    let store = use_widget_store();

    view! {
        <ul class="task-list" style=LIST_STYLE>
            <For
                each=move || store.rows().get()
                // Ids can be reused once a row is gone, so the label is part of the key
                key=|item| (item.id, item.label.clone())
                children=move |item| view! { <TaskRow item=item on_remove=on_remove /> }
            />
        </ul>
    }
}
