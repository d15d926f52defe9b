//! Task Row Component
//!
//! A single list row. Clicking it asks the owner to remove it.

use leptos::prelude::*;
use leptos_hover::{create_hover_signals, make_on_mouseenter, make_on_mouseleave};

use crate::models::Item;
use crate::style::{row_style, ROW_BACKGROUND, ROW_BACKGROUND_HOVER};

#[component]
pub fn TaskRow(
    item: Item,
    #[prop(into)] on_remove: Callback<u32>,
) -> impl IntoView {
    let id = item.id;
    let hover = create_hover_signals();

    view! {
        <li
            class="task-row"
            style=move || row_style(hover.pick(ROW_BACKGROUND, ROW_BACKGROUND_HOVER))
            on:click=move |_| on_remove.run(id)
            on:mouseenter=make_on_mouseenter(hover)
            on:mouseleave=make_on_mouseleave(hover)
        >
            {item.label}
        </li>
    }
}
