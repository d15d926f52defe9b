//! Task Form Component
//!
//! Text input plus submit button. Reads the input directly on submit.

use leptos::html;
use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::list::accepts_label;
use crate::style::{BUTTON_STYLE, INPUT_STYLE};

/// Form that hands each submitted label to `on_submit`, then clears the input
#[component]
pub fn TaskForm(
    config: WidgetConfig,
    #[prop(into)] on_submit: Callback<String>,
) -> impl IntoView {
    let input_ref = NodeRef::<html::Input>::new();
    let reject_blank = config.reject_blank;

    let submit = move |ev: web_sys::SubmitEvent| {
        // Never navigate away
        ev.prevent_default();
        let Some(input) = input_ref.get() else {
            return;
        };
        let label = input.value();

        if accepts_label(&label, reject_blank) {
            on_submit.run(label);
        } else {
            web_sys::console::log_1(&"[FORM] Ignoring blank submission".into());
        }
        input.set_value("");
    };

    view! {
        <form class="task-form" on:submit=submit>
            <input
                type="text"
                node_ref=input_ref
                name=config.input_name
                placeholder=config.placeholder
                style=INPUT_STYLE
            />
            <button type="submit" style=BUTTON_STYLE>{config.button_label}</button>
        </form>
    }
}
