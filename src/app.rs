//! Task List Frontend App
//!
//! Loads configuration, prepares the page and mounts the widget.

use leptos::prelude::*;

use crate::components::TaskListWidget;
use crate::config::load_config;
use crate::page::prepare_body;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();

    if let Err(e) = prepare_body(&config) {
        web_sys::console::warn_1(&format!("[APP] Page setup skipped: {}", e).into());
    }
    web_sys::console::log_1(&"[APP] Mounting task list widget".into());

    view! { <TaskListWidget config=config /> }
}
