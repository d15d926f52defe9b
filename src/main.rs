//! Task List Frontend Entry Point

mod models;
mod list;
mod config;
mod store;
mod style;
mod page;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
