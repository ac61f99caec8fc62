//! Project Board Frontend Entry Point

mod app;
mod components;
mod object_url;
mod store;
mod upload;
mod web_storage;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    })
    .ok();

    mount_to_body(App);
}
