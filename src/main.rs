//! Food Admin Frontend Entry Point

mod api;
mod app;
mod components;
mod context;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init(log::LevelFilter::Debug, rolling_logger::DEFAULT_CAPACITY) {
        web_sys::console::warn_1(&format!("[APP] logger not installed: {}", e).into());
    }
    mount_to_body(App);
}
