//! Notes Board Frontend Entry Point

mod api;
mod app;
mod collaborators;
mod components;
mod composer;
mod config;
mod controller;
mod models;
mod overlay;
mod store;
mod transition;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    let config = AppConfig::from_document();
    log::info!("[APP] starting, service at {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config /> });
}
