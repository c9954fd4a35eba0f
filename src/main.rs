//! To-Do Frontend Entry Point

mod api;
mod app;
mod auth;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod guard;
mod models;
mod notify;
mod session;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use tracing::{info, warn};

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    if let Err(err) = browser_logger::init(config.log_level) {
        warn!("Logger already installed: {}", err);
    }
    info!("Starting with API at {}, page size {}", config.api_base_url, config.page_size);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
