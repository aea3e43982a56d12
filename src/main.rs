//! Team Board Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod logger;
mod storage;

use app::App;
use config::BoardConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = BoardConfig::load();
    logger::init(config.log_filter());
    log::info!("team board starting for team {}", config.team_id);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
