pub mod app;
pub mod app_shell;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use shared::config::AppConfig;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            _ = console_log::init_with_level(log::Level::Info);
            log::error!("{}", e);
            return;
        }
    };
    let level = config.log_level().unwrap_or(log::Level::Info);
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(level);
    log::info!("starting with {:?} data source", config.data_source);

    leptos::mount::mount_to_body(move || leptos::view! { <app::App config=config.clone() /> });
}
