//! Friend Invite Landing Page
//!
//! Decodes the invitation in `?p=`, shows the invite card and sends the
//! visitor to the App Store, the Android app or the game depending on the
//! browser. WeChat users are asked to reopen the page in a real browser.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod services;
pub mod state;
pub mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Friend invite page starting");

    if let Err(e) = config::init_config() {
        log::error!("Invalid build configuration: {}", e);
        return;
    }

    utils::dom::hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}
