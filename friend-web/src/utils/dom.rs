//! DOM helpers used during start-up

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Id of the static placeholder shown while the WASM bundle loads.
pub const LOADING_ELEMENT_ID: &str = "leptos-loading";

/// Hide the loading screen element
pub fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available, cannot hide loading screen");
        return;
    };

    let Some(loading_element) = document.get_element_by_id(LOADING_ELEMENT_ID) else {
        log::debug!("Loading element '{}' not found", LOADING_ELEMENT_ID);
        return;
    };

    if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
        if let Err(e) = html_element.class_list().add_1("hidden") {
            log::error!("Failed to add 'hidden' class: {:?}", e);
        }
    }

    // Also set display:none in case the stylesheet failed to load
    if let Err(e) = loading_element.set_attribute("style", "display: none !important;") {
        log::error!("Failed to hide loading screen: {:?}", e);
    }
}
