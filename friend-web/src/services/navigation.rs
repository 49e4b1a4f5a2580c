//! Outbound navigation

use wasm_bindgen::JsValue;

/// Send the browser to `link` by setting `location.href`.
pub fn navigate_to(link: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    log::info!("Redirecting to {}", link);
    window.location().set_href(link)
}
