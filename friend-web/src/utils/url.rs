//! URL utility functions for reading the current location

use web_sys::window;

/// Query string of the current page, including the leading `?`.
///
/// Empty when there is no window (e.g. outside a browser), which the payload
/// decoder treats as "no invitation".
pub fn current_search() -> String {
    window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default()
}
