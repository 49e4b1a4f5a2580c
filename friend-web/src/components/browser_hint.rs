//! "Open in browser" overlay for the WeChat in-app browser
//!
//! WeChat blocks App Store and deep-link navigation, so instead of the
//! redirect the visitor sees a full-screen hint pointing at the "..." menu.

use leptos::html::Div;
use leptos::portal::Portal;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

/// Full-viewport overlay mounted on `<body>`.
///
/// Touches on the overlay are swallowed so the page behind it cannot scroll
/// or receive taps.
#[component]
pub fn OpenInBrowserHint() -> impl IntoView {
    let container = NodeRef::<Div>::new();

    Effect::new(move |attached: Option<bool>| {
        if attached == Some(true) {
            return true;
        }
        let Some(element) = container.get() else {
            return false;
        };
        if let Err(e) = block_touch_start(&element) {
            log::error!("Failed to attach touchstart guard: {:?}", e);
        }
        true
    });

    view! {
        <Portal>
            <div node_ref=container class="browser-hint">
                <div class="browser-hint-anchor">
                    <div class="browser-hint-icon">
                        <BrowserHintIcon/>
                    </div>
                    <div class="browser-hint-text">"请使用浏览器打开"</div>
                </div>
            </div>
        </Portal>
    }
}

/// Call `preventDefault` on every `touchstart` reaching `target`.
///
/// The listener must be non-passive, otherwise browsers ignore
/// `preventDefault`. It lives as long as the page.
fn block_touch_start(target: &EventTarget) -> Result<(), JsValue> {
    let options = AddEventListenerOptions::new();
    options.set_passive(false);

    let handler = Closure::<dyn FnMut(Event)>::new(|event: Event| event.prevent_default());
    target.add_event_listener_with_callback_and_add_event_listener_options(
        "touchstart",
        handler.as_ref().unchecked_ref(),
        &options,
    )?;
    handler.forget();
    Ok(())
}

/// Curved arrow pointing at the top-right menu button.
#[component]
pub fn BrowserHintIcon() -> impl IntoView {
    view! {
        <svg width="72" height="88" viewBox="0 0 72 88" fill="none" xmlns="http://www.w3.org/2000/svg">
            <path
                d="M8 84 C 12 44, 32 22, 62 10"
                stroke="white"
                stroke-width="3"
                stroke-linecap="round"
                stroke-dasharray="6 6"
            />
            <path
                d="M46 6 L 64 9 L 56 26"
                stroke="white"
                stroke-width="3"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
        </svg>
    }
}
