//! QR code rendered as inline SVG

use leptos::prelude::*;
use qrcode::render::svg;

/// Render `value` as an SVG document at least `size` pixels wide.
///
/// Returns `None` when the value does not fit in a QR code.
pub fn qr_svg(value: &str, size: u32) -> Option<String> {
    let code = match qrcode::QrCode::new(value.as_bytes()) {
        Ok(code) => code,
        Err(e) => {
            log::warn!("Cannot encode QR code for {:?}: {}", value, e);
            return None;
        }
    };

    Some(
        code.render::<svg::Color>()
            .min_dimensions(size, size)
            .quiet_zone(false)
            .build(),
    )
}

#[component]
pub fn QrCode(#[prop(into)] value: String, #[prop(default = 100)] size: u32) -> impl IntoView {
    let svg = qr_svg(&value, size).unwrap_or_default();

    view! {
        <div
            class="qrcode"
            style=format!("width: {}px; height: {}px;", size, size)
            inner_html=svg
        ></div>
    }
}
