//! UI Components

pub mod browser_hint;
pub mod button;
pub mod qr_code;

pub use browser_hint::{BrowserHintIcon, OpenInBrowserHint};
pub use button::Button;
pub use qr_code::QrCode;
