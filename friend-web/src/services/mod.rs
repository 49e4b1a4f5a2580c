//! Browser-backed services

pub mod navigation;
pub mod platform;

pub use navigation::navigate_to;
pub use platform::BrowserPlatform;
