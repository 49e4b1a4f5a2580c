//! # Invite Library
//!
//! Platform-aware redirect logic for the friend invite page:
//!
//! - [`payload`] - decode the invitation carried in the `p` query parameter
//! - [`platform`] - classify the visitor's browser from its user agent
//! - [`link`] - pick and build the outbound store / deep link
//! - [`config`] - build-time links and texts
//!
//! Nothing here touches the browser, so all of it runs under `cargo test`.

pub mod config;
pub mod error;
pub mod link;
pub mod payload;
pub mod platform;

pub use config::FriendConfig;
pub use error::{ConfigError, PayloadDecodeError};
pub use link::{LinkStrategy, RedirectLinks};
pub use payload::{InvitationPayload, PayloadCharset};
pub use platform::{DetectPlatform, Platform, PlatformInfo, UserAgent};
