//! # Errors
//!
//! [`PayloadDecodeError`] never leaves the decoder's caller: the page falls
//! back to the default payload. [`ConfigError`] is raised while loading the
//! build-time configuration.

use thiserror::Error;

/// Why the `p` query parameter could not be turned into a payload.
#[derive(Debug, Error)]
pub enum PayloadDecodeError {
    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] lib_utils::b64::Error),

    #[error("Payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Payload JSON is not an object")]
    NotAnObject,
}

/// Configuration error while reading build-time values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set at build time")]
    MissingVar(&'static str),

    #[error("{name} has an unsupported value: {value:?}")]
    InvalidValue { name: &'static str, value: String },

    #[error("{name} is not an absolute link: {value:?}")]
    InvalidLink { name: &'static str, value: String },
}

pub type Result<T, E = PayloadDecodeError> = std::result::Result<T, E>;
