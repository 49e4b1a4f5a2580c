//! # Invitation Payload
//!
//! The inviter's role name and an opaque `ext` token travel in the `p` query
//! parameter as base64-encoded JSON:
//!
//! ```text
//! ?p=base64({"role_name": "...", "ext": "..."})
//! ```
//!
//! Decoding never fails from the page's point of view. Anything malformed
//! yields [`InvitationPayload::default`].

use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::error::{ConfigError, PayloadDecodeError, Result};

/// Name of the query parameter carrying the payload.
pub const PAYLOAD_PARAM: &str = "p";

/// Shown when the payload does not name the inviter.
pub const DEFAULT_ROLE_NAME: &str = "unknown";

/// How the base64 bytes map to text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PayloadCharset {
    /// Bytes are UTF-8. Needed for non-Latin role names such as "张三".
    #[default]
    Utf8,
    /// Each byte is one character (U+0000..=U+00FF).
    Latin1,
}

impl PayloadCharset {
    fn decode_text(self, bytes: Vec<u8>) -> Result<String> {
        match self {
            PayloadCharset::Utf8 => Ok(String::from_utf8(bytes)?),
            PayloadCharset::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
        }
    }
}

impl FromStr for PayloadCharset {
    type Err = ConfigError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(PayloadCharset::Utf8),
            "latin1" | "latin-1" | "binary" => Ok(PayloadCharset::Latin1),
            _ => Err(ConfigError::InvalidValue {
                name: "PAYLOAD_CHARSET",
                value: value.to_string(),
            }),
        }
    }
}

/// Decoded invitation descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InvitationPayload {
    pub role_name: String,
    pub ext: String,
}

impl Default for InvitationPayload {
    fn default() -> Self {
        Self {
            role_name: DEFAULT_ROLE_NAME.to_string(),
            ext: String::new(),
        }
    }
}

impl InvitationPayload {
    /// Read the payload from a query string such as `location.search`.
    ///
    /// A missing, empty or undecodable `p` gives the default payload.
    pub fn from_query(search: &str, charset: PayloadCharset) -> Self {
        let Some(raw) = lib_utils::query_param(search, PAYLOAD_PARAM) else {
            return Self::default();
        };
        if raw.is_empty() {
            return Self::default();
        }

        match Self::decode(&raw, charset) {
            Ok(payload) => payload,
            Err(e) => {
                log::debug!("Ignoring invitation payload: {}", e);
                Self::default()
            }
        }
    }

    /// Decode the value of the `p` parameter.
    ///
    /// Spaces are read as `+`, which is more lenient than `atob`: a link
    /// whose `+` was not percent-escaped still decodes.
    ///
    /// ```rust
    /// use lib_invite::{InvitationPayload, PayloadCharset};
    ///
    /// let payload = InvitationPayload::decode(
    ///     "eyJyb2xlX25hbWUiOiJBbmEiLCJleHQiOiI5In0=",
    ///     PayloadCharset::Utf8,
    /// ).unwrap();
    /// assert_eq!(payload.role_name, "Ana");
    /// assert_eq!(payload.ext, "9");
    /// ```
    pub fn decode(raw: &str, charset: PayloadCharset) -> Result<Self> {
        // Form decoding turns an unescaped '+' into a space.
        let b64 = raw.replace(' ', "+");
        let bytes = lib_utils::b64_decode_forgiving(&b64)?;
        let text = charset.decode_text(bytes)?;

        // Stricter than JSON.parse: a lone surrogate escape such as "\ud83d"
        // rejects the whole payload.
        let value: Value = serde_json::from_str(&text)?;
        let Value::Object(fields) = value else {
            return Err(PayloadDecodeError::NotAnObject);
        };

        let field = |name: &str| fields.get(name).and_then(field_text);
        Ok(Self {
            role_name: field("role_name").unwrap_or_else(|| DEFAULT_ROLE_NAME.to_string()),
            ext: field("ext").unwrap_or_default(),
        })
    }

    /// Encode as UTF-8 JSON in padded base64, the form [`PayloadCharset::Utf8`]
    /// decodes.
    pub fn encode(&self) -> String {
        // Serializing two string fields cannot fail.
        let json = serde_json::to_string(self).unwrap_or_default();
        lib_utils::b64_encode(json)
    }
}

/// Text of a scalar JSON field. `null` and containers count as absent.
fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number_text(number)),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Number text as JavaScript prints it: `1e2` is "100", not "100.0".
fn number_text(number: &serde_json::Number) -> String {
    if number.is_f64() {
        if let Some(float) = number.as_f64() {
            return float.to_string();
        }
    }
    number.to_string()
}
