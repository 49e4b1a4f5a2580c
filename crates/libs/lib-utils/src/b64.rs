//! # Base64 Encoding/Decoding
//!
//! Standard-alphabet base64 with the decoding rules browsers apply in `atob`:
//! ASCII whitespace is skipped, padding is optional and stray trailing bits
//! are ignored.

use base64::{
    alphabet,
    engine::{general_purpose, DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};

const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Encode bytes to a padded standard base64 string (same output as `btoa`).
pub fn b64_encode(content: impl AsRef<[u8]>) -> String {
    general_purpose::STANDARD.encode(content)
}

/// Decode a standard base64 string the way `atob` does.
///
/// ```rust
/// use lib_utils::b64_decode_forgiving;
///
/// assert_eq!(b64_decode_forgiving("aGk=").unwrap(), b"hi");
/// assert_eq!(b64_decode_forgiving(" aG k ").unwrap(), b"hi");
/// ```
pub fn b64_decode_forgiving(b64: &str) -> Result<Vec<u8>, Error> {
    let compact: String = b64
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    FORGIVING
        .decode(compact.as_bytes())
        .map_err(|_| Error::FailToB64Decode)
}

// region:    --- Error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    FailToB64Decode,
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
