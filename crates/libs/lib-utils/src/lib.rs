//! # Utilities Library
//!
//! Shared helpers for base64 and query-string handling.

pub mod b64;
pub mod query;

// Re-export commonly used functions
pub use b64::{b64_decode_forgiving, b64_encode};
pub use query::{append_search_params, query_param};
