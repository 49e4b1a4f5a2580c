//! Browser helpers

pub mod dom;
pub mod url;
