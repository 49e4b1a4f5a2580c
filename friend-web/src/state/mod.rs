//! Page state

pub mod invite;
