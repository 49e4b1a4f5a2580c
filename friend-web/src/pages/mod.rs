//! Page modules

pub mod friend;

pub use friend::{FriendPage, FriendView};
