pub mod list;

pub use list::{HashedUserIdView, ListView};
