//! Application services layer.

pub mod catalog;
pub mod error;
pub mod kitchen;
pub mod store;
