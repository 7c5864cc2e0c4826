//! Domain layer types and invariants.

pub mod entities;
pub mod error;
pub mod format;
pub mod planner;
pub mod rating;
pub mod recipes;
pub mod search;
pub mod shopping;
pub mod types;
