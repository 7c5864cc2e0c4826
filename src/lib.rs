//! Local-first recipe box: a recipe feed with search and ratings, a
//! categorized shopping list, and a weekly meal planner over JSON snapshots.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
