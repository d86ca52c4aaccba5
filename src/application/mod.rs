//! Application services layer.

pub mod cache;
pub mod error;
pub mod repos;
pub mod snapshot;
pub mod todos;
