//! Infrastructure adapters and runtime bootstrap.

pub mod cache;
pub mod db;
pub mod error;
pub mod http;
pub(crate) mod lock;
pub mod shutdown;
pub mod telemetry;
