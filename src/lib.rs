//! Linked TTL Map - in-process concurrent key/value maps
//!
//! Provides a map with time-based expiration and insertion-order iteration,
//! plus its ordered-only sibling.

pub mod config;
pub mod error;
pub mod map;
pub mod tasks;

pub use config::MapConfig;
pub use error::{MapError, Result};
pub use map::{Entry, LinkedMap, LinkedTtlMap, Map};
