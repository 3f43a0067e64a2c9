//! Error types for the map family
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Map Error Enum ==
/// Errors returned by map operations.
///
/// Lookups that find nothing are not errors; they come back as `None`,
/// `false` or an empty `Vec`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapError {
    /// The map was destroyed and can no longer be used
    #[error("map has been destroyed")]
    Destroyed,
}

// == Result Type Alias ==
/// Convenience Result type for map operations.
pub type Result<T> = std::result::Result<T, MapError>;
