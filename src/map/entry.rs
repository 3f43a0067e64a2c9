//! Map Entry Module
//!
//! The key/value pair handed back to callers by bulk operations.

use serde::Serialize;

// == Entry ==
/// A key and its value, detached from the map.
///
/// Returned by `clear` and `delete_expired`; the map keeps its own
/// bookkeeping (deadline, links) internal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry<V> {
    /// The key the value was stored under
    pub key: String,
    /// The stored value
    pub value: V,
}

impl<V> Entry<V> {
    /// Creates a new entry.
    pub fn new(key: impl Into<String>, value: V) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}
