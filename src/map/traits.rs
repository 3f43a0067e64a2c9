//! Map Trait Module
//!
//! The operation set shared by every map in the crate, so callers can be
//! written once against any of them.

use async_trait::async_trait;

use crate::error::Result;
use crate::map::Entry;

// == Map ==
/// Operations common to [`LinkedTtlMap`](crate::map::LinkedTtlMap) and
/// [`LinkedMap`](crate::map::LinkedMap).
///
/// Every method fails with [`MapError::Destroyed`](crate::MapError) once
/// `destroy` has succeeded.
#[async_trait]
pub trait Map<V>: Send + Sync
where
    V: Send + 'static,
{
    /// Inserts `value`, or updates an existing key in place.
    async fn store<K>(&self, key: K, value: V) -> Result<()>
    where
        K: Into<String> + Send;

    /// Returns the value stored under `key`, if any.
    async fn load(&self, key: &str) -> Result<Option<V>>;

    /// Returns `(existing, true)`, or stores `value` and returns
    /// `(value, false)`.
    async fn load_or_store<K>(&self, key: K, value: V) -> Result<(V, bool)>
    where
        K: Into<String> + Send;

    /// Replaces an existing value with `combine(&stored, value)`, or stores
    /// `value` for a new key.
    async fn store_or_compare<K, F>(&self, key: K, value: V, combine: F) -> Result<()>
    where
        K: Into<String> + Send,
        F: FnOnce(&V, V) -> V + Send;

    /// Removes `key` and returns its value, if any.
    async fn delete(&self, key: &str) -> Result<Option<V>>;

    /// Empties the map, returning its entries oldest first.
    async fn clear(&self) -> Result<Vec<Entry<V>>>;

    /// Visits entries oldest first until `visitor` returns `false`.
    async fn range<F>(&self, visitor: F) -> Result<()>
    where
        F: FnMut(&str, &V) -> bool + Send;

    async fn size(&self) -> Result<usize>;

    /// Drops every entry and retires the map.
    async fn destroy(&self) -> Result<()>;
}
