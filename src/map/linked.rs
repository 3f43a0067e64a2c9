//! Linked Map Module
//!
//! Insertion-ordered concurrent map without expiration.

use async_trait::async_trait;

use crate::config::MapConfig;
use crate::error::Result;
use crate::map::{Entry, LinkedTtlMap, Map};

// == Linked Map ==
/// Ordered map with the [`Map`] operation set but no deadlines, no sweeper
/// and no runtime requirement at construction.
#[derive(Debug)]
pub struct LinkedMap<V> {
    inner: LinkedTtlMap<V>,
}

impl<V> Default for LinkedMap<V>
where
    V: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> LinkedMap<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            inner: LinkedTtlMap::new(MapConfig::default()),
        }
    }

    /// Stores `value` only if `key` is absent; an existing value is left
    /// untouched.
    pub async fn store_if_absent(&self, key: impl Into<String>, value: V) -> Result<()> {
        self.inner.store_or_renew(key, value).await
    }
}

// == Map Trait ==
#[async_trait]
impl<V> Map<V> for LinkedMap<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Inserts or updates in place; updates keep their position.
    async fn store<K>(&self, key: K, value: V) -> Result<()>
    where
        K: Into<String> + Send,
    {
        self.inner.store(key, value).await
    }

    async fn load(&self, key: &str) -> Result<Option<V>> {
        self.inner.load(key).await
    }

    async fn load_or_store<K>(&self, key: K, value: V) -> Result<(V, bool)>
    where
        K: Into<String> + Send,
    {
        self.inner.load_or_store(key, value).await
    }

    async fn store_or_compare<K, F>(&self, key: K, value: V, combine: F) -> Result<()>
    where
        K: Into<String> + Send,
        F: FnOnce(&V, V) -> V + Send,
    {
        self.inner.store_or_compare(key, value, combine).await
    }

    async fn delete(&self, key: &str) -> Result<Option<V>> {
        self.inner.delete(key).await
    }

    async fn clear(&self) -> Result<Vec<Entry<V>>> {
        self.inner.clear().await
    }

    async fn range<F>(&self, visitor: F) -> Result<()>
    where
        F: FnMut(&str, &V) -> bool + Send,
    {
        self.inner.range(visitor).await
    }

    async fn size(&self) -> Result<usize> {
        self.inner.size().await
    }

    async fn destroy(&self) -> Result<()> {
        self.inner.destroy().await
    }
}
