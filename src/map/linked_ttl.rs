//! Linked TTL Map Module
//!
//! The ordered, TTL-aware concurrent map. Every operation takes the map's
//! lock, checks the map is still live, and works on the ordered index.

use std::ops::ControlFlow;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{mpsc, Mutex, RwLock};
use tokio::time::Instant;
use tracing::{debug, trace};

use crate::config::MapConfig;
use crate::error::{MapError, Result};
use crate::map::{is_stale, Entry, ExpirationPolicy, Map, Node, OrderedIndex};
use crate::tasks::{sweep_expired, Sweeper};

// == Lifecycle State ==
/// Everything guarded by the map's lock.
///
/// `Destroyed` holds no index, so a destroyed map cannot be touched by
/// accident.
#[derive(Debug)]
pub(crate) enum State<V> {
    Live(OrderedIndex<V>),
    Destroyed,
}

impl<V> State<V> {
    pub(crate) fn live(&self) -> Result<&OrderedIndex<V>> {
        match self {
            State::Live(index) => Ok(index),
            State::Destroyed => Err(MapError::Destroyed),
        }
    }

    pub(crate) fn live_mut(&mut self) -> Result<&mut OrderedIndex<V>> {
        match self {
            State::Live(index) => Ok(index),
            State::Destroyed => Err(MapError::Destroyed),
        }
    }
}

// == Linked TTL Map ==
/// Concurrent map with per-entry expiration and insertion-order iteration.
///
/// Share it between tasks behind an `Arc`. When expiration is enabled a
/// background sweeper evicts stale entries every sweep interval; stale
/// entries are also evicted lazily when an operation touches them.
///
/// Callbacks (`store_or_compare`'s combine, `range`'s visitor) run while the
/// map's lock is held and must not call back into the same map.
///
/// # Example
/// ```ignore
/// let map = LinkedTtlMap::new(MapConfig::new(
///     Duration::from_secs(3),
///     Duration::from_millis(500),
///     false,
/// ));
/// map.store("1", 1).await?;
/// assert_eq!(map.load("1").await?, Some(1));
/// map.destroy().await?;
/// ```
#[derive(Debug)]
pub struct LinkedTtlMap<V> {
    state: Arc<RwLock<State<V>>>,
    policy: ExpirationPolicy,
    config: MapConfig,
    sweeper: Mutex<Option<Sweeper>>,
}

impl<V> LinkedTtlMap<V>
where
    V: Clone + Send + Sync + 'static,
{
    // == Constructors ==
    /// Creates a map from `config`.
    ///
    /// If expiration is enabled this spawns the sweeper, so it must be called
    /// from within a Tokio runtime. A map without expiration never touches
    /// the runtime.
    pub fn new(config: MapConfig) -> Self {
        Self::build(config, None)
    }

    /// Creates a map whose sweeper offers every non-empty batch of evicted
    /// entries to `sink`.
    ///
    /// Batches are sent with `try_send`; when the channel is full or closed
    /// the batch is dropped rather than stalling the sweeper.
    pub fn with_eviction_sink(config: MapConfig, sink: mpsc::Sender<Vec<Entry<V>>>) -> Self {
        Self::build(config, Some(sink))
    }

    fn build(config: MapConfig, sink: Option<mpsc::Sender<Vec<Entry<V>>>>) -> Self {
        let state = Arc::new(RwLock::new(State::Live(OrderedIndex::new())));
        let sweeper = config
            .effective_sweep_interval()
            .map(|period| Sweeper::start(Arc::downgrade(&state), period, sink));

        debug!(
            ttl_ms = config.default_ttl.map(|ttl| ttl.as_millis() as u64),
            renew_on_access = config.renew_on_access,
            "Map created"
        );

        Self {
            state,
            policy: ExpirationPolicy::from_config(&config),
            config,
            sweeper: Mutex::new(sweeper),
        }
    }

    /// Returns the configuration the map was built with.
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    // == Store ==
    /// Stores `value` under `key` with a fresh deadline.
    ///
    /// An existing fresh key keeps its position in the order; a new (or
    /// stale) key is appended at the end.
    pub async fn store(&self, key: impl Into<String>, value: V) -> Result<()> {
        let key = key.into();
        let mut state = self.state.write().await;
        let index = state.live_mut()?;
        let now = Instant::now();

        evict_if_stale(index, &key, now);
        index.upsert(key, value, self.policy.new_deadline(now));
        Ok(())
    }

    // == Load ==
    /// Returns the value for `key` if present and fresh.
    ///
    /// A stale entry is evicted on the spot and reported as absent. With
    /// renew-on-access the entry's deadline is pushed out.
    pub async fn load(&self, key: &str) -> Result<Option<V>> {
        let mut state = self.state.write().await;
        let index = state.live_mut()?;
        let now = Instant::now();

        if evict_if_stale(index, key, now) {
            return Ok(None);
        }
        Ok(index.get_mut(key).map(|node| self.touch(node, now)))
    }

    // == Load Or Store ==
    /// Returns the existing fresh value with `true`, or stores `value` and
    /// returns it with `false`.
    ///
    /// The check and the store happen under one lock acquisition.
    pub async fn load_or_store(&self, key: impl Into<String>, value: V) -> Result<(V, bool)> {
        let key = key.into();
        let mut state = self.state.write().await;
        let index = state.live_mut()?;
        let now = Instant::now();

        if !evict_if_stale(index, &key, now) {
            if let Some(node) = index.get_mut(&key) {
                return Ok((self.touch(node, now), true));
            }
        }

        index.upsert(key, value.clone(), self.policy.new_deadline(now));
        Ok((value, false))
    }

    // == Store Or Compare ==
    /// Merges `value` into a fresh entry with `combine(stored, value)` and
    /// renews it, or stores `value` if the key is absent or stale.
    ///
    /// # Arguments
    /// * `key` - The key to update
    /// * `value` - Incoming value
    /// * `combine` - Called as `combine(&stored, value)` under the lock
    pub async fn store_or_compare<F>(
        &self,
        key: impl Into<String>,
        value: V,
        combine: F,
    ) -> Result<()>
    where
        F: FnOnce(&V, V) -> V,
    {
        self.store_or_merge(key.into(), value, Some(combine)).await
    }

    /// Renews a fresh entry and leaves its value alone, or stores `value` if
    /// the key is absent or stale.
    pub async fn store_or_renew(&self, key: impl Into<String>, value: V) -> Result<()> {
        self.store_or_merge(key.into(), value, None::<fn(&V, V) -> V>).await
    }

    async fn store_or_merge<F>(&self, key: String, value: V, combine: Option<F>) -> Result<()>
    where
        F: FnOnce(&V, V) -> V,
    {
        let mut state = self.state.write().await;
        let index = state.live_mut()?;
        let now = Instant::now();

        if !evict_if_stale(index, &key, now) {
            if let Some(node) = index.get_mut(&key) {
                self.policy.renew(node.deadline_mut(), now);
                if let Some(combine) = combine {
                    let merged = combine(node.value(), value);
                    *node.value_mut() = merged;
                }
                return Ok(());
            }
        }

        index.upsert(key, value, self.policy.new_deadline(now));
        Ok(())
    }

    // == Delete ==
    /// Removes `key`, returning its value only if the entry was still fresh.
    pub async fn delete(&self, key: &str) -> Result<Option<V>> {
        let mut state = self.state.write().await;
        let index = state.live_mut()?;
        let now = Instant::now();

        Ok(index
            .remove(key)
            .filter(|node| !is_stale(node.deadline(), now))
            .map(Node::into_value))
    }

    // == Clear ==
    /// Empties the map and returns the entries that were still fresh, oldest
    /// first.
    ///
    /// The whole structure is detached in one critical section; sorting out
    /// stale entries happens after the lock is released.
    pub async fn clear(&self) -> Result<Vec<Entry<V>>> {
        let (drained, now) = {
            let mut state = self.state.write().await;
            let index = state.live_mut()?;
            (index.drain_all(), Instant::now())
        };

        Ok(drained
            .filter(|node| !is_stale(node.deadline(), now))
            .map(Node::into_entry)
            .collect())
    }

    // == Range ==
    /// Calls `visitor(key, value)` for each fresh entry, oldest first, until
    /// it returns `false`.
    ///
    /// Stale entries are skipped but not evicted. With renew-on-access each
    /// visited entry is renewed, which takes the write lock; otherwise a
    /// read lock is enough.
    pub async fn range<F>(&self, mut visitor: F) -> Result<()>
    where
        F: FnMut(&str, &V) -> bool,
    {
        if self.policy.renew_on_access() {
            let mut state = self.state.write().await;
            let now = Instant::now();
            state.live_mut()?.for_each_in_order_mut(|node| {
                if is_stale(node.deadline(), now) {
                    return ControlFlow::Continue(());
                }
                self.policy.renew(node.deadline_mut(), now);
                keep_going(visitor(node.key(), node.value()))
            });
        } else {
            let state = self.state.read().await;
            let now = Instant::now();
            state.live()?.for_each_in_order(|node| {
                if is_stale(node.deadline(), now) {
                    return ControlFlow::Continue(());
                }
                keep_going(visitor(node.key(), node.value()))
            });
        }
        Ok(())
    }

    // == Size ==
    /// Number of indexed entries, including stale ones not yet swept.
    pub async fn size(&self) -> Result<usize> {
        let state = self.state.read().await;
        Ok(state.live()?.len())
    }

    // == Delete Expired ==
    /// Runs one sweep now and returns what it evicted, oldest first.
    pub async fn delete_expired(&self) -> Result<Vec<Entry<V>>> {
        let mut state = self.state.write().await;
        let index = state.live_mut()?;
        Ok(sweep_expired(index, Instant::now()))
    }

    // == Destroy ==
    /// Drops all entries, stops the sweeper and makes every later call,
    /// including another `destroy`, fail with [`MapError::Destroyed`].
    pub async fn destroy(&self) -> Result<()> {
        {
            let mut state = self.state.write().await;
            let dropped = state.live()?.len();
            *state = State::Destroyed;
            debug!(dropped, "Map destroyed");
        }

        // Stopped outside the state lock: a tick blocked on it must be able
        // to run, see `Destroyed` and exit.
        let sweeper = self.sweeper.lock().await.take();
        if let Some(sweeper) = sweeper {
            sweeper.stop().await;
        }
        Ok(())
    }

    /// Copies the value out of a fresh node, renewing it if configured to.
    fn touch(&self, node: &mut Node<V>, now: Instant) -> V {
        if self.policy.renew_on_access() {
            self.policy.renew(node.deadline_mut(), now);
        }
        node.value().clone()
    }
}

// == Map Trait ==
#[async_trait]
impl<V> Map<V> for LinkedTtlMap<V>
where
    V: Clone + Send + Sync + 'static,
{
    async fn store<K>(&self, key: K, value: V) -> Result<()>
    where
        K: Into<String> + Send,
    {
        LinkedTtlMap::store(self, key, value).await
    }

    async fn load(&self, key: &str) -> Result<Option<V>> {
        LinkedTtlMap::load(self, key).await
    }

    async fn load_or_store<K>(&self, key: K, value: V) -> Result<(V, bool)>
    where
        K: Into<String> + Send,
    {
        LinkedTtlMap::load_or_store(self, key, value).await
    }

    async fn store_or_compare<K, F>(&self, key: K, value: V, combine: F) -> Result<()>
    where
        K: Into<String> + Send,
        F: FnOnce(&V, V) -> V + Send,
    {
        LinkedTtlMap::store_or_compare(self, key, value, combine).await
    }

    async fn delete(&self, key: &str) -> Result<Option<V>> {
        LinkedTtlMap::delete(self, key).await
    }

    async fn clear(&self) -> Result<Vec<Entry<V>>> {
        LinkedTtlMap::clear(self).await
    }

    async fn range<F>(&self, visitor: F) -> Result<()>
    where
        F: FnMut(&str, &V) -> bool + Send,
    {
        LinkedTtlMap::range(self, visitor).await
    }

    async fn size(&self) -> Result<usize> {
        LinkedTtlMap::size(self).await
    }

    async fn destroy(&self) -> Result<()> {
        LinkedTtlMap::destroy(self).await
    }
}

/// Removes `key` if it is present and stale. Returns true if it did.
fn evict_if_stale<V>(index: &mut OrderedIndex<V>, key: &str, now: Instant) -> bool {
    let stale = index
        .get(key)
        .is_some_and(|node| is_stale(node.deadline(), now));
    if stale {
        index.remove(key);
        trace!(key, "Lazily evicted stale entry");
    }
    stale
}

fn keep_going(proceed: bool) -> ControlFlow<()> {
    if proceed {
        ControlFlow::Continue(())
    } else {
        ControlFlow::Break(())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::sleep;

    fn ttl_config(ttl_ms: u64, renew: bool) -> MapConfig {
        MapConfig::new(Duration::from_millis(ttl_ms), Duration::from_secs(3600), renew)
    }

    async fn keys_of<V>(map: &LinkedTtlMap<V>) -> Vec<String>
    where
        V: Clone + Send + Sync + 'static,
    {
        let mut keys = Vec::new();
        map.range(|key, _| {
            keys.push(key.to_string());
            true
        })
        .await
        .unwrap();
        keys
    }

    #[tokio::test]
    async fn test_store_and_load() {
        let map = LinkedTtlMap::new(MapConfig::default());

        map.store("1", 1).await.unwrap();

        assert_eq!(map.load("1").await.unwrap(), Some(1));
        assert_eq!(map.load("2").await.unwrap(), None);
        assert_eq!(map.size().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_store_overwrite_keeps_position() {
        let map = LinkedTtlMap::new(MapConfig::default());
        for key in ["a", "b", "c"] {
            map.store(key, 0).await.unwrap();
        }

        map.store("b", 7).await.unwrap();

        assert_eq!(keys_of(&map).await, vec!["a", "b", "c"]);
        assert_eq!(map.load("b").await.unwrap(), Some(7));
        assert_eq!(map.size().await.unwrap(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_evicts_stale_entry() {
        let map = LinkedTtlMap::new(ttl_config(1000, false));
        map.store("k", 1).await.unwrap();

        sleep(Duration::from_millis(1001)).await;

        assert_eq!(map.size().await.unwrap(), 1);
        assert_eq!(map.load("k").await.unwrap(), None);
        assert_eq!(map.size().await.unwrap(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_after_expiry_moves_key_to_tail() {
        let map = LinkedTtlMap::new(ttl_config(1000, false));
        map.store("a", 1).await.unwrap();
        sleep(Duration::from_millis(600)).await;
        map.store("b", 2).await.unwrap();
        sleep(Duration::from_millis(600)).await;

        map.store("a", 3).await.unwrap();

        assert_eq!(keys_of(&map).await, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_load_or_store() {
        let map = LinkedTtlMap::new(MapConfig::default());

        assert_eq!(map.load_or_store("1", 3).await.unwrap(), (3, false));
        assert_eq!(map.load_or_store("1", 4).await.unwrap(), (3, true));
        assert_eq!(map.load_or_store("2", 4).await.unwrap(), (4, false));
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_or_store_replaces_stale() {
        let map = LinkedTtlMap::new(ttl_config(1000, false));
        map.store("1", 3).await.unwrap();

        sleep(Duration::from_millis(1001)).await;

        assert_eq!(map.load_or_store("1", 4).await.unwrap(), (4, false));
        assert_eq!(map.load("1").await.unwrap(), Some(4));
    }

    #[tokio::test]
    async fn test_store_or_compare_combines() {
        let map = LinkedTtlMap::<i32>::new(MapConfig::default());
        map.store_or_renew("1", 3).await.unwrap();
        assert_eq!(map.load("1").await.unwrap(), Some(3));

        map.store_or_compare("1", 6, |stored, input| (*stored).max(input))
            .await
            .unwrap();
        assert_eq!(map.load("1").await.unwrap(), Some(6));

        map.store_or_compare("1", 2, |stored, input| (*stored).max(input))
            .await
            .unwrap();
        assert_eq!(map.load("1").await.unwrap(), Some(6));
    }

    #[tokio::test]
    async fn test_store_or_renew_keeps_value() {
        let map = LinkedTtlMap::new(MapConfig::default());
        map.store("1", 3).await.unwrap();

        map.store_or_renew("1", 9).await.unwrap();

        assert_eq!(map.load("1").await.unwrap(), Some(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_or_compare_renews_without_renew_on_access() {
        let map = LinkedTtlMap::<i32>::new(ttl_config(1000, false));
        map.store("1", 1).await.unwrap();

        sleep(Duration::from_millis(800)).await;
        map.store_or_compare("1", 2, |a, b| a + b).await.unwrap();
        sleep(Duration::from_millis(800)).await;

        assert_eq!(map.load("1").await.unwrap(), Some(3));
    }

    #[tokio::test]
    async fn test_delete() {
        let map = LinkedTtlMap::new(MapConfig::default());
        map.store("1", 3).await.unwrap();

        assert_eq!(map.delete("1").await.unwrap(), Some(3));
        assert_eq!(map.delete("1").await.unwrap(), None);
        assert_eq!(map.delete("x").await.unwrap(), None);
        assert_eq!(map.load("1").await.unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delete_stale_reports_absent() {
        let map = LinkedTtlMap::new(ttl_config(1000, false));
        map.store("1", 3).await.unwrap();

        sleep(Duration::from_millis(1001)).await;

        assert_eq!(map.delete("1").await.unwrap(), None);
        assert_eq!(map.size().await.unwrap(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_returns_only_fresh_in_order() {
        let map = LinkedTtlMap::new(ttl_config(1000, false));
        map.store("old", 0).await.unwrap();
        sleep(Duration::from_millis(600)).await;
        map.store("a", 1).await.unwrap();
        map.store("b", 2).await.unwrap();
        sleep(Duration::from_millis(600)).await;

        let cleared = map.clear().await.unwrap();

        assert_eq!(cleared, vec![Entry::new("a", 1), Entry::new("b", 2)]);
        assert_eq!(map.size().await.unwrap(), 0);
        assert!(map.clear().await.unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_range_skips_stale_without_evicting() {
        let map = LinkedTtlMap::new(ttl_config(1000, false));
        map.store("old", 0).await.unwrap();
        sleep(Duration::from_millis(1001)).await;
        map.store("new", 1).await.unwrap();

        assert_eq!(keys_of(&map).await, vec!["new"]);
        assert_eq!(map.size().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_range_stops_early() {
        let map = LinkedTtlMap::<i32>::new(MapConfig::default());
        for i in 0..10 {
            map.store(i.to_string(), i).await.unwrap();
        }

        let mut seen = Vec::new();
        map.range(|_, value| {
            seen.push(*value);
            seen.len() < 3
        })
        .await
        .unwrap();

        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_range_renews_when_configured() {
        let map = LinkedTtlMap::new(ttl_config(1000, true));
        map.store("k", 1).await.unwrap();

        sleep(Duration::from_millis(800)).await;
        assert_eq!(keys_of(&map).await, vec!["k"]);
        sleep(Duration::from_millis(800)).await;

        assert_eq!(map.load("k").await.unwrap(), Some(1));
    }

    /// Holds the write lock across `k`'s deadline while a `range` waits on
    /// it, then returns what that `range` visited.
    async fn range_behind_held_lock(renew: bool) -> (Arc<LinkedTtlMap<i32>>, Vec<String>) {
        let map = Arc::new(LinkedTtlMap::new(ttl_config(1000, renew)));
        map.store("k", 1).await.unwrap();
        sleep(Duration::from_millis(900)).await;

        let guard = map.state.write().await;
        let ranging = tokio::spawn({
            let map = Arc::clone(&map);
            async move { keys_of(map.as_ref()).await }
        });
        sleep(Duration::from_millis(300)).await;
        drop(guard);

        let visited = ranging.await.unwrap();
        (map, visited)
    }

    #[tokio::test(start_paused = true)]
    async fn test_range_waiting_on_lock_does_not_renew_expired_entry() {
        let (map, visited) = range_behind_held_lock(true).await;

        assert!(visited.is_empty());
        assert_eq!(map.load("k").await.unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_range_waiting_on_lock_skips_expired_entry() {
        let (map, visited) = range_behind_held_lock(false).await;

        assert!(visited.is_empty());
        sleep(Duration::from_millis(300)).await;
        assert_eq!(map.load("k").await.unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delete_expired() {
        let map = LinkedTtlMap::new(ttl_config(1000, false));
        map.store("a", 1).await.unwrap();
        map.store("b", 2).await.unwrap();
        sleep(Duration::from_millis(600)).await;
        map.store("c", 3).await.unwrap();
        sleep(Duration::from_millis(600)).await;

        let evicted = map.delete_expired().await.unwrap();

        assert_eq!(evicted, vec![Entry::new("a", 1), Entry::new("b", 2)]);
        assert_eq!(map.size().await.unwrap(), 1);
        assert!(map.delete_expired().await.unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_runs_without_reads() {
        let config = MapConfig::new(Duration::from_secs(1), Duration::from_millis(200), false);
        let map = LinkedTtlMap::new(config);
        map.store("k", 1).await.unwrap();

        sleep(Duration::from_millis(1500)).await;

        assert_eq!(map.size().await.unwrap(), 0);
        map.destroy().await.unwrap();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_mutation_keeps_index_consistent() {
        let map = Arc::new(LinkedTtlMap::<i32>::new(MapConfig::new(
            Duration::from_millis(5),
            Duration::from_millis(1),
            true,
        )));

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let map = Arc::clone(&map);
                tokio::spawn(async move {
                    for i in 0..300 {
                        let key = format!("{}", (worker * 7 + i) % 50);
                        match i % 6 {
                            0 => map.store(key, i).await.map(|_| ()),
                            1 => map.load(&key).await.map(|_| ()),
                            2 => map.store_or_compare(key, i, |a, b| a + b).await,
                            3 => map.load_or_store(key, i).await.map(|_| ()),
                            4 => map.delete(&key).await.map(|_| ()),
                            _ => map.range(|_, _| true).await,
                        }
                        .unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        let state = map.state.read().await;
        let index = state.live().unwrap();
        index.assert_consistent();
        assert_eq!(index.iter().count(), index.len());
        assert!(index.len() <= 50);
        drop(state);

        map.destroy().await.unwrap();
    }

    #[tokio::test]
    async fn test_destroy_then_use_fails() {
        let config = MapConfig::new(Duration::from_secs(1), Duration::from_secs(1), false);
        let map = LinkedTtlMap::new(config);
        map.store("1", 1).await.unwrap();

        map.destroy().await.unwrap();

        assert_eq!(map.load("1").await, Err(MapError::Destroyed));
        assert_eq!(map.store("1", 1).await, Err(MapError::Destroyed));
        assert_eq!(map.size().await, Err(MapError::Destroyed));
        assert_eq!(map.clear().await, Err(MapError::Destroyed));
        assert_eq!(map.range(|_, _| true).await, Err(MapError::Destroyed));
        assert_eq!(map.delete_expired().await, Err(MapError::Destroyed));
        assert_eq!(map.destroy().await, Err(MapError::Destroyed));
    }

    #[tokio::test]
    async fn test_destroy_stops_sweeper() {
        let config = MapConfig::new(Duration::from_secs(1), Duration::from_millis(10), false);
        let map = LinkedTtlMap::<i32>::new(config);

        map.destroy().await.unwrap();

        assert!(map.sweeper.lock().await.is_none());
    }

    #[test]
    fn test_no_ttl_map_needs_no_runtime() {
        let map = LinkedTtlMap::<i32>::new(MapConfig::default());
        assert!(map.sweeper.try_lock().unwrap().is_none());
    }
}
