//! Linked TTL Map demo
//!
//! Builds a map from environment configuration, runs it through its
//! operation set and logs what happens, including background sweeps.

use std::time::Duration;

use anyhow::Context;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use linked_ttl_map::{LinkedTtlMap, MapConfig};

/// Entry point.
///
/// # Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load map configuration from environment variables
/// 3. Create the map with an eviction sink and drain the sink in a task
/// 4. Exercise store / update / range / load_or_store / store_or_compare
/// 5. If expiration is enabled, idle past the TTL so the sweeper runs
/// 6. Clear and destroy the map
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "debug" for this crate, can be overridden with RUST_LOG
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "linked_ttl_map=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = MapConfig::from_env();
    info!(
        "Configuration loaded: default_ttl={:?}, sweep_interval={:?}, renew_on_access={}",
        config.default_ttl, config.sweep_interval, config.renew_on_access
    );

    let (tx, mut rx) = mpsc::channel(16);
    let map = LinkedTtlMap::with_eviction_sink(config, tx);

    let listener = tokio::spawn(async move {
        while let Some(batch) = rx.recv().await {
            let keys: Vec<_> = batch.iter().map(|entry| entry.key.as_str()).collect();
            info!(?keys, "Sweeper evicted entries");
        }
    });

    for i in 0..10u64 {
        map.store(i.to_string(), i).await?;
    }
    map.store("2", 200).await?;

    let mut order = Vec::new();
    map.range(|key, value| {
        order.push(format!("{}={}", key, value));
        true
    })
    .await?;
    info!("Order after update: {}", order.join(", "));

    let (actual, loaded) = map.load_or_store("3", 300).await?;
    info!(actual, loaded, "load_or_store on an existing key");

    map.store_or_compare("4", 40, |stored, incoming| (*stored).max(incoming))
        .await?;
    let value = map.load("4").await?;
    info!(?value, "store_or_compare with max");

    if let Some(ttl) = config.default_ttl {
        let idle = ttl + config.effective_sweep_interval().unwrap_or_default() * 2;
        info!("Idling {:?} to let entries expire", idle);
        tokio::time::sleep(idle).await;
        let size = map.size().await?;
        info!(size, "Size after idling");
    }

    let cleared = map.clear().await?;
    info!(fresh = cleared.len(), "Map cleared");

    map.destroy().await?;
    drop(map);

    tokio::time::timeout(Duration::from_secs(1), listener)
        .await
        .context("eviction listener did not finish")??;

    info!("Demo complete");
    Ok(())
}
