//! Expiration Sweeper Task
//!
//! Background task that periodically evicts stale entries, so memory is
//! reclaimed even for keys nobody reads again.

use std::sync::Weak;
use std::time::Duration;

use tokio::sync::{mpsc, watch, RwLock};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, trace, warn};

use crate::map::{is_stale, Entry, Node, OrderedIndex, State};

// == Sweep ==
/// Removes every entry that is stale at `now`, oldest first.
///
/// This is the whole of one sweeper tick; `delete_expired` calls it directly.
pub fn sweep_expired<V>(index: &mut OrderedIndex<V>, now: Instant) -> Vec<Entry<V>> {
    index
        .remove_where(|node| is_stale(node.deadline(), now))
        .into_iter()
        .map(Node::into_entry)
        .collect()
}

// == Sweeper Handle ==
/// Handle to a running sweeper task.
///
/// Dropping the handle closes the shutdown channel, which also ends the task.
#[derive(Debug)]
pub(crate) struct Sweeper {
    shutdown_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl Sweeper {
    /// Spawns the sweeper on the current Tokio runtime.
    ///
    /// # Arguments
    /// * `state` - Passive reference to the map's state
    /// * `period` - Time between sweeps
    /// * `sink` - Optional channel that receives each non-empty batch
    pub(crate) fn start<V>(
        state: Weak<RwLock<State<V>>>,
        period: Duration,
        sink: Option<mpsc::Sender<Vec<Entry<V>>>>,
    ) -> Self
    where
        V: Send + Sync + 'static,
    {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(sweeper_loop(state, period, sink, shutdown_rx));

        info!(
            period_ms = period.as_millis() as u64,
            "Background sweeper started"
        );

        Self { shutdown_tx, task }
    }

    /// Signals the task to stop and waits for it to finish.
    pub(crate) async fn stop(self) {
        // The task may already be gone if the state was dropped.
        let _ = self.shutdown_tx.send(true);

        if let Err(err) = self.task.await {
            if err.is_panic() {
                warn!(error = %err, "Background sweeper panicked");
            }
        }

        info!("Background sweeper stopped");
    }
}

/// The main sweeper loop.
async fn sweeper_loop<V>(
    state: Weak<RwLock<State<V>>>,
    period: Duration,
    sink: Option<mpsc::Sender<Vec<Entry<V>>>>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            result = shutdown_rx.changed() => {
                if result.is_err() || *shutdown_rx.borrow() {
                    debug!("Sweeper received shutdown signal");
                    return;
                }
            }
            _ = ticker.tick() => {}
        }

        let Some(state) = state.upgrade() else {
            debug!("Map dropped, sweeper exiting");
            return;
        };

        let evicted = {
            let mut guard = state.write().await;
            match guard.live_mut() {
                Ok(index) => sweep_expired(index, Instant::now()),
                Err(_) => {
                    debug!("Map destroyed, sweeper exiting");
                    return;
                }
            }
        };
        drop(state);

        if evicted.is_empty() {
            trace!("Sweep: no expired entries found");
            continue;
        }

        debug!(evicted = evicted.len(), "Sweep: removed expired entries");

        if let Some(sink) = &sink {
            if let Err(err) = sink.try_send(evicted) {
                debug!(
                    dropped = err.into_inner().len(),
                    "Eviction sink unavailable, batch dropped"
                );
            }
        }
    }
}
