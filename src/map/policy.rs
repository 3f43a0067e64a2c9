//! Expiration Policy Module
//!
//! Computes deadlines and judges staleness. Kept separate from the index so
//! "is this entry stale" never depends on "is it indexed".

use std::time::Duration;

use tokio::time::Instant;

use crate::config::MapConfig;

// == Staleness ==
/// Returns true once `now` is strictly past `deadline`.
///
/// A `None` deadline never goes stale.
pub fn is_stale(deadline: Option<Instant>, now: Instant) -> bool {
    deadline.is_some_and(|deadline| now > deadline)
}

// == Expiration Policy ==
/// Deadline arithmetic for one map instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpirationPolicy {
    ttl: Option<Duration>,
    renew_on_access: bool,
}

impl ExpirationPolicy {
    /// Creates a policy. A zero `ttl` is the same as none.
    pub fn new(ttl: Option<Duration>, renew_on_access: bool) -> Self {
        Self {
            ttl: ttl.filter(|ttl| !ttl.is_zero()),
            renew_on_access,
        }
    }

    /// Builds the policy described by a map config.
    pub fn from_config(config: &MapConfig) -> Self {
        Self::new(config.default_ttl, config.renew_on_access)
    }

    /// Returns true when entries get a deadline at all.
    pub fn is_enabled(&self) -> bool {
        self.ttl.is_some()
    }

    /// Whether successful reads should call [`renew`](Self::renew).
    pub fn renew_on_access(&self) -> bool {
        self.renew_on_access
    }

    /// Deadline for an entry written at `now`; `None` means never expires.
    pub fn new_deadline(&self, now: Instant) -> Option<Instant> {
        self.ttl.map(|ttl| now + ttl)
    }

    /// Extends a fresh deadline to a full TTL from `now`.
    ///
    /// A stale deadline is left alone: a dead entry never gets its lease back.
    pub fn renew(&self, deadline: &mut Option<Instant>, now: Instant) {
        if is_stale(*deadline, now) {
            return;
        }
        *deadline = self.new_deadline(now);
    }
}
