//! Configuration Module
//!
//! Immutable per-map settings: default TTL, sweep interval and renewal policy.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Sweep period used when expiration is enabled but no interval was given.
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_millis(100);

/// Map configuration parameters.
///
/// A `None` (or zero) `default_ttl` disables expiration entirely, and with it
/// the background sweeper regardless of `sweep_interval`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Lifetime given to every stored entry
    #[serde(default, rename = "default_ttl_ms", with = "millis")]
    pub default_ttl: Option<Duration>,
    /// Period of the background sweeper
    #[serde(default, rename = "sweep_interval_ms", with = "millis")]
    pub sweep_interval: Option<Duration>,
    /// Whether a successful read extends the entry's deadline
    #[serde(default)]
    pub renew_on_access: bool,
}

impl MapConfig {
    /// Creates a config; zero durations are treated as "not set".
    pub fn new(default_ttl: Duration, sweep_interval: Duration, renew_on_access: bool) -> Self {
        Self {
            default_ttl: non_zero(default_ttl),
            sweep_interval: non_zero(sweep_interval),
            renew_on_access,
        }
    }

    /// Creates a config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `LINKED_TTL_MAP_DEFAULT_TTL_MS` - Entry lifetime in ms, <= 0 disables (default: disabled)
    /// - `LINKED_TTL_MAP_SWEEP_INTERVAL_MS` - Sweep period in ms, <= 0 uses 100ms (default: unset)
    /// - `LINKED_TTL_MAP_RENEW_ON_ACCESS` - `true` or `false` (default: false)
    pub fn from_env() -> Self {
        Self {
            default_ttl: env::var("LINKED_TTL_MAP_DEFAULT_TTL_MS")
                .ok()
                .and_then(|v| v.trim().parse::<i64>().ok())
                .and_then(signed_millis),
            sweep_interval: env::var("LINKED_TTL_MAP_SWEEP_INTERVAL_MS")
                .ok()
                .and_then(|v| v.trim().parse::<i64>().ok())
                .and_then(signed_millis),
            renew_on_access: env::var("LINKED_TTL_MAP_RENEW_ON_ACCESS")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(false),
        }
    }

    /// Returns true when entries carry a deadline.
    pub fn expiration_enabled(&self) -> bool {
        self.default_ttl.is_some_and(|ttl| !ttl.is_zero())
    }

    /// Returns the period the sweeper should run at, or `None` if no
    /// sweeper should run at all.
    pub fn effective_sweep_interval(&self) -> Option<Duration> {
        if !self.expiration_enabled() {
            return None;
        }
        Some(non_zero_opt(self.sweep_interval).unwrap_or(DEFAULT_SWEEP_INTERVAL))
    }
}

fn non_zero(d: Duration) -> Option<Duration> {
    (!d.is_zero()).then_some(d)
}

fn non_zero_opt(d: Option<Duration>) -> Option<Duration> {
    d.and_then(non_zero)
}

fn signed_millis(ms: i64) -> Option<Duration> {
    u64::try_from(ms).ok().and_then(|ms| non_zero(Duration::from_millis(ms)))
}

// Durations travel as integer milliseconds; 0 or absent means "not set".
mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Duration>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(d) => s.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Duration>, D::Error> {
        let ms = Option::<i64>::deserialize(d)?;
        Ok(ms.and_then(super::signed_millis))
    }
}
