//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of a map.
//!
//! # Tasks
//! - Sweeper: Removes expired entries at the configured interval

mod sweeper;

pub use sweeper::sweep_expired;
pub(crate) use sweeper::Sweeper;
