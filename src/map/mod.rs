//! Map Module
//!
//! Ordered key/value maps with optional time-based expiration.

mod entry;
mod index;
mod linked;
mod linked_ttl;
mod policy;
mod traits;


// Re-export public types
pub use entry::Entry;
pub use index::{Drain, Iter, Node, OrderedIndex};
pub use linked::LinkedMap;
pub use linked_ttl::LinkedTtlMap;
pub use policy::{is_stale, ExpirationPolicy};
pub use traits::Map;

pub(crate) use linked_ttl::State;
