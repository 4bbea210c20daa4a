//! Cache Module
//!
//! Provides a fixed-capacity in-memory cache with O(1) LRU eviction.

mod capacity;
mod entry;
mod lru;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use capacity::Capacity;
pub(crate) use entry::CacheEntry;
pub use lru::RecencyList;
pub use shared::SharedCache;
pub use stats::CacheStats;
pub use store::LruCache;
