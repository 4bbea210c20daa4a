//! Mini LRU - A fixed-capacity in-memory key-value cache
//!
//! Evicts the least recently used entry when full. Touch and eviction are both
//! O(1), backed by a slab-allocated doubly linked list indexed by a HashMap.
//!
//! Two concurrent front ends are provided: [`SharedCache`], which wraps every
//! operation in one mutex scope, and [`CacheHandle`], an async handle to a
//! single-writer actor task.

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{Capacity, LruCache, SharedCache};
pub use config::Config;
pub use error::CacheError;
pub use tasks::{spawn_cache_actor, CacheHandle};
