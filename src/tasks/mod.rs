//! Background Tasks Module
//!
//! Tokio tasks that own cache state on behalf of async callers.

mod actor;

pub use actor::{spawn_cache_actor, CacheHandle};
