//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
///
/// Lookups never fail: a miss is reported as `None`, not as an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Capacity or another setting is outside its valid range
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The task owning the cache has stopped
    #[error("Cache actor is no longer running")]
    Closed,
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
