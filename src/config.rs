//! Configuration Module
//!
//! Handles loading and validating cache configuration from environment variables.

use std::env;
use std::num::NonZeroUsize;

use crate::cache::Capacity;
use crate::error::{CacheError, Result};

/// Default number of entries, matching the demo script
const DEFAULT_CAPACITY: usize = 3;
/// Default bound on queued actor commands
const DEFAULT_MAILBOX_SIZE: usize = 32;

/// Cache configuration parameters.
///
/// Unset variables fall back to defaults. Set but invalid variables are
/// errors: a bad capacity must never turn into a silently different cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub capacity: Capacity,
    /// Bound on commands queued for the cache actor
    pub mailbox_size: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries, at least 1 (default: 3)
    /// - `CACHE_MAILBOX` - Actor mailbox size, at least 1 (default: 32)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let capacity = match lookup("CACHE_CAPACITY") {
            Some(raw) => raw.parse::<Capacity>()?,
            None => Self::default().capacity,
        };

        let mailbox_size = match lookup("CACHE_MAILBOX") {
            Some(raw) => parse_mailbox_size(&raw)?,
            None => DEFAULT_MAILBOX_SIZE,
        };

        Ok(Self {
            capacity,
            mailbox_size,
        })
    }
}

fn parse_mailbox_size(raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(CacheError::InvalidConfiguration(format!(
            "CACHE_MAILBOX must be a positive integer, got {:?}",
            raw
        ))),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: Capacity::from(
                NonZeroUsize::new(DEFAULT_CAPACITY).unwrap_or(NonZeroUsize::MIN),
            ),
            mailbox_size: DEFAULT_MAILBOX_SIZE,
        }
    }
}
