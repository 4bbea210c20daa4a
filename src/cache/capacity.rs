//! Capacity Module
//!
//! Validated, non-zero upper bound on resident cache entries.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::error::{CacheError, Result};

// == Capacity ==
/// Maximum number of entries a cache may hold at once.
///
/// Always at least 1. Out-of-range inputs are rejected with
/// [`CacheError::InvalidConfiguration`] and never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Capacity(NonZeroUsize);

impl Capacity {
    // == Constructor ==
    /// Validates a capacity.
    pub fn new(capacity: usize) -> Result<Self> {
        NonZeroUsize::new(capacity).map(Self).ok_or_else(|| {
            CacheError::InvalidConfiguration(format!(
                "capacity must be at least 1, got {}",
                capacity
            ))
        })
    }

    /// Returns the capacity as a plain count.
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl From<NonZeroUsize> for Capacity {
    fn from(capacity: NonZeroUsize) -> Self {
        Self(capacity)
    }
}

impl TryFrom<usize> for Capacity {
    type Error = CacheError;

    fn try_from(capacity: usize) -> Result<Self> {
        Self::new(capacity)
    }
}

impl TryFrom<i64> for Capacity {
    type Error = CacheError;

    fn try_from(capacity: i64) -> Result<Self> {
        let capacity = usize::try_from(capacity).map_err(|_| {
            CacheError::InvalidConfiguration(format!(
                "capacity must be at least 1, got {}",
                capacity
            ))
        })?;
        Self::new(capacity)
    }
}

impl FromStr for Capacity {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self> {
        let parsed: i64 = s.trim().parse().map_err(|_| {
            CacheError::InvalidConfiguration(format!("capacity {:?} is not an integer", s))
        })?;
        Self::try_from(parsed)
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_zero_rejected() {
        assert!(matches!(
            Capacity::new(0),
            Err(CacheError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_capacity_negative_rejected() {
        assert!(matches!(
            Capacity::try_from(-1i64),
            Err(CacheError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Capacity::try_from(i64::MIN),
            Err(CacheError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_capacity_one_accepted() {
        let capacity = Capacity::new(1).unwrap();
        assert_eq!(capacity.get(), 1);
    }

    #[test]
    fn test_capacity_from_str() {
        assert_eq!("3".parse::<Capacity>().unwrap().get(), 3);
        assert_eq!(" 42 ".parse::<Capacity>().unwrap().get(), 42);
        assert!("0".parse::<Capacity>().is_err());
        assert!("-1".parse::<Capacity>().is_err());
        assert!("three".parse::<Capacity>().is_err());
        assert!("".parse::<Capacity>().is_err());
    }

    #[test]
    fn test_capacity_display() {
        assert_eq!(Capacity::new(7).unwrap().to_string(), "7");
    }
}
