//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with recency metadata.

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Logical clock value of the most recent touch
    pub last_touched: u64,
    /// Handle of this entry's node in the recency list
    pub(crate) slot: usize,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry stamped at `now`.
    pub(crate) fn new(value: V, slot: usize, now: u64) -> Self {
        Self {
            value,
            last_touched: now,
            slot,
        }
    }

    // == Touch ==
    /// Records an access at logical time `now`.
    pub(crate) fn touch(&mut self, now: u64) {
        debug_assert!(now > self.last_touched, "recency must strictly increase");
        self.last_touched = now;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("test_value", 4, 1);

        assert_eq!(entry.value, "test_value");
        assert_eq!(entry.last_touched, 1);
        assert_eq!(entry.slot, 4);
    }

    #[test]
    fn test_entry_touch_advances_recency() {
        let mut entry = CacheEntry::new(10, 0, 1);

        entry.touch(5);
        assert_eq!(entry.last_touched, 5);
        // Value and slot are unaffected by a touch
        assert_eq!(entry.value, 10);
        assert_eq!(entry.slot, 0);
    }
}
