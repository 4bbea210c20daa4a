//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with O(1) LRU tracking.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::cache::{CacheEntry, CacheStats, Capacity, RecencyList};
use crate::error::Result;

// == LRU Cache ==
/// Fixed-capacity key-value cache with least-recently-used eviction.
///
/// The index maps each key to its entry, and every entry holds the slot of its
/// node in a [`RecencyList`]. Touching and evicting are both O(1).
///
/// Every hit and every write stamps the entry with a fresh value of a
/// monotonically increasing logical clock, so the entry at the back of the
/// recency list always carries the smallest stamp.
#[derive(Debug)]
pub struct LruCache<K, V> {
    /// Key-value storage
    entries: HashMap<K, CacheEntry<V>>,
    /// Access order, front = most recent
    order: RecencyList<K>,
    /// Performance statistics
    stats: CacheStats,
    /// Last stamp handed out
    clock: u64,
    /// Maximum number of entries allowed
    capacity: Capacity,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    // == Constructor ==
    /// Creates a new cache holding at most `capacity` entries.
    ///
    /// Fails with [`CacheError::InvalidConfiguration`](crate::error::CacheError)
    /// when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self::with_capacity(Capacity::new(capacity)?))
    }

    /// Creates a new cache from an already validated capacity.
    pub fn with_capacity(capacity: Capacity) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity.get()),
            order: RecencyList::with_capacity(capacity.get()),
            stats: CacheStats::new(),
            clock: 0,
            capacity,
        }
    }

    // == Get ==
    /// Retrieves a value by key, marking it as the most recently used.
    ///
    /// A miss returns `None` and leaves every entry untouched.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.entries.get_mut(key) {
            Some(entry) => {
                self.clock += 1;
                entry.touch(self.clock);
                self.order.touch(entry.slot);
                self.stats.record_hit();
                trace!(recency = self.clock, "cache hit");
                Some(&entry.value)
            }
            None => {
                self.stats.record_miss();
                trace!("cache miss");
                None
            }
        }
    }

    // == Put ==
    /// Stores a key-value pair.
    ///
    /// If the key already exists, the value is overwritten.
    /// If the cache is at capacity, the least recently used entry is evicted.
    /// Either way the key becomes the most recently used.
    pub fn put(&mut self, key: K, value: V) {
        self.push(key, value);
    }

    // == Push ==
    /// Same as [`put`](Self::put), returning the evicted entry if admitting
    /// `key` forced one out.
    ///
    /// Overwriting a resident key never evicts, so it returns `None`.
    pub fn push(&mut self, key: K, value: V) -> Option<(K, V)> {
        self.clock += 1;
        let now = self.clock;

        if let Some(entry) = self.entries.get_mut(&key) {
            entry.value = value;
            entry.touch(now);
            self.order.touch(entry.slot);
            return None;
        }

        let evicted = if self.entries.len() >= self.capacity.get() {
            self.evict_lru()
        } else {
            None
        };

        let slot = self.order.push_front(key.clone());
        self.entries.insert(key, CacheEntry::new(value, slot, now));
        self.stats.set_total_entries(self.entries.len());

        evicted
    }

    // == Evict ==
    /// Removes the entry with the smallest recency stamp.
    fn evict_lru(&mut self) -> Option<(K, V)> {
        let key = self.order.pop_back()?;
        let entry = self.entries.remove(&key)?;
        self.stats.record_eviction();
        debug!(
            recency = entry.last_touched,
            resident = self.entries.len(),
            "evicted least recently used entry"
        );
        Some((key, entry.value))
    }

    // == Peek ==
    /// Returns a value without touching its recency.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key).map(|entry| &entry.value)
    }

    // == Peek LRU ==
    /// Returns the next eviction victim without touching anything.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        let key = self.order.peek_back()?;
        self.entries.get(key).map(|entry| (key, &entry.value))
    }

    // == Contains ==
    /// Checks whether a key is resident, without touching its recency.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    // == Recency ==
    /// Returns the logical time of the key's most recent touch.
    pub fn recency_of<Q>(&self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key).map(|entry| entry.last_touched)
    }

    // == Remove ==
    /// Removes an entry by key, returning its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let entry = self.entries.remove(key)?;
        self.order.remove(entry.slot);
        self.stats.set_total_entries(self.entries.len());
        Some(entry.value)
    }

    // == Clear ==
    /// Drops every entry. Capacity, clock and counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.stats.set_total_entries(0);
    }

    // == Keys ==
    /// Iterates resident keys from most to least recently used.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.order.iter()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Capacity ==
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }
}
