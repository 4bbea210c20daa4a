//! Shared Cache Module
//!
//! Thread-safe handle that runs every cache operation under one lock scope.

use std::borrow::Borrow;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::cache::{CacheStats, Capacity, LruCache};
use crate::error::Result;

// == Shared Cache ==
/// Cloneable, thread-safe handle to an [`LruCache`].
///
/// Lookups mutate recency, so there is no shared read path: every operation
/// takes the exclusive lock for its whole lookup-touch-evict sequence.
pub struct SharedCache<K, V> {
    inner: Arc<Mutex<LruCache<K, V>>>,
}

impl<K, V> Clone for SharedCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> std::fmt::Debug for SharedCache<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedCache").finish_non_exhaustive()
    }
}

impl<K, V> From<LruCache<K, V>> for SharedCache<K, V> {
    fn from(cache: LruCache<K, V>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }
}

impl<K, V> SharedCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Creates a shared cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Result<Self> {
        LruCache::new(capacity).map(Self::from)
    }

    pub fn with_capacity(capacity: Capacity) -> Self {
        Self::from(LruCache::with_capacity(capacity))
    }

    /// Poisoning is ignored; a panicking caller does not take every other
    /// handle down with it.
    fn lock(&self) -> MutexGuard<'_, LruCache<K, V>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Retrieves a copy of the value, marking the key as most recently used.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.lock().get(key).cloned()
    }

    /// Stores a key-value pair, evicting the least recently used entry if full.
    pub fn put(&self, key: K, value: V) {
        self.lock().put(key, value);
    }

    /// Like [`put`](Self::put), returning the evicted entry.
    pub fn push(&self, key: K, value: V) -> Option<(K, V)> {
        self.lock().push(key, value)
    }

    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lock().remove(key)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lock().contains(key)
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn capacity(&self) -> Capacity {
        self.lock().capacity()
    }

    pub fn stats(&self) -> CacheStats {
        self.lock().stats()
    }

    /// Runs a compound operation under a single lock acquisition.
    ///
    /// Nothing else can observe or mutate the cache until `f` returns.
    pub fn with<R>(&self, f: impl FnOnce(&mut LruCache<K, V>) -> R) -> R {
        let mut cache = self.lock();
        f(&mut cache)
    }
}
