//! Cache Actor Task
//!
//! Single-writer front end: one tokio task owns the cache and applies
//! commands from a mailbox strictly one at a time.

use std::hash::Hash;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::{CacheStats, LruCache};
use crate::error::{CacheError, Result};

// == Commands ==
enum Command<K, V> {
    Get {
        key: K,
        reply: oneshot::Sender<Option<V>>,
    },
    Put {
        key: K,
        value: V,
        reply: oneshot::Sender<Option<(K, V)>>,
    },
    Remove {
        key: K,
        reply: oneshot::Sender<Option<V>>,
    },
    IsEmpty {
        reply: oneshot::Sender<bool>,
    },
    Len {
        reply: oneshot::Sender<usize>,
    },
    Stats {
        reply: oneshot::Sender<CacheStats>,
    },
}

// == Cache Handle ==
/// Cloneable async handle to a cache owned by an actor task.
///
/// Each call returns once its command has been applied, so calls issued by one
/// handle are observed in program order.
pub struct CacheHandle<K, V> {
    tx: mpsc::Sender<Command<K, V>>,
}

impl<K, V> Clone for CacheHandle<K, V> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<K, V> std::fmt::Debug for CacheHandle<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheHandle")
            .field("closed", &self.tx.is_closed())
            .finish()
    }
}

impl<K, V> CacheHandle<K, V> {
    async fn request<T>(
        &self,
        command: impl FnOnce(oneshot::Sender<T>) -> Command<K, V>,
    ) -> Result<T> {
        let (reply, response) = oneshot::channel();
        self.tx
            .send(command(reply))
            .await
            .map_err(|_| CacheError::Closed)?;
        response.await.map_err(|_| CacheError::Closed)
    }

    /// Retrieves a copy of the value, marking the key as most recently used.
    pub async fn get(&self, key: K) -> Result<Option<V>> {
        self.request(|reply| Command::Get { key, reply }).await
    }

    /// Stores a key-value pair, evicting the least recently used entry if full.
    pub async fn put(&self, key: K, value: V) -> Result<()> {
        self.push(key, value).await.map(|_| ())
    }

    /// Like [`put`](Self::put), returning the evicted entry.
    pub async fn push(&self, key: K, value: V) -> Result<Option<(K, V)>> {
        self.request(|reply| Command::Put { key, value, reply })
            .await
    }

    pub async fn remove(&self, key: K) -> Result<Option<V>> {
        self.request(|reply| Command::Remove { key, reply }).await
    }

    pub async fn is_empty(&self) -> Result<bool> {
        self.request(|reply| Command::IsEmpty { reply }).await
    }

    pub async fn len(&self) -> Result<usize> {
        self.request(|reply| Command::Len { reply }).await
    }

    pub async fn stats(&self) -> Result<CacheStats> {
        self.request(|reply| Command::Stats { reply }).await
    }
}

/// Spawns a task that owns `cache` and serves requests from the returned
/// handle.
///
/// The task runs until every handle has been dropped, then hands the cache
/// back through its `JoinHandle`.
///
/// # Arguments
/// * `cache` - The cache to move into the task
/// * `mailbox_size` - Bound on queued commands; zero is treated as one
///
/// # Example
/// ```ignore
/// let cache = LruCache::new(3)?;
/// let (handle, task) = spawn_cache_actor(cache, 32);
/// handle.put(1, 10).await?;
/// drop(handle);
/// let cache = task.await?;
/// ```
pub fn spawn_cache_actor<K, V>(
    cache: LruCache<K, V>,
    mailbox_size: usize,
) -> (CacheHandle<K, V>, JoinHandle<LruCache<K, V>>)
where
    K: Hash + Eq + Clone + Send + 'static,
    V: Clone + Send + 'static,
{
    // tokio panics on a zero-capacity channel
    let (tx, rx) = mpsc::channel(mailbox_size.max(1));
    let task = tokio::spawn(run(cache, rx));
    (CacheHandle { tx }, task)
}

async fn run<K, V>(
    mut cache: LruCache<K, V>,
    mut rx: mpsc::Receiver<Command<K, V>>,
) -> LruCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    info!(capacity = %cache.capacity(), "cache actor started");

    while let Some(command) = rx.recv().await {
        // A dropped reply receiver only means the caller stopped waiting
        match command {
            Command::Get { key, reply } => {
                let _ = reply.send(cache.get(&key).cloned());
            }
            Command::Put { key, value, reply } => {
                let _ = reply.send(cache.push(key, value));
            }
            Command::Remove { key, reply } => {
                let _ = reply.send(cache.remove(&key));
            }
            Command::IsEmpty { reply } => {
                let _ = reply.send(cache.is_empty());
            }
            Command::Len { reply } => {
                let _ = reply.send(cache.len());
            }
            Command::Stats { reply } => {
                let _ = reply.send(cache.stats());
            }
        }
    }

    debug!(resident = cache.len(), "cache actor stopped");
    cache
}
