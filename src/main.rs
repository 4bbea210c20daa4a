//! Mini LRU demo driver
//!
//! Runs a fixed script of cache operations through the actor front end and
//! prints each observation.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mini_lru::{spawn_cache_actor, Config, LruCache};

/// Entry point for the demo.
///
/// # Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Spawn the cache actor with the configured capacity
/// 4. Run the scripted puts and gets, printing every result
/// 5. Drop the handle, reclaim the cache and print its statistics
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mini_lru=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("failed to load cache configuration")?;
    info!(
        "Configuration loaded: capacity={}, mailbox_size={}",
        config.capacity, config.mailbox_size
    );

    let cache: LruCache<i64, i64> = LruCache::with_capacity(config.capacity);
    let (handle, actor) = spawn_cache_actor(cache, config.mailbox_size);

    println!("IsEmpty(): {}", handle.is_empty().await?);
    handle.put(1, 10).await?;
    handle.put(2, 20).await?;
    handle.put(3, 30).await?;
    println!("Get(3): {}", show(handle.get(3).await?));
    println!("Get(2): {}", show(handle.get(2).await?));
    println!("Get(10): {}", show(handle.get(10).await?));
    if let Some((key, value)) = handle.push(4, 40).await? {
        info!("Put(4) evicted {}={}", key, value);
    }
    println!("Get(1): {}", show(handle.get(1).await?));
    println!("Get(4): {}", show(handle.get(4).await?));

    drop(handle);
    let cache = actor.await.context("cache actor panicked")?;
    println!("stats: {}", serde_json::to_string(&cache.stats())?);

    Ok(())
}

fn show(value: Option<i64>) -> String {
    value.map_or_else(|| "miss".to_string(), |value| value.to_string())
}
