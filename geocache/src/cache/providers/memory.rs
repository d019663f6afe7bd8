//! In-memory cache provider using moka.
//!
//! This provider wraps `moka::future::Cache` to provide an async-safe,
//! lock-free in-memory map. It is built without capacity, time-to-live or
//! time-to-idle, so entries only leave through `delete`, `clear` or process
//! exit.

use moka::future::Cache as MokaCache;

use crate::cache::traits::{BoxFuture, Cache, CacheError};

/// Unbounded in-memory cache provider using moka.
///
/// Concurrent reads and writes from many request handlers are safe; two
/// writers racing on one key resolve as last-write-wins.
pub struct MemoryCacheProvider {
    /// The underlying moka cache.
    cache: MokaCache<String, String>,
}

impl MemoryCacheProvider {
    /// Create a new, empty memory cache provider.
    pub fn new() -> Self {
        Self {
            cache: MokaCache::builder().build(),
        }
    }
}

impl Default for MemoryCacheProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Cache for MemoryCacheProvider {
    fn set(&self, key: &str, value: String) -> BoxFuture<'_, Result<(), CacheError>> {
        let key = key.to_string();
        Box::pin(async move {
            self.cache.insert(key, value).await;
            Ok(())
        })
    }

    fn get(&self, key: &str) -> BoxFuture<'_, Result<Option<String>, CacheError>> {
        let key = key.to_string();
        Box::pin(async move { Ok(self.cache.get(&key).await) })
    }

    fn delete(&self, key: &str) -> BoxFuture<'_, Result<bool, CacheError>> {
        let key = key.to_string();
        Box::pin(async move { Ok(self.cache.remove(&key).await.is_some()) })
    }

    fn contains(&self, key: &str) -> BoxFuture<'_, Result<bool, CacheError>> {
        let key = key.to_string();
        Box::pin(async move { Ok(self.cache.contains_key(&key)) })
    }

    fn clear(&self) -> BoxFuture<'_, Result<(), CacheError>> {
        Box::pin(async move {
            // Every entry present at call time is gone once this resolves
            let keys: Vec<_> = self.cache.iter().map(|(key, _)| key).collect();
            for key in keys {
                self.cache.invalidate(&*key).await;
            }
            self.cache.run_pending_tasks().await;
            Ok(())
        })
    }

    fn keys(&self) -> Option<Vec<String>> {
        let mut keys: Vec<String> = self
            .cache
            .iter()
            .map(|(key, _)| (*key).clone())
            .collect();
        keys.sort();
        Some(keys)
    }

    fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }
}
