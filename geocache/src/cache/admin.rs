//! Cache administration: inspect and clear caches by name.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::cache::registry::CacheRegistry;
use crate::cache::traits::CacheError;

/// Message listed for caches whose keys cannot be enumerated.
pub const KEYS_UNAVAILABLE: &str = "Cannot display keys for this cache type";

/// Listing entry for one cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CacheListing {
    /// Keys currently stored, sorted.
    Keys(Vec<String>),
    /// Informational message in place of keys.
    Unavailable(String),
}

/// Admin operations over a [`CacheRegistry`].
#[derive(Clone)]
pub struct CacheAdmin {
    registry: Arc<CacheRegistry>,
}

impl CacheAdmin {
    pub fn new(registry: Arc<CacheRegistry>) -> Self {
        Self { registry }
    }

    /// Remove every entry from the named cache.
    ///
    /// Unknown names are a no-op.
    pub async fn clear(&self, cache_name: &str) -> Result<(), CacheError> {
        match self.registry.get(cache_name) {
            Some(cache) => {
                cache.clear().await?;
                info!(cache = %cache_name, "Cache cleared");
            }
            None => {
                info!(cache = %cache_name, "Clear requested for unknown cache, ignoring");
            }
        }
        Ok(())
    }

    /// Remove a single entry from the named cache.
    ///
    /// Returns whether an entry was removed. Unknown names and absent keys
    /// are a no-op.
    pub async fn evict(&self, cache_name: &str, key: &str) -> Result<bool, CacheError> {
        let Some(cache) = self.registry.get(cache_name) else {
            return Ok(false);
        };
        let removed = cache.delete(key).await?;
        if removed {
            info!(cache = %cache_name, key = %key, "Cache entry evicted");
        }
        Ok(removed)
    }

    /// Keys of every registered cache, by name.
    pub fn list(&self) -> BTreeMap<String, CacheListing> {
        self.registry
            .iter()
            .map(|(name, cache)| {
                let listing = match cache.keys() {
                    Some(keys) => CacheListing::Keys(keys),
                    None => CacheListing::Unavailable(KEYS_UNAVAILABLE.to_string()),
                };
                (name.to_string(), listing)
            })
            .collect()
    }
}
