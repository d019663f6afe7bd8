//! Named cache registry.
//!
//! The registry is built once at startup and shared through `Arc` with the
//! geocoding service and the admin surface. Names are fixed at
//! construction; looking up an unknown name yields `None` rather than
//! creating a cache.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::cache::clients::LookupCacheClient;
use crate::cache::providers::MemoryCacheProvider;
use crate::cache::traits::Cache;

/// Cache holding forward geocoding answers, keyed by address.
pub const GEOCODING_CACHE: &str = "geocoding";

/// Cache holding reverse geocoding answers, keyed by coordinate pair.
pub const REVERSE_GEOCODING_CACHE: &str = "reverse-geocoding";

/// Collection of independently addressable caches.
#[derive(Default)]
pub struct CacheRegistry {
    caches: BTreeMap<String, Arc<dyn Cache>>,
}

impl CacheRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the geocoding caches backed by memory providers.
    pub fn with_defaults() -> Self {
        Self::new()
            .with_cache(GEOCODING_CACHE, Arc::new(MemoryCacheProvider::new()))
            .with_cache(REVERSE_GEOCODING_CACHE, Arc::new(MemoryCacheProvider::new()))
    }

    /// Register `cache` under `name`, replacing any previous registration.
    pub fn with_cache(mut self, name: impl Into<String>, cache: Arc<dyn Cache>) -> Self {
        self.caches.insert(name.into(), cache);
        self
    }

    /// The cache registered under `name`.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Cache>> {
        self.caches.get(name).cloned()
    }

    /// A read-through client for the cache registered under `name`.
    pub fn client(&self, name: &str) -> Option<LookupCacheClient> {
        self.get(name).map(|cache| LookupCacheClient::new(name, cache))
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.caches.keys().map(String::as_str)
    }

    /// Iterate over `(name, cache)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn Cache>)> {
        self.caches.iter().map(|(name, cache)| (name.as_str(), cache))
    }
}
