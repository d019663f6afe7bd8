//! Read-through cache client for lookup answers.
//!
//! This client wraps a generic `Cache` with the call-interposition rules
//! used by the geocoding service:
//! - lookup always happens first; a hit short-circuits the computation
//! - on a miss the computation runs and its success value is stored
//!   unless the caller vetoed storage
//! - failures propagate and leave the cache untouched
//!
//! There is no single-flight: concurrent misses for one key each run the
//! computation and the last write wins.

use std::future::Future;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::cache::traits::Cache;

/// Whether a freshly computed value may be written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorePolicy {
    /// Store the value under its key.
    Store,
    /// Return the value without storing it.
    Skip,
}

impl StorePolicy {
    /// `Store` when `condition` holds, `Skip` otherwise.
    pub fn store_if(condition: bool) -> Self {
        if condition {
            StorePolicy::Store
        } else {
            StorePolicy::Skip
        }
    }
}

/// Named read-through wrapper around one cache.
#[derive(Clone)]
pub struct LookupCacheClient {
    /// Cache name, used in logs.
    name: String,

    /// The underlying generic cache.
    cache: Arc<dyn Cache>,
}

impl LookupCacheClient {
    /// Create a client for the cache registered under `name`.
    pub fn new(name: impl Into<String>, cache: Arc<dyn Cache>) -> Self {
        Self {
            name: name.into(),
            cache,
        }
    }

    /// The cache name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a stored value.
    ///
    /// Backend errors are logged and reported as a miss.
    pub async fn get(&self, key: &str) -> Option<String> {
        match self.cache.get(key).await {
            Ok(value) => value,
            Err(e) => {
                warn!(cache = %self.name, key = %key, error = %e, "Cache get failed");
                None
            }
        }
    }

    /// Store a value. Backend errors are logged and swallowed.
    pub async fn set(&self, key: &str, value: String) {
        if let Err(e) = self.cache.set(key, value).await {
            warn!(cache = %self.name, key = %key, error = %e, "Cache set failed");
        }
    }

    /// Return the cached value for `key`, or compute, maybe store, and return it.
    ///
    /// # Arguments
    ///
    /// * `key` - Cache key derived from the call's parameters
    /// * `policy` - Whether a computed value may be stored
    /// * `compute` - Produces the value on a miss
    pub async fn get_or_compute<F, Fut, E>(
        &self,
        key: &str,
        policy: StorePolicy,
        compute: F,
    ) -> Result<String, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String, E>>,
    {
        if let Some(value) = self.get(key).await {
            debug!(cache = %self.name, key = %key, "Cache HIT");
            return Ok(value);
        }
        debug!(cache = %self.name, key = %key, "Cache MISS");

        let value = compute().await?;

        match policy {
            StorePolicy::Store => self.set(key, value.clone()).await,
            StorePolicy::Skip => {
                debug!(cache = %self.name, key = %key, "Storage vetoed, not caching");
            }
        }

        Ok(value)
    }
}
