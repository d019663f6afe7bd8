//! Core traits for the lookup cache.
//!
//! The `Cache` trait provides a key-value interface for caching serialized
//! lookup answers. Providers implement this trait, allowing callers to use
//! any backend through a consistent interface.
//!
//! # Design Principles
//!
//! - **String keys**: Human-readable for debugging and listing
//! - **String values**: Answers are cached in their serialized form
//! - **No eviction policy**: Entries live until cleared, evicted or restart
//! - **Dyn-compatible**: Uses `Pin<Box<dyn Future>>` for trait object support

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

/// Errors that can occur during cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    /// Provider-specific error.
    #[error("Provider error: {0}")]
    Provider(String),
}

/// Boxed future type for dyn-compatible async methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Generic cache interface for key-value storage.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`; one cache instance is shared
/// by every request handler.
///
/// # Dyn Compatibility
///
/// Async methods return boxed futures so that `Arc<dyn Cache>` works and
/// the registry can hold heterogeneous backends.
pub trait Cache: Send + Sync {
    /// Store a value with the given key, replacing any previous value.
    fn set(&self, key: &str, value: String) -> BoxFuture<'_, Result<(), CacheError>>;

    /// Retrieve a value by key.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` if the key exists
    /// - `Ok(None)` if the key is not found
    /// - `Err(_)` if an error occurs
    fn get(&self, key: &str) -> BoxFuture<'_, Result<Option<String>, CacheError>>;

    /// Delete a value by key.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the key existed and was deleted
    /// - `Ok(false)` if the key did not exist
    fn delete(&self, key: &str) -> BoxFuture<'_, Result<bool, CacheError>>;

    /// Check if a key exists without retrieving the value.
    fn contains(&self, key: &str) -> BoxFuture<'_, Result<bool, CacheError>>;

    /// Remove every entry.
    fn clear(&self) -> BoxFuture<'_, Result<(), CacheError>>;

    /// Snapshot of the stored keys.
    ///
    /// Returns `None` when the backend cannot enumerate its keys.
    fn keys(&self) -> Option<Vec<String>>;

    /// Get the current number of entries in the cache.
    fn entry_count(&self) -> u64;
}
