//! Lookup caching.
//!
//! ```text
//! GeocodingService ──► LookupCacheClient ──► Arc<dyn Cache> (MemoryCacheProvider)
//!                                                 ▲
//! CacheAdmin ──────────► CacheRegistry ───────────┘
//! ```
//!
//! The registry is the single owner of the named caches. The geocoding
//! service reads through it and the admin surface clears, evicts and lists
//! through it.

pub mod clients;
pub mod providers;

mod admin;
mod registry;
mod traits;

pub use admin::{CacheAdmin, CacheListing, KEYS_UNAVAILABLE};
pub use clients::{LookupCacheClient, StorePolicy};
pub use providers::MemoryCacheProvider;
pub use registry::{CacheRegistry, GEOCODING_CACHE, REVERSE_GEOCODING_CACHE};
pub use traits::{BoxFuture, Cache, CacheError};
