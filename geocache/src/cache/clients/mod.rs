//! Domain-facing cache clients.
//!
//! These clients wrap the generic `Cache` trait with read-through
//! semantics and logging.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────┐     ┌─────────────────────┐
//! │  LookupCacheClient  │     │  LookupCacheClient  │
//! │    "geocoding"      │     │ "reverse-geocoding" │
//! └──────────┬──────────┘     └──────────┬──────────┘
//!            │                           │
//!            ▼                           ▼
//! ┌─────────────────────────────────────────────────┐
//! │              Arc<dyn Cache>                     │
//! │                                                 │
//! │  Generic key-value store (string → string)     │
//! └─────────────────────────────────────────────────┘
//! ```

mod lookup;

pub use lookup::{LookupCacheClient, StorePolicy};
