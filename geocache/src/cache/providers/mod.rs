//! Cache provider implementations.
//!
//! Each provider implements the `Cache` trait. Providers are registered by
//! name in a [`CacheRegistry`](crate::cache::CacheRegistry).
//!
//! # Available Providers
//!
//! - [`MemoryCacheProvider`]: Unbounded in-memory map using moka

mod memory;

pub use memory::MemoryCacheProvider;
