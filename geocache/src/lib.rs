//! Geocache - caching HTTP façade for positionstack geocoding
//!
//! Forward (address → coordinates) and reverse (coordinates → numeric
//! address token) lookups are fetched from positionstack and cached in
//! memory, so a repeated lookup never reaches upstream. Cache contents can
//! be listed and cleared over HTTP.
//!
//! # Modules
//!
//! - [`provider`]: upstream HTTP client and response schema
//! - [`geocoding`]: lookup pipeline and cache-wrapped service
//! - [`cache`]: cache trait, memory backend, registry and admin
//! - [`server`]: axum routes and error bodies
//! - [`app`]: component wiring
//! - [`config`]: `~/.geocache/config.ini`
//! - [`logging`]: tracing subscriber setup

pub mod app;
pub mod cache;
pub mod config;
pub mod geocoding;
pub mod logging;
pub mod provider;
pub mod server;
