//! Upstream geocoding provider.
//!
//! This module provides the HTTP client abstraction, the positionstack
//! client built on it, and the typed response schema.
//!
//! ```ignore
//! use std::sync::Arc;
//! use geocache::provider::{PositionstackProvider, ReqwestClient};
//!
//! let http_client = Arc::new(ReqwestClient::with_timeout(30)?);
//! let provider = PositionstackProvider::new(http_client, access_key);
//! let body = provider.forward("Paris").await?;
//! ```

mod http;
mod positionstack;
mod response;
mod types;

pub use http::{HttpClient, ReqwestClient, DEFAULT_TIMEOUT_SECS};
pub use positionstack::{PositionstackProvider, DEFAULT_BASE_URL};
pub use response::{DataEntry, EntryRecord, UpstreamResponse};
pub use types::ProviderError;

#[cfg(test)]
pub use http::tests::MockHttpClient;
