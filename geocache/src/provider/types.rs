//! Provider error type.

use thiserror::Error;

/// Errors raised while talking to the upstream geocoding provider.
///
/// The geocoding layer collapses every variant into a single
/// "upstream fetch" failure; the distinction is kept here for logging.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProviderError {
    /// The request could not be sent or no response arrived (DNS, refused, timeout).
    #[error("Request failed: {0}")]
    Request(String),

    /// The provider answered with a non-2xx status.
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// The response body could not be read.
    #[error("Failed to read response: {0}")]
    Body(String),

    /// The response body is not the JSON document we expect.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    Client(String),
}
