//! positionstack geocoding provider.
//!
//! # API Endpoints
//!
//! - Forward: `{base}/forward?access_key={key}&query={address}`
//! - Reverse: `{base}/reverse?access_key={key}&query={lat},{lon}`
//!
//! Both answer with a JSON document holding a `data` array of entries,
//! best match first.

use std::sync::Arc;

use tracing::debug;

use crate::provider::{HttpClient, ProviderError};

/// Production base URL of the positionstack API.
pub const DEFAULT_BASE_URL: &str = "https://api.positionstack.com/v1";

/// positionstack REST client.
///
/// Builds request URLs embedding the access key and hands them to the
/// injected [`HttpClient`]. Returns raw bodies; parsing is the caller's job.
pub struct PositionstackProvider {
    http_client: Arc<dyn HttpClient>,
    base_url: String,
    access_key: String,
}

impl PositionstackProvider {
    /// Creates a provider against the production endpoint.
    ///
    /// # Arguments
    ///
    /// * `http_client` - HTTP client for making requests
    /// * `access_key` - positionstack access key
    pub fn new(http_client: Arc<dyn HttpClient>, access_key: impl Into<String>) -> Self {
        Self::with_base_url(http_client, DEFAULT_BASE_URL, access_key)
    }

    /// Creates a provider against a custom base URL (mirrors, test servers).
    pub fn with_base_url(
        http_client: Arc<dyn HttpClient>,
        base_url: impl Into<String>,
        access_key: impl Into<String>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_key: access_key.into(),
        }
    }

    /// The configured base URL, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the forward geocoding URL for an address.
    pub fn forward_url(&self, address: &str) -> Result<String, ProviderError> {
        self.build_url("forward", address)
    }

    /// Builds the reverse geocoding URL for a coordinate pair.
    ///
    /// Coordinates are rendered with six decimal places.
    pub fn reverse_url(&self, latitude: f64, longitude: f64) -> Result<String, ProviderError> {
        let query = format!("{:.6},{:.6}", latitude, longitude);
        self.build_url("reverse", &query)
    }

    /// Fetches the raw forward geocoding response for an address.
    pub async fn forward(&self, address: &str) -> Result<String, ProviderError> {
        let url = self.forward_url(address)?;
        debug!(address = %address, "Requesting forward geocode");
        self.http_client.get(&url).await
    }

    /// Fetches the raw reverse geocoding response for a coordinate pair.
    pub async fn reverse(&self, latitude: f64, longitude: f64) -> Result<String, ProviderError> {
        let url = self.reverse_url(latitude, longitude)?;
        debug!(latitude, longitude, "Requesting reverse geocode");
        self.http_client.get(&url).await
    }

    fn build_url(&self, endpoint: &str, query: &str) -> Result<String, ProviderError> {
        let base = format!("{}/{}", self.base_url, endpoint);
        reqwest::Url::parse_with_params(
            &base,
            &[("access_key", self.access_key.as_str()), ("query", query)],
        )
        .map(String::from)
        .map_err(|e| ProviderError::Request(format!("Invalid URL {}: {}", base, e)))
    }
}
