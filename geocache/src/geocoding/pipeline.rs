//! Fetch, parse and shape one lookup.
//!
//! The pipeline knows nothing about caching; [`GeocodingService`] decides
//! whether an answer is stored.
//!
//! [`GeocodingService`]: super::GeocodingService

use std::sync::Arc;

use tracing::{error, info};

use crate::geocoding::error::GeocodingError;
use crate::geocoding::types::{Coordinates, GeocodeQuery};
use crate::provider::{PositionstackProvider, ProviderError, UpstreamResponse};

/// Whether `address` contains "goa", ignoring case.
pub fn contains_goa(address: &str) -> bool {
    address.to_lowercase().contains("goa")
}

/// First whitespace-separated token made only of ASCII digits.
pub fn extract_numeric_token(label: &str) -> Option<&str> {
    label
        .split_whitespace()
        .find(|token| token.bytes().all(|b| b.is_ascii_digit()))
}

/// Upstream lookup and result shaping for both directions.
pub struct GeocodingPipeline {
    provider: Arc<PositionstackProvider>,
}

impl GeocodingPipeline {
    pub fn new(provider: Arc<PositionstackProvider>) -> Self {
        Self { provider }
    }

    /// Resolve an address to `{"latitude":..,"longitude":..}` JSON text.
    pub async fn forward(&self, address: &str) -> Result<String, GeocodingError> {
        info!(address = %address, "Forward geocoding request");
        let query = GeocodeQuery::Address(address.to_string());

        let body = self.provider.forward(address).await;
        let response = decode(&query, body)?;

        let entry = response.first_entry().ok_or_else(|| {
            error!(query = %query, "No data in response");
            GeocodingError::NoData {
                query: query.to_string(),
            }
        })?;

        let (latitude, longitude) = entry.coordinates().ok_or_else(|| {
            error!(query = %query, "Missing latitude or longitude");
            GeocodingError::MissingField {
                query: query.to_string(),
            }
        })?;

        info!(
            address = %address,
            latitude = %latitude,
            longitude = %longitude,
            "Forward geocoding resolved"
        );
        let answer = serde_json::to_string(&Coordinates {
            latitude,
            longitude,
        })
        .map_err(|e| {
            error!(query = %query, error = %e, "Failed to serialise coordinates");
            GeocodingError::Serialization(e.to_string())
        })?;

        Ok(answer)
    }

    /// Resolve a coordinate pair to the first numeric token of its label.
    pub async fn reverse(&self, latitude: f64, longitude: f64) -> Result<String, GeocodingError> {
        info!(latitude, longitude, "Reverse geocoding request");
        let query = GeocodeQuery::Coordinates {
            latitude,
            longitude,
        };

        let body = self.provider.reverse(latitude, longitude).await;
        let response = decode(&query, body)?;

        let entry = response.first_entry().ok_or_else(|| {
            error!(query = %query, "No data in response");
            GeocodingError::NoData {
                query: query.to_string(),
            }
        })?;

        let label = entry.label().ok_or_else(|| {
            error!(query = %query, "Address label missing from response");
            GeocodingError::AddressNotFound
        })?;

        let token = extract_numeric_token(label).ok_or_else(|| {
            error!(query = %query, label = %label, "No numeric token in address");
            GeocodingError::NoNumericToken
        })?;

        info!(latitude, longitude, token = %token, "Reverse geocoding resolved");
        Ok(token.to_string())
    }
}

/// Collapses transport and decode failures into `UpstreamFetch`.
fn decode(
    query: &GeocodeQuery,
    body: Result<String, ProviderError>,
) -> Result<UpstreamResponse, GeocodingError> {
    body.and_then(|body| UpstreamResponse::parse(&body))
        .map_err(|source| {
            error!(query = %query, error = %source, "Error fetching data");
            GeocodingError::UpstreamFetch {
                query: query.to_string(),
                source,
            }
        })
}
