//! Geocoding failure kinds.

use axum::http::StatusCode;
use thiserror::Error;

use crate::provider::ProviderError;

/// Errors raised by the geocoding pipeline.
///
/// Each kind maps to one HTTP status; the `Display` form is the message
/// returned to clients.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GeocodingError {
    /// The upstream call failed or its body could not be decoded.
    #[error("Error fetching data for query: {query}")]
    UpstreamFetch {
        query: String,
        #[source]
        source: ProviderError,
    },

    /// The response had no `data` entries.
    #[error("No data found for query: {query}")]
    NoData { query: String },

    /// The first entry lacked latitude or longitude.
    #[error("Missing latitude or longitude for query: {query}")]
    MissingField { query: String },

    /// The first entry lacked a label.
    #[error("Address not found in response.")]
    AddressNotFound,

    /// The label held no all-digit token.
    #[error("No numeric value found in address.")]
    NoNumericToken,

    /// The answer could not be serialised.
    #[error("Error processing response.")]
    Serialization(String),
}

impl GeocodingError {
    /// HTTP status this failure is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            GeocodingError::UpstreamFetch { .. } | GeocodingError::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            GeocodingError::NoData { .. }
            | GeocodingError::MissingField { .. }
            | GeocodingError::AddressNotFound
            | GeocodingError::NoNumericToken => StatusCode::BAD_REQUEST,
        }
    }
}
