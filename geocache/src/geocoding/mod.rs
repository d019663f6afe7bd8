//! Geocoding lookups.
//!
//! [`GeocodingPipeline`] performs a single upstream lookup and reduces the
//! response to an answer. [`GeocodingService`] wraps it with the named
//! caches from the [`CacheRegistry`](crate::cache::CacheRegistry).

mod error;
mod pipeline;
mod service;
mod types;

pub use error::GeocodingError;
pub use pipeline::{contains_goa, extract_numeric_token, GeocodingPipeline};
pub use service::GeocodingService;
pub use types::{Coordinates, GeocodeQuery};
