//! Cache-wrapped geocoding entry points.

use std::sync::Arc;

use crate::cache::{
    CacheRegistry, LookupCacheClient, MemoryCacheProvider, StorePolicy, GEOCODING_CACHE,
    REVERSE_GEOCODING_CACHE,
};
use crate::geocoding::error::GeocodingError;
use crate::geocoding::pipeline::{contains_goa, GeocodingPipeline};
use crate::geocoding::types::GeocodeQuery;

/// Geocoding lookups with read-through caching.
///
/// Forward answers are cached per address unless the address mentions
/// "goa"; reverse answers are always cached per coordinate pair. Failures
/// are never cached.
pub struct GeocodingService {
    pipeline: GeocodingPipeline,
    forward_cache: LookupCacheClient,
    reverse_cache: LookupCacheClient,
}

impl GeocodingService {
    /// Create a service reading through the caches held by `registry`.
    ///
    /// A registry missing either geocoding cache gets a private memory
    /// cache for that direction, invisible to the admin surface.
    pub fn new(pipeline: GeocodingPipeline, registry: &CacheRegistry) -> Self {
        Self {
            pipeline,
            forward_cache: client_for(registry, GEOCODING_CACHE),
            reverse_cache: client_for(registry, REVERSE_GEOCODING_CACHE),
        }
    }

    /// Forward geocode `address` to coordinate JSON.
    pub async fn geocode(&self, address: &str) -> Result<String, GeocodingError> {
        let key = GeocodeQuery::Address(address.to_string()).cache_key();
        let policy = StorePolicy::store_if(!contains_goa(address));
        self.forward_cache
            .get_or_compute(&key, policy, || self.pipeline.forward(address))
            .await
    }

    /// Reverse geocode a coordinate pair to a numeric address token.
    pub async fn reverse_geocode(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<String, GeocodingError> {
        let key = GeocodeQuery::Coordinates {
            latitude,
            longitude,
        }
        .cache_key();
        self.reverse_cache
            .get_or_compute(&key, StorePolicy::Store, || {
                self.pipeline.reverse(latitude, longitude)
            })
            .await
    }
}

fn client_for(registry: &CacheRegistry, name: &str) -> LookupCacheClient {
    registry
        .client(name)
        .unwrap_or_else(|| LookupCacheClient::new(name, Arc::new(MemoryCacheProvider::new())))
}
