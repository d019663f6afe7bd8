//! Shared state passed to route handlers.

use std::sync::Arc;

use crate::cache::CacheAdmin;
use crate::geocoding::GeocodingService;

/// State cloned into every handler.
#[derive(Clone)]
pub struct ServerState {
    /// Cache-wrapped geocoding lookups.
    pub service: Arc<GeocodingService>,

    /// Cache clear and listing operations.
    pub admin: CacheAdmin,
}

impl ServerState {
    pub fn new(service: Arc<GeocodingService>, admin: CacheAdmin) -> Self {
        Self { service, admin }
    }
}
