//! Application bootstrap implementation.
//!
//! `GeocacheApp` builds the component graph in dependency order and owns
//! the shared pieces for the lifetime of the process.

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, warn};

use super::config::AppConfig;
use super::error::AppError;
use crate::cache::{CacheAdmin, CacheRegistry};
use crate::geocoding::{GeocodingPipeline, GeocodingService};
use crate::provider::{HttpClient, PositionstackProvider, ReqwestClient};
use crate::server::{self, ServerState};

/// Geocache application.
///
/// Components are created in this order:
/// 1. HTTP client
/// 2. positionstack provider
/// 3. cache registry (`geocoding`, `reverse-geocoding`)
/// 4. geocoding service reading through the registry
/// 5. cache admin over the same registry
///
/// # Example
///
/// ```ignore
/// use geocache::app::{AppConfig, GeocacheApp};
///
/// let app = GeocacheApp::new(AppConfig::new(access_key))?;
/// let listener = app.bind().await?;
/// app.serve(listener, geocache::server::shutdown_signal()).await?;
/// ```
pub struct GeocacheApp {
    config: AppConfig,
    registry: Arc<CacheRegistry>,
    service: Arc<GeocodingService>,
    admin: CacheAdmin,
}

impl GeocacheApp {
    /// Build the application with a reqwest client honouring the configured timeout.
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        let client = ReqwestClient::with_timeout(config.timeout_secs)?;
        Ok(Self::with_http_client(config, Arc::new(client)))
    }

    /// Build the application around an existing HTTP client.
    pub fn with_http_client(config: AppConfig, http_client: Arc<dyn HttpClient>) -> Self {
        if config.access_key.is_empty() {
            warn!("No positionstack access key configured; upstream calls will be rejected");
        }

        let provider = Arc::new(PositionstackProvider::with_base_url(
            http_client,
            config.base_url.clone(),
            config.access_key.clone(),
        ));
        let registry = Arc::new(CacheRegistry::with_defaults());
        let service = Arc::new(GeocodingService::new(
            GeocodingPipeline::new(provider),
            &registry,
        ));
        let admin = CacheAdmin::new(Arc::clone(&registry));

        info!(
            base_url = %config.base_url,
            caches = ?registry.names().collect::<Vec<_>>(),
            "Geocache initialized"
        );

        Self {
            config,
            registry,
            service,
            admin,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn registry(&self) -> &Arc<CacheRegistry> {
        &self.registry
    }

    pub fn service(&self) -> Arc<GeocodingService> {
        Arc::clone(&self.service)
    }

    pub fn admin(&self) -> CacheAdmin {
        self.admin.clone()
    }

    /// Router with every endpoint wired to this application's state.
    pub fn router(&self) -> Router {
        server::build_router(ServerState::new(self.service(), self.admin()))
    }

    /// Bind the configured listen address.
    pub async fn bind(&self) -> Result<TcpListener, AppError> {
        let addr = self.config.bind;
        TcpListener::bind(addr)
            .await
            .map_err(|source| AppError::Bind { addr, source })
    }

    /// Serve on `listener` until `shutdown` resolves.
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> Result<(), AppError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        server::serve(listener, self.router(), shutdown)
            .await
            .map_err(AppError::Serve)
    }
}
