//! Route table and handlers.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::{delete, get};
use axum::{Json, Router};
use tracing::{info, warn};

use super::error::ApiError;
use super::params::{required_double, required_non_blank, QueryParams};
use super::state::ServerState;

/// Body returned by a successful cache clear.
pub const CACHE_CLEARED: &str = "Cache cleared successfully.";

pub fn create_router(state: ServerState) -> Router {
    Router::new()
        .route("/geocoding", get(geocode))
        .route("/reverse-geocoding", get(reverse_geocode))
        .route("/cache/list", get(list_caches).delete(clear_list_cache))
        .route("/cache/:cache_name", delete(clear_cache))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .with_state(state)
}

/// GET /geocoding?address=...
async fn geocode(
    State(state): State<ServerState>,
    params: Result<Query<QueryParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params.map_err(reject_query)?;
    let address = required_non_blank(&params, "address")?;

    let body = state.service.geocode(address).await?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}

/// GET /reverse-geocoding?latitude=...&longitude=...
async fn reverse_geocode(
    State(state): State<ServerState>,
    params: Result<Query<QueryParams>, QueryRejection>,
) -> Result<String, ApiError> {
    let Query(params) = params.map_err(reject_query)?;
    let latitude = required_double(&params, "latitude")?;
    let longitude = required_double(&params, "longitude")?;

    Ok(state.service.reverse_geocode(latitude, longitude).await?)
}

/// DELETE /cache/:cache_name
async fn clear_cache(
    State(state): State<ServerState>,
    Path(cache_name): Path<String>,
) -> Result<&'static str, ApiError> {
    clear_named(&state, &cache_name).await
}

/// DELETE /cache/list
///
/// The static `/cache/list` route shadows the capture, so a cache named
/// "list" is cleared here.
async fn clear_list_cache(State(state): State<ServerState>) -> Result<&'static str, ApiError> {
    clear_named(&state, "list").await
}

async fn clear_named(state: &ServerState, cache_name: &str) -> Result<&'static str, ApiError> {
    info!(cache = %cache_name, "Cache clear requested");
    state.admin.clear(cache_name).await?;
    Ok(CACHE_CLEARED)
}

/// GET /cache/list
async fn list_caches(State(state): State<ServerState>) -> impl IntoResponse {
    Json(state.admin.list())
}

async fn not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::new(
        StatusCode::NOT_FOUND,
        format!("No endpoint {} {}", method, uri.path()),
    )
}

async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::new(
        StatusCode::METHOD_NOT_ALLOWED,
        format!("Request method '{}' is not supported for {}", method, uri.path()),
    )
}

fn reject_query(rejection: QueryRejection) -> ApiError {
    warn!(error = %rejection, "Malformed query string");
    ApiError::bad_request(rejection.body_text())
}
