//! Integration tests for the HTTP API.
//!
//! These tests drive the full router against a scripted upstream:
//! - forward and reverse lookups with their cache behaviour
//! - error bodies for validation, upstream and shaping failures
//! - cache listing and clearing
//!
//! Run with: `cargo test --test http_api`

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use geocache::app::{AppConfig, GeocacheApp};
use geocache::cache::BoxFuture;
use geocache::provider::{HttpClient, ProviderError};

// ============================================================================
// Helper Functions
// ============================================================================

/// Upstream stand-in answering forward and reverse calls with fixed bodies.
struct ScriptedUpstream {
    forward: Result<String, ProviderError>,
    reverse: Result<String, ProviderError>,
    calls: AtomicUsize,
    urls: Mutex<Vec<String>>,
}

impl ScriptedUpstream {
    fn new(forward: &str, reverse: &str) -> Arc<Self> {
        Arc::new(Self {
            forward: Ok(forward.to_string()),
            reverse: Ok(reverse.to_string()),
            calls: AtomicUsize::new(0),
            urls: Mutex::new(Vec::new()),
        })
    }

    fn failing(error: ProviderError) -> Arc<Self> {
        Arc::new(Self {
            forward: Err(error.clone()),
            reverse: Err(error),
            calls: AtomicUsize::new(0),
            urls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn last_url(&self) -> Option<String> {
        self.urls.lock().unwrap().last().cloned()
    }
}

impl HttpClient for ScriptedUpstream {
    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<String, ProviderError>> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.urls.lock().unwrap().push(url.to_string());
            if url.contains("/reverse?") {
                self.reverse.clone()
            } else {
                self.forward.clone()
            }
        })
    }
}

const AMPHITHEATRE: &str =
    r#"{"data":[{"latitude":37.4224764,"longitude":-122.0842499,"label":"1600 Amphitheatre Pkwy"}]}"#;
const MG_ROAD: &str = r#"{"data":[{"label":"MG Road 123 Bangalore 560001"}]}"#;
const EMPTY: &str = r#"{"data":[]}"#;

fn router(upstream: Arc<ScriptedUpstream>) -> Router {
    GeocacheApp::with_http_client(AppConfig::new("test-key"), upstream).router()
}

async fn send(router: &Router, method: Method, uri: &str) -> (StatusCode, Option<String>, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Option<String>, String) {
    send(router, Method::GET, uri).await
}

fn error_body(body: &str) -> Value {
    let json: Value = serde_json::from_str(body).unwrap();
    assert!(json["timestamp"].is_string());
    json
}

// ============================================================================
// Forward geocoding
// ============================================================================

#[tokio::test]
async fn test_forward_lookup_returns_coordinates() {
    let upstream = ScriptedUpstream::new(AMPHITHEATRE, MG_ROAD);
    let router = router(upstream.clone());

    let (status, content_type, body) =
        get(&router, "/geocoding?address=1600%20Amphitheatre%20Parkway").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(body, r#"{"latitude":37.4224764,"longitude":-122.0842499}"#);
    let url = upstream.last_url().unwrap();
    assert!(url.contains("access_key=test-key"));
    assert!(url.contains("query=1600+Amphitheatre+Parkway"));
}

#[tokio::test]
async fn test_forward_lookup_keeps_integer_coordinates() {
    let router = router(ScriptedUpstream::new(
        r#"{"data":[{"latitude":10,"longitude":20}]}"#,
        MG_ROAD,
    ));

    let (status, _, body) = get(&router, "/geocoding?address=Somewhere").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"latitude":10,"longitude":20}"#);
}

#[tokio::test]
async fn test_repeat_forward_lookup_fetches_once() {
    let upstream = ScriptedUpstream::new(AMPHITHEATRE, MG_ROAD);
    let router = router(upstream.clone());

    let (_, _, first) = get(&router, "/geocoding?address=Paris").await;
    let (_, _, second) = get(&router, "/geocoding?address=Paris").await;

    assert_eq!(first, second);
    assert_eq!(upstream.calls(), 1);
}

#[tokio::test]
async fn test_goa_lookup_is_never_cached() {
    let upstream = ScriptedUpstream::new(AMPHITHEATRE, MG_ROAD);
    let router = router(upstream.clone());

    get(&router, "/geocoding?address=Calangute%20Goa").await;
    get(&router, "/geocoding?address=Calangute%20Goa").await;
    get(&router, "/geocoding?address=GOA").await;

    assert_eq!(upstream.calls(), 3);
    let (_, _, listing) = get(&router, "/cache/list").await;
    let listing: Value = serde_json::from_str(&listing).unwrap();
    assert_eq!(listing["geocoding"], serde_json::json!([]));
}

#[tokio::test]
async fn test_forward_no_data() {
    let router = router(ScriptedUpstream::new(EMPTY, EMPTY));

    let (status, content_type, body) = get(&router, "/geocoding?address=Nowhere").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    let json = error_body(&body);
    assert_eq!(json["status"], 400);
    assert_eq!(json["error"], "Bad Request");
    assert_eq!(json["message"], "No data found for query: Nowhere");
}

#[tokio::test]
async fn test_forward_missing_coordinates() {
    let router = router(ScriptedUpstream::new(
        r#"{"data":[{"label":"Somewhere"}]}"#,
        EMPTY,
    ));

    let (status, _, body) = get(&router, "/geocoding?address=Somewhere").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_body(&body)["message"],
        "Missing latitude or longitude for query: Somewhere"
    );
}

#[tokio::test]
async fn test_upstream_failure_is_500_and_not_cached() {
    let upstream = ScriptedUpstream::failing(ProviderError::Status {
        status: 401,
        url: "https://api.positionstack.com/v1/forward".to_string(),
    });
    let router = router(upstream.clone());

    let (status, _, body) = get(&router, "/geocoding?address=Paris").await;
    get(&router, "/geocoding?address=Paris").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let json = error_body(&body);
    assert_eq!(json["status"], 500);
    assert_eq!(json["error"], "Internal Server Error");
    assert_eq!(json["message"], "Error fetching data for query: Paris");
    assert_eq!(upstream.calls(), 2);
}

#[tokio::test]
async fn test_missing_and_blank_address() {
    let upstream = ScriptedUpstream::new(AMPHITHEATRE, MG_ROAD);
    let router = router(upstream.clone());

    let (status, _, body) = get(&router, "/geocoding").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_body(&body)["message"],
        "Required parameter 'address' is not present."
    );

    let (status, _, _) = get(&router, "/geocoding?address=%20%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(upstream.calls(), 0);
}

// ============================================================================
// Reverse geocoding
// ============================================================================

#[tokio::test]
async fn test_reverse_lookup_returns_token() {
    let upstream = ScriptedUpstream::new(AMPHITHEATRE, MG_ROAD);
    let router = router(upstream.clone());

    let (status, content_type, body) =
        get(&router, "/reverse-geocoding?latitude=12.97&longitude=77.59").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/plain"));
    assert_eq!(body, "123");
    assert!(upstream
        .last_url()
        .unwrap()
        .contains("query=12.970000%2C77.590000"));
}

#[tokio::test]
async fn test_reverse_token_from_leading_house_number() {
    let router = router(ScriptedUpstream::new(
        AMPHITHEATRE,
        r#"{"data":[{"label":"123 MG Road, Bangalore"}]}"#,
    ));

    let (status, _, body) =
        get(&router, "/reverse-geocoding?latitude=12.97&longitude=77.59").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "123");
}

#[tokio::test]
async fn test_reverse_lookup_is_cached() {
    let upstream = ScriptedUpstream::new(AMPHITHEATRE, MG_ROAD);
    let router = router(upstream.clone());

    get(&router, "/reverse-geocoding?latitude=12.97&longitude=77.59").await;
    get(&router, "/reverse-geocoding?latitude=12.97&longitude=77.59").await;

    assert_eq!(upstream.calls(), 1);
}

#[tokio::test]
async fn test_reverse_without_numeric_token() {
    let router = router(ScriptedUpstream::new(
        AMPHITHEATRE,
        r#"{"data":[{"label":"Unnamed Road"}]}"#,
    ));

    let (status, _, body) = get(&router, "/reverse-geocoding?latitude=1.0&longitude=2.0").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_body(&body)["message"],
        "No numeric value found in address."
    );
}

#[tokio::test]
async fn test_reverse_without_label() {
    let router = router(ScriptedUpstream::new(
        AMPHITHEATRE,
        r#"{"data":[{"latitude":1.0,"longitude":2.0}]}"#,
    ));

    let (status, _, body) = get(&router, "/reverse-geocoding?latitude=1&longitude=2").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_body(&body)["message"], "Address not found in response.");
}

#[tokio::test]
async fn test_reverse_rejects_non_numeric_coordinates() {
    let upstream = ScriptedUpstream::new(AMPHITHEATRE, MG_ROAD);
    let router = router(upstream.clone());

    let (status, _, body) = get(&router, "/reverse-geocoding?latitude=abc&longitude=77.59").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_body(&body)["message"],
        "Invalid value for parameter 'latitude'. Expected type: double"
    );

    let (status, _, body) = get(&router, "/reverse-geocoding?latitude=1.0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_body(&body)["message"],
        "Required parameter 'longitude' is not present."
    );

    assert_eq!(upstream.calls(), 0);
}

// ============================================================================
// Cache administration
// ============================================================================

#[tokio::test]
async fn test_clear_cache_forces_refetch() {
    let upstream = ScriptedUpstream::new(AMPHITHEATRE, MG_ROAD);
    let router = router(upstream.clone());

    get(&router, "/geocoding?address=Paris").await;
    let (status, content_type, body) = send(&router, Method::DELETE, "/cache/geocoding").await;
    get(&router, "/geocoding?address=Paris").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/plain"));
    assert_eq!(body, "Cache cleared successfully.");
    assert_eq!(upstream.calls(), 2);
}

#[tokio::test]
async fn test_clear_unknown_cache_succeeds() {
    let router = router(ScriptedUpstream::new(AMPHITHEATRE, MG_ROAD));

    let (status, _, body) = send(&router, Method::DELETE, "/cache/unknown").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Cache cleared successfully.");
    let (_, _, listing) = get(&router, "/cache/list").await;
    let listing: Value = serde_json::from_str(&listing).unwrap();
    assert!(listing.get("unknown").is_none());
}

#[tokio::test]
async fn test_list_after_clear() {
    let router = router(ScriptedUpstream::new(AMPHITHEATRE, MG_ROAD));

    get(&router, "/geocoding?address=Paris").await;
    get(&router, "/reverse-geocoding?latitude=12.97&longitude=77.59").await;

    let (status, content_type, body) = get(&router, "/cache/list").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    let listing: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(listing["geocoding"], serde_json::json!(["Paris"]));
    assert_eq!(
        listing["reverse-geocoding"],
        serde_json::json!(["12.97,77.59"])
    );

    send(&router, Method::DELETE, "/cache/geocoding").await;

    let (_, _, body) = get(&router, "/cache/list").await;
    let listing: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(listing["geocoding"], serde_json::json!([]));
    assert_eq!(
        listing["reverse-geocoding"],
        serde_json::json!(["12.97,77.59"])
    );
}

#[tokio::test]
async fn test_unknown_route_uses_error_body() {
    let router = router(ScriptedUpstream::new(AMPHITHEATRE, MG_ROAD));

    let (status, _, body) = get(&router, "/weather").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let json = error_body(&body);
    assert_eq!(json["status"], 404);
    assert_eq!(json["error"], "Not Found");
}

#[tokio::test]
async fn test_wrong_method_uses_error_body() {
    let upstream = ScriptedUpstream::new(AMPHITHEATRE, MG_ROAD);
    let router = router(upstream.clone());

    for (method, uri) in [
        (Method::GET, "/cache/geocoding"),
        (Method::POST, "/geocoding?address=Paris"),
        (Method::PUT, "/cache/list"),
    ] {
        let (status, content_type, body) = send(&router, method.clone(), uri).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{} {}", method, uri);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        let json = error_body(&body);
        assert_eq!(json["status"], 405);
        assert_eq!(json["error"], "Method Not Allowed");
    }
    assert_eq!(upstream.calls(), 0);
}

#[tokio::test]
async fn test_clear_cache_named_list() {
    let upstream = ScriptedUpstream::new(AMPHITHEATRE, MG_ROAD);
    let router = router(upstream.clone());

    get(&router, "/geocoding?address=Paris").await;
    let (status, _, body) = send(&router, Method::DELETE, "/cache/list").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Cache cleared successfully.");
    let (_, _, listing) = get(&router, "/cache/list").await;
    let listing: Value = serde_json::from_str(&listing).unwrap();
    assert_eq!(listing["geocoding"], serde_json::json!(["Paris"]));
    assert!(listing.get("list").is_none());
}
