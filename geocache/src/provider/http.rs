//! HTTP client abstraction for testability

use std::time::Duration;

use super::types::ProviderError;
use crate::cache::BoxFuture;

/// Default upstream request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Trait for HTTP client operations.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling mock HTTP clients in tests. Boxed futures keep the trait
/// usable as `Arc<dyn HttpClient>`.
pub trait HttpClient: Send + Sync {
    /// Performs an HTTP GET request.
    ///
    /// # Arguments
    ///
    /// * `url` - The fully-formed URL to request
    ///
    /// # Returns
    ///
    /// The response body as text for any 2xx response, or an error.
    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<String, ProviderError>>;
}

/// Real HTTP client implementation using reqwest.
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a new ReqwestClient with custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ProviderError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<String, ProviderError>> {
        Box::pin(async move {
            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(|e| ProviderError::Request(describe_transport_error(e, url)))?;

            // Check HTTP status
            let status = response.status();
            if !status.is_success() {
                return Err(ProviderError::Status {
                    status: status.as_u16(),
                    url: redact_access_key(url),
                });
            }

            response
                .text()
                .await
                .map_err(|e| ProviderError::Body(describe_transport_error(e, url)))
        })
    }
}

/// Error text with the request URL replaced by its redacted form.
fn describe_transport_error(err: reqwest::Error, url: &str) -> String {
    format!("{} for url ({})", err.without_url(), redact_access_key(url))
}

/// Strips the `access_key` value from a URL before it reaches logs.
fn redact_access_key(url: &str) -> String {
    match reqwest::Url::parse(url) {
        Ok(mut parsed) => {
            let pairs: Vec<(String, String)> = parsed
                .query_pairs()
                .map(|(k, v)| {
                    let v = if k == "access_key" {
                        "***".to_string()
                    } else {
                        v.into_owned()
                    };
                    (k.into_owned(), v)
                })
                .collect();
            if pairs.is_empty() {
                return parsed.to_string();
            }
            parsed.query_pairs_mut().clear().extend_pairs(pairs);
            parsed.to_string()
        }
        Err(_) => url.to_string(),
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Mock HTTP client for testing.
    ///
    /// Always answers with the configured response and records every
    /// requested URL so tests can count upstream fetches.
    pub struct MockHttpClient {
        pub response: Result<String, ProviderError>,
        calls: AtomicUsize,
        urls: Mutex<Vec<String>>,
    }

    impl MockHttpClient {
        pub fn new(response: Result<String, ProviderError>) -> Self {
            Self {
                response,
                calls: AtomicUsize::new(0),
                urls: Mutex::new(Vec::new()),
            }
        }

        pub fn ok(body: &str) -> Self {
            Self::new(Ok(body.to_string()))
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn last_url(&self) -> Option<String> {
            self.urls.lock().unwrap().last().cloned()
        }
    }

    impl HttpClient for MockHttpClient {
        fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<String, ProviderError>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.urls.lock().unwrap().push(url.to_string());
            let response = self.response.clone();
            Box::pin(async move { response })
        }
    }

    #[tokio::test]
    async fn test_mock_client_success() {
        let mock = MockHttpClient::ok("{\"data\":[]}");

        let result = mock.get("http://example.com").await;
        assert_eq!(result.unwrap(), "{\"data\":[]}");
        assert_eq!(mock.call_count(), 1);
        assert_eq!(mock.last_url().as_deref(), Some("http://example.com"));
    }

    #[tokio::test]
    async fn test_mock_client_error() {
        let mock = MockHttpClient::new(Err(ProviderError::Request("Test error".to_string())));

        let result = mock.get("http://example.com").await;
        assert!(result.is_err());
    }

    #[test]
    fn test_reqwest_client_builds() {
        assert!(ReqwestClient::with_timeout(5).is_ok());
    }

    #[test]
    fn test_redact_access_key() {
        let url = "https://api.positionstack.com/v1/forward?access_key=secret&query=Paris";
        let redacted = redact_access_key(url);
        assert!(!redacted.contains("secret"));
        assert!(redacted.contains("query=Paris"));
    }

    #[tokio::test]
    async fn test_transport_error_hides_access_key() {
        let client = ReqwestClient::with_timeout(2).unwrap();

        let err = client
            .get("http://127.0.0.1:1/v1/forward?access_key=SECRETKEY&query=x")
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::Request(_)));
        let text = err.to_string();
        assert!(!text.contains("SECRETKEY"), "key leaked: {}", text);
        assert!(text.contains("query=x"));
    }

    #[test]
    fn test_redact_leaves_unparseable_url() {
        assert_eq!(redact_access_key("not a url"), "not a url");
    }
}
