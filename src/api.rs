//! NewsAPI search client.
//!
//! One keyword search is one GET request to the `everything` endpoint. The
//! parameters are the keyword, Korean-language results, newest first, and
//! the API key. Nothing is retried: every failure is returned to the caller
//! as a [`SearchError`] and the search ends there.
//!
//! # Architecture
//!
//! - [`NewsSource`]: trait for anything that can answer a keyword search
//! - [`NewsApiClient`]: the reqwest-backed implementation
//!
//! The session depends only on the trait, so it can be driven by a fake
//! source in tests.

use crate::error::SearchError;
use crate::models::{ApiKey, ArticleRecord, SearchQuery, SearchResponse};
use crate::utils::truncate_for_log;
use reqwest::Client;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};
use url::Url;

/// NewsAPI `everything` endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://newsapi.org/v2/everything";
/// Upper bound on one round trip, including reading the body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Results are restricted to Korean-language articles.
pub const LANGUAGE: &str = "ko";
/// Most recently published first.
pub const SORT_BY: &str = "publishedAt";

/// Something that can answer a keyword search with article records.
pub trait NewsSource {
    /// Run one search. Upstream order is preserved in the returned records.
    async fn fetch_articles(
        &self,
        query: &SearchQuery,
        credential: &ApiKey,
    ) -> Result<Vec<ArticleRecord>, SearchError>;
}

/// HTTP client for the NewsAPI search endpoint.
pub struct NewsApiClient {
    http: Client,
    endpoint: Url,
    timeout: Duration,
}

impl NewsApiClient {
    /// Build a client for `endpoint` with a per-request `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidConfig`] if `endpoint` is not an
    /// absolute http(s) URL or the HTTP client cannot be built.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, SearchError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| SearchError::InvalidConfig(format!("endpoint {endpoint:?}: {e}")))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(SearchError::InvalidConfig(format!(
                "endpoint scheme must be http or https, got {}",
                endpoint.scheme()
            )));
        }

        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SearchError::InvalidConfig(format!("http client: {e}")))?;

        Ok(Self {
            http,
            endpoint,
            timeout,
        })
    }
}

impl fmt::Debug for NewsApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// reqwest errors carry the request URL, which contains the API key.
fn network_failure(e: reqwest::Error) -> SearchError {
    SearchError::NetworkFailure(e.without_url())
}

impl NewsSource for NewsApiClient {
    #[instrument(level = "info", skip_all, fields(query = %query))]
    async fn fetch_articles(
        &self,
        query: &SearchQuery,
        credential: &ApiKey,
    ) -> Result<Vec<ArticleRecord>, SearchError> {
        let t0 = Instant::now();

        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&[
                ("q", query.as_str()),
                ("language", LANGUAGE),
                ("sortBy", SORT_BY),
                ("apiKey", credential.expose()),
            ])
            .send()
            .await
            .map_err(network_failure);

        let response = match response {
            Ok(r) => r,
            Err(e) => {
                warn!(elapsed_ms = t0.elapsed().as_millis() as u64, error = %e, "News search request failed");
                return Err(e);
            }
        };

        let status = response.status();
        let body = response.text().await.map_err(network_failure)?;
        debug!(status = status.as_u16(), bytes = body.len(), "Received search response");

        if !status.is_success() {
            warn!(
                status = status.as_u16(),
                body_preview = %truncate_for_log(&body, 300),
                "News API returned an error status"
            );
            return Err(SearchError::UpstreamError {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SearchResponse = serde_json::from_str(&body).map_err(|e| {
            warn!(
                error = %e,
                body_preview = %truncate_for_log(&body, 300),
                "News API response did not match the expected shape"
            );
            SearchError::MalformedResponse(e.to_string())
        })?;

        info!(
            count = parsed.articles.len(),
            total_results = ?parsed.total_results,
            upstream_status = ?parsed.status,
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "News search completed"
        );
        Ok(parsed.articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, timeout: Duration) -> NewsApiClient {
        NewsApiClient::new(&format!("{}/v2/everything", server.uri()), timeout).unwrap()
    }

    fn key() -> ApiKey {
        ApiKey::new("test-key").unwrap()
    }

    #[tokio::test]
    async fn test_sends_expected_query_parameters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/everything"))
            .and(query_param("q", "인공지능"))
            .and(query_param("language", "ko"))
            .and(query_param("sortBy", "publishedAt"))
            .and(query_param("apiKey", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "ok",
                "totalResults": 2,
                "articles": [
                    {"title": "첫 번째", "url": "https://example.com/1"},
                    {"title": "두 번째", "url": "https://example.com/2"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, DEFAULT_TIMEOUT);
        let query = SearchQuery::new("인공지능").unwrap();
        let articles = client.fetch_articles(&query, &key()).await.unwrap();

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title.as_deref(), Some("첫 번째"));
        assert_eq!(articles[1].title.as_deref(), Some("두 번째"));
    }

    #[tokio::test]
    async fn test_empty_articles_is_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"status": "ok", "totalResults": 0, "articles": []})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server, DEFAULT_TIMEOUT);
        let query = SearchQuery::new("zzzz").unwrap();
        let articles = client.fetch_articles(&query, &key()).await.unwrap();
        assert!(articles.is_empty());
    }

    #[tokio::test]
    async fn test_error_status_is_upstream_error() {
        let server = MockServer::start().await;
        let body = r#"{"status":"error","code":"apiKeyInvalid","message":"Your API key is invalid."}"#;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string(body))
            .mount(&server)
            .await;

        let client = client_for(&server, DEFAULT_TIMEOUT);
        let query = SearchQuery::new("AI").unwrap();
        let err = client.fetch_articles(&query, &key()).await.unwrap_err();
        match err {
            SearchError::UpstreamError { status, body: got } => {
                assert_eq!(status, 401);
                assert_eq!(got, body);
            }
            other => panic!("expected UpstreamError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_body_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server, DEFAULT_TIMEOUT);
        let query = SearchQuery::new("AI").unwrap();
        let err = client.fetch_articles(&query, &key()).await.unwrap_err();
        assert!(matches!(err, SearchError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_missing_articles_field_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
            .mount(&server)
            .await;

        let client = client_for(&server, DEFAULT_TIMEOUT);
        let query = SearchQuery::new("AI").unwrap();
        let err = client.fetch_articles(&query, &key()).await.unwrap_err();
        assert!(matches!(err, SearchError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_timeout_is_network_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"articles": []}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let client = client_for(&server, Duration::from_millis(100));
        let query = SearchQuery::new("AI").unwrap();
        let err = client.fetch_articles(&query, &key()).await.unwrap_err();
        match err {
            SearchError::NetworkFailure(e) => assert!(e.is_timeout()),
            other => panic!("expected NetworkFailure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_failure() {
        // Reserve a port, then free it so nothing is listening.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = NewsApiClient::new(
            &format!("http://127.0.0.1:{port}/v2/everything"),
            DEFAULT_TIMEOUT,
        )
        .unwrap();
        let query = SearchQuery::new("AI").unwrap();
        let err = client.fetch_articles(&query, &key()).await.unwrap_err();
        assert!(matches!(err, SearchError::NetworkFailure(_)));
        assert!(!err.to_string().contains("test-key"));
    }

    #[test]
    fn test_rejects_invalid_endpoint() {
        assert!(matches!(
            NewsApiClient::new("not a url", DEFAULT_TIMEOUT),
            Err(SearchError::InvalidConfig(_))
        ));
        assert!(matches!(
            NewsApiClient::new("ftp://example.com/everything", DEFAULT_TIMEOUT),
            Err(SearchError::InvalidConfig(_))
        ));
    }
}
