//! Data models for search input, upstream articles, and display summaries.
//!
//! - [`SearchQuery`] and [`ApiKey`]: validated inputs to a search
//! - [`ArticleRecord`]: one raw article as returned by NewsAPI
//! - [`SearchResponse`]: the `everything` endpoint's response body
//! - [`ArticleSummary`]: the truncated, fallback-applied card content
//!
//! Upstream field names are camelCase, so the wire types carry
//! `#[serde(rename_all = "camelCase")]`.

use crate::error::SearchError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-empty search keyword.
///
/// The text is opaque: it is sent as-is in the `q` parameter. Only emptiness
/// is checked, and a keyword made of whitespace counts as empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Validate a raw keyword.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyQuery`] if `raw` is empty or whitespace.
    pub fn new(raw: impl Into<String>) -> Result<Self, SearchError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// NewsAPI credential. Never printed in full.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// # Errors
    ///
    /// Returns [`SearchError::MissingCredential`] if `raw` is blank.
    pub fn new(raw: impl Into<String>) -> Result<Self, SearchError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SearchError::MissingCredential);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Publisher reference attached to each NewsAPI article.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ArticleSourceRef {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// A raw article record. No field is guaranteed present.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    #[serde(default)]
    pub source: Option<ArticleSourceRef>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub url_to_image: Option<String>,
    /// ISO-8601 timestamp, e.g. `2025-05-06T14:30:00Z`.
    #[serde(default)]
    pub published_at: Option<String>,
}

/// Response body of the `everything` endpoint.
///
/// Only `articles` is required; its absence makes the response malformed.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub total_results: Option<u64>,
    pub articles: Vec<ArticleRecord>,
}

/// Display-ready projection of an [`ArticleRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleSummary {
    /// Title, at most 50 characters.
    pub title: String,
    /// Description, at most 100 characters.
    pub description: String,
    pub image_url: String,
    /// Article URL, or `#` when unknown.
    pub link_url: String,
    /// Publication time as `YYYY-MM-DD HH:MM` (UTC).
    pub published: Option<String>,
    /// Publisher name.
    pub source: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_rejects_empty() {
        assert!(matches!(SearchQuery::new(""), Err(SearchError::EmptyQuery)));
        assert!(matches!(
            SearchQuery::new("   "),
            Err(SearchError::EmptyQuery)
        ));
    }

    #[test]
    fn test_search_query_is_opaque() {
        let q = SearchQuery::new(" 반도체 AND 삼성 ").unwrap();
        assert_eq!(q.as_str(), " 반도체 AND 삼성 ");
    }

    #[test]
    fn test_api_key_required_and_redacted() {
        assert!(matches!(ApiKey::new(""), Err(SearchError::MissingCredential)));
        let key = ApiKey::new("secret-key").unwrap();
        assert_eq!(key.expose(), "secret-key");
        assert!(!format!("{key:?}").contains("secret-key"));
    }

    #[test]
    fn test_article_record_all_fields() {
        let json = r#"{
            "source": {"id": null, "name": "연합뉴스"},
            "author": "홍길동",
            "title": "AI 반도체 수출 급증",
            "description": "요약",
            "url": "https://example.com/a",
            "urlToImage": "https://example.com/a.jpg",
            "publishedAt": "2025-05-06T14:30:00Z",
            "content": "본문..."
        }"#;
        let record: ArticleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.title.as_deref(), Some("AI 반도체 수출 급증"));
        assert_eq!(record.url_to_image.as_deref(), Some("https://example.com/a.jpg"));
        assert_eq!(record.source.unwrap().name.as_deref(), Some("연합뉴스"));
    }

    #[test]
    fn test_article_record_missing_and_null_fields() {
        let record: ArticleRecord =
            serde_json::from_str(r#"{"title": null, "url": "https://example.com"}"#).unwrap();
        assert_eq!(record.title, None);
        assert_eq!(record.description, None);
        assert_eq!(record.url_to_image, None);
        assert_eq!(record.url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_search_response_requires_articles() {
        let ok: SearchResponse =
            serde_json::from_str(r#"{"status":"ok","totalResults":0,"articles":[]}"#).unwrap();
        assert!(ok.articles.is_empty());
        assert_eq!(ok.total_results, Some(0));

        let missing = serde_json::from_str::<SearchResponse>(r#"{"status":"ok"}"#);
        assert!(missing.is_err());
    }
}
