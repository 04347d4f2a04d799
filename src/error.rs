//! Error types for the search pipeline.
//!
//! Every failure of a single search is terminal: nothing is retried and no
//! partial result is rendered. The host turns a [`SearchError`] into a
//! user-facing message with [`SearchError::user_message`] and returns to the
//! idle state.

use serde::Deserialize;
use thiserror::Error;

/// Failures of one keyword search.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The keyword was empty; no request was made.
    #[error("search query is empty")]
    EmptyQuery,

    /// No API key was supplied.
    #[error("news API key is missing")]
    MissingCredential,

    /// Transport-level failure: connect, DNS, timeout or body read.
    #[error("network failure: {0}")]
    NetworkFailure(#[source] reqwest::Error),

    /// The search service answered with a non-2xx status.
    #[error("upstream error ({status}): {body}")]
    UpstreamError { status: u16, body: String },

    /// The body was not JSON or had no `articles` array.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Endpoint or timeout settings could not be used to build a client.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Error object NewsAPI returns alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    code: Option<String>,
    message: Option<String>,
}

impl SearchError {
    /// Message shown to the person searching.
    pub fn user_message(&self) -> String {
        match self {
            SearchError::EmptyQuery => "검색어를 입력해주세요.".to_string(),
            SearchError::MissingCredential => {
                "뉴스 API 키가 설정되지 않았습니다. --api-key 또는 NEWSAPI_KEY를 지정해주세요."
                    .to_string()
            }
            SearchError::NetworkFailure(_) => {
                "뉴스 서버에 연결하지 못했습니다. 잠시 후 다시 시도해주세요.".to_string()
            }
            SearchError::UpstreamError { status, .. } => match self.upstream_message() {
                Some(message) => format!("뉴스 API 오류 (HTTP {status}): {message}"),
                None => format!("뉴스 API 오류 (HTTP {status})"),
            },
            SearchError::MalformedResponse(_) => {
                "뉴스 서버에서 예상하지 못한 응답을 받았습니다.".to_string()
            }
            SearchError::InvalidConfig(detail) => format!("설정 오류: {detail}"),
        }
    }

    /// Extract `code: message` from a NewsAPI error body, if the body is one.
    pub fn upstream_message(&self) -> Option<String> {
        let SearchError::UpstreamError { body, .. } = self else {
            return None;
        };
        let parsed: UpstreamErrorBody = serde_json::from_str(body).ok()?;
        match (parsed.code, parsed.message) {
            (Some(code), Some(message)) => Some(format!("{code}: {message}")),
            (None, Some(message)) => Some(message),
            (Some(code), None) => Some(code),
            (None, None) => None,
        }
    }
}
