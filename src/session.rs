//! One search at a time, as seen by the person using the page.
//!
//! The screen moves `Idle → Busy → {Results | NoResults | Error}`, or from
//! `Idle` straight to `Warning` when the keyword is empty. Each search is a
//! single request; whatever the outcome, the next call to
//! [`SearchSession::search`] starts over from the current screen.
//!
//! `search` takes `&mut self`, so a session cannot run two searches at once.

use crate::api::NewsSource;
use crate::error::SearchError;
use crate::models::{ApiKey, ArticleSummary, SearchQuery};
use crate::presenter::to_summaries;
use std::time::Instant;
use tracing::{info, instrument, warn};

/// What the page is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenState {
    /// Ready for a keyword.
    Idle,
    /// A request is in flight.
    Busy { query: String },
    /// Cards to render, in upstream order.
    Results(Vec<ArticleSummary>),
    /// The search succeeded but matched nothing.
    NoResults,
    /// The keyword was empty; no request was made.
    Warning(String),
    /// The search failed; nothing is rendered.
    Error(String),
}

impl ScreenState {
    /// Status line for states without cards.
    pub fn status_message(&self) -> Option<String> {
        match self {
            ScreenState::Idle | ScreenState::Results(_) => None,
            ScreenState::Busy { query } => Some(format!("'{query}' 관련 뉴스를 검색 중입니다...")),
            ScreenState::NoResults => Some("검색 결과에 해당하는 뉴스가 없습니다.".to_string()),
            ScreenState::Warning(message) | ScreenState::Error(message) => Some(message.clone()),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ScreenState::Error(_))
    }
}

type TransitionHook = Box<dyn Fn(&ScreenState) + Send + Sync>;

/// Drives keyword searches against a [`NewsSource`].
pub struct SearchSession<S> {
    source: S,
    credential: ApiKey,
    state: ScreenState,
    on_transition: Option<TransitionHook>,
}

impl<S: NewsSource> SearchSession<S> {
    pub fn new(source: S, credential: ApiKey) -> Self {
        Self {
            source,
            credential,
            state: ScreenState::Idle,
            on_transition: None,
        }
    }

    /// Call `hook` on every state change, e.g. to show a busy indicator.
    pub fn with_transition_hook(
        mut self,
        hook: impl Fn(&ScreenState) + Send + Sync + 'static,
    ) -> Self {
        self.on_transition = Some(Box::new(hook));
        self
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    /// Go back to `Idle`, dropping whatever was on screen.
    pub fn reset(&mut self) {
        self.transition(ScreenState::Idle);
    }

    fn transition(&mut self, next: ScreenState) {
        self.state = next;
        if let Some(hook) = &self.on_transition {
            hook(&self.state);
        }
    }

    /// Run one search for `raw_query` and return the resulting screen.
    #[instrument(level = "info", skip_all, fields(query = %raw_query))]
    pub async fn search(&mut self, raw_query: &str) -> &ScreenState {
        let query = match validate_query(raw_query) {
            Ok(q) => q,
            Err(prompt) => {
                self.transition(prompt);
                return &self.state;
            }
        };

        self.transition(ScreenState::Busy {
            query: query.to_string(),
        });

        let t0 = Instant::now();
        let next = match self.source.fetch_articles(&query, &self.credential).await {
            Ok(records) if records.is_empty() => {
                info!("Search returned no articles");
                ScreenState::NoResults
            }
            Ok(records) => {
                let summaries = to_summaries(&records);
                info!(count = summaries.len(), elapsed_ms = t0.elapsed().as_millis() as u64, "Search produced article cards");
                ScreenState::Results(summaries)
            }
            Err(e) => {
                report_failure(&e);
                ScreenState::Error(e.user_message())
            }
        };

        self.transition(next);
        &self.state
    }
}

/// Check a keyword without touching the network or the credential.
///
/// An empty keyword yields the `Warning` screen prompting for input.
pub fn validate_query(raw_query: &str) -> Result<SearchQuery, ScreenState> {
    SearchQuery::new(raw_query).map_err(|e| {
        warn!("Empty search query; prompting for a keyword");
        ScreenState::Warning(e.user_message())
    })
}

fn report_failure(e: &SearchError) {
    match e {
        SearchError::UpstreamError { status, .. } => {
            warn!(status, detail = ?e.upstream_message(), "Search failed with upstream error")
        }
        other => warn!(error = %other, "Search failed"),
    }
}
