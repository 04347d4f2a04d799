//! JSON output of a finished search.
//!
//! Only successful searches are written; a failed search leaves no file.

use crate::models::ArticleSummary;
use chrono::Utc;
use serde::Serialize;
use std::error::Error;
use std::path::PathBuf;
use tokio::fs;
use tracing::{error, info, instrument};

/// Document written for one search.
#[derive(Debug, Serialize)]
pub struct SavedSearch<'a> {
    pub query: &'a str,
    /// RFC 3339 UTC time the results were rendered.
    pub fetched_at: String,
    pub count: usize,
    pub articles: &'a [ArticleSummary],
}

/// Write `summaries` to `{json_output_dir}/{date}/{slug}.json`.
///
/// # Returns
///
/// The path of the written file.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir))]
pub async fn write_summaries(
    json_output_dir: &str,
    query: &str,
    summaries: &[ArticleSummary],
) -> Result<PathBuf, Box<dyn Error>> {
    let saved = SavedSearch {
        query,
        fetched_at: Utc::now().to_rfc3339(),
        count: summaries.len(),
        articles: summaries,
    };
    let json = serde_json::to_string_pretty(&saved)?;

    let path = super::output_path(json_output_dir, query, "json");
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent).await {
            error!(dir = %parent.display(), error = %e, "Failed to create JSON dir");
            return Err(e.into());
        }
    }

    fs::write(&path, json).await?;
    info!(path = %path.display(), count = summaries.len(), "Wrote JSON file");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_summaries() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_str().unwrap();
        let summaries = vec![ArticleSummary {
            title: "제목".to_string(),
            description: "(no summary)".to_string(),
            image_url: "https://example.com/a.jpg".to_string(),
            link_url: "#".to_string(),
            published: None,
            source: None,
        }];

        let path = write_summaries(dir, "인공지능", &summaries).await.unwrap();
        assert_eq!(path.file_name().unwrap(), "인공지능.json");

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["query"], "인공지능");
        assert_eq!(value["count"], 1);
        assert_eq!(value["articles"][0]["link_url"], "#");
        assert!(value["articles"][0]["published"].is_null());
    }
}
