//! Turn raw article records into display-safe card summaries.
//!
//! Every function here is pure and total. Missing fields resolve to fixed
//! fallbacks and long text is shortened with [`shorten`], so any upstream
//! record can be rendered.

use crate::models::{ArticleRecord, ArticleSummary};
use crate::theme::{BACKGROUND, FOREGROUND, GRID_COLUMNS};
use crate::utils::shorten;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

/// Maximum title length on a card, in characters.
pub const TITLE_WIDTH: usize = 50;
/// Maximum description length on a card, in characters.
pub const DESCRIPTION_WIDTH: usize = 100;

pub const NO_TITLE: &str = "(no title)";
pub const NO_SUMMARY: &str = "(no summary)";
/// Non-navigating anchor used when an article has no URL.
pub const NO_LINK: &str = "#";

/// Image shown when an article has none, drawn in the page's colors.
pub static PLACEHOLDER_IMAGE_URL: Lazy<String> = Lazy::new(|| {
    format!(
        "https://placehold.co/600x400/{}/{}?text={}",
        BACKGROUND,
        FOREGROUND,
        urlencoding::encode("No Image")
    )
});

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Format an ISO-8601 timestamp as `YYYY-MM-DD HH:MM` in UTC.
fn format_published(raw: Option<&str>) -> Option<String> {
    let parsed = DateTime::parse_from_rfc3339(non_blank(raw)?.trim()).ok()?;
    Some(parsed.with_timezone(&Utc).format("%Y-%m-%d %H:%M").to_string())
}

/// Build the card summary for one record.
pub fn summarize(record: &ArticleRecord) -> ArticleSummary {
    let title = non_blank(record.title.as_deref()).unwrap_or(NO_TITLE);
    let description = non_blank(record.description.as_deref()).unwrap_or(NO_SUMMARY);

    ArticleSummary {
        title: shorten(title, TITLE_WIDTH),
        description: shorten(description, DESCRIPTION_WIDTH),
        image_url: non_blank(record.url_to_image.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.clone()),
        link_url: non_blank(record.url.as_deref())
            .unwrap_or(NO_LINK)
            .to_string(),
        published: format_published(record.published_at.as_deref()),
        source: record
            .source
            .as_ref()
            .and_then(|s| non_blank(s.name.as_deref()))
            .map(str::to_string),
    }
}

/// Summarize records pointwise, preserving order.
pub fn to_summaries(records: &[ArticleRecord]) -> Vec<ArticleSummary> {
    records.iter().map(summarize).collect()
}

/// Distribute items over [`GRID_COLUMNS`] columns in round-robin order.
///
/// Item `i` lands in column `i % GRID_COLUMNS`; each column keeps ascending
/// index order. Always returns exactly [`GRID_COLUMNS`] columns, some of
/// which may be empty.
pub fn assign_columns<T>(items: &[T]) -> Vec<Vec<&T>> {
    let mut columns: Vec<Vec<&T>> = (0..GRID_COLUMNS).map(|_| Vec::new()).collect();
    for (i, item) in items.iter().enumerate() {
        columns[i % GRID_COLUMNS].push(item);
    }
    columns
}
