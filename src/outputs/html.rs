//! HTML page with the article cards laid out in the themed grid.
//!
//! The page is rendered with minijinja. Templates named `*.html` are
//! auto-escaped, so upstream titles and descriptions cannot inject markup.
//! Card links and images are only emitted for http(s) URLs.

use crate::models::ArticleSummary;
use crate::presenter::{NO_LINK, PLACEHOLDER_IMAGE_URL, assign_columns};
use crate::session::ScreenState;
use crate::theme::PAGE_CSS;
use minijinja::{Environment, context};
use serde::Serialize;
use std::error::Error;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info, instrument};
use url::Url;

pub const PAGE_TITLE: &str = "실시간 뉴스 검색기";

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="ko">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{{ page_title }}</title>
<style>{{ css|safe }}</style>
</head>
<body>
<div class="container">
<h1>📰 {{ page_title }}</h1>
{%- if query %}
<p class="search-query">검색어: {{ query }}</p>
{%- endif %}
{%- if status %}
<div class="status{% if is_error %} error{% endif %}">{{ status }}</div>
{%- endif %}
{%- if columns %}
<div class="grid">
{%- for column in columns %}
<div class="column">
{%- for card in column %}
<div class="news-card">
<img src="{{ card.image_url }}" alt="News Image">
<h3>{{ card.title }}</h3>
{%- if card.source or card.published %}
<div class="meta">{{ card.source or "" }}{% if card.source and card.published %} · {% endif %}{{ card.published or "" }}</div>
{%- endif %}
<p>{{ card.description }}</p>
<a href="{{ card.link_url }}" target="_blank" rel="noopener noreferrer">기사 전문 보기</a>
</div>
{%- endfor %}
</div>
{%- endfor %}
</div>
{%- endif %}
</div>
</body>
</html>
"#;

/// Card fields as placed into the page. URLs are limited to http(s).
#[derive(Debug, Serialize)]
struct CardView<'a> {
    title: &'a str,
    description: &'a str,
    image_url: &'a str,
    link_url: &'a str,
    published: Option<&'a str>,
    source: Option<&'a str>,
}

fn is_web_url(raw: &str) -> bool {
    Url::parse(raw.trim()).is_ok_and(|u| matches!(u.scheme(), "http" | "https"))
}

impl<'a> CardView<'a> {
    fn new(card: &'a ArticleSummary) -> Self {
        let link_url = if is_web_url(&card.link_url) {
            card.link_url.as_str()
        } else {
            if card.link_url != NO_LINK {
                debug!(link = %card.link_url, "Dropping non-web article link");
            }
            NO_LINK
        };
        let image_url = if is_web_url(&card.image_url) {
            card.image_url.as_str()
        } else {
            PLACEHOLDER_IMAGE_URL.as_str()
        };

        Self {
            title: &card.title,
            description: &card.description,
            image_url,
            link_url,
            published: card.published.as_deref(),
            source: card.source.as_deref(),
        }
    }
}

/// Render the whole page for the current screen.
pub fn render_page(query: &str, state: &ScreenState) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("page.html", PAGE_TEMPLATE)?;

    let columns: Vec<Vec<CardView<'_>>> = match state {
        ScreenState::Results(summaries) => assign_columns(summaries)
            .into_iter()
            .map(|column| column.into_iter().map(CardView::new).collect())
            .collect(),
        _ => Vec::new(),
    };

    let ctx = context! {
        page_title => PAGE_TITLE,
        css => PAGE_CSS,
        query => query,
        status => state.status_message(),
        is_error => state.is_error(),
        columns => columns,
    };
    env.get_template("page.html")?.render(ctx)
}

/// Render and write the page to `{dir}/{date}/{slug}.html`.
#[instrument(level = "info", skip_all, fields(html_output_dir = %dir))]
pub async fn write_page(
    dir: &str,
    query: &str,
    state: &ScreenState,
) -> Result<PathBuf, Box<dyn Error>> {
    let page = render_page(query, state)?;
    let path = super::output_path(dir, query, "html");
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    fs::write(&path, page).await?;
    info!(path = %path.display(), "Wrote HTML page");
    Ok(path)
}
