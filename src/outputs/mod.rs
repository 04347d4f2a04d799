//! Rendering of search results for the page host.
//!
//! # Submodules
//!
//! - [`html`]: the themed card-grid page
//! - [`json`]: the summaries as a JSON document
//! - [`terminal`]: a plain-text listing for stdout
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! └── 2025-05-06/
//!     ├── 인공지능.html
//!     └── 인공지능.json
//! ```

pub mod html;
pub mod json;
pub mod terminal;

use crate::session::ScreenState;
use crate::utils::slugify_title;
use chrono::Local;
use std::error::Error;
use std::path::PathBuf;
use tracing::{error, info, instrument};

/// `{dir}/{today}/{slug}.{ext}` for a search keyword.
pub fn output_path(dir: &str, query: &str, ext: &str) -> PathBuf {
    let slug = slugify_title(query);
    let slug = if slug.is_empty() { "search".to_string() } else { slug };
    PathBuf::from(dir)
        .join(Local::now().date_naive().to_string())
        .join(format!("{slug}.{ext}"))
}

/// Write every output that was asked for.
///
/// The HTML page is written for any screen. The JSON file is written only
/// when there are results. The first failed write is returned.
#[instrument(level = "info", skip_all)]
pub async fn write_requested(
    html_output_dir: Option<&str>,
    json_output_dir: Option<&str>,
    query: &str,
    state: &ScreenState,
) -> Result<(), Box<dyn Error>> {
    if let Some(dir) = html_output_dir {
        match html::write_page(dir, query, state).await {
            Ok(path) => info!(path = %path.display(), "HTML page ready"),
            Err(e) => {
                error!(error = %e, "Failed to write HTML page");
                return Err(e);
            }
        }
    }

    if let (Some(dir), ScreenState::Results(summaries)) = (json_output_dir, state) {
        if let Err(e) = json::write_summaries(dir, query, summaries).await {
            error!(error = %e, "Failed to write JSON");
            return Err(e);
        }
    }
    Ok(())
}
