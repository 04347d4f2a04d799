//! String shortening, slugs, and file system helpers.
//!
//! - [`shorten`]: word-boundary truncation used for card titles and excerpts
//! - [`truncate_for_log`]: bounded previews of upstream bodies in log lines
//! - [`slugify_title`]: file names for saved searches
//! - [`ensure_writable_dir`]: early validation of output directories

use itertools::Itertools;
use std::error::Error;
use std::fs as stdfs;
use tokio::fs;
use tracing::{info, instrument};

/// Marker appended to shortened text.
pub const ELLIPSIS: &str = "...";

/// Shorten `text` to at most `width` characters, breaking between words.
///
/// Text that already fits is returned unchanged. Otherwise whitespace runs
/// collapse to single spaces and words are kept while the result plus
/// [`ELLIPSIS`] still fits. If even the first word is too long, it is cut
/// at a character boundary.
///
/// Widths count Unicode scalar values, so Hangul syllables count as one each.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(shorten("짧은 제목", 50), "짧은 제목");
/// assert_eq!(shorten("Hello big wide world", 14), "Hello big...");
/// ```
pub fn shorten(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }

    let budget = width.saturating_sub(ELLIPSIS.chars().count());
    let mut used = 0usize;
    let kept = text
        .split_whitespace()
        .take_while(|word| {
            let len = word.chars().count();
            let needed = if used == 0 { len } else { used + 1 + len };
            if needed <= budget {
                used = needed;
                true
            } else {
                false
            }
        })
        .join(" ");

    let kept = if kept.is_empty() {
        text.split_whitespace()
            .next()
            .unwrap_or_default()
            .chars()
            .take(budget)
            .collect()
    } else {
        kept
    };

    format!("{kept}{ELLIPSIS}")
}

/// Truncate a string for logging purposes.
///
/// Keeps the first `max` characters and appends `"…(+N bytes)"` with the
/// number of bytes dropped.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        None => s.to_string(),
        Some((idx, _)) => format!("{}…(+{} bytes)", &s[..idx], s.len() - idx),
    }
}

/// Convert a search keyword to a file-name friendly slug.
///
/// Lowercases, drops punctuation and replaces spaces with hyphens. Hangul
/// counts as alphanumeric and is kept.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(slugify_title("Hello World"), "hello-world");
/// assert_eq!(slugify_title("인공지능 반도체!"), "인공지능-반도체");
/// ```
pub fn slugify_title(title: &str) -> String {
    title
        .trim()
        .to_lowercase()
        .replace(|c: char| !c.is_alphanumeric() && c != ' ' && c != '-', "")
        .replace(' ', "-")
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if needed, then writes and removes a probe file.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or written to.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    if let Err(e) = fs::create_dir_all(path).await {
        return Err(Box::new(e));
    }
    // Try a small sync write using std fs (simpler error surface)
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Output directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}
