//! Command-line interface definitions.
//!
//! Every option can also come from an environment variable or, for the
//! API settings, from a YAML config file (see [`crate::config`]).

use clap::Parser;

/// Keyword searched when none is given.
pub const DEFAULT_QUERY: &str = "인공지능";

/// Search Korean news by keyword and render the results as article cards.
///
/// # Examples
///
/// ```sh
/// # Search with the key from the environment, print cards to stdout
/// NEWSAPI_KEY=... news_card_search 반도체
///
/// # Also write the HTML page and JSON file
/// news_card_search AI --html-output-dir ./site --json-output-dir ./json
///
/// # Take the key and endpoint from a config file
/// news_card_search 날씨 --config ./news.yaml
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Keyword to search for
    #[arg(default_value = DEFAULT_QUERY)]
    pub query: String,

    /// NewsAPI key
    #[arg(short = 'k', long, env = "NEWSAPI_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Search endpoint (defaults to https://newsapi.org/v2/everything)
    #[arg(long, env = "NEWSAPI_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds (default 10)
    #[arg(short, long)]
    pub timeout_secs: Option<u64>,

    /// Optional path to a YAML config file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output directory for the rendered HTML page
    #[arg(long)]
    pub html_output_dir: Option<String>,

    /// Output directory for the JSON summaries
    #[arg(short, long)]
    pub json_output_dir: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_query() {
        let cli = Cli::parse_from(["news_card_search"]);
        assert_eq!(cli.query, DEFAULT_QUERY);
        assert_eq!(cli.html_output_dir, None);
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "news_card_search",
            "반도체",
            "--api-key",
            "abc",
            "--timeout-secs",
            "5",
            "--html-output-dir",
            "./site",
            "--json-output-dir",
            "./json",
        ]);

        assert_eq!(cli.query, "반도체");
        assert_eq!(cli.api_key.as_deref(), Some("abc"));
        assert_eq!(cli.timeout_secs, Some(5));
        assert_eq!(cli.html_output_dir.as_deref(), Some("./site"));
        assert_eq!(cli.json_output_dir.as_deref(), Some("./json"));
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "news_card_search",
            "AI",
            "-k",
            "abc",
            "-c",
            "/tmp/news.yaml",
            "-j",
            "/tmp/json",
        ]);

        assert_eq!(cli.api_key.as_deref(), Some("abc"));
        assert_eq!(cli.config.as_deref(), Some("/tmp/news.yaml"));
        assert_eq!(cli.json_output_dir.as_deref(), Some("/tmp/json"));
    }
}
