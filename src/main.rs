//! # News Card Search
//!
//! Searches Korean-language news through the NewsAPI `everything` endpoint
//! and renders the results as a three-column grid of article cards: an
//! image, a shortened title and excerpt, and a link to the full story.
//!
//! ## Usage
//!
//! ```sh
//! NEWSAPI_KEY=... news_card_search 반도체 --html-output-dir ./site
//! ```
//!
//! ## Architecture
//!
//! 1. **Configuration**: resolve the API key, endpoint and timeout
//! 2. **Search**: one request to the news API ([`api`])
//! 3. **Presentation**: truncate and fill in fallbacks per article ([`presenter`])
//! 4. **Output**: terminal listing, plus optional HTML page and JSON file ([`outputs`])
//!
//! The [`session`] module ties 2 and 3 together as a small screen state machine.

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod api;
mod cli;
mod config;
mod error;
mod models;
mod outputs;
mod presenter;
mod session;
mod theme;
mod utils;

use api::NewsApiClient;
use cli::Cli;
use config::Settings;
use outputs::terminal;
use session::{ScreenState, SearchSession, validate_query};
use utils::ensure_writable_dir;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("news_card_search starting up");

    let args = Cli::parse();
    debug!(query = %args.query, ?args.html_output_dir, ?args.json_output_dir, "Parsed CLI arguments");

    // An empty keyword is a prompt, not a failure; no key or network needed
    if let Err(prompt) = validate_query(&args.query) {
        println!("{}", terminal::render(&prompt));
        return Ok(());
    }

    let settings = match Settings::load(&args) {
        Ok(s) => s,
        Err(e) => {
            error!(error = %e, "Failed to resolve settings");
            return Err(e);
        }
    };
    info!(endpoint = %settings.endpoint, timeout = ?settings.timeout, "Settings resolved");

    // Fail before searching if an output directory is unusable
    for dir in [&args.html_output_dir, &args.json_output_dir].into_iter().flatten() {
        if let Err(e) = ensure_writable_dir(dir).await {
            error!(path = %dir, error = %e, "Output directory is not writable (fix perms or choose a different path)");
            return Err(e);
        }
    }

    let client = NewsApiClient::new(&settings.endpoint, settings.timeout)?;
    let mut session = SearchSession::new(client, settings.api_key).with_transition_hook(|state| {
        if let ScreenState::Busy { .. } = state {
            if let Some(message) = state.status_message() {
                eprintln!("{message}");
            }
        }
    });

    let state = session.search(&args.query).await;
    println!("{}", terminal::render(state));

    outputs::write_requested(
        args.html_output_dir.as_deref(),
        args.json_output_dir.as_deref(),
        &args.query,
        state,
    )
    .await?;

    let failed = state.is_error();
    let elapsed = start_time.elapsed();
    info!(?elapsed, millis = elapsed.as_millis() as u64, failed, "Execution complete");

    if failed {
        warn!("Search failed; exiting with an error status");
        std::process::exit(1);
    }
    Ok(())
}
