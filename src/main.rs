//! # HYD Alerts
//!
//! Picks the most-covered local headline from a set of RSS feeds and writes
//! the material for an Instagram post about it: a copy-paste caption and a
//! metadata file the post renderer consumes.
//!
//! ## Usage
//!
//! ```sh
//! hyd_alerts -o ./outputs
//! ```
//!
//! ## Architecture
//!
//! The application follows a pipeline architecture:
//! 1. **Fetching**: Download and parse every configured feed (or read a JSON article list)
//! 2. **Trending**: Cluster near-duplicate headlines and pick the largest cluster's lead
//! 3. **Output**: Write `caption.txt` and `<date>/<edition>.json`

use chrono::Local;
use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod error;
mod feeds;
mod keywords;
mod models;
mod outputs;
mod trending;
mod utils;

use cli::Cli;
use config::AppConfig;
use models::{Article, PostMetadata};
use outputs::{caption, json};
use trending::detect_trending;
use utils::{banner_timestamp, ensure_writable_dir, time_of_day, truncate_for_log};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("hyd_alerts starting up");

    let args = Cli::parse();
    debug!(?args.output_dir, ?args.config, ?args.input, "Parsed CLI arguments");

    let config = AppConfig::load(args.config.as_deref()).await?;

    if let Err(e) = ensure_writable_dir(&args.output_dir).await {
        error!(
            path = %args.output_dir,
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    // ---- Gather articles ----
    let articles = match args.input.as_deref() {
        Some(path) => load_articles(path).await?,
        None => {
            let fetcher = feeds::http::retrying_http_fetcher(&config.fetch)?;
            feeds::fetch_all(&fetcher, &config.feeds.0).await
        }
    };
    info!(count = articles.len(), "Total articles to analyze");

    // ---- Pick the trending story ----
    let Some(story) = detect_trending(&articles, &config.trending) else {
        warn!("No articles available; nothing to render");
        return Ok(());
    };
    info!(
        headline = %truncate_for_log(&story.article.title, 60),
        coverage = story.coverage(),
        "Top story"
    );
    for dup in &story.duplicates {
        debug!(title = %dup.title, source = %dup.source, "Same story");
    }

    // ---- Outputs ----
    let caption_text = caption::build_caption(story.article, &config.branding);
    if let Err(e) = caption::write_caption(&caption_text, &args.output_dir).await {
        error!(error = %e, "Failed to write caption");
        return Err(e);
    }

    let now = Local::now();
    let metadata = PostMetadata {
        generated_at: now,
        local_date: now.date_naive().to_string(),
        edition: time_of_day(),
        banner_timestamp: banner_timestamp(&now),
        article_count: articles.len(),
        branding: &config.branding,
        trending: &story,
    };
    if let Err(e) = json::write_post_metadata(&metadata, &args.output_dir).await {
        error!(error = %e, "Failed to write post metadata");
        return Err(e);
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}

/// Read a JSON array of articles from `path`.
///
/// Records without a title are rejected as a whole rather than defaulted.
#[instrument(level = "info")]
async fn load_articles(path: &str) -> Result<Vec<Article>, Box<dyn Error>> {
    let raw = tokio::fs::read_to_string(path).await?;
    let articles: Vec<Article> = serde_json::from_str(&raw)?;
    info!(count = articles.len(), "Loaded articles from file");
    Ok(articles)
}
