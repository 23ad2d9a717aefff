//! News feed retrieval.
//!
//! Fetching follows a two-phase pattern:
//!
//! 1. **Fetching**: Download every configured feed document (concurrently,
//!    with retry and backoff, see [`http`])
//! 2. **Parsing**: Turn each RSS document into [`Article`]s (see [`rss`])
//!
//! Failed feeds and unusable items are logged and skipped without failing
//! the batch. The returned list keeps feed order first, then item order,
//! because trending detection is sensitive to input order.

pub mod http;
pub mod rss;

use crate::config::FeedConfig;
use crate::models::Article;
use futures::stream::{self, StreamExt};
use self::http::FetchText;
use tracing::{error, info, instrument, warn};

/// How many feeds are downloaded at once.
const PARALLEL_FEEDS: usize = 4;

/// Fetch and parse every feed, concatenating the articles in feed order.
#[instrument(level = "info", skip_all, fields(feeds = feeds.len()))]
pub async fn fetch_all<F>(fetcher: &F, feeds: &[FeedConfig]) -> Vec<Article>
where
    F: FetchText,
{
    let per_feed: Vec<Vec<Article>> = stream::iter(feeds)
        .map(|feed| async move {
            match fetcher.fetch(&feed.url).await {
                Ok(body) => articles_from_document(&body, feed),
                Err(e) => {
                    error!(url = %feed.url, error = %e, "Feed fetch failed; skipping");
                    Vec::new()
                }
            }
        })
        .buffered(PARALLEL_FEEDS)
        .collect()
        .await;

    let articles: Vec<Article> = per_feed.into_iter().flatten().collect();
    info!(count = articles.len(), "Fetched articles from all feeds");
    articles
}

fn articles_from_document(body: &str, feed: &FeedConfig) -> Vec<Article> {
    let items = match rss::parse_feed(body, &feed.category) {
        Ok(items) => items,
        Err(e) => {
            error!(url = %feed.url, error = %e, "Feed document did not parse; skipping");
            return Vec::new();
        }
    };

    let articles: Vec<Article> = items
        .into_iter()
        .filter_map(|item| match item {
            Ok(article) => Some(article),
            Err(e) => {
                warn!(url = %feed.url, error = %e, "Dropping feed item");
                None
            }
        })
        .collect();

    info!(
        url = %feed.url,
        category = %feed.category,
        count = articles.len(),
        "Parsed feed"
    );
    articles
}
