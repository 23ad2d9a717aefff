//! RSS 2.0 parsing into [`Article`]s.
//!
//! Only the handful of item fields the pipeline needs are read; everything
//! else in the document is ignored. Google News wraps each headline's
//! publisher in a `<source url="...">Name</source>` element. Links point at
//! the aggregator, so they say nothing about the publisher.

use crate::error::FeedError;
use crate::models::Article;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

/// Publisher label used when an item has no `<source>`.
pub const FALLBACK_SOURCE: &str = "News Source";

#[derive(Debug, Deserialize)]
struct RssDocument {
    channel: RssChannel,
}

#[derive(Debug, Deserialize)]
struct RssChannel {
    #[serde(rename = "item", default)]
    items: Vec<RssItem>,
}

#[derive(Debug, Deserialize)]
struct RssItem {
    title: Option<String>,
    link: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
    source: Option<RssSource>,
}

#[derive(Debug, Deserialize)]
struct RssSource {
    #[serde(rename = "$text", default)]
    name: Option<String>,
}

/// Parse an RSS document into articles filed under `category`.
///
/// The document as a whole either parses or fails. Individual items without a
/// usable title come back as [`FeedError::InvalidInput`] so the caller can
/// decide what to do with them; they are never given a placeholder headline.
pub fn parse_feed(xml: &str, category: &str) -> Result<Vec<Result<Article, FeedError>>, FeedError> {
    let document: RssDocument = quick_xml::de::from_str(xml)?;
    debug!(items = document.channel.items.len(), "Parsed RSS channel");
    Ok(document
        .channel
        .items
        .into_iter()
        .map(|item| item.into_article(category))
        .collect())
}

impl RssItem {
    fn into_article(self, category: &str) -> Result<Article, FeedError> {
        let title = self
            .title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                FeedError::InvalidInput(format!(
                    "item without a title (link: {})",
                    self.link.as_deref().unwrap_or("none")
                ))
            })?;

        let source = self
            .source
            .and_then(|s| s.name)
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| FALLBACK_SOURCE.to_string());

        Ok(Article {
            title,
            link: self.link.map(|l| l.trim().to_string()).unwrap_or_default(),
            source,
            category: category.to_string(),
            published: self.pub_date.as_deref().and_then(parse_pub_date),
        })
    }
}

fn parse_pub_date(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
