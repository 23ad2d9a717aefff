//! Data models for fetched headlines and the post built from them.
//!
//! This module defines the core data structures used throughout the application:
//! - [`Article`]: A headline as fetched from a feed (or loaded from a JSON file)
//! - [`Cluster`]: Articles believed to cover the same story
//! - [`TrendingStory`]: The selected top story plus the coverage that backs it
//! - [`PostMetadata`]: Everything a renderer needs to build the post graphic

use crate::config::Branding;
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// A news headline as fetched from a feed.
///
/// Articles are immutable once fetched. The trending detector only ever
/// borrows them; the fetch layer owns the list.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Article {
    /// The headline text. Source of all clustering signal.
    pub title: String,
    /// Link to the full story.
    #[serde(default)]
    pub link: String,
    /// Publisher name, e.g. "The Hindu".
    #[serde(default)]
    pub source: String,
    /// Category of the feed the article came from.
    #[serde(default)]
    pub category: String,
    /// Publication time, when the feed provides one.
    #[serde(default)]
    pub published: Option<DateTime<Utc>>,
}

/// Articles believed to report the same underlying event.
///
/// Members are kept in arrival order; the first member is the representative
/// every later headline is compared against.
#[derive(Debug, Clone)]
pub struct Cluster<'a> {
    pub members: Vec<&'a Article>,
}

impl<'a> Cluster<'a> {
    pub fn new(representative: &'a Article) -> Self {
        Self {
            members: vec![representative],
        }
    }

    /// The first-seen article of the cluster.
    pub fn representative(&self) -> &'a Article {
        self.members[0]
    }

    pub fn push(&mut self, article: &'a Article) {
        self.members.push(article);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }
}

/// The outcome of one trending-detection pass.
#[derive(Debug, Clone, Serialize)]
pub struct TrendingStory<'a> {
    /// The representative of the largest cluster. This is what gets posted.
    pub article: &'a Article,
    /// The other members of the winning cluster, in arrival order.
    pub duplicates: Vec<&'a Article>,
    /// How many clusters the pass produced in total.
    pub cluster_count: usize,
}

impl TrendingStory<'_> {
    /// Number of articles covering the story, including the representative.
    pub fn coverage(&self) -> usize {
        self.duplicates.len() + 1
    }
}

/// Metadata persisted next to the caption for a single run.
///
/// # Edition Naming
///
/// The `edition` field categorizes runs as:
/// - `"morning"`: 00:00 - 08:00
/// - `"afternoon"`: 08:00 - 16:00
/// - `"evening"`: 16:00 - 24:00
#[derive(Debug, Serialize)]
pub struct PostMetadata<'a> {
    /// When the post material was generated.
    pub generated_at: DateTime<Local>,
    /// The date of the run in `YYYY-MM-DD` format.
    pub local_date: String,
    /// The edition bucket of the run.
    pub edition: String,
    /// Banner text for the graphic, e.g. "07:45 PM | 16 OCT 2026".
    pub banner_timestamp: String,
    /// Total number of articles considered.
    pub article_count: usize,
    pub branding: &'a Branding,
    pub trending: &'a TrendingStory<'a>,
}
