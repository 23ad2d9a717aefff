//! Trending story detection.
//!
//! Articles are grouped in a single pass, in input order. Each incoming
//! headline is compared only against the *first* member of every existing
//! cluster and joins the first cluster (in creation order) whose
//! representative shares enough keywords with it. Clusters are then ranked
//! by size with a stable sort, so among equally large clusters the one that
//! started earliest wins.
//!
//! # Threshold
//!
//! ```text
//! required = max(min_overlap, floor(|k| * overlap_ratio))
//! ```
//!
//! where `k` is the incoming headline's keyword set. With the defaults a
//! single shared keyword never merges two articles.

use crate::config::TrendConfig;
use crate::keywords::extract_keywords;
use crate::models::{Article, Cluster, TrendingStory};
use itertools::Itertools;
use std::cmp::Reverse;
use tracing::{debug, info, instrument};

/// Shared keywords a headline with `keyword_count` keywords needs to join a cluster.
pub fn overlap_threshold(keyword_count: usize, config: &TrendConfig) -> usize {
    let scaled = (keyword_count as f64 * config.overlap_ratio).floor() as usize;
    config.min_overlap.max(scaled)
}

/// Group articles into clusters of likely-duplicate coverage.
///
/// Every article ends up in exactly one cluster. Clusters are returned in
/// creation order.
pub fn cluster_articles<'a>(articles: &'a [Article], config: &TrendConfig) -> Vec<Cluster<'a>> {
    let mut clusters: Vec<Cluster<'a>> = Vec::new();

    for article in articles {
        let keywords = extract_keywords(&article.title, config);
        let required = overlap_threshold(keywords.len(), config);

        let home = clusters.iter_mut().find(|cluster| {
            let representative = extract_keywords(&cluster.representative().title, config);
            keywords.intersection(&representative).count() >= required
        });

        match home {
            Some(cluster) => {
                debug!(
                    title = %article.title,
                    representative = %cluster.representative().title,
                    "Joined existing cluster"
                );
                cluster.push(article);
            }
            None => clusters.push(Cluster::new(article)),
        }
    }

    clusters
}

/// Order clusters by descending size, keeping creation order among ties.
pub fn rank_clusters(clusters: Vec<Cluster<'_>>) -> Vec<Cluster<'_>> {
    clusters
        .into_iter()
        .sorted_by_key(|cluster| Reverse(cluster.len()))
        .collect()
}

/// Pick the most-covered story among `articles`.
///
/// Returns `None` when there is nothing to pick from. Otherwise the result is
/// the representative of the largest cluster, together with the rest of that
/// cluster's members.
#[instrument(level = "info", skip_all, fields(articles = articles.len()))]
pub fn detect_trending<'a>(
    articles: &'a [Article],
    config: &TrendConfig,
) -> Option<TrendingStory<'a>> {
    let first = articles.first()?;

    let ranked = rank_clusters(cluster_articles(articles, config));
    let cluster_count = ranked.len();

    let story = match ranked.into_iter().next() {
        Some(top) => {
            let mut members = top.members.into_iter();
            // Clusters are never empty.
            let article = members.next().unwrap_or(first);
            TrendingStory {
                article,
                duplicates: members.collect(),
                cluster_count,
            }
        }
        None => TrendingStory {
            article: first,
            duplicates: Vec::new(),
            cluster_count,
        },
    };

    info!(
        title = %story.article.title,
        source = %story.article.source,
        coverage = story.coverage(),
        clusters = story.cluster_count,
        "Selected trending story"
    );
    Some(story)
}
