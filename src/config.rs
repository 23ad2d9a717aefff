//! Runtime configuration loaded from an optional YAML file.
//!
//! Every section is optional; anything missing falls back to the defaults
//! below, so running without a config file reproduces the stock account setup.
//!
//! ```yaml
//! feeds:
//!   - url: "https://news.google.com/rss/search?q=Hyderabad+when:2h&hl=en-IN&gl=IN&ceid=IN:en"
//!     category: hyderabad
//! branding:
//!   instagram_handle: "@hyderabadtrendingalerts"
//! trending:
//!   min_overlap: 2
//!   overlap_ratio: 0.4
//! fetch:
//!   max_retries: 3
//! ```

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::error::Error;
use tracing::{info, instrument};

/// Words that never count as keywords, regardless of length.
pub const DEFAULT_STOP_WORDS: [&str; 15] = [
    "in", "on", "at", "the", "a", "an", "and", "or", "but", "of", "to", "for", "with", "from",
    "by",
];
/// Tokens shorter than this (in characters) are dropped.
pub const DEFAULT_MIN_KEYWORD_LEN: usize = 4;
/// Absolute floor on shared keywords needed to join a cluster.
pub const DEFAULT_MIN_OVERLAP: usize = 2;
/// Share of the incoming headline's keywords that must overlap.
pub const DEFAULT_OVERLAP_RATIO: f64 = 0.4;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub feeds: Feeds,
    pub branding: Branding,
    pub trending: TrendConfig,
    pub fetch: FetchConfig,
}

/// Ordered list of feeds. Order matters: it fixes the clustering input order.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Feeds(pub Vec<FeedConfig>);

impl Default for Feeds {
    fn default() -> Self {
        Feeds(vec![
            FeedConfig::google_news_search("Hyderabad when:2h", "hyderabad"),
            FeedConfig::google_news_search("Telangana when:2h", "telangana"),
        ])
    }
}

/// A single RSS feed and the category its articles are filed under.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FeedConfig {
    pub url: String,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "breaking".to_string()
}

impl FeedConfig {
    /// Build a Google News search feed for the Indian English edition.
    ///
    /// Words are joined with `+` and search operators such as `when:2h` keep
    /// their colon, matching the URLs Google News itself links to.
    pub fn google_news_search(query: &str, category: &str) -> Self {
        let q = query
            .split_whitespace()
            .map(|word| urlencoding::encode(word).replace("%3A", ":"))
            .join("+");
        Self {
            url: format!("https://news.google.com/rss/search?q={q}&hl=en-IN&gl=IN&ceid=IN:en"),
            category: category.to_string(),
        }
    }
}

/// Account branding used in captions and post metadata.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Branding {
    pub brand_name: String,
    pub instagram_handle: String,
    pub location: String,
    pub tagline: String,
    pub hashtags: Vec<String>,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            brand_name: "HYD ALERTS".to_string(),
            instagram_handle: "@hyderabadtrendingalerts".to_string(),
            location: "HYDERABAD".to_string(),
            tagline: "Stay updated with Hyderabad's latest news ⚡".to_string(),
            hashtags: [
                "#HyderabadNews",
                "#Hyderabad",
                "#Telangana",
                "#BreakingNews",
                "#HydAlerts",
                "#TelanganaNews",
                "#HyderabadUpdates",
                "#IndiaNews",
                "#LocalNews",
                "#NewsAlert",
                "#HyderabadCity",
                "#TrendingNews",
                "#CurrentAffairs",
                "#NewsUpdate",
                "#InstantNews",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

/// Constants driving keyword extraction and clustering.
///
/// Passed explicitly into [`crate::keywords::extract_keywords`] and
/// [`crate::trending::detect_trending`] so alternate settings can be tested
/// in isolation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TrendConfig {
    pub stop_words: Vec<String>,
    pub min_keyword_len: usize,
    pub min_overlap: usize,
    pub overlap_ratio: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            stop_words: DEFAULT_STOP_WORDS.iter().map(|s| s.to_string()).collect(),
            min_keyword_len: DEFAULT_MIN_KEYWORD_LEN,
            min_overlap: DEFAULT_MIN_OVERLAP,
            overlap_ratio: DEFAULT_OVERLAP_RATIO,
        }
    }
}

impl TrendConfig {
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.iter().any(|w| w == token)
    }
}

/// HTTP behaviour of the feed fetcher.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FetchConfig {
    pub timeout_secs: u64,
    pub max_retries: usize,
    pub base_delay_ms: u64,
    /// Upper bound of the random delay added to each retry backoff.
    pub max_jitter_ms: u64,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            max_retries: 3,
            base_delay_ms: 1000,
            max_jitter_ms: 250,
            user_agent: format!("hyd_alerts/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl AppConfig {
    /// Parse a configuration from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Load the configuration file at `path`, or the defaults when no path is given.
    #[instrument(level = "info")]
    pub async fn load(path: Option<&str>) -> Result<Self, Box<dyn Error>> {
        let Some(path) = path else {
            info!("No config file given; using defaults");
            return Ok(Self::default());
        };
        let yaml = tokio::fs::read_to_string(path).await?;
        let config = Self::from_yaml(&yaml)?;
        info!(
            path,
            feeds = config.feeds.0.len(),
            min_overlap = config.trending.min_overlap,
            overlap_ratio = config.trending.overlap_ratio,
            "Loaded configuration"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_trend_config() {
        let cfg = TrendConfig::default();
        assert_eq!(cfg.stop_words.len(), 15);
        assert!(cfg.is_stop_word("the"));
        assert!(cfg.is_stop_word("from"));
        assert!(!cfg.is_stop_word("metro"));
        assert_eq!(cfg.min_keyword_len, 4);
        assert_eq!(cfg.min_overlap, 2);
        assert!((cfg.overlap_ratio - 0.4).abs() < f64::EPSILON);
    }

    #[test]
    fn test_default_feeds() {
        let feeds = Feeds::default().0;
        assert_eq!(feeds.len(), 2);
        assert_eq!(
            feeds[0].url,
            "https://news.google.com/rss/search?q=Hyderabad+when:2h&hl=en-IN&gl=IN&ceid=IN:en"
        );
        assert_eq!(
            feeds[1].url,
            "https://news.google.com/rss/search?q=Telangana+when:2h&hl=en-IN&gl=IN&ceid=IN:en"
        );
        assert_eq!(feeds[0].category, "hyderabad");
        assert_eq!(feeds[1].category, "telangana");
    }

    #[test]
    fn test_google_news_search_escapes_words() {
        let feed = FeedConfig::google_news_search("  GHMC & metro  when:1d ", "hyderabad");
        assert_eq!(
            feed.url,
            "https://news.google.com/rss/search?q=GHMC+%26+metro+when:1d&hl=en-IN&gl=IN&ceid=IN:en"
        );
    }

    #[test]
    fn test_empty_yaml_yields_defaults() {
        let cfg = AppConfig::from_yaml("{}").unwrap();
        assert_eq!(cfg.trending, TrendConfig::default());
        assert_eq!(cfg.branding, Branding::default());
        assert_eq!(cfg.feeds.0.len(), 2);
    }

    #[test]
    fn test_partial_yaml_overrides() {
        let yaml = r#"
feeds:
  - url: "https://example.com/rss"
trending:
  min_overlap: 3
branding:
  instagram_handle: "@example"
"#;
        let cfg = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(cfg.feeds.0.len(), 1);
        assert_eq!(cfg.feeds.0[0].category, "breaking");
        assert_eq!(cfg.trending.min_overlap, 3);
        assert_eq!(cfg.trending.min_keyword_len, 4);
        assert_eq!(cfg.branding.instagram_handle, "@example");
        assert_eq!(cfg.branding.brand_name, "HYD ALERTS");
        assert_eq!(cfg.fetch.max_retries, 3);
        assert_eq!(cfg.fetch.max_jitter_ms, 250);
    }

    #[test]
    fn test_fetch_jitter_override() {
        let cfg = AppConfig::from_yaml("fetch:\n  max_jitter_ms: 0\n").unwrap();
        assert_eq!(cfg.fetch.max_jitter_ms, 0);
        assert_eq!(cfg.fetch.base_delay_ms, 1000);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(AppConfig::from_yaml("trending: [1, 2").is_err());
    }

    #[tokio::test]
    async fn test_load_without_path_uses_defaults() {
        let cfg = AppConfig::load(None).await.unwrap();
        assert_eq!(cfg.fetch, FetchConfig::default());
    }

    #[tokio::test]
    async fn test_load_missing_file_fails() {
        let result = AppConfig::load(Some("/nonexistent/hyd_alerts.yaml")).await;
        assert!(result.is_err());
    }
}
