//! Error types for feed retrieval and parsing.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("feed {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("feed parsing error: {0}")]
    Parse(#[from] quick_xml::DeError),
    #[error("invalid article: {0}")]
    InvalidInput(String),
}
