// src/search/error.rs
// Request-level failures. Everything smaller (one probe, one result element)
// is absorbed where it happens and never becomes one of these.

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search query is empty")]
    EmptyQuery,

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The result page could not be fetched or read
    #[error("failed to fetch result page {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The result page is not a markup document at all
    #[error("result page could not be parsed: {0}")]
    Parse(String),
}
