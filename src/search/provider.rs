use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors a search provider can report
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("no search API credentials found")]
    NoCredentials,

    /// The provider answered with a non-success status.
    #[error("provider returned {status}: {reason}")]
    Http { status: u16, reason: String },

    #[error("search request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Search request failed: {0}")]
    Request(String),

    #[error("Failed to parse search results: {0}")]
    Parse(String),
}

/// Body of a `list` call. Keys other than `items` are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderResponse {
    #[serde(default)]
    pub items: Option<Vec<ProviderRecord>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
}

#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Runs one search scoped to `site_id`, asking for at most `num` results.
    async fn list(
        &self,
        query: &str,
        site_id: &str,
        num: u32,
    ) -> Result<ProviderResponse, SearchError>;
}
