use std::sync::Arc;

use crate::config::Config;
use crate::gateway::SearchGateway;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub gateway: Arc<SearchGateway>,
}

// API Request/Response types

/// Query string of `GET /search`. `q` stays optional so that a missing
/// parameter reaches the gateway instead of failing in the extractor.
#[derive(Debug, Default)]
pub struct SearchParams {
    pub q: Option<String>,
}

impl SearchParams {
    /// Build from raw query pairs. A repeated `q` keeps its first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let q = pairs
            .into_iter()
            .find(|(key, _)| key == "q")
            .map(|(_, value)| value);
        Self { q }
    }
}

/// One entry of the `/search` response array. All three keys are always
/// serialised; a field the provider left out becomes `null`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SearchResultItem {
    pub title: Option<String>,
    pub link: Option<String>,
    pub snippet: Option<String>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub search_service: String,
    pub cse_configured: bool,
}
