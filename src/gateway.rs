//! Search Gateway
//!
//! Turns a raw `q` parameter into a list of simplified results. Checks run in
//! a fixed order and the first failure wins:
//!
//! 1. `q` present and non-empty, else `InvalidRequest` (400)
//! 2. provider handle available, else `ServiceUnavailable` (500)
//! 3. CSE id configured, else `Configuration` (500)
//!
//! Provider failures carrying a status are passed to the client verbatim;
//! anything else is logged and reduced to a generic message.

use std::sync::Arc;
use tracing::{error, info, warn};

use crate::config::is_cse_id_configured;
use crate::models::SearchResultItem;
use crate::search::{ProviderRecord, SearchError, SearchProvider};
use crate::types::{AppError, AppResult};

/// Number of results requested from the provider for every query.
pub const RESULT_COUNT: u32 = 10;

pub struct SearchGateway {
    provider: Option<Arc<dyn SearchProvider>>,
    cse_id: String,
}

impl SearchGateway {
    pub fn new(provider: Option<Arc<dyn SearchProvider>>, cse_id: impl Into<String>) -> Self {
        Self {
            provider,
            cse_id: cse_id.into(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.provider.is_some()
    }

    pub fn is_configured(&self) -> bool {
        is_cse_id_configured(&self.cse_id)
    }

    pub async fn search(&self, query: Option<&str>) -> AppResult<Vec<SearchResultItem>> {
        let query = match query {
            Some(q) if !q.is_empty() => q,
            _ => {
                return Err(AppError::InvalidRequest(
                    "query parameter 'q' is required".to_string(),
                ))
            }
        };

        let provider = self.provider.as_ref().ok_or_else(|| {
            AppError::ServiceUnavailable(
                "Custom Search API service was not initialized".to_string(),
            )
        })?;

        if !self.is_configured() {
            return Err(AppError::Configuration(
                "CSE ID is not configured; check the CSE_ID environment variable".to_string(),
            ));
        }

        let response = provider
            .list(query, &self.cse_id, RESULT_COUNT)
            .await
            .map_err(log_failure)?;

        let items: Vec<SearchResultItem> = response
            .items
            .unwrap_or_default()
            .into_iter()
            .map(project)
            .collect();

        info!(query = %query, count = items.len(), "Search completed");
        Ok(items)
    }
}

fn project(record: ProviderRecord) -> SearchResultItem {
    SearchResultItem {
        title: record.title,
        link: record.link,
        snippet: record.snippet,
    }
}

fn log_failure(err: SearchError) -> AppError {
    let mapped = AppError::from(err);
    match &mapped {
        AppError::Provider(detail) => warn!(error = %detail, "Custom Search API call failed"),
        AppError::Internal(detail) => error!(error = %detail, "Unexpected error while searching"),
        _ => {}
    }
    mapped
}
