//! Search Module
//!
//! The provider side of the gateway:
//! - `provider` - the `SearchProvider` contract and its wire types
//! - `cse` - Google Custom Search JSON API implementation

pub mod cse;
pub mod provider;

use std::sync::Arc;
use tracing::{info, warn};

use crate::config::SearchConfig;

pub use cse::{CustomSearchClient, Credentials};
pub use provider::{ProviderRecord, ProviderResponse, SearchError, SearchProvider};

/// Build the process-wide provider handle.
///
/// Returns `None` when the client cannot be created; the handle then stays
/// unavailable for the lifetime of the process.
pub fn build_provider(config: &SearchConfig) -> Option<Arc<dyn SearchProvider>> {
    match CustomSearchClient::from_config(config) {
        Ok(client) => {
            info!(
                endpoint = %client.endpoint(),
                credentials = client.credentials_kind(),
                "Custom Search API client initialized"
            );
            Some(Arc::new(client))
        }
        Err(e) => {
            warn!(error = %e, "Custom Search API client could not be initialized");
            None
        }
    }
}
