// Search Gateway - proxies queries to the Google Custom Search JSON API

pub mod config;
pub mod gateway;
pub mod models;
pub mod types;
pub mod search;    // Custom Search API client and provider contract
pub mod routes;
pub mod middleware;
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use gateway::SearchGateway;
pub use models::AppState;

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
