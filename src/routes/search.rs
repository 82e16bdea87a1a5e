use axum::{
    Router,
    routing::get,
    Json,
    extract::{rejection::QueryRejection, Query, State},
};
use crate::models::{AppState, SearchParams, SearchResultItem};
use crate::types::{AppError, AppResult};
use tracing::debug;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/search", get(search))
        .with_state(state)
}

/// GET /search?q=<query>
async fn search(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<Json<Vec<SearchResultItem>>> {
    let Query(pairs) = query.map_err(|e| AppError::InvalidRequest(e.body_text()))?;
    let params = SearchParams::from_pairs(pairs);
    debug!(q = ?params.q, "Search request received");

    let items = state.gateway.search(params.q.as_deref()).await?;
    Ok(Json(items))
}
