use axum::{Router, routing::get, Json, extract::State, response::Json as ResponseJson};
use crate::models::{AppState, HealthResponse};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .with_state(state)
}

async fn health_check(State(state): State<AppState>) -> ResponseJson<HealthResponse> {
    let search_service = if state.gateway.is_available() {
        "initialized"
    } else {
        "unavailable"
    };

    let response = HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        search_service: search_service.to_string(),
        cse_configured: state.gateway.is_configured(),
    };

    Json(response)
}
