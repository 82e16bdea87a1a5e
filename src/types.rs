// Error taxonomy shared by the gateway and the HTTP layer

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ErrorResponse;
use crate::search::SearchError;

/// Message sent to clients in place of any unexpected failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    Configuration(String),

    #[error("Custom Search API call failed: {0}")]
    Provider(String),

    /// The detail is for the logs only.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::ServiceUnavailable(_)
            | AppError::Configuration(_)
            | AppError::Provider(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The text placed in the `error` field of the response body.
    pub fn client_message(&self) -> String {
        match self {
            AppError::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<SearchError> for AppError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::Http { status, reason } => {
                AppError::Provider(format!("{} {}", status, reason))
            }
            SearchError::Timeout(after) => {
                AppError::Provider(format!("request timed out after {}s", after.as_secs()))
            }
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.client_message(),
        });

        (self.status_code(), body).into_response()
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
