//! Error types for Biblios server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server configuration error: {0}")]
    Config(String),

    #[error("Upstream API error: {0}")]
    Upstream(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Graph store error: {0}")]
    Graph(#[from] neo4rs::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NotFound", msg.clone()),
            // Invalid state transitions are reported as plain 400s, with the
            // reason carried only in the free-text message.
            AppError::Conflict(msg) => (StatusCode::BAD_REQUEST, "Conflict", msg.clone()),
            AppError::InvalidState(msg) => {
                (StatusCode::BAD_REQUEST, "InvalidState", msg.clone())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BadRequest", msg.clone()),
            AppError::Config(msg) => {
                tracing::error!("Configuration error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "ConfigError", msg.clone())
            }
            AppError::Upstream(msg) => {
                tracing::error!("Upstream API failure: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "UpstreamError", msg.clone())
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                // Raw error string surfaced to the caller, unsanitized.
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PersistenceError",
                    format!("Error: {}", e),
                )
            }
            AppError::Graph(e) => {
                tracing::error!("Graph store error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "GraphError",
                    format!("Error: {}", e),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError", msg.clone())
            }
        };

        let body = Json(ErrorResponse {
            success: false,
            error: error.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
