use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

/// Uniform error boundary for every handler. Database failures are logged
/// with their driver detail and surface as a generic 500; not-found and
/// bad-request carry their message to the client.
#[derive(Debug)]
pub enum ApiError {
    Database(sqlx::Error),
    NotFound(String),
    BadRequest(String),
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        ApiError::Database(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Database(e) => {
                error!("database query failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database error".to_string(),
                )
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        (
            status,
            Json(json!({
                "status": "fail",
                "error": message,
            })),
        )
            .into_response()
    }
}
