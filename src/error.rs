use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Longest filter term accepted over HTTP
pub const MAX_QUERY_LEN: usize = 200;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Custom error type for API endpoints
///
/// Maps each failure to an HTTP status code and a JSON `ErrorResponse`.
#[derive(Debug)]
pub enum ApiError {
    /// Catalog section other than `web` or `api`
    UnknownSection(String),
    /// Invalid query parameter
    InvalidQueryParam(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::UnknownSection(section) => (
                StatusCode::BAD_REQUEST,
                format!("Unknown route section: expected 'web' or 'api', got '{}'", section),
            ),
            ApiError::InvalidQueryParam(msg) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid query parameter: {}", msg),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

/// Reject filter terms longer than [`MAX_QUERY_LEN`] characters
pub fn check_query(q: Option<&str>) -> Result<&str, ApiError> {
    let q = q.unwrap_or("");
    let len = q.chars().count();
    if len > MAX_QUERY_LEN {
        return Err(ApiError::InvalidQueryParam(format!(
            "q must be at most {} characters, got {}",
            MAX_QUERY_LEN, len
        )));
    }
    Ok(q)
}
