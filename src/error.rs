use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ApiError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("unauthorized: {0}")]
    Unauthorized(&'static str),

    #[error("database error: {0}")]
    Database(#[from] SqlxError),

    #[error("HTTP request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("token error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("no completion API key configured")]
    MissingApiKey,

    #[error("upstream error with status: {0}")]
    UpstreamStatus(StatusCode),

    #[error("upstream returned an empty completion")]
    EmptyCompletion,

    #[error("model response was not valid JSON")]
    ModelParse,

    #[error("failed to send email: {0}")]
    Mail(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(reason) => (StatusCode::UNAUTHORIZED, reason.to_string()),
            ApiError::Jwt(_) => (
                StatusCode::UNAUTHORIZED,
                "Unauthorized - Invalid token".to_string(),
            ),
            ApiError::Database(_) | ApiError::MissingApiKey | ApiError::Mail(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal server error occurred.".to_string(),
            ),
            ApiError::ModelParse => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "AI response parsing failed".to_string(),
            ),
            ApiError::Reqwest(_) | ApiError::EmptyCompletion | ApiError::Json(_) => (
                StatusCode::BAD_GATEWAY,
                "Upstream service is unavailable.".to_string(),
            ),
            ApiError::UpstreamStatus(code) => {
                let msg = match code {
                    StatusCode::TOO_MANY_REQUESTS => "Upstream rate limit exceeded.",
                    StatusCode::UNAUTHORIZED => "Upstream authentication failed.",
                    _ => "An upstream error occurred.",
                };
                (StatusCode::BAD_GATEWAY, msg.to_string())
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
