// Error types for the mt2native translation service

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Exact message returned when `text` or `targetLanguage` is missing.
pub const VALIDATION_ERROR_MESSAGE: &str = "Text and target language are required.";

/// Exact message returned to callers for any failure inside the pipeline.
/// The specific cause is logged server-side and never exposed.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error during translation.";

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{}", VALIDATION_ERROR_MESSAGE)]
    MissingFields,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Translation API error: {0}")]
    TranslationApi(String),

    #[error("Refinement API error: {0}")]
    RefinementApi(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

// Convert ServiceError to HTTP responses for Axum.
//
// Only two bodies ever leave the service: the validation message (400) and the
// generic internal message (500). Provider failures, malformed request bodies,
// and anything else unhandled all collapse into the 500 here.
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ServiceError::MissingFields => (StatusCode::BAD_REQUEST, VALIDATION_ERROR_MESSAGE),
            other => {
                tracing::error!("Translation request failed: {}", other);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        };

        let body = json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
