// HTTP request handlers

use super::routes::AppState;
use crate::error::ServiceError;
use crate::metrics;
use crate::models::{TranslateRequest, TranslateResponse};
use axum::{extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, error, info};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub checks: HashMap<String, HealthCheck>,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheck {
    pub status: String,
    pub message: String,
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let mut checks = HashMap::new();
    let mut overall_status = HealthStatus::Healthy;

    // Check translation provider configuration
    let google = &state.config.google;
    let translation_check = if google.project_id.is_empty() || google.api_key.is_empty() {
        overall_status = HealthStatus::Unhealthy;
        HealthCheck {
            status: "error".to_string(),
            message: "Google credentials missing".to_string(),
        }
    } else {
        HealthCheck {
            status: "ok".to_string(),
            message: format!(
                "Project {} via {}",
                google.project_id, google.api_base_url
            ),
        }
    };
    checks.insert("google_translate".to_string(), translation_check);

    // Check refinement provider configuration
    let openai = &state.config.openai;
    let refinement_check = if openai.api_key.is_empty() {
        overall_status = HealthStatus::Unhealthy;
        HealthCheck {
            status: "error".to_string(),
            message: "OpenAI API key missing".to_string(),
        }
    } else {
        HealthCheck {
            status: "ok".to_string(),
            message: format!("Model {} via {}", openai.model, openai.api_base_url),
        }
    };
    checks.insert("openai".to_string(), refinement_check);

    Json(HealthResponse {
        status: overall_status,
        checks,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Handler for the /translate endpoint
pub async fn translate_handler(
    State(state): State<AppState>,
    body: String, // Get raw JSON as string first
) -> Result<Json<TranslateResponse>, ServiceError> {
    // Deserialize manually rather than via the Json extractor: a body that
    // fails to parse maps to the generic 500, not a 400. Only missing
    // required fields produce the validation error.
    let request: TranslateRequest = serde_json::from_str(&body).map_err(|e| {
        error!("Failed to deserialize request: {}", e);
        debug!(
            "Raw body (first 500 chars): {}",
            body.chars().take(500).collect::<String>()
        );
        ServiceError::Internal(format!("JSON deserialization error: {}", e))
    })?;

    let request = request.validate()?;

    info!(
        "Received translate request: target_language={}, text_chars={}, has_context={}",
        request.target_language,
        request.text.chars().count(),
        request.additional_context.is_some()
    );

    let response = state.pipeline.translate(request).await?;

    Ok(Json(response))
}

/// Handler for the /metrics endpoint (Prometheus text format)
pub async fn metrics_handler() -> impl IntoResponse {
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4",
        )],
        metrics::gather_metrics(),
    )
}
