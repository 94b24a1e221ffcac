// Upstream provider client module

mod google;
mod openai;

pub use google::GoogleTranslateClient;
pub use openai::OpenAiClient;

/// Extract a human-readable message from a provider error body.
///
/// Google wraps failures as `{"error": {"message", "status"}}` and OpenAI as
/// `{"error": {"message", "type"}}`; one shape covers both.
pub(crate) fn extract_error_message(response_text: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorResponse {
        error: Option<ErrorDetail>,
    }

    #[derive(serde::Deserialize)]
    struct ErrorDetail {
        message: Option<String>,
        status: Option<String>,
        #[serde(rename = "type")]
        error_type: Option<String>,
    }

    if let Ok(error_resp) = serde_json::from_str::<ErrorResponse>(response_text) {
        if let Some(error) = error_resp.error {
            return error.message.or(error.status).or(error.error_type);
        }
    }
    None
}
