// Google Cloud Translation v3 client

use super::extract_error_message;
use crate::config::GoogleConfig;
use crate::error::{Result, ServiceError};
use crate::metrics;
use crate::models::{TranslateTextRequest, TranslateTextResponse};
use crate::utils::sanitize;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error};

const PROVIDER_LABEL: &str = "google_translate";

/// Client for the Google Cloud Translation v3 REST API.
///
/// Authenticates with an API key in the `x-goog-api-key` header and sends one
/// source string per call to the `:translateText` endpoint.
pub struct GoogleTranslateClient {
    http_client: Client,
    config: GoogleConfig,
    translate_url: String,
}

impl GoogleTranslateClient {
    /// Create a new translation client.
    ///
    /// Fails fast when the project ID or API key is missing so a
    /// misconfigured service never accepts traffic.
    pub fn new(config: &GoogleConfig) -> Result<Self> {
        if config.project_id.is_empty() {
            return Err(ServiceError::Config(
                "google.project_id is not set (GOOGLE_CLOUD_PROJECT_ID)".to_string(),
            ));
        }
        if config.api_key.is_empty() {
            return Err(ServiceError::Config(
                "google.api_key is not set (GOOGLE_API_KEY)".to_string(),
            ));
        }

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .use_rustls_tls()
            .build()
            .map_err(|e| ServiceError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        let translate_url = format!(
            "{}/projects/{}/locations/{}:translateText",
            config.api_base_url.trim_end_matches('/'),
            config.project_id,
            config.location
        );

        Ok(Self {
            http_client,
            config: config.clone(),
            translate_url,
        })
    }

    /// Call `:translateText` with a single-element batch.
    ///
    /// Returns the raw response; deciding whether it contains a usable
    /// translation is the pipeline's concern.
    pub async fn translate_text(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<TranslateTextResponse> {
        let request = TranslateTextRequest::single(text, target_language);

        debug!("Calling translateText for target language: {}", target_language);

        let start = Instant::now();
        let response = self
            .http_client
            .post(&self.translate_url)
            .header("x-goog-api-key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) => {
                metrics::record_provider_call(PROVIDER_LABEL, 0, start.elapsed().as_secs_f64());
                return Err(ServiceError::TranslationApi(format!("HTTP error: {}", e)));
            }
        };

        let status = response.status();
        metrics::record_provider_call(
            PROVIDER_LABEL,
            status.as_u16(),
            start.elapsed().as_secs_f64(),
        );

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let error_msg = extract_error_message(&error_text).unwrap_or(error_text);
            error!(
                "Translation API error: HTTP {} - {}",
                status,
                sanitize(&error_msg)
            );
            return Err(ServiceError::TranslationApi(format!(
                "HTTP {}: {}",
                status, error_msg
            )));
        }

        let response_text = response.text().await.map_err(|e| {
            ServiceError::TranslationApi(format!("Failed to read response body: {}", e))
        })?;

        let translate_response: TranslateTextResponse = serde_json::from_str(&response_text)
            .map_err(|e| {
                error!("Failed to parse translateText response: {}", e);
                ServiceError::TranslationApi(format!("Response parsing error: {}", e))
            })?;

        debug!(
            "translateText returned {} translation(s)",
            translate_response.translations.len()
        );
        Ok(translate_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> GoogleConfig {
        GoogleConfig {
            api_base_url: "https://translation.googleapis.com/v3".to_string(),
            project_id: "demo-project".to_string(),
            location: "global".to_string(),
            api_key: "AIzaTest".to_string(),
            timeout_seconds: 30,
        }
    }

    #[test]
    fn test_new_builds_translate_url() {
        let client = GoogleTranslateClient::new(&test_config()).unwrap();
        assert_eq!(
            client.translate_url,
            "https://translation.googleapis.com/v3/projects/demo-project/locations/global:translateText"
        );
    }

    #[test]
    fn test_new_trims_trailing_slash_in_base_url() {
        let mut config = test_config();
        config.api_base_url = "https://translation.googleapis.com/v3/".to_string();

        let client = GoogleTranslateClient::new(&config).unwrap();
        assert!(client
            .translate_url
            .starts_with("https://translation.googleapis.com/v3/projects/"));
    }

    #[test]
    fn test_new_rejects_missing_project_id() {
        let mut config = test_config();
        config.project_id = String::new();

        assert!(matches!(
            GoogleTranslateClient::new(&config),
            Err(ServiceError::Config(_))
        ));
    }

    #[test]
    fn test_new_rejects_missing_api_key() {
        let mut config = test_config();
        config.api_key = String::new();

        assert!(matches!(
            GoogleTranslateClient::new(&config),
            Err(ServiceError::Config(_))
        ));
    }
}
