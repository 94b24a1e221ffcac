// OpenAI Chat Completions client

use super::extract_error_message;
use crate::config::OpenAiConfig;
use crate::error::{Result, ServiceError};
use crate::metrics;
use crate::models::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::utils::sanitize;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error};

const PROVIDER_LABEL: &str = "openai";

/// Client for the OpenAI Chat Completions API.
///
/// Sends single-turn completion requests with the model and sampling
/// parameters fixed by configuration.
pub struct OpenAiClient {
    http_client: Client,
    config: OpenAiConfig,
    completions_url: String,
}

impl OpenAiClient {
    /// Create a new chat completions client. Fails fast on a missing API key.
    pub fn new(config: &OpenAiConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(ServiceError::Config(
                "openai.api_key is not set (OPENAI_API_KEY)".to_string(),
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

        let completions_url = format!(
            "{}/chat/completions",
            config.api_base_url.trim_end_matches('/')
        );

        Ok(Self {
            http_client,
            config: config.clone(),
            completions_url,
        })
    }

    /// Send `prompt` as a single user message and return the raw completion.
    pub async fn complete(&self, prompt: String) -> Result<ChatCompletionResponse> {
        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        debug!("Calling chat completions with model: {}", self.config.model);

        let start = Instant::now();
        let response = self
            .http_client
            .post(&self.completions_url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) => {
                metrics::record_provider_call(PROVIDER_LABEL, 0, start.elapsed().as_secs_f64());
                return Err(ServiceError::RefinementApi(format!("HTTP error: {}", e)));
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
                "Chat completions error: HTTP {} - {}",
                status,
                sanitize(&error_msg)
            );
            return Err(ServiceError::RefinementApi(format!(
                "HTTP {}: {}",
                status, error_msg
            )));
        }

        let response_text = response.text().await.map_err(|e| {
            ServiceError::RefinementApi(format!("Failed to read response body: {}", e))
        })?;

        let completion: ChatCompletionResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                error!("Failed to parse chat completion response: {}", e);
                ServiceError::RefinementApi(format!("Response parsing error: {}", e))
            })?;

        if let Some(usage) = &completion.usage {
            debug!(
                "Chat completion used {} prompt + {} completion tokens",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(completion)
    }
}
