//! Configuration data structures for the mt2native service.
//!
//! This module defines the schema for the application settings: the HTTP
//! server, the two upstream providers (Google Cloud Translation and OpenAI),
//! and logging.

use serde::{Deserialize, Serialize};

/// The root configuration object for the application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings (host, port).
    #[serde(default)]
    pub server: ServerConfig,

    /// Literal-translation provider settings (Google Cloud Translation v3).
    #[serde(default)]
    pub google: GoogleConfig,

    /// Refinement provider settings (OpenAI Chat Completions).
    #[serde(default)]
    pub openai: OpenAiConfig,

    /// Logging and observability settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the built-in HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The IP address or hostname the server should bind to.
    /// Default: `127.0.0.1`
    #[serde(default = "default_host")]
    pub host: String,

    /// The port number the server should listen on.
    /// Default: `8080`
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Settings for the upstream Google Cloud Translation API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleConfig {
    /// Base URL for the Translation v3 REST API.
    /// Default: `https://translation.googleapis.com/v3`
    #[serde(default = "default_google_base_url")]
    pub api_base_url: String,

    /// Google Cloud project that owns the Translation API quota.
    /// Required; also read from `GOOGLE_CLOUD_PROJECT_ID`.
    #[serde(default)]
    pub project_id: String,

    /// Location segment of the request parent.
    /// Default: `global`
    #[serde(default = "default_location")]
    pub location: String,

    /// API key used as `x-goog-api-key`.
    /// Required; also read from `GOOGLE_API_KEY`.
    #[serde(default)]
    pub api_key: String,

    /// Connection and request timeout in seconds.
    /// Default: `30`
    #[serde(default = "default_google_timeout")]
    pub timeout_seconds: u64,
}

/// Settings for the upstream OpenAI Chat Completions API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    /// Base URL for the OpenAI REST API.
    /// Default: `https://api.openai.com/v1`
    #[serde(default = "default_openai_base_url")]
    pub api_base_url: String,

    /// API key sent as a bearer token.
    /// Required; also read from `OPENAI_API_KEY`.
    #[serde(default)]
    pub api_key: String,

    /// Model used for the refinement completion.
    /// Default: `gpt-4`
    #[serde(default = "default_model")]
    pub model: String,

    /// Output-length cap for the refinement completion.
    /// Default: `1000`
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature, tuned for natural phrasing over determinism.
    /// Default: `0.7`
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Connection and request timeout in seconds.
    /// Default: `120`
    #[serde(default = "default_openai_timeout")]
    pub timeout_seconds: u64,
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `json`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default trait implementations linking to custom logic

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_google_base_url(),
            project_id: String::new(),
            location: default_location(),
            api_key: String::new(),
            timeout_seconds: default_google_timeout(),
        }
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_openai_base_url(),
            api_key: String::new(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_seconds: default_openai_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

// Helper functions for serde defaults and shared constants

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_google_base_url() -> String {
    "https://translation.googleapis.com/v3".to_string()
}

fn default_location() -> String {
    "global".to_string()
}

fn default_google_timeout() -> u64 {
    30
}

fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4".to_string()
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_temperature() -> f64 {
    0.7
}

fn default_openai_timeout() -> u64 {
    120
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}
