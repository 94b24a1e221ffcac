// Configuration module

mod models;

pub use models::*;

use crate::error::{Result, ServiceError};
use config::{Config, Environment, File};
use std::path::PathBuf;

impl AppConfig {
    /// Load configuration from the default file location.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (`MT2NATIVE_*`, highest)
    /// 2. Config file (`--config` path, or `~/.mt2native/config.toml`)
    /// 3. Defaults (lowest)
    ///
    /// Afterwards the well-known vendor variables (`OPENAI_API_KEY`,
    /// `GOOGLE_CLOUD_PROJECT_ID`, `GOOGLE_API_KEY`) fill any credential or
    /// project values that no other source set.
    pub fn load_from(config_path: Option<&str>) -> Result<Self> {
        let path = config_path
            .map(str::to_string)
            .unwrap_or_else(Self::default_config_path);

        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?)
            // Load from config file; only an explicitly requested file must exist
            .add_source(File::with_name(&path).required(config_path.is_some()))
            // Override with environment variables, e.g. MT2NATIVE_SERVER__PORT
            .add_source(
                Environment::with_prefix("MT2NATIVE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| ServiceError::Config(e.to_string()))?;

        let mut config: Self = config
            .try_deserialize()
            .map_err(|e| ServiceError::Config(e.to_string()))?;

        fill_from_vendor_env(&mut config, |name| std::env::var(name).ok());

        Ok(config)
    }

    fn default_config_path() -> String {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".mt2native")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }
}

/// The original deployment of this service read these variables straight from
/// the process environment; they keep working here as fallbacks for values no
/// other configuration source provided.
fn fill_from_vendor_env(config: &mut AppConfig, lookup: impl Fn(&str) -> Option<String>) {
    if config.openai.api_key.is_empty() {
        if let Some(key) = lookup("OPENAI_API_KEY") {
            config.openai.api_key = key;
        }
    }

    if config.google.project_id.is_empty() {
        if let Some(project) = lookup("GOOGLE_CLOUD_PROJECT_ID") {
            config.google.project_id = project;
        }
    }

    if config.google.api_key.is_empty() {
        if let Some(key) = lookup("GOOGLE_API_KEY") {
            config.google.api_key = key;
        }
    }
}
