//! Google Cloud Translation v3 wire types.
//!
//! Only the fields this service reads and writes are modeled; the REST API
//! returns more (detected language, glossary results) which serde skips.

use serde::{Deserialize, Serialize};

/// Body of `POST /projects/{project}/locations/{location}:translateText`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateTextRequest {
    /// Batch of source strings. This service always sends exactly one.
    pub contents: Vec<String>,

    /// Always `text/plain` here; the API also accepts `text/html`.
    pub mime_type: String,

    /// BCP-47 target language code.
    pub target_language_code: String,
}

impl TranslateTextRequest {
    pub fn single(text: &str, target_language: &str) -> Self {
        Self {
            contents: vec![text.to_string()],
            mime_type: "text/plain".to_string(),
            target_language_code: target_language.to_string(),
        }
    }
}

/// Response body of `:translateText`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateTextResponse {
    /// One entry per input string, in order. Defaults to empty so a response
    /// that omits the field still deserializes.
    #[serde(default)]
    pub translations: Vec<Translation>,
}

/// A single translated string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    #[serde(default)]
    pub translated_text: String,

    /// Set by the API when no source language was specified in the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_language_code: Option<String>,
}
