//! Inbound HTTP API type definitions.
//!
//! Request and response bodies for the `/translate` endpoint. Field names are
//! camelCase on the wire (`targetLanguage`, `additionalContext`). Required
//! fields deserialize as `Option` so that an absent field and an explicit JSON
//! null take the same validation path.

use crate::error::{Result, ServiceError};
use serde::{Deserialize, Serialize};

/// Body of `POST /translate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    /// Source text to translate.
    #[serde(default)]
    pub text: Option<String>,

    /// Target language code understood by the translation provider (e.g. "es").
    #[serde(default)]
    pub target_language: Option<String>,

    /// Free-form context that helps the refinement step resolve nuance.
    #[serde(default)]
    pub additional_context: Option<String>,
}

/// A `TranslateRequest` whose required fields are known to be present.
#[derive(Debug, Clone)]
pub struct ValidatedRequest {
    pub text: String,
    pub target_language: String,
    pub additional_context: Option<String>,
}

impl TranslateRequest {
    /// Check both required fields in a single step: either one missing (or
    /// explicitly null) yields the same validation error. Empty strings pass;
    /// only absence is rejected.
    pub fn validate(self) -> Result<ValidatedRequest> {
        match (self.text, self.target_language) {
            (Some(text), Some(target_language)) => Ok(ValidatedRequest {
                text,
                target_language,
                additional_context: self.additional_context,
            }),
            _ => Err(ServiceError::MissingFields),
        }
    }
}

/// Body of a successful `/translate` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    /// The request's `text`, echoed unchanged.
    pub original_text: String,

    /// The refined translation, or the literal translation when refinement
    /// produced nothing usable.
    pub translated_text: String,

    /// The request's `targetLanguage`, echoed unchanged.
    pub target_language: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_accepts_complete_request() {
        let request = TranslateRequest {
            text: Some("Break a leg!".to_string()),
            target_language: Some("es".to_string()),
            additional_context: None,
        };

        let validated = request.validate().unwrap();
        assert_eq!(validated.text, "Break a leg!");
        assert_eq!(validated.target_language, "es");
        assert!(validated.additional_context.is_none());
    }

    #[test]
    fn test_validate_rejects_missing_text() {
        let request = TranslateRequest {
            text: None,
            target_language: Some("fr".to_string()),
            additional_context: None,
        };

        assert!(matches!(
            request.validate(),
            Err(ServiceError::MissingFields)
        ));
    }

    #[test]
    fn test_validate_rejects_missing_target_language() {
        let request = TranslateRequest {
            text: Some("Hello".to_string()),
            target_language: None,
            additional_context: Some("greeting".to_string()),
        };

        assert!(matches!(
            request.validate(),
            Err(ServiceError::MissingFields)
        ));
    }

    #[test]
    fn test_validate_accepts_empty_strings() {
        // The original null-check semantics: "" is present, so it passes.
        let request = TranslateRequest {
            text: Some(String::new()),
            target_language: Some(String::new()),
            additional_context: None,
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_explicit_null_fields_deserialize_as_missing() {
        let request: TranslateRequest =
            serde_json::from_str(r#"{"text": null, "targetLanguage": "fr"}"#).unwrap();

        assert!(request.text.is_none());
        assert_eq!(request.target_language.as_deref(), Some("fr"));
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let response = TranslateResponse {
            original_text: "Hello".to_string(),
            translated_text: "Bonjour".to_string(),
            target_language: "fr".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["originalText"], "Hello");
        assert_eq!(json["translatedText"], "Bonjour");
        assert_eq!(json["targetLanguage"], "fr");
    }

    proptest! {
        #[test]
        fn prop_validation_succeeds_iff_both_required_fields_present(
            text in proptest::option::of(".*"),
            target in proptest::option::of(".*"),
            context in proptest::option::of(".*"),
        ) {
            let request = TranslateRequest {
                text: text.clone(),
                target_language: target.clone(),
                additional_context: context,
            };

            let result = request.validate();
            prop_assert_eq!(result.is_ok(), text.is_some() && target.is_some());
        }
    }
}
