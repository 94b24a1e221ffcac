//! Two-step translation pipeline.
//!
//! Step one asks Google Cloud Translation for a literal rendering; step two
//! asks OpenAI to refine it into something a native speaker would say. Each
//! step degrades rather than fails when the provider answers successfully but
//! without usable text: a missing literal falls back to the original input,
//! a missing refinement falls back to the literal. Provider call failures are
//! not degraded; they surface as errors.

pub mod prompt;

pub use prompt::{build_refinement_prompt, NO_CONTEXT_PLACEHOLDER, REFINEMENT_PROMPT_TEMPLATE};

use crate::error::Result;
use crate::metrics;
use crate::models::{
    ChatCompletionResponse, TranslateResponse, TranslateTextResponse, ValidatedRequest,
};
use crate::providers::{GoogleTranslateClient, OpenAiClient};
use tracing::{debug, info, warn};

/// Owns the two provider clients and runs them in sequence per request.
pub struct TranslationPipeline {
    translator: GoogleTranslateClient,
    refiner: OpenAiClient,
}

impl TranslationPipeline {
    pub fn new(translator: GoogleTranslateClient, refiner: OpenAiClient) -> Self {
        Self {
            translator,
            refiner,
        }
    }

    /// Run the full pipeline for one validated request.
    pub async fn translate(&self, request: ValidatedRequest) -> Result<TranslateResponse> {
        info!(
            "Starting literal translation for target language: {}",
            request.target_language
        );

        let literal_response = self
            .translator
            .translate_text(&request.text, &request.target_language)
            .await?;

        let literal_translation = match first_translation(&literal_response) {
            Some(translation) => translation,
            None => {
                warn!("Translation returned no usable text, falling back to original input");
                metrics::record_fallback("literal");
                request.text.clone()
            }
        };
        debug!("Literal translation: {}", literal_translation);

        info!("Refining translation");

        let prompt = build_refinement_prompt(
            &request.text,
            &literal_translation,
            &request.target_language,
            request.additional_context.as_deref(),
        );

        let completion = self.refiner.complete(prompt).await?;

        let translated_text = match first_completion_text(&completion) {
            Some(refined) => refined,
            None => {
                warn!("Refinement returned no usable text, keeping literal translation");
                metrics::record_fallback("refinement");
                literal_translation
            }
        };
        debug!("Refined translation: {}", translated_text);

        Ok(TranslateResponse {
            original_text: request.text,
            translated_text,
            target_language: request.target_language,
        })
    }
}

/// First translated string out of a translateText response, if non-empty.
/// No trimming: whatever Google returned is what the refinement step sees.
fn first_translation(response: &TranslateTextResponse) -> Option<String> {
    response
        .translations
        .first()
        .map(|translation| translation.translated_text.clone())
        .filter(|text| !text.is_empty())
}

/// Trimmed content of the first completion choice, if any remains after
/// trimming. The trimmed form is what gets returned to the caller.
fn first_completion_text(response: &ChatCompletionResponse) -> Option<String> {
    response
        .choices
        .first()
        .and_then(|choice| choice.message.as_ref())
        .and_then(|message| message.content.as_deref())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
