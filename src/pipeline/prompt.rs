//! Refinement prompt construction.
//!
//! The template wording and layout are part of the service contract: rule 6
//! is what keeps the model from wrapping its answer in commentary, and the
//! quoted embeddings keep short inputs from being mistaken for instructions.

/// Substituted for `{additional_context}` when the caller sent none.
pub const NO_CONTEXT_PLACEHOLDER: &str = "No additional context provided.";

pub const REFINEMENT_PROMPT_TEMPLATE: &str = r#"You are an expert translator and cultural consultant. Your task is to refine a machine translation to make it sound natural and native to a {target_language} speaker.

    Follow these rules:
    1. Preserve the original meaning perfectly.
    2. Adapt idioms, slang, and cultural references to their equivalent in the target language.
    3. There may be some additional context provided that can help you understand the nuances of the text. If there is no additional context, use your best judgment.
    4. Ensure the tone (formal, casual, humorous, etc.) matches the original text.
    5. Correct any awkward phrasing from the literal translation.
    6. Output ONLY the refined translation, nothing else.

    Original text: "{text}"
    Literal translation: "{literal_translation}"
    Additional context: "{additional_context}"
"#;

/// Build the refinement prompt for one request.
///
/// An absent or empty `additional_context` both become the placeholder text,
/// so the model always sees a filled-in context line.
#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_refinement_prompt(
    text: &str,
    literal_translation: &str,
    target_language: &str,
    additional_context: Option<&str>,
) -> String {
    // {target_language} etc. are placeholders for string replacement, not format arguments
    let context = match additional_context {
        Some(context) if !context.is_empty() => context,
        _ => NO_CONTEXT_PLACEHOLDER,
    };

    REFINEMENT_PROMPT_TEMPLATE
        .replace("{target_language}", target_language)
        .replace("{text}", text)
        .replace("{literal_translation}", literal_translation)
        .replace("{additional_context}", context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_template_has_all_placeholders() {
        assert!(REFINEMENT_PROMPT_TEMPLATE.contains("{target_language}"));
        assert!(REFINEMENT_PROMPT_TEMPLATE.contains("{text}"));
        assert!(REFINEMENT_PROMPT_TEMPLATE.contains("{literal_translation}"));
        assert!(REFINEMENT_PROMPT_TEMPLATE.contains("{additional_context}"));
    }

    #[test]
    fn test_build_embeds_values_in_quotes() {
        let prompt = build_refinement_prompt(
            "Break a leg!",
            "¡Rómpete una pierna!",
            "es",
            Some("Said before a theater performance"),
        );

        assert!(prompt.contains("native to a es speaker"));
        assert!(prompt.contains(r#"Original text: "Break a leg!""#));
        assert!(prompt.contains(r#"Literal translation: "¡Rómpete una pierna!""#));
        assert!(prompt.contains(r#"Additional context: "Said before a theater performance""#));
    }

    #[test]
    fn test_build_without_context_uses_placeholder() {
        let prompt = build_refinement_prompt("Hello", "Bonjour", "fr", None);
        assert!(prompt.contains(r#"Additional context: "No additional context provided.""#));
    }

    #[test]
    fn test_build_with_empty_context_uses_placeholder() {
        let prompt = build_refinement_prompt("Hello", "Bonjour", "fr", Some(""));
        assert!(prompt.contains(r#"Additional context: "No additional context provided.""#));
    }

    #[test]
    fn test_build_keeps_rules_intact() {
        let prompt = build_refinement_prompt("Hello", "Bonjour", "fr", None);

        assert!(prompt.contains("expert translator and cultural consultant"));
        assert!(prompt.contains("1. Preserve the original meaning perfectly."));
        assert!(prompt.contains("6. Output ONLY the refined translation, nothing else."));
    }

    #[test]
    fn test_build_handles_identical_original_and_literal() {
        // A literal pass can come back unchanged; both lines still fill in.
        let prompt = build_refinement_prompt("Hello", "Hello", "en", None);

        assert!(prompt.contains(r#"Original text: "Hello""#));
        assert!(prompt.contains(r#"Literal translation: "Hello""#));
    }

    proptest! {
        #[test]
        fn prop_prompt_embeds_inputs_and_leaves_no_placeholders(
            text in "[^{}]*",
            literal in "[^{}]*",
            target in "[a-zA-Z-]{2,8}",
            context in proptest::option::of("[^{}]*"),
        ) {
            let prompt = build_refinement_prompt(&text, &literal, &target, context.as_deref());

            prop_assert!(
                prompt.contains(&format!(r#"Original text: "{}""#, text)),
                "prompt missing quoted original text"
            );
            prop_assert!(
                prompt.contains(&format!(r#"Literal translation: "{}""#, literal)),
                "prompt missing quoted literal translation"
            );
            match context.as_deref() {
                Some(c) if !c.is_empty() => {
                    prop_assert!(
                        prompt.contains(&format!(r#"Additional context: "{}""#, c)),
                        "prompt missing quoted additional context"
                    )
                }
                _ => prop_assert!(prompt.contains(NO_CONTEXT_PLACEHOLDER)),
            }
            prop_assert!(
                !prompt.contains("{target_language}"),
                "target_language placeholder left in prompt"
            );
            prop_assert!(
                !prompt.contains("{text}"),
                "text placeholder left in prompt"
            );
            prop_assert!(
                !prompt.contains("{literal_translation}"),
                "literal_translation placeholder left in prompt"
            );
            prop_assert!(
                !prompt.contains("{additional_context}"),
                "additional_context placeholder left in prompt"
            );
        }
    }
}
