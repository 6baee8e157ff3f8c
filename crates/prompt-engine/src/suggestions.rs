//! Fixed checklist of improvement suggestions

use crate::normalizer::text_len;
use crate::patterns::VAGUE_TERMS;

/// Returned when no checklist item applies
pub const DEFAULT_SUGGESTION: &str =
    "Your prompt is well-structured. Consider adding examples for even better results.";

/// Generate suggestions for a prompt, at most one per check, in fixed order
pub fn generate_suggestions(prompt: &str) -> Vec<String> {
    let mut suggestions = Vec::new();
    let lower = prompt.to_lowercase();
    let length = text_len(prompt);

    if let Some(term) = VAGUE_TERMS.find(prompt) {
        suggestions.push(format!(
            "Replace vague terms like \"{}\" with more specific language",
            term.as_str()
        ));
    }

    if length < 50 {
        suggestions.push("Add more context and background information to your prompt".to_string());
    }

    if !prompt.contains('?') && !lower.contains("please") {
        suggestions.push("Use questions or polite directives to make your intent clear".to_string());
    }

    if !prompt.contains('\n') && length > 100 {
        suggestions.push("Break your prompt into multiple lines or sections for clarity".to_string());
    }

    if !lower.contains("format") && !lower.contains("structure") {
        suggestions.push("Specify the desired format or structure for the response".to_string());
    }

    if !lower.contains("include") && !lower.contains("exclude") {
        suggestions
            .push("Define what should and should not be included in the response".to_string());
    }

    if suggestions.is_empty() {
        suggestions.push(DEFAULT_SUGGESTION.to_string());
    }

    suggestions
}
