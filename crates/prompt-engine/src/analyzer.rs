//! Characteristic extraction and per-category rationales

use prompt_core::{AnalysisResult, CategoryAnalysis, Characteristics, Level};

use crate::patterns::{CONSTRAINTS, EXAMPLES, LIST_MARKER, ROLE, VAGUE_TERMS};
use crate::score::score_prompt;

fn word_count(prompt: &str) -> usize {
    prompt.split_whitespace().count()
}

fn rationale(category: &str, level: Level, reason: &str) -> String {
    format!("{}: {} - {}.", category, level, reason)
}

/// Analyze a prompt: score, feedback, rationales and characteristics
pub fn analyze_prompt(prompt: &str) -> AnalysisResult {
    let score = score_prompt(prompt);

    AnalysisResult {
        original_prompt: prompt.to_string(),
        score: score.score,
        feedback: score.feedback,
        analysis: CategoryAnalysis {
            clarity: clarity(prompt),
            specificity: specificity(prompt),
            context: context(prompt),
            structure: structure(prompt),
        },
        characteristics: characteristics(prompt),
    }
}

/// Boolean features of the prompt
pub fn characteristics(prompt: &str) -> Characteristics {
    Characteristics {
        has_role: ROLE.is_match(prompt),
        has_constraints: CONSTRAINTS.is_match(prompt),
        is_too_short: word_count(prompt) < 8,
        has_examples: EXAMPLES.is_match(prompt),
    }
}

/// Directive markers are matched case-sensitively, so "Please" does not count
pub fn clarity(prompt: &str) -> String {
    let has_questions = prompt.contains('?');
    let has_commands =
        prompt.contains("please") || prompt.contains("help") || prompt.contains("can you");

    let level = if has_questions || has_commands {
        Level::High
    } else {
        Level::Medium
    };
    let reason = if has_questions {
        "Uses clear questions"
    } else {
        "Could use clearer directives"
    };

    rationale("Clarity", level, reason)
}

pub fn specificity(prompt: &str) -> String {
    let has_vague_terms = VAGUE_TERMS.is_match(prompt);

    let level = if has_vague_terms {
        Level::Low
    } else if EXAMPLES.is_match(prompt) {
        Level::High
    } else {
        Level::Medium
    };
    let reason = if has_vague_terms {
        "Replace vague terms with specific details"
    } else {
        "Includes specific terms"
    };

    rationale("Specificity", level, reason)
}

pub fn context(prompt: &str) -> String {
    let words = word_count(prompt);
    let lower = prompt.to_lowercase();
    let has_background = lower.contains("background") || lower.contains("context");

    let level = if words > 50 && has_background {
        Level::High
    } else if words > 50 {
        Level::Medium
    } else {
        Level::Low
    };
    let reason = if has_background {
        "Provides background information"
    } else {
        "Could include more context"
    };

    rationale("Context", level, reason)
}

pub fn structure(prompt: &str) -> String {
    let has_paragraphs = prompt.split('\n').count() > 2;
    let has_list = LIST_MARKER.is_match(prompt);

    let (level, reason) = if has_paragraphs || has_list {
        (Level::High, "Well-organized")
    } else {
        (Level::Medium, "Could benefit from better organization")
    };

    rationale("Structure", level, reason)
}
