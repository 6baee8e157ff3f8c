//! Rule-based prompt scoring
//!
//! The score is the sum of five independent checks. Each check awards points
//! and, when it awards nothing, contributes one feedback message.

use prompt_core::ScoreResult;

use crate::normalizer::{is_space, text_len};

/// Feedback returned for empty input
pub const EMPTY_FEEDBACK: &str = "Prompt is empty";

/// Feedback returned when every check passes
pub const WELL_STRUCTURED_FEEDBACK: &str = "Prompt is well-structured!";

/// Maximum attainable score
pub const MAX_SCORE: u32 = 100;

const SPECIFIC_KEYWORDS: [&str; 9] = [
    "specific",
    "detail",
    "example",
    "explain",
    "describe",
    "analyze",
    "compare",
    "contrast",
    "summarize",
];

/// Points awarded by one check, plus its message when it failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub points: u32,
    pub message: Option<String>,
}

impl CheckOutcome {
    fn pass(points: u32) -> Self {
        Self {
            points,
            message: None,
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        Self {
            points: 0,
            message: Some(message.into()),
        }
    }
}

/// A named scoring check
pub struct ScoreCheck {
    pub name: &'static str,
    pub evaluate: fn(&str) -> CheckOutcome,
}

/// The checks, in the order their feedback is reported
pub static SCORE_CHECKS: [ScoreCheck; 5] = [
    ScoreCheck {
        name: "length",
        evaluate: check_length,
    },
    ScoreCheck {
        name: "clarity",
        evaluate: check_clarity,
    },
    ScoreCheck {
        name: "context",
        evaluate: check_context,
    },
    ScoreCheck {
        name: "specificity",
        evaluate: check_specificity,
    },
    ScoreCheck {
        name: "structure",
        evaluate: check_structure,
    },
];

fn check_length(prompt: &str) -> CheckOutcome {
    let word_count = prompt.split_whitespace().count();
    match word_count {
        15..=100 => CheckOutcome::pass(20),
        10..=150 => CheckOutcome::pass(10),
        _ => CheckOutcome::fail(format!(
            "Prompt length is {} words. Ideal range: 15-100 words.",
            word_count
        )),
    }
}

fn check_clarity(prompt: &str) -> CheckOutcome {
    if prompt.contains('?') || prompt.contains(':') {
        CheckOutcome::pass(20)
    } else {
        CheckOutcome::fail("Prompt could be more specific with clear questions or directives.")
    }
}

fn check_context(prompt: &str) -> CheckOutcome {
    if text_len(prompt) > 50 {
        CheckOutcome::pass(20)
    } else {
        CheckOutcome::fail("Prompt could include more context.")
    }
}

fn check_specificity(prompt: &str) -> CheckOutcome {
    let lower = prompt.to_lowercase();
    if SPECIFIC_KEYWORDS.iter().any(|keyword| lower.contains(keyword)) {
        CheckOutcome::pass(20)
    } else {
        CheckOutcome::fail("Consider adding more specific instructions or keywords.")
    }
}

fn check_structure(prompt: &str) -> CheckOutcome {
    if prompt.contains('.') || prompt.contains(';') {
        CheckOutcome::pass(20)
    } else {
        CheckOutcome::fail("Consider structuring your prompt with multiple sentences or clauses.")
    }
}

/// Calculate the quality score of a prompt
pub fn score_prompt(prompt: &str) -> ScoreResult {
    if prompt.trim_matches(is_space).is_empty() {
        return ScoreResult {
            score: 0,
            feedback: EMPTY_FEEDBACK.to_string(),
        };
    }

    let mut score = 0;
    let mut feedback = Vec::new();

    for check in &SCORE_CHECKS {
        let outcome = (check.evaluate)(prompt);
        score += outcome.points;
        feedback.extend(outcome.message);
    }

    ScoreResult {
        score: score.min(MAX_SCORE),
        feedback: if feedback.is_empty() {
            WELL_STRUCTURED_FEEDBACK.to_string()
        } else {
            feedback.join(" ")
        },
    }
}
