//! Value types produced by prompt analysis and improvement

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::llm::GenerationResult;

/// Heuristic quality score of a prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Score from 0 to 100
    pub score: u32,
    /// Space-joined messages of the checks that failed
    pub feedback: String,
}

/// Boolean features of a prompt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Characteristics {
    pub has_role: bool,
    pub has_constraints: bool,
    pub is_too_short: bool,
    pub has_examples: bool,
}

/// Categorical rating used in analysis rationales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High",
        };
        f.write_str(label)
    }
}

/// Per-category rationale sentences, each `"<Category>: <Level> - <reason>."`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAnalysis {
    pub clarity: String,
    pub specificity: String,
    pub context: String,
    pub structure: String,
}

/// Full analysis of a prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub original_prompt: String,
    pub score: u32,
    pub feedback: String,
    pub analysis: CategoryAnalysis,
    pub characteristics: Characteristics,
}

/// Rewritten prompt plus improvement suggestions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementResult {
    pub original_prompt: String,
    pub improved_prompt: String,
    pub suggestions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_suggestions: Option<String>,
}

/// Outcome of asking the remote provider for a rewrite
#[derive(Debug, Clone, PartialEq)]
pub enum RewriteOutcome {
    /// The provider returned usable text
    Model(GenerationResult),
    /// The provider was unavailable or failed; rules must be used instead
    Fallback { reason: String },
}

impl RewriteOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self, RewriteOutcome::Fallback { .. })
    }
}

/// Analysis and improvement of one prompt, as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptReport {
    pub analysis: AnalysisResult,
    pub improvement: ImprovementResult,
}
