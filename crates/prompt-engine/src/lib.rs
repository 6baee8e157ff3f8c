//! Prompt scoring, analysis and improvement
//!
//! Everything here except [`PromptImprover`] is pure: the scorer, analyzer,
//! rule engine and suggestion checklist are free functions over a prompt
//! that has already been through [`normalize`].

mod patterns;
mod templates;

pub mod analyzer;
pub mod improver;
pub mod instruction;
pub mod normalizer;
pub mod rules;
pub mod score;
pub mod suggestions;


pub use analyzer::{analyze_prompt, characteristics};
pub use improver::{INVALID_PROMPT, PromptImprover};
pub use instruction::build_system_instruction;
pub use normalizer::{normalize, normalize_value};
pub use rules::{PromptRule, applicable_rules, apply_rules, find_rule, rule_catalog};
pub use score::score_prompt;
pub use suggestions::generate_suggestions;

// Re-export core types
pub use prompt_core::{Error, Result};
