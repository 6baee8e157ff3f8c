//! Prompt improvement orchestration
//!
//! Normalize, analyze, build the system instruction, ask the provider for a
//! rewrite and fall back to the rule engine when that fails.

use std::time::Duration;

use prompt_core::{
    Error, GenerationConfig, ImprovementResult, LLMProvider, PromptReport, Result, RewriteOutcome,
};
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::analyzer::analyze_prompt;
use crate::instruction::build_system_instruction;
use crate::normalizer::normalize;
use crate::rules::apply_rules;
use crate::suggestions::generate_suggestions;

/// Message reported for prompts that are empty after normalization
pub const INVALID_PROMPT: &str = "Invalid prompt provided";

/// Improves prompts with an optional LLM provider and a rule-based fallback
pub struct PromptImprover<L: LLMProvider> {
    llm: Option<L>,
    config: GenerationConfig,
}

impl<L: LLMProvider> PromptImprover<L> {
    /// Create an improver backed by `llm`
    pub fn new(llm: L) -> Self {
        let config = GenerationConfig {
            model_id: llm.model_id().to_string(),
            ..Default::default()
        };
        Self {
            llm: Some(llm),
            config,
        }
    }

    /// Create an improver that only uses the rule engine
    pub fn rules_only() -> Self {
        Self {
            llm: None,
            config: GenerationConfig::default(),
        }
    }

    /// Bound every remote rewrite by `limit`
    pub fn with_timeout(mut self, limit: Duration) -> Self {
        self.config.timeout = limit;
        self
    }

    /// Check if a provider is configured
    pub fn has_model(&self) -> bool {
        self.llm.is_some()
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Ask the provider for a rewrite; never fails, failures become `Fallback`
    pub async fn rewrite(&self, system_instruction: &str, prompt: &str) -> RewriteOutcome {
        let Some(llm) = self.llm.as_ref() else {
            return RewriteOutcome::Fallback {
                reason: "no LLM provider configured".to_string(),
            };
        };

        let generation = llm.generate_with_config(Some(system_instruction), prompt, &self.config);

        let result = match timeout(self.config.timeout, generation).await {
            Ok(result) => result,
            Err(_) => Err(Error::Timeout("Request timed out".to_string())),
        };

        match result {
            Ok(generated) if generated.text.trim().is_empty() => RewriteOutcome::Fallback {
                reason: "provider returned an empty rewrite".to_string(),
            },
            Ok(generated) => {
                debug!(
                    model = %generated.model_id,
                    total_tokens = generated.usage.map(|u| u.total_tokens),
                    "received AI rewrite"
                );
                RewriteOutcome::Model(generated)
            }
            Err(e) => RewriteOutcome::Fallback {
                reason: e.to_string(),
            },
        }
    }

    /// Improve a normalized prompt under the given system instruction
    pub async fn improve(&self, system_instruction: &str, prompt: &str) -> ImprovementResult {
        let improved_prompt = match self.rewrite(system_instruction, prompt).await {
            RewriteOutcome::Model(generated) => generated.text,
            RewriteOutcome::Fallback { reason } => {
                warn!(%reason, "AI improvement failed, using rule-based improvement");
                apply_rules(prompt, None)
            }
        };

        ImprovementResult {
            original_prompt: prompt.to_string(),
            improved_prompt,
            suggestions: generate_suggestions(prompt),
            ai_suggestions: None,
        }
    }

    /// Run the whole pipeline on raw user input
    pub async fn process(&self, raw_prompt: &str) -> Result<PromptReport> {
        let prompt = normalize(raw_prompt);
        if prompt.is_empty() {
            return Err(Error::InvalidInput(INVALID_PROMPT.to_string()));
        }

        let analysis = analyze_prompt(&prompt);
        let system_instruction = build_system_instruction(&analysis);
        let improvement = self.improve(&system_instruction, &prompt).await;

        Ok(PromptReport {
            analysis,
            improvement,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use prompt_core::GenerationResult;
    use std::sync::Mutex;

    enum Behavior {
        Reply(&'static str),
        Fail,
        Hang,
    }

    struct MockProvider {
        behavior: Behavior,
        seen_instruction: Mutex<Option<String>>,
    }

    impl MockProvider {
        fn new(behavior: Behavior) -> Self {
            Self {
                behavior,
                seen_instruction: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl LLMProvider for MockProvider {
        async fn generate_with_config(
            &self,
            system_instruction: Option<&str>,
            _prompt: &str,
            config: &GenerationConfig,
        ) -> Result<GenerationResult> {
            *self.seen_instruction.lock().unwrap() = system_instruction.map(str::to_string);
            match self.behavior {
                Behavior::Reply(text) => Ok(GenerationResult {
                    text: text.to_string(),
                    model_id: config.model_id.clone(),
                    usage: None,
                }),
                Behavior::Fail => Err(Error::Network("connection reset".to_string())),
                Behavior::Hang => {
                    tokio::time::sleep(Duration::from_secs(30)).await;
                    Err(Error::LLMProvider("unreachable".to_string()))
                }
            }
        }

        fn model_id(&self) -> &str {
            "mock-model"
        }
    }

    #[tokio::test]
    async fn test_model_rewrite_is_used() {
        let improver = PromptImprover::new(MockProvider::new(Behavior::Reply(
            "Please review my resume for clarity.",
        )));

        let result = improver.improve("be a rewriter", "improve my resume").await;
        assert_eq!(result.improved_prompt, "Please review my resume for clarity.");
        assert_eq!(result.original_prompt, "improve my resume");
        assert!(result.ai_suggestions.is_none());
        assert_eq!(improver.config().model_id, "mock-model");
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_rules() {
        let improver = PromptImprover::new(MockProvider::new(Behavior::Fail));

        let outcome = improver.rewrite("x", "improve my resume").await;
        assert!(matches!(
            outcome,
            RewriteOutcome::Fallback { ref reason } if reason == "Network error: connection reset"
        ));

        let result = improver.improve("x", "improve my resume").await;
        assert_eq!(result.improved_prompt, apply_rules("improve my resume", None));
    }

    #[tokio::test]
    async fn test_empty_rewrite_falls_back() {
        let improver = PromptImprover::new(MockProvider::new(Behavior::Reply("   ")));
        assert!(improver.rewrite("x", "fix it").await.is_fallback());

        let result = improver.improve("x", "fix it").await;
        assert!(!result.improved_prompt.trim().is_empty());
    }

    #[tokio::test]
    async fn test_hanging_provider_times_out() {
        let improver = PromptImprover::new(MockProvider::new(Behavior::Hang))
            .with_timeout(Duration::from_millis(50));

        let outcome = improver.rewrite("x", "fix it").await;
        assert!(matches!(
            outcome,
            RewriteOutcome::Fallback { ref reason } if reason.starts_with("Timeout error")
        ));
    }

    #[tokio::test]
    async fn test_rules_only_improver() {
        let improver = PromptImprover::<MockProvider>::rules_only();
        assert!(!improver.has_model());

        let result = improver.improve("x", "good stuff").await;
        assert_eq!(result.improved_prompt, apply_rules("good stuff", None));
        assert!(result.improved_prompt.starts_with("high-quality, effective information, content, data"));
    }

    #[tokio::test]
    async fn test_process_rejects_blank_input() {
        let improver = PromptImprover::<MockProvider>::rules_only();
        let err = improver.process(" \n\n\t ").await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(ref msg) if msg == INVALID_PROMPT));
    }

    #[tokio::test]
    async fn test_process_passes_instruction_to_provider() {
        let provider = MockProvider::new(Behavior::Reply("Rewritten."));
        let improver = PromptImprover::new(provider);

        let report = improver.process("improve   my\n\nresume").await.unwrap();
        assert_eq!(report.analysis.original_prompt, "improve my resume");
        assert_eq!(report.improvement.improved_prompt, "Rewritten.");

        let seen = improver
            .llm
            .as_ref()
            .and_then(|llm| llm.seen_instruction.lock().unwrap().clone())
            .unwrap();
        assert!(seen.contains("- Score: 0/100"));
        assert!(seen.contains("- Length: Too Short"));
    }
}
