//! LLM provider trait and types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::Result;

/// Configuration for text generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub model_id: String,
    pub max_tokens: u32,
    pub temperature: Option<f32>,
    pub timeout: Duration,
}

impl GenerationConfig {
    /// Default model used when none is configured
    pub const DEFAULT_MODEL: &'static str = "gpt-3.5-turbo";

    /// Replace the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model_id: Self::DEFAULT_MODEL.to_string(),
            max_tokens: 2000,
            temperature: Some(0.7),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Token accounting reported by the provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Result of a text generation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub text: String,
    pub model_id: String,
    pub usage: Option<TokenUsage>,
}

/// Trait for LLM providers that can rewrite text under a system instruction
///
/// Implementations own their transport. Every failure (network, non-success
/// status, malformed body, empty content, timeout) is reported as an `Err`;
/// callers decide whether that is fatal.
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Generate text for `prompt`, optionally constrained by a system instruction
    async fn generate_with_config(
        &self,
        system_instruction: Option<&str>,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<GenerationResult>;

    /// Generate text with the provider's model and default settings
    async fn generate(&self, prompt: &str) -> Result<GenerationResult> {
        let config = GenerationConfig {
            model_id: self.model_id().to_string(),
            ..Default::default()
        };
        self.generate_with_config(None, prompt, &config).await
    }

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}
