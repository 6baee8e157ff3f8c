//! OpenAI chat-completions client implementation

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

use prompt_core::{Error, GenerationConfig, GenerationResult, LLMProvider, Result, TokenUsage};

use crate::config::OpenAIConfig;

/// OpenAI chat-completions client
pub struct OpenAIClient {
    config: OpenAIConfig,
    client: Client,
    current_model: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub(crate) struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    pub max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatUsage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
    #[serde(default)]
    total_tokens: u32,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl OpenAIClient {
    /// Create a new OpenAI client from configuration
    pub fn new(config: OpenAIConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        let current_model = config.model.clone();

        Ok(Self {
            config,
            client,
            current_model,
        })
    }

    /// Create a new OpenAI client from environment variables
    pub fn from_env() -> Result<Self> {
        let config = OpenAIConfig::from_env()?;
        Self::new(config)
    }

    /// Generate a completion for a bare prompt and return only its text
    pub async fn generate_completion(&self, prompt: &str) -> Result<String> {
        let result = self.generate(prompt).await?;
        Ok(result.text)
    }

    pub(crate) fn build_request(
        system_instruction: Option<&str>,
        prompt: &str,
        config: &GenerationConfig,
    ) -> ChatRequest {
        let mut messages = Vec::with_capacity(2);

        if let Some(system) = system_instruction.filter(|s| !s.is_empty()) {
            messages.push(ChatMessage {
                role: "system".to_string(),
                content: system.to_string(),
            });
        }

        messages.push(ChatMessage {
            role: "user".to_string(),
            content: prompt.to_string(),
        });

        ChatRequest {
            model: config.model_id.clone(),
            messages,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    /// Perform the actual chat-completions request
    async fn perform_generation(
        &self,
        system_instruction: Option<&str>,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<GenerationResult> {
        let request_body = Self::build_request(system_instruction, prompt, config);
        let url = format!("{}/chat/completions", self.config.base_url);

        debug!(model = %request_body.model, url = %url, "sending chat completion request");

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .bearer_auth(&self.config.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let response_text = response.text().await.map_err(map_transport_error)?;

        if !status.is_success() {
            return Err(api_error(status, &response_text));
        }

        parse_completion(&response_text, &config.model_id)
    }
}

fn map_transport_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::Timeout(err.to_string())
    } else {
        Error::Network(err.to_string())
    }
}

/// Map a non-success response to an error carrying the API's message
pub(crate) fn api_error(status: StatusCode, body: &str) -> Error {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error)
        .and_then(|error| error.message)
        .unwrap_or_else(|| "Unknown error".to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Error::Authentication(format!("OpenAI API error: {}", message))
        }
        _ => Error::LLMProvider(format!("OpenAI API error: {}", message)),
    }
}

/// Parse a successful chat-completions body
pub(crate) fn parse_completion(body: &str, model_id: &str) -> Result<GenerationResult> {
    let data: ChatResponse =
        serde_json::from_str(body).map_err(|e| Error::Serialization(e.to_string()))?;

    let text = data
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(Error::LLMProvider(
            "Empty response from OpenAI API".to_string(),
        ));
    }

    let usage = data.usage.map(|usage| TokenUsage {
        prompt_tokens: usage.prompt_tokens,
        completion_tokens: usage.completion_tokens,
        total_tokens: usage.total_tokens,
    });

    Ok(GenerationResult {
        text,
        model_id: model_id.to_string(),
        usage,
    })
}

#[async_trait]
impl LLMProvider for OpenAIClient {
    async fn generate_with_config(
        &self,
        system_instruction: Option<&str>,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<GenerationResult> {
        let generation_future = self.perform_generation(system_instruction, prompt, config);

        match timeout(config.timeout, generation_future).await {
            Ok(result) => result,
            Err(_) => Err(Error::Timeout("Request timed out".to_string())),
        }
    }

    async fn generate(&self, prompt: &str) -> Result<GenerationResult> {
        let config = GenerationConfig {
            model_id: self.current_model.clone(),
            ..Default::default()
        };
        self.generate_with_config(None, prompt, &config).await
    }

    fn model_id(&self) -> &str {
        &self.current_model
    }
}
