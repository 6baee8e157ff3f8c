//! OpenAI integration for the prompt improver
//!
//! This crate provides the OpenAI chat-completions implementation of the
//! `LLMProvider` trait.

mod client;
mod config;


pub use client::OpenAIClient;
pub use config::OpenAIConfig;

// Re-export core types for convenience
pub use prompt_core::{Error, GenerationConfig, GenerationResult, LLMProvider, Result};
