//! Core traits and types for the prompt improver
//!
//! This crate defines the types shared across the workspace: the error type,
//! the `LLMProvider` capability used for remote rewrites, and the value types
//! produced by prompt analysis and improvement.

pub mod error;
pub mod llm;
pub mod types;

pub use error::{Error, Result};
pub use llm::{GenerationConfig, GenerationResult, LLMProvider, TokenUsage};
pub use types::*;
