//! LLM provider abstractions.
//!
//! Defines the trait every model backend implements plus the shared request
//! and response shapes. Concrete providers (OpenAI, Groq) are feature-gated
//! so a scoring-only build pulls in no HTTP stack.
//!
//! ## Security
//!
//! All providers use the [`secrets`] module for credential handling. See
//! [`ApiCredential`] for the patterns.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

mod factory;
pub mod secrets;

#[cfg(feature = "groq")]
mod groq;
#[cfg(feature = "openai")]
mod openai;

pub use factory::{ProviderFactory, ProviderRegistry};
pub use secrets::{ApiCredential, CredentialSource};

#[cfg(feature = "groq")]
pub use groq::{GroqProvider, GroqProviderFactory};
#[cfg(feature = "openai")]
pub use openai::{OpenAiProvider, OpenAiProviderFactory};

/// Errors from LLM providers.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    #[error("Rate limit exceeded, retry after {retry_after:?}")]
    RateLimited { retry_after: Option<Duration> },

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    ParseError(String),

    #[error("Authentication failed")]
    AuthError,

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

impl ProviderError {
    /// Whether retrying the same request can plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ProviderError::RateLimited { .. } | ProviderError::HttpError(_)
        )
    }
}

/// Configuration for a completion request.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    /// Model to use
    pub model: String,

    /// Maximum tokens to generate
    pub max_tokens: u32,

    /// Temperature (0.0 for deterministic policy generation)
    pub temperature: f32,

    /// Request timeout
    pub timeout: Duration,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            max_tokens: 1024,
            temperature: 0.0,
            timeout: Duration::from_secs(60),
        }
    }
}

impl CompletionConfig {
    /// Config for a specific model with the remaining defaults.
    pub fn for_model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// A chat message for LLM completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "system" or "user"
    pub role: String,

    /// Message content
    pub content: String,
}

impl ChatMessage {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Response from an LLM completion.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Generated content
    pub content: String,

    /// Token usage
    pub usage: TokenUsage,

    /// Model that actually served the request
    pub model: String,

    /// Finish reason, if the API reported one
    pub finish_reason: Option<String>,
}

/// Token usage from a completion.
#[derive(Debug, Clone, Default)]
pub struct TokenUsage {
    /// Tokens in the prompt
    pub prompt_tokens: u32,

    /// Tokens in the completion
    pub completion_tokens: u32,
}

impl TokenUsage {
    /// Total tokens used.
    pub fn total(&self) -> u32 {
        self.prompt_tokens + self.completion_tokens
    }
}

/// Provider abstraction allows swapping LLM backends.
///
/// This is the only place network calls happen; the scoring engine in
/// `policyduel-core` never sees this trait.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Execute a chat completion.
    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        config: &CompletionConfig,
    ) -> Result<CompletionResponse, ProviderError>;

    /// Check if the provider is usable (credentials present).
    async fn health_check(&self) -> bool;

    /// Provider name for logs and metrics.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_message_roles() {
        assert_eq!(ChatMessage::system("rules").role, "system");
        assert_eq!(ChatMessage::user("prompt").role, "user");
    }

    #[test]
    fn test_completion_config_for_model() {
        let config = CompletionConfig::for_model("llama-3.3-70b-versatile");
        assert_eq!(config.model, "llama-3.3-70b-versatile");
        assert_eq!(config.temperature, 0.0);
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_token_usage_total() {
        let usage = TokenUsage {
            prompt_tokens: 120,
            completion_tokens: 380,
        };
        assert_eq!(usage.total(), 500);
    }

    #[test]
    fn test_retryable_classification() {
        assert!(ProviderError::RateLimited { retry_after: None }.is_retryable());
        assert!(ProviderError::HttpError("reset".into()).is_retryable());
        assert!(!ProviderError::AuthError.is_retryable());
        assert!(!ProviderError::ApiError {
            status: 400,
            message: "bad request".into()
        }
        .is_retryable());
    }
}
