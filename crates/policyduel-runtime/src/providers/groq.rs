//! Groq provider.
//!
//! Groq exposes an OpenAI-compatible chat-completions endpoint at
//! `https://api.groq.com/openai/v1`, so the wire shapes mirror the OpenAI
//! provider. Kept as its own type so credentials, defaults, and quirks stay
//! per-backend.

use super::{
    factory::ProviderFactory,
    secrets::{ApiCredential, CredentialSource},
    ChatMessage, CompletionConfig, CompletionResponse, LlmProvider, ProviderError, TokenUsage,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use std::time::Duration;

/// Environment variable name for the Groq API key.
pub const GROQ_API_KEY_ENV: &str = "GROQ_API_KEY";

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Groq provider (OpenAI-compatible wire format).
pub struct GroqProvider {
    credential: ApiCredential,
    base_url: String,
}

impl std::fmt::Debug for GroqProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroqProvider")
            .field("credential", &self.credential)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl GroqProvider {
    /// Create with an explicit API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            credential: ApiCredential::new(api_key, CredentialSource::Programmatic, "Groq API key"),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create from the `GROQ_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, ProviderError> {
        let credential = ApiCredential::from_env(GROQ_API_KEY_ENV, "Groq API key")?;
        Ok(Self {
            credential,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Create from JSON configuration with environment fallback.
    pub fn from_config(config: &JsonValue) -> Result<Self, ProviderError> {
        let credential =
            ApiCredential::from_config_or_env(config, "api_key", GROQ_API_KEY_ENV, "Groq API key")?;

        let base_url = config["base_url"]
            .as_str()
            .unwrap_or(DEFAULT_BASE_URL)
            .to_string();

        Ok(Self {
            credential,
            base_url,
        })
    }

    fn client() -> &'static reqwest::Client {
        static CLIENT: std::sync::OnceLock<reqwest::Client> = std::sync::OnceLock::new();
        CLIENT.get_or_init(|| {
            reqwest::Client::builder()
                .timeout(Duration::from_secs(120))
                .build()
                .expect("failed to build HTTP client")
        })
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<WireMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct WireMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
    model: String,
    #[serde(default)]
    usage: Option<WireUsage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: WireResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireUsage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct WireError {
    error: WireErrorDetail,
}

#[derive(Debug, Deserialize)]
struct WireErrorDetail {
    message: String,
}

#[async_trait]
impl LlmProvider for GroqProvider {
    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        config: &CompletionConfig,
    ) -> Result<CompletionResponse, ProviderError> {
        let request = ChatCompletionRequest {
            model: config.model.clone(),
            messages: messages
                .into_iter()
                .map(|m| WireMessage {
                    role: m.role,
                    content: m.content,
                })
                .collect(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        };

        let response = Self::client()
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(self.credential.expose())
            .timeout(config.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout(config.timeout)
                } else {
                    ProviderError::HttpError(e.to_string())
                }
            })?;

        let status = response.status();

        if status == 401 {
            return Err(ProviderError::AuthError);
        }

        if status == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_secs);
            return Err(ProviderError::RateLimited { retry_after });
        }

        if !status.is_success() {
            let message = response
                .json::<WireError>()
                .await
                .map(|body| body.error.message)
                .unwrap_or_else(|e| e.to_string());
            return Err(ProviderError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        let (content, finish_reason) = body
            .choices
            .into_iter()
            .next()
            .map(|choice| (choice.message.content.unwrap_or_default(), choice.finish_reason))
            .unwrap_or_default();

        let usage = body.usage.unwrap_or(WireUsage {
            prompt_tokens: 0,
            completion_tokens: 0,
        });

        Ok(CompletionResponse {
            content,
            usage: TokenUsage {
                prompt_tokens: usage.prompt_tokens,
                completion_tokens: usage.completion_tokens,
            },
            model: body.model,
            finish_reason,
        })
    }

    async fn health_check(&self) -> bool {
        !self.credential.is_empty()
    }

    fn name(&self) -> &str {
        "groq"
    }
}

/// Factory for creating Groq providers from configuration.
pub struct GroqProviderFactory;

impl ProviderFactory for GroqProviderFactory {
    fn provider_type(&self) -> &'static str {
        "groq"
    }

    fn create(&self, config: &JsonValue) -> Result<Arc<dyn LlmProvider>, ProviderError> {
        Ok(Arc::new(GroqProvider::from_config(config)?))
    }

    fn validate_config(&self, config: &JsonValue) -> Result<(), ProviderError> {
        if !ApiCredential::is_available(config, "api_key", GROQ_API_KEY_ENV) {
            return Err(ProviderError::NotConfigured(format!(
                "Groq API key required: set 'api_key' in config or {GROQ_API_KEY_ENV} env"
            )));
        }
        Ok(())
    }

    fn default_config(&self) -> JsonValue {
        serde_json::json!({ "model": "llama-3.3-70b-versatile" })
    }

    fn description(&self) -> &'static str {
        "Groq provider (OpenAI-compatible endpoint)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_name() {
        assert_eq!(GroqProvider::new("gsk-x").name(), "groq");
    }

    #[test]
    fn test_api_key_not_in_debug_output() {
        let secret = "gsk-super-secret-12345";
        let provider = GroqProvider::new(secret);
        let debug_output = format!("{provider:?}");
        assert!(!debug_output.contains(secret));
        assert!(debug_output.contains("[REDACTED]"));
    }

    #[test]
    fn test_default_base_url() {
        let provider = GroqProvider::new("k");
        assert_eq!(provider.base_url, "https://api.groq.com/openai/v1");
    }

    #[test]
    fn test_factory_default_model() {
        let factory = GroqProviderFactory;
        assert_eq!(factory.default_config()["model"], "llama-3.3-70b-versatile");
    }
}
