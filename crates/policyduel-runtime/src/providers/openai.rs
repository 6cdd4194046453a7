//! OpenAI chat-completions provider.
//!
//! Speaks the `/v1/chat/completions` wire format. The API key comes from the
//! centralized [`ApiCredential`] system and is only exposed when the request
//! header is built.

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

/// Environment variable name for the OpenAI API key.
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI provider.
pub struct OpenAiProvider {
    credential: ApiCredential,
    base_url: String,
}

impl std::fmt::Debug for OpenAiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiProvider")
            .field("credential", &self.credential)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl OpenAiProvider {
    /// Create with an explicit API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            credential: ApiCredential::new(
                api_key,
                CredentialSource::Programmatic,
                "OpenAI API key",
            ),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create from the `OPENAI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, ProviderError> {
        let credential = ApiCredential::from_env(OPENAI_API_KEY_ENV, "OpenAI API key")?;
        Ok(Self {
            credential,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Create from JSON configuration with environment fallback.
    pub fn from_config(config: &JsonValue) -> Result<Self, ProviderError> {
        let credential = ApiCredential::from_config_or_env(
            config,
            "api_key",
            OPENAI_API_KEY_ENV,
            "OpenAI API key",
        )?;

        let base_url = config["base_url"]
            .as_str()
            .unwrap_or(DEFAULT_BASE_URL)
            .to_string();

        Ok(Self {
            credential,
            base_url,
        })
    }

    /// Set a custom base URL (proxies, compatible endpoints).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
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
impl LlmProvider for OpenAiProvider {
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

        // The credential is only exposed here, at the point of use.
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
        "openai"
    }
}

/// Factory for creating OpenAI providers from configuration.
pub struct OpenAiProviderFactory;

impl ProviderFactory for OpenAiProviderFactory {
    fn provider_type(&self) -> &'static str {
        "openai"
    }

    fn create(&self, config: &JsonValue) -> Result<Arc<dyn LlmProvider>, ProviderError> {
        Ok(Arc::new(OpenAiProvider::from_config(config)?))
    }

    fn validate_config(&self, config: &JsonValue) -> Result<(), ProviderError> {
        if !ApiCredential::is_available(config, "api_key", OPENAI_API_KEY_ENV) {
            return Err(ProviderError::NotConfigured(format!(
                "OpenAI API key required: set 'api_key' in config or {OPENAI_API_KEY_ENV} env"
            )));
        }

        if let Some(url) = config["base_url"].as_str() {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ProviderError::NotConfigured(
                    "base_url must start with http:// or https://".to_string(),
                ));
            }
        }

        Ok(())
    }

    fn default_config(&self) -> JsonValue {
        serde_json::json!({ "model": "gpt-4o-mini" })
    }

    fn description(&self) -> &'static str {
        "OpenAI chat-completions provider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_name() {
        let provider = OpenAiProvider::new("test-key");
        assert_eq!(provider.name(), "openai");
    }

    #[test]
    fn test_api_key_not_in_debug_output() {
        let secret = "sk-super-secret-12345";
        let provider = OpenAiProvider::new(secret);
        let debug_output = format!("{provider:?}");
        assert!(!debug_output.contains(secret));
        assert!(debug_output.contains("[REDACTED]"));
    }

    #[tokio::test]
    async fn test_health_check_requires_key() {
        assert!(OpenAiProvider::new("sk-x").health_check().await);
        assert!(!OpenAiProvider::new("").health_check().await);
    }

    #[test]
    fn test_from_config_reads_base_url() {
        let config = serde_json::json!({
            "api_key": "config-key",
            "base_url": "https://proxy.example.com/v1"
        });
        let provider = OpenAiProvider::from_config(&config).unwrap();
        assert_eq!(provider.base_url, "https://proxy.example.com/v1");
        assert_eq!(provider.credential.source(), CredentialSource::Config);
    }

    #[test]
    fn test_factory_validates_base_url() {
        let factory = OpenAiProviderFactory;
        let config = serde_json::json!({
            "api_key": "k",
            "base_url": "not-a-url"
        });
        assert!(factory.validate_config(&config).is_err());
    }

    #[test]
    fn test_factory_default_model() {
        let factory = OpenAiProviderFactory;
        assert_eq!(factory.default_config()["model"], "gpt-4o-mini");
    }
}
