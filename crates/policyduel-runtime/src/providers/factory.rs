//! Provider factory pattern for registering model backends by name.
//!
//! New providers register a factory instead of extending an enum, so the CLI
//! can build contenders from `--provider <name>` style configuration.
//!
//! ## Usage
//!
//! ```ignore
//! let registry = ProviderRegistry::with_defaults();
//! let provider = registry.create("openai", &serde_json::json!({}))?;
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value as JsonValue;

use super::{LlmProvider, ProviderError};

/// Factory for creating LLM providers from JSON configuration.
pub trait ProviderFactory: Send + Sync {
    /// Unique identifier, e.g. "openai" or "groq".
    fn provider_type(&self) -> &'static str;

    /// Create a provider instance from configuration.
    fn create(&self, config: &JsonValue) -> Result<Arc<dyn LlmProvider>, ProviderError>;

    /// Validate configuration without creating a provider.
    fn validate_config(&self, config: &JsonValue) -> Result<(), ProviderError>;

    /// Default configuration for this provider.
    fn default_config(&self) -> JsonValue {
        serde_json::json!({})
    }

    /// Human-readable description.
    fn description(&self) -> &'static str {
        "LLM provider"
    }
}

/// Registry of provider factories, keyed by provider type.
pub struct ProviderRegistry {
    factories: BTreeMap<&'static str, Arc<dyn ProviderFactory>>,
}

impl ProviderRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Registry pre-populated with every compiled-in provider.
    pub fn with_defaults() -> Self {
        #[allow(unused_mut)]
        let mut registry = Self::new();

        #[cfg(feature = "openai")]
        registry.register(Arc::new(super::openai::OpenAiProviderFactory));

        #[cfg(feature = "groq")]
        registry.register(Arc::new(super::groq::GroqProviderFactory));

        registry
    }

    /// Register a factory. Replaces any previous factory of the same type.
    pub fn register(&mut self, factory: Arc<dyn ProviderFactory>) {
        self.factories.insert(factory.provider_type(), factory);
    }

    /// Create a provider by type name.
    pub fn create(
        &self,
        provider_type: &str,
        config: &JsonValue,
    ) -> Result<Arc<dyn LlmProvider>, ProviderError> {
        let factory = self.factories.get(provider_type).ok_or_else(|| {
            ProviderError::NotConfigured(format!(
                "unknown provider '{provider_type}', available: {:?}",
                self.types()
            ))
        })?;
        factory.validate_config(config)?;
        factory.create(config)
    }

    /// Registered provider type names, in stable order.
    pub fn types(&self) -> Vec<&'static str> {
        self.factories.keys().copied().collect()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{ChatMessage, CompletionConfig, CompletionResponse};
    use async_trait::async_trait;

    struct NullProvider;

    #[async_trait]
    impl LlmProvider for NullProvider {
        async fn complete(
            &self,
            _messages: Vec<ChatMessage>,
            _config: &CompletionConfig,
        ) -> Result<CompletionResponse, ProviderError> {
            Err(ProviderError::NotConfigured("null".into()))
        }

        async fn health_check(&self) -> bool {
            false
        }

        fn name(&self) -> &str {
            "null"
        }
    }

    struct NullFactory;

    impl ProviderFactory for NullFactory {
        fn provider_type(&self) -> &'static str {
            "null"
        }

        fn create(&self, _config: &JsonValue) -> Result<Arc<dyn LlmProvider>, ProviderError> {
            Ok(Arc::new(NullProvider))
        }

        fn validate_config(&self, _config: &JsonValue) -> Result<(), ProviderError> {
            Ok(())
        }
    }

    #[test]
    fn test_register_and_create() {
        let mut registry = ProviderRegistry::new();
        registry.register(Arc::new(NullFactory));

        let provider = registry.create("null", &serde_json::json!({})).unwrap();
        assert_eq!(provider.name(), "null");
    }

    #[test]
    fn test_unknown_type_errors() {
        let registry = ProviderRegistry::new();
        let result = registry.create("nope", &serde_json::json!({}));
        assert!(matches!(result, Err(ProviderError::NotConfigured(_))));
    }

    #[test]
    fn test_types_are_sorted() {
        let mut registry = ProviderRegistry::new();
        registry.register(Arc::new(NullFactory));
        assert_eq!(registry.types(), vec!["null"]);
    }
}
