//! Secure credential handling for LLM providers.
//!
//! API keys are wrapped in [`ApiCredential`] so they:
//!
//! - cannot appear in `Debug` output
//! - are zeroed on drop
//! - must be exposed explicitly, at the point of use
//! - carry their source, so configuration issues can be debugged without
//!   printing the value

use secrecy::{ExposeSecret, SecretString};
use serde_json::Value as JsonValue;
use std::fmt;

use super::ProviderError;

/// Where a credential was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// Loaded from configuration JSON
    Config,
    /// Loaded from an environment variable
    Environment,
    /// Provided programmatically
    Programmatic,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::Config => write!(f, "config"),
            CredentialSource::Environment => write!(f, "environment"),
            CredentialSource::Programmatic => write!(f, "programmatic"),
        }
    }
}

/// An API credential that resists accidental disclosure.
pub struct ApiCredential {
    secret: SecretString,
    source: CredentialSource,
    label: &'static str,
}

impl ApiCredential {
    /// Wrap a credential value.
    pub fn new(value: impl Into<String>, source: CredentialSource, label: &'static str) -> Self {
        Self {
            secret: SecretString::from(value.into()),
            source,
            label,
        }
    }

    /// Load from an environment variable.
    pub fn from_env(var: &str, label: &'static str) -> Result<Self, ProviderError> {
        match std::env::var(var) {
            Ok(value) if !value.is_empty() => {
                Ok(Self::new(value, CredentialSource::Environment, label))
            }
            _ => Err(ProviderError::NotConfigured(format!(
                "{label} not found: set {var}"
            ))),
        }
    }

    /// Load from a JSON config key, falling back to an environment variable.
    pub fn from_config_or_env(
        config: &JsonValue,
        key: &str,
        var: &str,
        label: &'static str,
    ) -> Result<Self, ProviderError> {
        if let Some(value) = config[key].as_str().filter(|v| !v.is_empty()) {
            return Ok(Self::new(value, CredentialSource::Config, label));
        }
        Self::from_env(var, label)
    }

    /// Whether a credential could be loaded, without loading it.
    pub fn is_available(config: &JsonValue, key: &str, var: &str) -> bool {
        config[key].as_str().is_some_and(|v| !v.is_empty())
            || std::env::var(var).map(|v| !v.is_empty()).unwrap_or(false)
    }

    /// Expose the secret value. Call this only where the value is consumed,
    /// e.g. when setting an HTTP header.
    pub fn expose(&self) -> &str {
        self.secret.expose_secret()
    }

    /// True when the wrapped value is empty.
    pub fn is_empty(&self) -> bool {
        self.secret.expose_secret().is_empty()
    }

    /// Where this credential came from.
    pub fn source(&self) -> CredentialSource {
        self.source
    }
}

impl fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredential")
            .field("label", &self.label)
            .field("source", &self.source)
            .field("value", &"[REDACTED]")
            .finish()
    }
}
