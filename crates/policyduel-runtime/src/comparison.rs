//! The comparison runner: same prompt, several backends, one report each.
//!
//! Fan-out is fully parallel; each contender owns its raw output and report,
//! so there is no shared state to coordinate (evaluations are independent by
//! construction). Transport failures never produce a special report shape:
//! they become an empty raw output plus a recorded error string, and the
//! core scores the empty text like any other degenerate response.

use std::sync::Arc;
use std::time::{Duration, Instant};

use backon::{ExponentialBuilder, Retryable};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use policyduel_core::{evaluate, extract, EvaluationReport};

use crate::prompts;
use crate::providers::{CompletionConfig, LlmProvider, ProviderError};

/// One model backend entered into a comparison.
pub struct Contender {
    /// Label used in the report (e.g. "gpt-4o-mini").
    pub label: String,

    /// The backend to call.
    pub provider: Arc<dyn LlmProvider>,

    /// Per-call settings (model, temperature, timeout).
    pub config: CompletionConfig,
}

impl Contender {
    pub fn new(
        label: impl Into<String>,
        provider: Arc<dyn LlmProvider>,
        config: CompletionConfig,
    ) -> Self {
        Self {
            label: label.into(),
            provider,
            config,
        }
    }
}

/// What one contender produced, scored.
#[derive(Debug, Clone, Serialize)]
pub struct ModelOutcome {
    /// The quality report.
    pub report: EvaluationReport,

    /// The unmodified text the backend returned (empty on failure).
    pub raw_output: String,

    /// The extracted policy document, when one parsed.
    pub document: Option<Value>,

    /// Description of the transport or API error, if the call failed.
    pub error: Option<String>,
}

/// A full side-by-side comparison.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    /// The user's policy requirement.
    pub prompt: String,

    /// One outcome per contender, in entry order.
    pub outcomes: Vec<ModelOutcome>,

    /// When the comparison ran.
    pub compared_at: DateTime<Utc>,
}

/// Runs the same policy-generation prompt against every contender and scores
/// each raw output with the deterministic core.
pub struct ComparisonRunner {
    system_prompt: String,
    max_retries: usize,
}

impl ComparisonRunner {
    pub fn new() -> Self {
        Self {
            system_prompt: prompts::POLICY_SYSTEM_PROMPT.to_string(),
            max_retries: 2,
        }
    }

    /// Override the system prompt sent to every backend.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// Cap retry attempts for rate-limited or flaky calls.
    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Run one requirement against every contender in parallel.
    pub async fn run(&self, requirement: &str, contenders: &[Contender]) -> Comparison {
        let outcomes = futures::future::join_all(
            contenders
                .iter()
                .map(|contender| self.run_contender(contender, requirement)),
        )
        .await;

        Comparison {
            prompt: requirement.to_string(),
            outcomes,
            compared_at: Utc::now(),
        }
    }

    async fn run_contender(&self, contender: &Contender, requirement: &str) -> ModelOutcome {
        let messages = prompts::generation_messages(&self.system_prompt, requirement);

        let started = Instant::now();
        let completion = (|| async {
            contender
                .provider
                .complete(messages.clone(), &contender.config)
                .await
        })
        .retry(ExponentialBuilder::default().with_max_times(self.max_retries))
        .when(ProviderError::is_retryable)
        .notify(|err: &ProviderError, after: Duration| {
            tracing::warn!(model = %contender.label, error = %err, retry_in = ?after, "model call failed, retrying");
        })
        .await;
        let elapsed = started.elapsed().as_secs_f64();

        let (raw_output, error) = match completion {
            Ok(response) => {
                tracing::debug!(
                    model = %contender.label,
                    tokens = response.usage.total(),
                    elapsed_s = elapsed,
                    "completion received"
                );
                (response.content, None)
            }
            Err(err) => {
                tracing::warn!(model = %contender.label, error = %err, "model call failed");
                (String::new(), Some(err.to_string()))
            }
        };

        let report = evaluate(&contender.label, &raw_output, elapsed);
        let document = extract(&raw_output);

        ModelOutcome {
            report,
            raw_output,
            document,
            error,
        }
    }
}

impl Default for ComparisonRunner {
    fn default() -> Self {
        Self::new()
    }
}
