//! # policyduel-runtime
//!
//! Model invocation and comparison for policyduel.
//!
//! This crate owns everything the deterministic core treats as an external
//! collaborator: calling LLM backends over HTTP, timing them, and turning
//! transport failures into degenerate (empty) outputs the core can score
//! like any other response.
//!
//! ## Important
//!
//! Scoring itself lives in `policyduel-core` and never makes network calls.
//! This crate only orchestrates: prompt → providers → raw outputs → reports.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use policyduel_runtime::{
//!     comparison::{ComparisonRunner, Contender},
//!     providers::{CompletionConfig, OpenAiProvider},
//! };
//!
//! let provider = Arc::new(OpenAiProvider::from_env()?);
//! let contender = Contender::new("gpt-4o-mini", provider, CompletionConfig::default());
//!
//! let comparison = ComparisonRunner::new()
//!     .run("Deny creation of VMs with public IPs", vec![contender])
//!     .await;
//! println!("{}", comparison.outcomes[0].report.schema_completeness);
//! ```

pub mod comparison;
pub mod prompts;
pub mod providers;

pub use comparison::{Comparison, ComparisonRunner, Contender, ModelOutcome};
pub use providers::{
    ChatMessage, CompletionConfig, CompletionResponse, LlmProvider, ProviderError, TokenUsage,
};
