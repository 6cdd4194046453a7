//! # policyduel-core
//!
//! Deterministic quality scoring for LLM-generated Azure Policy documents.
//!
//! Given the raw text a model returned for a policy-generation prompt, this
//! crate locates the most plausible embedded JSON object, parses it, and
//! scores the result along a fixed set of quality dimensions:
//!
//! - **JSON validity** — did a strict parse of the brace-bounded span succeed?
//! - **Schema completeness** — how much of the `properties.policyRule` shape
//!   is present?
//! - **Policy rule quality** — is `then.effect` a real Azure Policy effect,
//!   and does `if` carry meaningful conditions?
//! - **Formatting quality** — is the response a bare JSON object, or JSON
//!   buried in chatter?
//! - **Bracket integrity** — a cheap well-formedness heuristic that survives
//!   total parse failure.
//!
//! ## Key Guarantees
//!
//! 1. **Total**: every input, including the empty string, yields a complete
//!    [`EvaluationReport`]. Nothing panics, nothing returns `Err`.
//! 2. **Deterministic**: same input always produces the same scores.
//! 3. **No I/O**: evaluation never touches the network or filesystem; calling
//!    the model backends and timing them is the caller's job.
//!
//! ## Example
//!
//! ```rust
//! use policyduel_core::{evaluate, Completeness, RuleQuality};
//!
//! let raw = r#"Here you go:
//! {"properties":{"policyRule":{"if":{"field":"type"},"then":{"effect":"deny"}}}}"#;
//!
//! let report = evaluate("gpt-4o-mini", raw, 1.234);
//! assert!(report.json_valid);
//! assert_eq!(report.schema_completeness, Completeness::High);
//! assert_eq!(report.policy_rule_quality, RuleQuality::Excellent);
//! assert_eq!(report.response_time, 1.23);
//! ```

pub mod extract;
pub mod metrics;
pub mod probe;
pub mod report;

pub use self::extract::extract;
pub use self::metrics::{
    bracket_integrity_score, formatting_quality, policy_rule_quality, schema_completeness,
};
pub use self::report::{Completeness, EvaluationReport, Formatting, RuleQuality};

/// Round to two decimals, the precision every score in a report carries.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Score one model response.
///
/// This is the main entry point. The report starts from the explicit
/// worst-case record and individual steps overwrite fields as they succeed,
/// so degenerate input degrades into worst-case labels instead of erroring.
///
/// # Arguments
///
/// * `model` - Opaque label for the backend that produced the output
/// * `raw_output` - The unmodified text the backend returned (empty on
///   transport failure)
/// * `response_time` - Elapsed wall-clock seconds, measured by the caller
///
/// Bracket integrity is computed from the raw text before extraction, so a
/// partial signal survives even when no parseable JSON span exists.
pub fn evaluate(model: impl Into<String>, raw_output: &str, response_time: f64) -> EvaluationReport {
    let mut report = EvaluationReport::worst_case(model, response_time);
    report.bracket_integrity_score = bracket_integrity_score(raw_output);

    let Some(document) = extract(raw_output) else {
        tracing::debug!(model = %report.model, "no parseable JSON span in output");
        report.failure = true;
        return report;
    };

    report.json_valid = true;
    report.schema_completeness = schema_completeness(&document);
    report.policy_rule_quality = policy_rule_quality(&document);
    report.formatting_quality = formatting_quality(raw_output);
    report
}
