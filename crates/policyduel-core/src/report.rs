//! The evaluation report: one immutable record per model response.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ordinal label for schema completeness, derived from a 0–4 point score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Completeness {
    Low,
    Partial,
    High,
}

/// Ordinal label for policy rule quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RuleQuality {
    Poor,
    Average,
    Good,
    Excellent,
}

/// Ordinal label for formatting quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Formatting {
    Poor,
    Average,
    Good,
}

impl fmt::Display for Completeness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Completeness::Low => "Low",
            Completeness::Partial => "Partial",
            Completeness::High => "High",
        })
    }
}

impl fmt::Display for RuleQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RuleQuality::Poor => "Poor",
            RuleQuality::Average => "Average",
            RuleQuality::Good => "Good",
            RuleQuality::Excellent => "Excellent",
        })
    }
}

impl fmt::Display for Formatting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Formatting::Poor => "Poor",
            Formatting::Average => "Average",
            Formatting::Good => "Good",
        })
    }
}

/// Quality report for a single model response.
///
/// Constructed once by [`crate::evaluate`], never mutated afterwards, and
/// suitable for direct tabular rendering (one row per field, one report per
/// model).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Opaque label for the backend that produced the output.
    pub model: String,

    /// Elapsed seconds as measured by the caller, rounded to 2 decimals.
    pub response_time: f64,

    /// True iff a strict parse of the extracted span succeeded.
    pub json_valid: bool,

    /// How much of the expected policy shape is present.
    pub schema_completeness: Completeness,

    /// Effect validity and condition richness of the policy rule.
    pub policy_rule_quality: RuleQuality,

    /// Whether the raw output was bare JSON or JSON in chatter.
    pub formatting_quality: Formatting,

    /// Percentage in `[0, 100]` of correctly matched bracket characters.
    pub bracket_integrity_score: f64,

    /// True iff extraction produced no document at all.
    pub failure: bool,

    /// When this report was produced.
    pub evaluated_at: DateTime<Utc>,
}

impl EvaluationReport {
    /// The explicit worst-case record every evaluation starts from.
    ///
    /// Scoring steps overwrite fields as they succeed; anything they skip
    /// keeps its worst-case default. This makes graceful degradation a
    /// visible part of the contract instead of a side effect.
    pub fn worst_case(model: impl Into<String>, response_time: f64) -> Self {
        Self {
            model: model.into(),
            response_time: crate::round2(response_time.max(0.0)),
            json_valid: false,
            schema_completeness: Completeness::Low,
            policy_rule_quality: RuleQuality::Poor,
            formatting_quality: Formatting::Poor,
            bracket_integrity_score: 0.0,
            failure: false,
            evaluated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worst_case_defaults() {
        let report = EvaluationReport::worst_case("m", 1.0);
        assert!(!report.json_valid);
        assert!(!report.failure);
        assert_eq!(report.schema_completeness, Completeness::Low);
        assert_eq!(report.policy_rule_quality, RuleQuality::Poor);
        assert_eq!(report.formatting_quality, Formatting::Poor);
        assert_eq!(report.bracket_integrity_score, 0.0);
    }

    #[test]
    fn test_negative_elapsed_clamps_to_zero() {
        let report = EvaluationReport::worst_case("m", -0.5);
        assert_eq!(report.response_time, 0.0);
    }

    #[test]
    fn test_labels_are_ordinal() {
        assert!(Completeness::Low < Completeness::Partial);
        assert!(Completeness::Partial < Completeness::High);
        assert!(RuleQuality::Poor < RuleQuality::Excellent);
        assert!(Formatting::Average < Formatting::Good);
    }

    #[test]
    fn test_report_serializes_with_plain_labels() {
        let report = EvaluationReport::worst_case("gpt-4o-mini", 0.25);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["response_time"], 0.25);
        assert_eq!(json["schema_completeness"], "Low");
        assert_eq!(json["policy_rule_quality"], "Poor");
        assert_eq!(json["formatting_quality"], "Poor");
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let report = EvaluationReport::worst_case("m", 3.21);
        let text = serde_json::to_string(&report).unwrap();
        let back: EvaluationReport = serde_json::from_str(&text).unwrap();
        assert_eq!(back.model, report.model);
        assert_eq!(back.schema_completeness, report.schema_completeness);
    }
}
