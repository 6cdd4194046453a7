//! Policy rule quality: effect validity and condition richness.

use serde_json::Value;

use crate::report::RuleQuality;

/// Effects Azure Policy actually accepts, compared case-insensitively.
const VALID_EFFECTS: [&str; 6] = [
    "deny",
    "audit",
    "modify",
    "append",
    "deployifnotexists",
    "disabled",
];

/// Classify the rule inside `properties.policyRule`.
///
/// - No rule, rule is not a mapping, or `then.effect` is missing, empty, or
///   not a string → `Poor`. Structural surprises are an explicit fallback
///   branch here, never an error.
/// - Effect present but not one of the known Azure Policy effects → `Average`.
/// - Valid effect with a non-empty `if` condition mapping → `Excellent`.
/// - Valid effect but no meaningful conditions → `Good`.
pub fn policy_rule_quality(document: &Value) -> RuleQuality {
    let Some(rule) = document
        .get("properties")
        .and_then(|properties| properties.get("policyRule"))
        .and_then(Value::as_object)
    else {
        return RuleQuality::Poor;
    };

    // Only a non-empty string can name an effect; a number or mapping there
    // is a structural error and downgrades.
    let Some(effect) = rule
        .get("then")
        .and_then(|then| then.get("effect"))
        .and_then(Value::as_str)
        .filter(|effect| !effect.is_empty())
    else {
        return RuleQuality::Poor;
    };

    if !VALID_EFFECTS.contains(&effect.to_ascii_lowercase().as_str()) {
        return RuleQuality::Average;
    }

    match rule.get("if").and_then(Value::as_object) {
        Some(conditions) if !conditions.is_empty() => RuleQuality::Excellent,
        _ => RuleQuality::Good,
    }
}
