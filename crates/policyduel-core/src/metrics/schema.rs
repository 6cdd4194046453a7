//! Schema completeness: how much of the expected policy shape is present.

use serde_json::Value;

use crate::probe;
use crate::report::Completeness;

/// Score the parsed document against the expected
/// `properties.policyRule.{if,then.effect}` shape.
///
/// Four independent one-point checks:
///
/// 1. a top-level `properties` key exists
/// 2. `properties.policyRule` exists and is truthy
/// 3. `policyRule` is a mapping containing `if`
/// 4. `policyRule.then.effect` exists and is truthy
///
/// 4 points map to [`Completeness::High`], 2–3 to `Partial`, 0–1 to `Low`.
/// Every check degrades to "no point" on a type mismatch; there is no
/// failure path.
pub fn schema_completeness(document: &Value) -> Completeness {
    let mut points = 0u8;

    if document.get("properties").is_some() {
        points += 1;
    }

    let policy_rule = document.get("properties").and_then(|p| p.get("policyRule"));
    if policy_rule.is_some_and(probe::is_truthy) {
        points += 1;
    }

    if let Some(rule) = policy_rule.and_then(Value::as_object) {
        if rule.contains_key("if") {
            points += 1;
        }
        let effect = rule.get("then").and_then(|then| then.get("effect"));
        if effect.is_some_and(probe::is_truthy) {
            points += 1;
        }
    }

    match points {
        4 => Completeness::High,
        2 | 3 => Completeness::Partial,
        _ => Completeness::Low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_shape_is_high() {
        let doc = json!({
            "properties": {
                "policyRule": {
                    "if": {"field": "type"},
                    "then": {"effect": "deny"}
                }
            }
        });
        assert_eq!(schema_completeness(&doc), Completeness::High);
    }

    #[test]
    fn test_empty_document_is_low() {
        assert_eq!(schema_completeness(&json!({})), Completeness::Low);
    }

    #[test]
    fn test_properties_alone_is_low() {
        // One point only.
        let doc = json!({"properties": {}});
        assert_eq!(schema_completeness(&doc), Completeness::Low);
    }

    #[test]
    fn test_rule_without_effect_is_partial() {
        // properties + truthy policyRule + if = three points.
        let doc = json!({
            "properties": {"policyRule": {"if": {"field": "location"}}}
        });
        assert_eq!(schema_completeness(&doc), Completeness::Partial);
    }

    #[test]
    fn test_rule_without_if_is_partial() {
        let doc = json!({
            "properties": {"policyRule": {"then": {"effect": "audit"}}}
        });
        assert_eq!(schema_completeness(&doc), Completeness::Partial);
    }

    #[test]
    fn test_non_mapping_rule_earns_no_structural_points() {
        // Truthy but not a mapping: checks 3 and 4 cannot apply.
        let doc = json!({"properties": {"policyRule": "deny them all"}});
        assert_eq!(schema_completeness(&doc), Completeness::Partial);
    }

    #[test]
    fn test_non_mapping_then_does_not_crash() {
        let doc = json!({
            "properties": {"policyRule": {"if": {}, "then": "effect: deny"}}
        });
        assert_eq!(schema_completeness(&doc), Completeness::Partial);
    }

    #[test]
    fn test_empty_policy_rule_is_not_truthy() {
        // properties present, but an empty policyRule earns nothing more.
        let doc = json!({"properties": {"policyRule": {}}});
        assert_eq!(schema_completeness(&doc), Completeness::Low);
    }
}
