//! Formatting quality: did the model return bare JSON or JSON in chatter?

use crate::report::Formatting;

/// Classify the trimmed raw output.
///
/// - Starts with `{` and ends with `}` → `Good` (the model obeyed
///   "JSON only").
/// - Contains both braces somewhere → `Average` (JSON buried in prose).
/// - Otherwise → `Poor`.
///
/// Judged on the raw text regardless of where extraction found its span.
pub fn formatting_quality(raw_output: &str) -> Formatting {
    let trimmed = raw_output.trim();
    if trimmed.starts_with('{') && trimmed.ends_with('}') {
        Formatting::Good
    } else if trimmed.contains('{') && trimmed.contains('}') {
        Formatting::Average
    } else {
        Formatting::Poor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_object_is_good() {
        assert_eq!(formatting_quality(r#"{"a": 1}"#), Formatting::Good);
        // Surrounding whitespace is forgiven.
        assert_eq!(formatting_quality("  \n{\"a\": 1}\n"), Formatting::Good);
    }

    #[test]
    fn test_wrapped_object_is_average() {
        assert_eq!(
            formatting_quality("Here is your policy: {\"a\": 1} enjoy!"),
            Formatting::Average
        );
        assert_eq!(formatting_quality("```json\n{}\n```"), Formatting::Average);
    }

    #[test]
    fn test_no_braces_is_poor() {
        assert_eq!(formatting_quality("I cannot help with that."), Formatting::Poor);
        assert_eq!(formatting_quality(""), Formatting::Poor);
        assert_eq!(formatting_quality("only an opener {"), Formatting::Poor);
    }
}
