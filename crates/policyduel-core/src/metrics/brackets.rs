//! Bracket integrity: a well-formedness heuristic that survives parse failure.
//!
//! The score is the percentage of bracket characters (`{} [] ()`) that sit in
//! a correctly nested position. It is computed from the raw text before any
//! extraction, so a truncated or malformed response still yields a signal.

/// The closer a given opener must be matched by.
fn closer_for(open: char) -> char {
    match open {
        '{' => '}',
        '[' => ']',
        _ => ')',
    }
}

fn is_bracket(ch: char) -> bool {
    matches!(ch, '{' | '}' | '[' | ']' | '(' | ')')
}

/// Percentage in `[0, 100]` of correctly matched bracket characters.
///
/// Single pass with a stack of open brackets. Each mismatch event (a closer
/// with an empty stack, or a closer that does not correspond to the popped
/// opener) inflates the denominator by one, and openers still on the stack
/// at the end are subtracted from the numerator. The denominator inflation
/// is a deliberate compatibility quirk: downstream comparisons depend on
/// this exact scale, so it must not be "corrected".
///
/// Text with no bracket characters at all scores `100.0` (vacuously
/// perfect, an explicit policy choice).
pub fn bracket_integrity_score(text: &str) -> f64 {
    let mut total = text.chars().filter(|c| is_bracket(*c)).count() as u64;
    if total == 0 {
        return 100.0;
    }

    let mut stack: Vec<char> = Vec::new();
    for ch in text.chars() {
        match ch {
            '{' | '[' | '(' => stack.push(ch),
            '}' | ']' | ')' => match stack.pop() {
                None => total += 1,
                Some(open) if closer_for(open) != ch => total += 1,
                Some(_) => {}
            },
            _ => {}
        }
    }

    let unmatched = stack.len() as u64;
    let correct = total.saturating_sub(unmatched);
    crate::round2(correct as f64 / total as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_brackets_is_vacuously_perfect() {
        assert_eq!(bracket_integrity_score(""), 100.0);
        assert_eq!(bracket_integrity_score("deny all public IPs"), 100.0);
    }

    #[test]
    fn test_balanced_pairs_score_full() {
        assert_eq!(bracket_integrity_score("{}"), 100.0);
        assert_eq!(bracket_integrity_score("{[()]}"), 100.0);
        assert_eq!(bracket_integrity_score(r#"{"a": [1, (2)], "b": {}}"#), 100.0);
    }

    #[test]
    fn test_single_unmatched_opener_scores_zero() {
        // total=1, unmatched=1, correct=0
        assert_eq!(bracket_integrity_score("{"), 0.0);
    }

    #[test]
    fn test_lone_closer_only_inflates_denominator() {
        // "}": total=1, empty-stack closer -> total=2; unmatched=0;
        // correct=2 -> 100.0. Lone closers dilute the score of texts that
        // also contain unmatched openers but do not dock one on their own.
        assert_eq!(bracket_integrity_score("}"), 100.0);
    }

    #[test]
    fn test_closer_then_opener() {
        // ")(": total=2; ')' on empty stack -> total=3; '(' left open ->
        // unmatched=1; correct=2; 2/3*100 = 66.67.
        assert_eq!(bracket_integrity_score(")("), 66.67);
    }

    #[test]
    fn test_wrong_closer_kind() {
        // "{]": total=2; ']' pops '{' and mismatches -> total=3;
        // unmatched=0; correct=3 -> 100.0 under the compatibility formula.
        assert_eq!(bracket_integrity_score("{]"), 100.0);
    }

    #[test]
    fn test_truncated_object() {
        // r#"{"a": ["#: brackets '{' '[' -> total=2, both unmatched,
        // correct=0.
        assert_eq!(bracket_integrity_score(r#"{"a": ["#), 0.0);
    }

    #[test]
    fn test_partially_closed() {
        // "{[]": total=3, '[' and ']' match, '{' unmatched -> 2/3.
        assert_eq!(bracket_integrity_score("{[]"), 66.67);
    }
}
