//! Best-effort JSON extraction from raw model output.
//!
//! Models asked for "JSON only" still wrap the object in markdown fences,
//! prose, or both. The extractor strips fence markers, bounds the span from
//! the first `{` to the last `}`, and attempts one strict parse of that span.
//! Anything that does not survive strict parsing is reported as absence,
//! never as an error.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

lazy_static! {
    /// Markdown code-fence markers, with or without a language tag
    /// (```json, ```JSON, bare ```).
    static ref FENCE_MARKER: Regex = Regex::new(r"```[A-Za-z]*").unwrap();
}

/// Locate and parse the most plausible embedded JSON object.
///
/// Returns `None` when the text has no `{`...`}` span or when the span is
/// structurally invalid (mismatched brackets, trailing commas, unquoted
/// keys). Pure function of the input; fences inside JSON string values are
/// not specially handled, which is assumed rare for generated policy
/// documents.
pub fn extract(text: &str) -> Option<Value> {
    let stripped = FENCE_MARKER.replace_all(text, "");

    let start = stripped.find('{')?;
    let end = stripped.rfind('}')?;
    if end < start {
        return None;
    }

    // serde_json rejects trailing data, so the span boundaries are strict.
    serde_json::from_str(&stripped[start..=end]).ok()
}
