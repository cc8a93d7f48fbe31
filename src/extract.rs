//! Extraction of structured payloads from free-form model replies.
//!
//! Replies usually wrap their JSON in a fenced code block, with or without a
//! `json` language tag, but a bare JSON object is also accepted.

use serde::de::DeserializeOwned;

use crate::error::{Result, SenseiError};

const FENCE: &str = "```";
const JSON_FENCE: &str = "```json";

/// Slices the payload out of a raw model reply
///
/// Prefers a ```` ```json ```` opener over a plain ```` ``` ```` opener; the
/// payload runs up to the first closing fence after the opener. A reply with
/// no fences, or an opener with no closer, is returned whole (trimmed).
pub fn slice_payload(raw: &str) -> &str {
    let text = raw.trim();

    let body = if let Some(open) = text.find(JSON_FENCE) {
        fenced_body(text, open + JSON_FENCE.len())
    } else if let Some(open) = text.find(FENCE) {
        fenced_body(text, open + FENCE.len())
    } else {
        None
    };

    body.unwrap_or(text)
}

// Payload ends at the first closing fence after the opener.
fn fenced_body(text: &str, start: usize) -> Option<&str> {
    let end = text[start..].find(FENCE)?;
    Some(text[start..start + end].trim())
}

/// Decodes the JSON payload embedded in a raw model reply
///
/// Failures are recoverable: the caller treats the analysis kind as
/// unavailable rather than aborting the run.
pub fn extract_json<T: DeserializeOwned>(raw: &str) -> Result<T> {
    let payload = slice_payload(raw);
    serde_json::from_str(payload)
        .map_err(|e| SenseiError::Parse(format!("reply is not valid JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    #[test]
    fn test_json_tagged_fence() {
        let raw = "Here is the analysis:\n```json\n{\"functions\": []}\n```\nDone.";
        let value: Value = extract_json(raw).unwrap();
        assert_eq!(value, serde_json::json!({"functions": []}));
    }

    #[test]
    fn test_untagged_fence() {
        let raw = "```\n{\"functions\": []}\n```";
        let value: Value = extract_json(raw).unwrap();
        assert_eq!(value, serde_json::json!({"functions": []}));
    }

    #[test]
    fn test_tagged_and_untagged_decode_identically() {
        let inner = r#"{"patterns": [{"pattern_name": "Binary Search", "confidence": 0.9}]}"#;
        let tagged: Value = extract_json(&format!("```json\n{inner}\n```")).unwrap();
        let untagged: Value = extract_json(&format!("```\n{inner}\n```")).unwrap();
        let bare: Value = extract_json(inner).unwrap();
        assert_eq!(tagged, untagged);
        assert_eq!(tagged, bare);
    }

    #[test]
    fn test_bare_json_with_whitespace() {
        let raw = "  \n  [\"use a hash map\"]  \n";
        let value: Vec<String> = extract_json(raw).unwrap();
        assert_eq!(value, vec!["use a hash map".to_string()]);
    }

    #[test]
    fn test_invalid_json_reports_parse_error() {
        let raw = "```json\nnot json at all\n```";
        let result: Result<Value> = extract_json(raw);
        assert!(matches!(result, Err(SenseiError::Parse(_))));
    }

    #[test]
    fn test_prose_reply_reports_parse_error() {
        let result: Result<Value> = extract_json("The complexity is O(n log n).");
        assert!(matches!(result, Err(SenseiError::Parse(_))));
    }

    #[test]
    fn test_slice_stops_at_first_closing_fence() {
        // The slice boundary is the first closing marker after the opener,
        // not the last one in the reply.
        let raw = "```json\n{\"a\": 1}\n```\ntrailing\n```\n{\"b\": 2}\n```";
        assert_eq!(slice_payload(raw), "{\"a\": 1}");
    }

    #[test]
    fn test_opener_without_closer_falls_back_to_whole_text() {
        let raw = "```json\n{\"a\": 1}";
        assert_eq!(slice_payload(raw), raw.trim());
    }

    #[test]
    fn test_payload_inside_surrounding_prose() {
        let raw = "Sure! The JSON you asked for:\n\n```json\n[\"a\", \"b\"]\n```\n\nLet me know.";
        let value: Vec<String> = extract_json(raw).unwrap();
        assert_eq!(value, vec!["a".to_string(), "b".to_string()]);
    }
}
