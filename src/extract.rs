//! Field extraction from Azure Analyze responses.
//!
//! The v3.2 Analyze operation returns a JSON object whose shape depends on
//! the requested visual features:
//!
//! - `visualFeatures=Description` yields `description.captions`, an array of
//!   `{text, confidence}` candidates ordered by confidence
//! - `visualFeatures=Tags` yields `tags`, an array of `{name, confidence}`
//!   entries in API order
//!
//! Both fields are optional; extraction never fails, it degrades to `None`
//! or an empty list.

use serde::Deserialize;

/// A single tag entry from the `tags` array.
#[derive(Debug, Clone, Deserialize)]
pub struct TagEntry {
    /// Tag name (e.g., "cat", "indoor")
    pub name: String,
    /// Detection confidence in `[0, 1]`, when the API reports one
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// Extract the top caption text from a Description response.
///
/// Walks `description.captions[0].text`. Returns `None` when any segment of
/// the path is missing or has the wrong shape (no `description`, empty
/// `captions` array, non-string `text`).
pub fn extract_caption(response: &serde_json::Value) -> Option<String> {
    response
        .get("description")
        .and_then(|d| d.get("captions"))
        .and_then(|c| c.as_array())
        .and_then(|c| c.first())
        .and_then(|first| first.get("text"))
        .and_then(|t| t.as_str())
        .map(|t| t.to_string())
}

/// Extract tag names from a Tags response, preserving API order.
///
/// Returns an empty list when the `tags` field is absent or not an array.
/// Entries without a string `name` are skipped. When `min_confidence` is
/// set, entries scored below it are dropped; entries with no reported
/// confidence are kept.
pub fn extract_tags(response: &serde_json::Value, min_confidence: Option<f64>) -> Vec<String> {
    let entries = match response.get("tags").and_then(|t| t.as_array()) {
        Some(entries) => entries,
        None => return Vec::new(),
    };

    entries
        .iter()
        .filter_map(|v| serde_json::from_value::<TagEntry>(v.clone()).ok())
        .filter(|entry| match (min_confidence, entry.confidence) {
            (Some(min), Some(score)) => score >= min,
            _ => true,
        })
        .map(|entry| entry.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ── Caption extraction ──

    #[test]
    fn caption_from_full_response() {
        let response = json!({
            "description": {
                "tags": ["cat", "chair"],
                "captions": [
                    {"text": "a cat on a chair", "confidence": 0.92},
                    {"text": "a cat sitting", "confidence": 0.71}
                ]
            },
            "requestId": "abc",
        });
        assert_eq!(
            extract_caption(&response),
            Some("a cat on a chair".to_string())
        );
    }

    #[test]
    fn caption_missing_description() {
        let response = json!({"requestId": "abc"});
        assert_eq!(extract_caption(&response), None);
    }

    #[test]
    fn caption_missing_captions() {
        let response = json!({"description": {"tags": ["cat"]}});
        assert_eq!(extract_caption(&response), None);
    }

    #[test]
    fn caption_empty_captions_array() {
        let response = json!({"description": {"captions": []}});
        assert_eq!(extract_caption(&response), None);
    }

    #[test]
    fn caption_non_string_text() {
        let response = json!({"description": {"captions": [{"text": 42}]}});
        assert_eq!(extract_caption(&response), None);
    }

    #[test]
    fn caption_captions_not_an_array() {
        let response = json!({"description": {"captions": "oops"}});
        assert_eq!(extract_caption(&response), None);
    }

    // ── Tag extraction ──

    #[test]
    fn tags_preserve_api_order() {
        let response = json!({
            "tags": [
                {"name": "cat", "confidence": 0.99},
                {"name": "chair", "confidence": 0.87},
                {"name": "indoor", "confidence": 0.52}
            ]
        });
        assert_eq!(
            extract_tags(&response, None),
            vec!["cat", "chair", "indoor"]
        );
    }

    #[test]
    fn tags_missing_field_is_empty() {
        let response = json!({"requestId": "abc"});
        assert!(extract_tags(&response, None).is_empty());
    }

    #[test]
    fn tags_not_an_array_is_empty() {
        let response = json!({"tags": {"name": "cat"}});
        assert!(extract_tags(&response, None).is_empty());
    }

    #[test]
    fn tags_skip_entries_without_name() {
        let response = json!({
            "tags": [
                {"name": "cat", "confidence": 0.9},
                {"confidence": 0.8},
                {"name": "chair"}
            ]
        });
        assert_eq!(extract_tags(&response, None), vec!["cat", "chair"]);
    }

    #[test]
    fn tags_confidence_threshold() {
        let response = json!({
            "tags": [
                {"name": "cat", "confidence": 0.99},
                {"name": "blur", "confidence": 0.30},
                {"name": "chair"}
            ]
        });
        // Unscored entries survive the threshold
        assert_eq!(
            extract_tags(&response, Some(0.5)),
            vec!["cat", "chair"]
        );
    }

    #[test]
    fn tags_empty_array_is_empty() {
        let response = json!({"tags": []});
        assert!(extract_tags(&response, None).is_empty());
    }
}
