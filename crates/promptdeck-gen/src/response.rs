//! Response validation and normalization
//!
//! Model output is untrusted: JSON arrives wrapped in code fences, fields
//! go missing, and image responses sometimes carry no image at all. Text
//! paths recover into safe fallbacks; only the image path surfaces an
//! error, because there is no sane fallback for a missing image.

use crate::client::GenerateContentResponse;
use promptdeck_core::{DeckError, DetailSuggestions, Result};
use serde::Deserialize;

/// Single-element diagnostic returned when prompt output cannot be read
pub const GENERATION_FALLBACK: &str =
    "The model response could not be read as prompt variants. Please try again.";

/// Strip one leading/trailing Markdown code fence, tolerating absence
pub fn strip_code_fence(text: &str) -> &str {
    let mut t = text.trim();
    if let Some(rest) = t.strip_prefix("```json") {
        t = rest;
    } else if let Some(rest) = t.strip_prefix("```") {
        t = rest;
    }
    if let Some(rest) = t.trim_end().strip_suffix("```") {
        t = rest;
    }
    t.trim()
}

#[derive(Deserialize)]
struct MultiPromptPayload {
    #[serde(default)]
    prompts: Vec<String>,
}

/// Parse a prompt-generation response body. Never fails: malformed or
/// empty output collapses into the single-element diagnostic fallback.
pub fn parse_prompts(text: &str) -> Vec<String> {
    match serde_json::from_str::<MultiPromptPayload>(strip_code_fence(text)) {
        Ok(payload) if !payload.prompts.is_empty() => payload.prompts,
        _ => vec![GENERATION_FALLBACK.to_string()],
    }
}

/// Parse a suggest/analyze response body. Malformed output yields the
/// empty suggestion set.
pub fn parse_details(text: &str) -> DetailSuggestions {
    serde_json::from_str(strip_code_fence(text)).unwrap_or_default()
}

/// Find the first inline image payload and re-encode it as a data URI
pub fn extract_image_data_uri(response: &GenerateContentResponse) -> Result<String> {
    response
        .parts()
        .iter()
        .find_map(|part| part.inline_data.as_ref())
        .map(|data| format!("data:{};base64,{}", data.mime_type, data.data))
        .ok_or(DeckError::NoImageData)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fence_stripping_variants() {
        let bare = r#"{"prompts": ["a"]}"#;
        let fenced = format!("```json\n{}\n```", bare);
        let plain_fence = format!("```\n{}\n```", bare);
        assert_eq!(strip_code_fence(bare), bare);
        assert_eq!(strip_code_fence(&fenced), bare);
        assert_eq!(strip_code_fence(&plain_fence), bare);
        // Same underlying JSON parses identically with and without fences
        assert_eq!(parse_prompts(bare), parse_prompts(&fenced));
    }

    #[test]
    fn test_parse_prompts_ok() {
        let prompts = parse_prompts(r#"{"prompts": ["first", "second", "third"]}"#);
        assert_eq!(prompts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_parse_prompts_fallback_on_garbage() {
        assert_eq!(parse_prompts("not json at all"), vec![GENERATION_FALLBACK]);
        assert_eq!(parse_prompts(""), vec![GENERATION_FALLBACK]);
        // Missing field and empty list both fall back
        assert_eq!(parse_prompts("{}"), vec![GENERATION_FALLBACK]);
        assert_eq!(parse_prompts(r#"{"prompts": []}"#), vec![GENERATION_FALLBACK]);
    }

    #[test]
    fn test_parse_details_ok_and_partial() {
        let details = parse_details(r#"{"style": "retro", "mood": "warm"}"#);
        assert_eq!(details.style.as_deref(), Some("retro"));
        assert_eq!(details.mood.as_deref(), Some("warm"));
        assert!(details.colors.is_none());
    }

    #[test]
    fn test_parse_details_empty_on_garbage() {
        assert_eq!(parse_details("```oops"), DetailSuggestions::default());
    }

    #[test]
    fn test_extract_image_data_uri() {
        let json = r#"{
            "candidates": [{
                "content": {"parts": [
                    {"text": "here is your image"},
                    {"inlineData": {"mimeType": "image/png", "data": "iVBORw0KGgo="}}
                ]}
            }]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        let uri = extract_image_data_uri(&response).unwrap();
        assert_eq!(uri, "data:image/png;base64,iVBORw0KGgo=");
    }

    #[test]
    fn test_extract_image_missing_is_error() {
        let json = r#"{"candidates": [{"content": {"parts": [{"text": "sorry"}]}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(
            extract_image_data_uri(&response),
            Err(DeckError::NoImageData)
        ));
    }
}
