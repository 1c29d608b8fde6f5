// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! JSON extraction for advice replies
//!
//! Models sometimes wrap the JSON object in prose or code fences, so the
//! outermost `{ ... }` span is parsed rather than the whole reply.

use crate::error::{Error, Result};
use crate::models::AdviceResult;

const RAW_PREVIEW: usize = 200;

fn preview(s: &str) -> String {
    match s.char_indices().nth(RAW_PREVIEW) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

pub fn extract_json_object(response: &str) -> Result<&str> {
    let response = response.trim();
    match (response.find('{'), response.rfind('}')) {
        (Some(s), Some(e)) if s < e => Ok(&response[s..=e]),
        _ => Err(Error::InvalidData(format!(
            "No JSON found in advice response | Raw: {}",
            preview(response)
        ))),
    }
}

pub fn parse_advice(response: &str) -> Result<AdviceResult> {
    if response.trim().is_empty() {
        return Err(Error::Advice("empty response from advice service".into()));
    }
    let json_str = extract_json_object(response)?;
    let advice: AdviceResult = serde_json::from_str(json_str).map_err(|e| {
        Error::InvalidData(format!(
            "Invalid advice JSON: {} | Raw: {}",
            e,
            preview(json_str)
        ))
    })?;
    if advice.summary.trim().is_empty() {
        return Err(Error::InvalidData("advice summary is empty".into()));
    }
    Ok(advice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sentiment;

    #[test]
    fn parses_fenced_json() {
        let raw = "```json\n{\"summary\":\"Tốt\",\"tips\":[\"x\"],\"sentiment\":\"negative\"}\n```";
        let advice = parse_advice(raw).unwrap();
        assert_eq!(advice.summary, "Tốt");
        assert_eq!(advice.sentiment, Sentiment::Negative);
    }

    #[test]
    fn rejects_unknown_sentiment() {
        let raw = r#"{"summary":"Tốt","tips":[],"sentiment":"ecstatic"}"#;
        let err = parse_advice(raw).unwrap_err();
        assert!(err.to_string().contains("Invalid advice JSON"));
    }

    #[test]
    fn rejects_empty_and_missing_json() {
        assert!(parse_advice("   ").is_err());
        assert!(parse_advice("no braces here").is_err());
        assert!(parse_advice(r#"{"summary":"  ","tips":[],"sentiment":"neutral"}"#).is_err());
    }

    #[test]
    fn preview_respects_char_boundaries() {
        let long = "đ".repeat(500);
        let p = preview(&long);
        assert!(p.ends_with("..."));
        assert_eq!(p.chars().count(), RAW_PREVIEW + 3);
    }
}
