// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Google Generative Language (`generateContent`) backend

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::AdviceBackend;
use crate::error::{Error, Result};
use crate::utils::http_client;

#[derive(Clone)]
pub struct GeminiBackend {
    client: Client,
    host: String,
    model: String,
    api_key: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        Some(text).filter(|t| !t.trim().is_empty())
    }
}

impl GeminiBackend {
    pub fn new(host: &str, model: &str, api_key: &str) -> Result<Self> {
        Ok(Self {
            client: http_client()?,
            host: host.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.host, self.model)
    }

    async fn generate(&self, req: &GenerateRequest<'_>) -> Result<String> {
        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(req)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Advice(format!("Gemini returned {}: {}", status, body)));
        }
        let parsed: GenerateResponse = resp.json().await?;
        let text = parsed
            .text()
            .ok_or_else(|| Error::Advice("Gemini response had no text".into()))?;
        debug!(model = %self.model, len = text.len(), "Gemini response received");
        Ok(text)
    }
}

#[async_trait]
impl AdviceBackend for GeminiBackend {
    async fn generate_json(&self, prompt: &str, schema: &serde_json::Value) -> Result<String> {
        let req = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
            }),
        };
        self.generate(&req).await
    }

    async fn generate_text(&self, prompt: &str) -> Result<String> {
        let req = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: None,
        };
        self.generate(&req).await
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn endpoint_trims_trailing_slash() {
        let b = GeminiBackend::new("https://example.test/", "gemini-2.5-flash", "k").unwrap();
        assert_eq!(b.host(), "https://example.test");
        assert_eq!(
            b.endpoint(),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn json_request_serialization() {
        let schema = json!({"type": "OBJECT"});
        let req = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: "hi" }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json",
                response_schema: &schema,
            }),
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["contents"][0]["parts"][0]["text"], "hi");
        assert_eq!(v["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(v["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn text_request_omits_generation_config() {
        let req = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: "hi" }],
            }],
            generation_config: None,
        };
        let v = serde_json::to_value(&req).unwrap();
        assert!(v.get("generationConfig").is_none());
    }

    #[test]
    fn response_text_joins_parts() {
        let resp: GenerateResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"parts": [{"text": "Ăn "}, {"text": "uống"}]}}]
        }))
        .unwrap();
        assert_eq!(resp.text().as_deref(), Some("Ăn uống"));

        let empty: GenerateResponse = serde_json::from_value(json!({"candidates": []})).unwrap();
        assert_eq!(empty.text(), None);
    }

    #[tokio::test]
    async fn unreachable_host_is_an_error() {
        let b = GeminiBackend::new("http://127.0.0.1:9", "m", "k").unwrap();
        assert!(b.generate_text("hi").await.is_err());
    }
}
