// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Mock backend for tests and offline use
//!
//! Clones share call counters, so a test can keep one handle and give
//! another to the gateway.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use super::AdviceBackend;
use super::prompts::description_from_category_prompt;
use crate::categories::FALLBACK_CATEGORY;
use crate::error::{Error, Result};

const CANNED_ADVICE: &str = r#"{
  "summary": "Thu nhập đang vượt chi tiêu, tình hình tài chính ổn định.",
  "tips": [
    "Đặt hạn mức cho nhóm Ăn uống mỗi tháng.",
    "Chuyển một phần thu nhập vào tiết kiệm ngay khi nhận lương.",
    "Xem lại các khoản chi nhỏ lặp lại hằng ngày."
  ],
  "sentiment": "neutral"
}"#;

#[derive(Clone, Default)]
pub struct MockBackend {
    advice_json: Option<String>,
    category_reply: Option<String>,
    fail: bool,
    delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
    last_prompt: Arc<Mutex<Option<String>>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose every call errors.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_advice_json(mut self, json: &str) -> Self {
        self.advice_json = Some(json.to_string());
        self
    }

    pub fn with_category_reply(mut self, reply: &str) -> Self {
        self.category_reply = Some(reply.to_string());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().ok().and_then(|p| p.clone())
    }

    async fn record(&self, prompt: &str) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_prompt.lock() {
            *last = Some(prompt.to_string());
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            return Err(Error::Advice("mock backend configured to fail".into()));
        }
        Ok(())
    }
}

/// Keyword guess used when no reply is configured.
fn guess_category(description: &str) -> &'static str {
    let d = description.to_lowercase();
    let rules: [(&[&str], &'static str); 6] = [
        (&["xăng", "grab", "taxi", "xe buýt", "gửi xe"], "Di chuyển"),
        (&["cà phê", "phở", "cơm", "bún", "trà sữa"], "Ăn uống"),
        (&["tiền điện", "tiền nước", "internet", "điện thoại"], "Hóa đơn & Tiện ích"),
        (&["thuê nhà", "sửa nhà"], "Nhà cửa"),
        (&["lương"], "Lương"),
        (&["thưởng"], "Thưởng"),
    ];
    rules
        .iter()
        .find(|(words, _)| words.iter().any(|w| d.contains(w)))
        .map(|(_, cat)| *cat)
        .unwrap_or(FALLBACK_CATEGORY)
}

#[async_trait]
impl AdviceBackend for MockBackend {
    async fn generate_json(&self, prompt: &str, _schema: &serde_json::Value) -> Result<String> {
        self.record(prompt).await?;
        Ok(self
            .advice_json
            .clone()
            .unwrap_or_else(|| CANNED_ADVICE.to_string()))
    }

    async fn generate_text(&self, prompt: &str) -> Result<String> {
        self.record(prompt).await?;
        if let Some(reply) = &self.category_reply {
            return Ok(reply.clone());
        }
        let description = description_from_category_prompt(prompt).unwrap_or_default();
        Ok(guess_category(description).to_string())
    }

    fn model(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advice::prompts::category_prompt;

    #[tokio::test]
    async fn guesses_from_description_only() {
        let mock = MockBackend::new();
        let reply = mock
            .generate_text(&category_prompt("Đổ xăng xe máy"))
            .await
            .unwrap();
        assert_eq!(reply, "Di chuyển");
        // the category list inside the prompt must not drive the guess
        let reply = mock.generate_text(&category_prompt("quà sinh nhật")).await.unwrap();
        assert_eq!(reply, "Khác");
        assert_eq!(mock.calls(), 2);
    }

    #[tokio::test]
    async fn failing_mock_errors() {
        let mock = MockBackend::failing();
        assert!(mock.generate_text("x").await.is_err());
        assert_eq!(mock.calls(), 1);
    }
}
