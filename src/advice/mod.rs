// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Boundary to the remote budgeting-advice service.
//!
//! `AdviceGateway` never returns an error to its caller: transport, status
//! and parse failures all collapse into fixed fallback payloads. Backends do
//! return errors; the gateway is where they stop.
//!
//! Backends:
//! - `GeminiBackend`: Google Generative Language REST API
//! - `MockBackend`: canned responses for tests
//! - `UnavailableBackend`: used when no API key is configured

mod gemini;
mod mock;
pub mod parsing;
pub mod prompts;
mod slot;

pub use gemini::GeminiBackend;
pub use mock::MockBackend;
pub use slot::{AdviceSlot, SlotEntry};

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::categories::FALLBACK_CATEGORY;
use crate::config::{AiBackendKind, Config};
use crate::error::{Error, Result};
use crate::models::{AdviceResult, Sentiment, Transaction};

/// Most transactions sent in one advice request.
pub const MAX_ADVICE_TRANSACTIONS: usize = 50;

#[async_trait]
pub trait AdviceBackend: Send + Sync {
    /// Ask for a JSON reply constrained by `schema`.
    async fn generate_json(&self, prompt: &str, schema: &serde_json::Value) -> Result<String>;

    /// Ask for a free-text reply.
    async fn generate_text(&self, prompt: &str) -> Result<String>;

    fn model(&self) -> &str;
}

/// Stands in when no backend is configured. Every call fails.
#[derive(Debug, Clone, Default)]
pub struct UnavailableBackend;

#[async_trait]
impl AdviceBackend for UnavailableBackend {
    async fn generate_json(&self, _prompt: &str, _schema: &serde_json::Value) -> Result<String> {
        Err(Error::Advice("no advice backend configured (set GEMINI_API_KEY)".into()))
    }

    async fn generate_text(&self, _prompt: &str) -> Result<String> {
        Err(Error::Advice("no advice backend configured (set GEMINI_API_KEY)".into()))
    }

    fn model(&self) -> &str {
        "none"
    }
}

pub fn backend_from_config(config: &Config) -> Result<Arc<dyn AdviceBackend>> {
    match config.ai_backend {
        AiBackendKind::Mock => Ok(Arc::new(MockBackend::new())),
        AiBackendKind::Gemini => match config.api_key.as_deref() {
            Some(key) => Ok(Arc::new(GeminiBackend::new(
                &config.ai_host,
                &config.model,
                key,
            )?)),
            None => {
                warn!("GEMINI_API_KEY not set, advice requests will use fallbacks");
                Ok(Arc::new(UnavailableBackend))
            }
        },
    }
}

/// The `n` most recent transactions, relying on newest-first store order.
pub fn recent_for_advice(snapshot: &[Transaction]) -> &[Transaction] {
    &snapshot[..snapshot.len().min(MAX_ADVICE_TRANSACTIONS)]
}

pub fn no_data_advice() -> AdviceResult {
    AdviceResult {
        summary: "Chưa có dữ liệu giao dịch để phân tích.".into(),
        tips: vec!["Hãy thêm giao dịch đầu tiên của bạn để nhận lời khuyên.".into()],
        sentiment: Sentiment::Neutral,
    }
}

pub fn unavailable_advice() -> AdviceResult {
    AdviceResult {
        summary: "Không thể kết nối với chuyên gia AI lúc này.".into(),
        tips: vec!["Vui lòng thử lại sau.".into()],
        sentiment: Sentiment::Neutral,
    }
}

#[derive(Clone)]
pub struct AdviceGateway {
    backend: Arc<dyn AdviceBackend>,
}

impl AdviceGateway {
    pub fn new(backend: Arc<dyn AdviceBackend>) -> Self {
        Self { backend }
    }

    pub fn model(&self) -> &str {
        self.backend.model()
    }

    /// Budget summary, tips and sentiment for the given transactions.
    /// Callers should pass at most `MAX_ADVICE_TRANSACTIONS` records.
    pub async fn request_advice(&self, transactions: &[Transaction]) -> AdviceResult {
        if transactions.is_empty() {
            return no_data_advice();
        }
        let prompt = prompts::advice_prompt(transactions);
        let outcome = match self
            .backend
            .generate_json(&prompt, &prompts::advice_schema())
            .await
        {
            Ok(text) => parsing::parse_advice(&text),
            Err(e) => Err(e),
        };
        match outcome {
            Ok(advice) => {
                debug!(model = self.model(), tips = advice.tips.len(), "advice received");
                advice
            }
            Err(e) => {
                warn!(error = %e, "advice request failed, using fallback");
                unavailable_advice()
            }
        }
    }

    /// A category label for a free-text description. Empty input yields an
    /// empty label; failures yield `FALLBACK_CATEGORY`. The label is not
    /// validated here.
    pub async fn request_category_suggestion(&self, description: &str) -> String {
        if description.trim().is_empty() {
            return String::new();
        }
        let prompt = prompts::category_prompt(description);
        match self.backend.generate_text(&prompt).await {
            Ok(text) => {
                let label = text.trim();
                if label.is_empty() {
                    FALLBACK_CATEGORY.to_string()
                } else {
                    label.to_string()
                }
            }
            Err(e) => {
                warn!(error = %e, "category suggestion failed, using fallback");
                FALLBACK_CATEGORY.to_string()
            }
        }
    }
}
