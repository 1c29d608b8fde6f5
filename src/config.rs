// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Runtime configuration from environment variables
//!
//! - `SMARTSPEND_DB`: database file path
//! - `GEMINI_API_KEY` (or `API_KEY`): enables the Gemini backend
//! - `SMARTSPEND_MODEL`: model name (default: gemini-2.5-flash)
//! - `SMARTSPEND_AI_BACKEND`: gemini | mock (default: gemini)
//! - `SMARTSPEND_AI_HOST`: API base URL

use std::path::PathBuf;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_AI_HOST: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiBackendKind {
    Gemini,
    Mock,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: Option<PathBuf>,
    pub api_key: Option<String>,
    pub model: String,
    pub ai_backend: AiBackendKind,
    pub ai_host: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |k: &str| lookup(k).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let ai_backend = match get("SMARTSPEND_AI_BACKEND").map(|b| b.to_lowercase()) {
            None => AiBackendKind::Gemini,
            Some(b) if b == "gemini" => AiBackendKind::Gemini,
            Some(b) if b == "mock" => AiBackendKind::Mock,
            Some(other) => {
                tracing::warn!(backend = %other, "Unknown SMARTSPEND_AI_BACKEND, using gemini");
                AiBackendKind::Gemini
            }
        };

        Self {
            db_path: get("SMARTSPEND_DB").map(PathBuf::from),
            api_key: get("GEMINI_API_KEY").or_else(|| get("API_KEY")),
            model: get("SMARTSPEND_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            ai_backend,
            ai_host: get("SMARTSPEND_AI_HOST").unwrap_or_else(|| DEFAULT_AI_HOST.to_string()),
        }
    }
}
