//! Shared types for the generation service.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One reframing: a short label plus its explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    pub desc: String,
}

/// Provenance of a response payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReframeSource {
    #[serde(rename = "generated")]
    Generated,
    #[serde(rename = "fallback: backend not configured")]
    FallbackNotConfigured,
    #[serde(rename = "fallback: backend failed")]
    FallbackBackendFailed,
}

/// Fixed-shape response payload: always exactly three items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReframeResponse {
    pub items: Vec<Item>,
    pub source: ReframeSource,
}

/// Chat message in the completion wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system".to_string(), content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".to_string(), content: content.into() }
    }
}

/// Generation-path errors. None of these surface to HTTP callers; the
/// service absorbs every variant into a fallback payload.
#[derive(Error, Debug)]
pub enum LLMError {
    #[error("No backend credential configured")]
    NotConfigured,

    #[error("Backend call timed out after {0}s")]
    Timeout(u64),

    #[error("Backend API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Backend request failed: {0}")]
    Network(String),

    #[error("Extraction failed: {0}")]
    Extraction(String),

    #[error("Backend output contained no usable items")]
    EmptyResult,
}

impl LLMError {
    /// Configuration-absence is reported with its own provenance tag;
    /// everything else counts as a backend failure.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::NotConfigured)
    }
}
