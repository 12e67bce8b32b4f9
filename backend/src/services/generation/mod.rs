//! Copy Generation Service Module
//!
//! Produces the three (title, desc) reframings for a topic. Generation
//! is LLM-backed when a credential is configured; a static per-language
//! catalog covers every failure path so callers always receive a
//! usable payload.
//!
//! # Architecture
//! ```text
//! ┌──────────────────┐
//! │  ReframeService  │  ← orchestration (language → prompt → call → extract)
//! └────────┬─────────┘
//!          │
//!     ┌────┴─────┐
//!     ▼          ▼
//! ┌────────┐ ┌──────────┐
//! │ OpenAI-│ │ Fallback │
//! │ compat.│ │ catalog  │
//! │ backend│ │ (static) │
//! └────────┘ └──────────┘
//! ```

mod client;
mod extract;
mod fallback;
mod language;
mod models;
mod prompts;
mod service;

// Re-exports for external use
pub use client::{CompletionBackend, OpenAiBackend};
pub use language::{Lang, resolve_language};
pub use models::*;
pub use service::ReframeService;

#[cfg(test)]
mod tests;
