//! Request orchestration
//!
//! Resolve language → build prompt → call backend → extract; the
//! fallback catalog covers every failure along the way. From the
//! caller's point of view this service cannot fail: every path yields
//! exactly three items plus a provenance tag.

use std::sync::Arc;

use super::client::{CompletionBackend, OpenAiBackend};
use super::extract::{MAX_ITEMS, extract_items};
use super::fallback::fallback_items;
use super::language::{Lang, resolve_language};
use super::models::{Item, LLMError, ReframeResponse, ReframeSource};
use super::prompts::build_messages;
use crate::config::LlmConfig;

pub struct ReframeService {
    backend: Option<Arc<dyn CompletionBackend>>,
}

impl ReframeService {
    /// Build from process configuration. An empty credential selects
    /// fallback-only mode.
    pub fn from_config(config: &LlmConfig) -> Self {
        if config.api_key.trim().is_empty() {
            return Self { backend: None };
        }
        Self { backend: Some(Arc::new(OpenAiBackend::new(config))) }
    }

    /// Construct with an explicit backend (or none). Used by tests to
    /// inject a scripted fake.
    pub fn with_backend(backend: Option<Arc<dyn CompletionBackend>>) -> Self {
        Self { backend }
    }

    /// Handle one request.
    ///
    /// Generation-path errors are absorbed: they are logged and
    /// answered from the fallback catalog, never propagated. The
    /// provenance tag records which path produced the payload.
    pub async fn generate(
        &self,
        topic: &str,
        lang_param: Option<&str>,
        accept_language: Option<&str>,
    ) -> ReframeResponse {
        let lang = resolve_language(topic, lang_param, accept_language);

        let result = match &self.backend {
            Some(backend) => Self::generate_live(backend.as_ref(), lang, topic).await,
            None => Err(LLMError::NotConfigured),
        };

        match result {
            Ok(items) => ReframeResponse { items, source: ReframeSource::Generated },
            Err(e) => {
                tracing::warn!(
                    lang = lang.as_str(),
                    error = %e,
                    "Generation failed, serving fallback"
                );
                let source = if e.is_configuration() {
                    ReframeSource::FallbackNotConfigured
                } else {
                    ReframeSource::FallbackBackendFailed
                };
                ReframeResponse { items: fallback_items(lang, topic), source }
            },
        }
    }

    async fn generate_live(
        backend: &dyn CompletionBackend,
        lang: Lang,
        topic: &str,
    ) -> Result<Vec<Item>, LLMError> {
        let messages = build_messages(lang, topic);
        let raw = backend.complete(&messages).await?;
        let items = extract_items(&raw)?;

        // The payload contract is exactly three items; an under-filled
        // list counts as a failed generation, not a smaller answer.
        if items.len() < MAX_ITEMS {
            return Err(LLMError::Extraction(format!(
                "recovered only {} of {} items",
                items.len(),
                MAX_ITEMS
            )));
        }

        Ok(items)
    }
}
