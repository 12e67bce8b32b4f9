//! Generation Service Unit Tests
//!
//! Covers extraction recovery, the fallback catalog, prompt
//! construction and every orchestration path.

use std::sync::Arc;

use async_trait::async_trait;

use super::client::CompletionBackend;
use super::extract::extract_items;
use super::fallback::fallback_items;
use super::language::{HEADER_SCAN_ORDER, Lang};
use super::models::{ChatMessage, Item, LLMError, ReframeSource};
use super::prompts::build_messages;
use super::service::ReframeService;

/// Backend fake: replies with a fixed text, or fails when no reply is
/// scripted.
struct ScriptedBackend {
    reply: Option<String>,
}

#[async_trait]
impl CompletionBackend for ScriptedBackend {
    async fn complete(&self, _messages: &[ChatMessage]) -> Result<String, LLMError> {
        match &self.reply {
            Some(text) => Ok(text.clone()),
            None => Err(LLMError::Api { status: 500, message: "scripted failure".to_string() }),
        }
    }
}

fn service_replying(reply: &str) -> ReframeService {
    ReframeService::with_backend(Some(Arc::new(ScriptedBackend { reply: Some(reply.to_string()) })))
}

fn service_failing() -> ReframeService {
    ReframeService::with_backend(Some(Arc::new(ScriptedBackend { reply: None })))
}

const VALID_ARRAY: &str =
    r#"[{"title":"A","desc":"B"},{"title":"C","desc":"D"},{"title":"E","desc":"F"}]"#;

// ============================================================================
// Extraction Tests
// ============================================================================

mod extract_tests {
    use super::*;

    #[test]
    fn test_valid_array_round_trips() {
        let items = extract_items(VALID_ARRAY).expect("extraction succeeds");
        assert_eq!(
            items,
            vec![
                Item { title: "A".to_string(), desc: "B".to_string() },
                Item { title: "C".to_string(), desc: "D".to_string() },
                Item { title: "E".to_string(), desc: "F".to_string() },
            ]
        );
    }

    #[test]
    fn test_prose_wrapped_array_recovers() {
        let raw = format!("Here you go:\n{VALID_ARRAY}");
        let items = extract_items(&raw).expect("extraction succeeds");
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].title, "A");
    }

    #[test]
    fn test_markdown_fenced_array_recovers() {
        let raw = format!("```json\n{VALID_ARRAY}\n```");
        let items = extract_items(&raw).expect("extraction succeeds");
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_record_with_items_field_recovers() {
        let raw = format!(r#"{{"items": {VALID_ARRAY}}}"#);
        let items = extract_items(&raw).expect("extraction succeeds");
        assert_eq!(items.len(), 3);
        assert_eq!(items[2].desc, "F");
    }

    #[test]
    fn test_lone_record_is_wrapped() {
        let items =
            extract_items(r#"{"title":"Solo","desc":"One"}"#).expect("extraction succeeds");
        assert_eq!(items, vec![Item { title: "Solo".to_string(), desc: "One".to_string() }]);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let items = extract_items(r#"[{"title":"  A ","desc":" B  "}]"#).expect("succeeds");
        assert_eq!(items[0].title, "A");
        assert_eq!(items[0].desc, "B");
    }

    #[test]
    fn test_non_string_fields_coerce_to_empty() {
        let items = extract_items(r#"[{"title":42,"desc":null}]"#).expect("succeeds");
        assert_eq!(items[0].title, "");
        assert_eq!(items[0].desc, "");
    }

    #[test]
    fn test_truncates_to_three_items() {
        let raw = r#"[{"title":"1","desc":"a"},{"title":"2","desc":"b"},{"title":"3","desc":"c"},{"title":"4","desc":"d"},{"title":"5","desc":"e"}]"#;
        let items = extract_items(raw).expect("succeeds");
        assert_eq!(items.len(), 3);
        assert_eq!(items[2].title, "3");
    }

    #[test]
    fn test_plain_prose_fails() {
        let result = extract_items("Sorry, I cannot answer that in a structured way.");
        assert!(matches!(result, Err(LLMError::Extraction(_))));
    }

    #[test]
    fn test_empty_items_list_is_empty_result() {
        let result = extract_items(r#"{"items": []}"#);
        assert!(matches!(result, Err(LLMError::EmptyResult)));
    }
}

// ============================================================================
// Fallback Catalog Tests
// ============================================================================

mod fallback_tests {
    use super::*;

    #[test]
    fn test_topic_is_spliced_into_descriptions() {
        let items = fallback_items(Lang::En, "coffee");
        assert_eq!(items.len(), 3);
        for item in &items {
            assert!(item.desc.contains("coffee"), "missing topic in: {}", item.desc);
        }
        assert_eq!(items[0].title, "Reboot button for humans");
    }

    #[test]
    fn test_empty_topic_uses_placeholder_noun() {
        let en = fallback_items(Lang::En, "");
        assert!(en[0].desc.contains("— it is just playing that role."));

        let ja = fallback_items(Lang::Ja, "");
        assert!(ja[0].desc.contains("それ"));
    }

    #[test]
    fn test_idempotent() {
        let first = fallback_items(Lang::Fr, "le café");
        let second = fallback_items(Lang::Fr, "le café");
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_language_has_three_templates() {
        for lang in HEADER_SCAN_ORDER {
            let items = fallback_items(lang, "x");
            assert_eq!(items.len(), 3, "wrong arity for {}", lang.as_str());
            let spliced = items.iter().filter(|item| item.desc.contains('x')).count();
            assert_eq!(spliced, 3, "topic not spliced for {}", lang.as_str());
        }
    }
}

// ============================================================================
// Prompt Tests
// ============================================================================

mod prompt_tests {
    use super::*;

    #[test]
    fn test_japanese_gets_native_directive() {
        let messages = build_messages(Lang::Ja, "筋トレ");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert!(messages[0].content.contains("JSONのみ返す"));
        assert_eq!(messages[1].role, "user");
        assert!(messages[1].content.contains("筋トレ"));
    }

    #[test]
    fn test_other_languages_get_generic_directive_with_name() {
        let messages = build_messages(Lang::Fr, "le café");
        assert!(messages[0].content.starts_with("You are a concise copywriter."));
        assert!(messages[1].content.contains("Output language: French (STRICT)"));
        assert!(messages[1].content.contains("le café"));
    }

    #[test]
    fn test_deterministic() {
        let first = build_messages(Lang::Ko, "운동");
        let second = build_messages(Lang::Ko, "운동");
        assert_eq!(first[0].content, second[0].content);
        assert_eq!(first[1].content, second[1].content);
    }
}

// ============================================================================
// Orchestration Tests
// ============================================================================

mod service_tests {
    use super::*;

    #[tokio::test]
    async fn test_no_backend_serves_not_configured_fallback() {
        let service = ReframeService::with_backend(None);
        let response = service.generate("", Some("auto"), None).await;

        assert_eq!(response.source, ReframeSource::FallbackNotConfigured);
        assert_eq!(response.items.len(), 3);
        assert!(response.items[0].desc.contains("— it is just playing that role."));
    }

    #[tokio::test]
    async fn test_no_backend_japanese_topic_serves_ja_templates() {
        let service = ReframeService::with_backend(None);
        let response = service.generate("筋トレ", Some("auto"), Some("")).await;

        assert_eq!(response.source, ReframeSource::FallbackNotConfigured);
        assert_eq!(response.items[0].title, "人間用の再起動ボタン");
        assert!(response.items.iter().all(|item| item.desc.contains("筋トレ")));
    }

    #[tokio::test]
    async fn test_successful_generation_returns_extracted_items() {
        let service = service_replying(&format!("Here you go:\n{VALID_ARRAY}"));
        let response = service.generate("workout", Some("en"), None).await;

        assert_eq!(response.source, ReframeSource::Generated);
        assert_eq!(response.items.len(), 3);
        assert_eq!(response.items[0].title, "A");
        assert_eq!(response.items[2].desc, "F");
    }

    #[tokio::test]
    async fn test_backend_failure_serves_fallback() {
        let service = service_failing();
        let response = service.generate("workout", Some("en"), None).await;

        assert_eq!(response.source, ReframeSource::FallbackBackendFailed);
        assert_eq!(response.items.len(), 3);
        assert!(response.items[0].desc.contains("workout"));
    }

    #[tokio::test]
    async fn test_unextractable_output_serves_fallback() {
        let service = service_replying("I'd rather chat about this topic in free prose.");
        let response = service.generate("workout", Some("en"), None).await;

        assert_eq!(response.source, ReframeSource::FallbackBackendFailed);
        assert_eq!(response.items.len(), 3);
    }

    #[tokio::test]
    async fn test_under_filled_output_serves_fallback() {
        let service =
            service_replying(r#"[{"title":"A","desc":"B"},{"title":"C","desc":"D"}]"#);
        let response = service.generate("workout", Some("en"), None).await;

        assert_eq!(response.source, ReframeSource::FallbackBackendFailed);
        assert_eq!(response.items.len(), 3);
    }

    #[tokio::test]
    async fn test_every_path_returns_three_items() {
        let services = [
            ReframeService::with_backend(None),
            service_failing(),
            service_replying("no structure here"),
            service_replying(VALID_ARRAY),
        ];
        for service in &services {
            let response = service.generate("topic", Some("auto"), None).await;
            assert_eq!(response.items.len(), 3);
        }
    }
}
