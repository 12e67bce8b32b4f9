//! Prompt construction for the generation backend
//!
//! Japanese carries a dedicated system directive written natively;
//! every other language shares the generic English directive and has
//! its output language spelled out in the user directive. Both
//! directives repeat the structural contract: exactly 3 items, each a
//! `{title, desc}` object, declarative written style, JSON only.

use super::language::Lang;
use super::models::ChatMessage;

const SYSTEM_JA: &str = "入力された言葉について、意外性と納得感と少しの風刺を含んだ言い換えを出力して。3件だけ出力。各件はJSONの {title, desc}。タイトルは6〜16字、説明は20〜50字とする。JSONのみ返す。";

const SYSTEM_GENERIC: &str = "You are a concise copywriter. Output must be in the requested language, written style, declarative tone. Return exactly 3 items as JSON objects {title, desc}. Titles are crisp (3–8 words). Descriptions are 25–120 words and end with a short clarifying tail. Return JSON only.";

fn user_directive_ja(topic: &str) -> String {
    format!(
        "トピック: {topic}\n\
         要件:\n\
         - 言語: 入力された言語\n\
         - 文体: 書き言葉・断定調（です/ますを避ける）\n\
         - 「{topic}」の性質を意外性と納得感があるラベリングで表現し、タイトルと説明を作る\n\
         - JSON配列のみを返す（余計な文字やマークダウンを含めない）"
    )
}

fn user_directive(lang: Lang, topic: &str) -> String {
    format!(
        "Topic: {topic}\n\
         Requirements:\n\
         - Output language: {language} (STRICT)\n\
         - Style: written, declarative\n\
         - Produce exactly 3 items as JSON array of objects {{title, desc}}\n\
         - Titles: short and punchy; Descriptions: compact but clear and end with a short clarifying tail\n\
         - Return JSON array only (no extra text, no markdown)",
        language = lang.english_name(),
    )
}

/// Build the system/user message pair for one generation call.
///
/// Pure function: no I/O, deterministic given its inputs.
pub fn build_messages(lang: Lang, topic: &str) -> Vec<ChatMessage> {
    match lang {
        Lang::Ja => vec![
            ChatMessage::system(SYSTEM_JA),
            ChatMessage::user(user_directive_ja(topic)),
        ],
        _ => vec![
            ChatMessage::system(SYSTEM_GENERIC),
            ChatMessage::user(user_directive(lang, topic)),
        ],
    }
}
