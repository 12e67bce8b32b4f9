//! Target-language resolution
//!
//! Decides which supported language a response must be written in,
//! from the caller's explicit preference, an `Accept-Language` hint
//! and a script inspection of the topic text.

/// Supported output languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    En,
    Ja,
    Zh,
    Hi,
    Es,
    Fr,
    Ar,
    Bn,
    Pt,
    Ru,
    Ur,
    Id,
    De,
    Sw,
    Mr,
    Te,
    Tr,
    Ta,
    Vi,
    Ko,
}

pub const DEFAULT_LANG: Lang = Lang::En;

/// Fixed priority for header scanning; earlier codes win when a header
/// mentions several.
pub(crate) const HEADER_SCAN_ORDER: [Lang; 20] = [
    Lang::Ja,
    Lang::En,
    Lang::Zh,
    Lang::Hi,
    Lang::Es,
    Lang::Fr,
    Lang::Ar,
    Lang::Bn,
    Lang::Pt,
    Lang::Ru,
    Lang::Ur,
    Lang::Id,
    Lang::De,
    Lang::Sw,
    Lang::Mr,
    Lang::Te,
    Lang::Tr,
    Lang::Ta,
    Lang::Vi,
    Lang::Ko,
];

impl Lang {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ja => "ja",
            Lang::Zh => "zh",
            Lang::Hi => "hi",
            Lang::Es => "es",
            Lang::Fr => "fr",
            Lang::Ar => "ar",
            Lang::Bn => "bn",
            Lang::Pt => "pt",
            Lang::Ru => "ru",
            Lang::Ur => "ur",
            Lang::Id => "id",
            Lang::De => "de",
            Lang::Sw => "sw",
            Lang::Mr => "mr",
            Lang::Te => "te",
            Lang::Tr => "tr",
            Lang::Ta => "ta",
            Lang::Vi => "vi",
            Lang::Ko => "ko",
        }
    }

    /// Parse a bare supported code ("ja"). Region-qualified forms are
    /// handled by [`normalize_lang`].
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "en" => Some(Lang::En),
            "ja" => Some(Lang::Ja),
            "zh" => Some(Lang::Zh),
            "hi" => Some(Lang::Hi),
            "es" => Some(Lang::Es),
            "fr" => Some(Lang::Fr),
            "ar" => Some(Lang::Ar),
            "bn" => Some(Lang::Bn),
            "pt" => Some(Lang::Pt),
            "ru" => Some(Lang::Ru),
            "ur" => Some(Lang::Ur),
            "id" => Some(Lang::Id),
            "de" => Some(Lang::De),
            "sw" => Some(Lang::Sw),
            "mr" => Some(Lang::Mr),
            "te" => Some(Lang::Te),
            "tr" => Some(Lang::Tr),
            "ta" => Some(Lang::Ta),
            "vi" => Some(Lang::Vi),
            "ko" => Some(Lang::Ko),
            _ => None,
        }
    }

    /// English name, used when the generic prompt must spell out the
    /// output language.
    pub fn english_name(&self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Ja => "Japanese",
            Lang::Zh => "Chinese",
            Lang::Hi => "Hindi",
            Lang::Es => "Spanish",
            Lang::Fr => "French",
            Lang::Ar => "Arabic",
            Lang::Bn => "Bengali",
            Lang::Pt => "Portuguese",
            Lang::Ru => "Russian",
            Lang::Ur => "Urdu",
            Lang::Id => "Indonesian",
            Lang::De => "German",
            Lang::Sw => "Swahili",
            Lang::Mr => "Marathi",
            Lang::Te => "Telugu",
            Lang::Tr => "Turkish",
            Lang::Ta => "Tamil",
            Lang::Vi => "Vietnamese",
            Lang::Ko => "Korean",
        }
    }
}

/// Normalize a client-supplied language tag to a supported code.
///
/// Accepts: "ja", "JA", "en-US", "pt_BR", etc. Returns `None` for the
/// "auto" sentinel and for anything outside the supported set.
pub fn normalize_lang(tag: &str) -> Option<Lang> {
    let tag = tag.trim().to_lowercase().replace('_', "-");
    let base = tag.split('-').next().unwrap_or("");
    Lang::from_code(base).or_else(|| Lang::from_code(&tag))
}

/// True when the tag requests automatic language selection.
pub fn is_auto(tag: &str) -> bool {
    tag.trim().eq_ignore_ascii_case("auto")
}

/// True when the text contains Japanese script: kana, CJK ideographs
/// or halfwidth katakana.
pub fn contains_japanese_script(text: &str) -> bool {
    text.chars().any(|c| {
        matches!(c,
            '\u{3040}'..='\u{30FF}' | '\u{4E00}'..='\u{9FFF}' | '\u{FF66}'..='\u{FF9D}')
    })
}

/// Scan an `Accept-Language` value for the first supported code, in
/// [`HEADER_SCAN_ORDER`]. Substring matching on the lowercased header,
/// so "ja-JP,ja;q=0.9" and "ja" both hit.
pub fn scan_accept_language(header: Option<&str>) -> Option<Lang> {
    let value = header?.trim().to_lowercase();
    if value.is_empty() {
        return None;
    }
    HEADER_SCAN_ORDER.iter().copied().find(|lang| value.contains(lang.as_str()))
}

/// Resolve the target language for one request.
///
/// An explicit supported preference wins regardless of topic content.
/// The header hint applies only in "auto" mode (or when no preference
/// was sent at all). A topic containing Japanese script resolves to
/// `ja`; everything else defaults to English. Unknown preferences are
/// not an error; they fall through to the script heuristic.
pub fn resolve_language(
    topic: &str,
    lang_param: Option<&str>,
    accept_language: Option<&str>,
) -> Lang {
    let raw = lang_param.unwrap_or("auto");

    if let Some(lang) = normalize_lang(raw) {
        return lang;
    }

    if is_auto(raw)
        && let Some(hint) = scan_accept_language(accept_language)
    {
        return hint;
    }

    if contains_japanese_script(topic) {
        return Lang::Ja;
    }

    DEFAULT_LANG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lang() {
        assert_eq!(normalize_lang("ja"), Some(Lang::Ja));
        assert_eq!(normalize_lang("JA"), Some(Lang::Ja));
        assert_eq!(normalize_lang("en-US"), Some(Lang::En));
        assert_eq!(normalize_lang("en_US"), Some(Lang::En));
        assert_eq!(normalize_lang("pt_BR"), Some(Lang::Pt));
        assert_eq!(normalize_lang("zh-Hans-CN"), Some(Lang::Zh));
        assert_eq!(normalize_lang("auto"), None);
        assert_eq!(normalize_lang("xx"), None);
        assert_eq!(normalize_lang(""), None);
    }

    #[test]
    fn test_explicit_preference_wins_over_topic_script() {
        assert_eq!(resolve_language("筋トレ", Some("fr"), None), Lang::Fr);
        assert_eq!(resolve_language("workout", Some("ko-KR"), Some("ja")), Lang::Ko);
    }

    #[test]
    fn test_header_hint_only_in_auto_mode() {
        assert_eq!(resolve_language("topic", Some("auto"), Some("fr-CA,fr;q=0.9")), Lang::Fr);
        assert_eq!(resolve_language("topic", None, Some("de-DE")), Lang::De);
        // Unknown preference skips the header and falls to heuristics
        assert_eq!(resolve_language("topic", Some("xx"), Some("fr")), Lang::En);
    }

    #[test]
    fn test_header_scan_priority() {
        // ja is scanned before en, so it wins even listed second
        assert_eq!(scan_accept_language(Some("en-US,ja;q=0.8")), Some(Lang::Ja));
        assert_eq!(scan_accept_language(Some("")), None);
        assert_eq!(scan_accept_language(None), None);
    }

    #[test]
    fn test_japanese_script_detection() {
        assert!(contains_japanese_script("筋トレ"));
        assert!(contains_japanese_script("ひらがな"));
        assert!(contains_japanese_script("ｶﾀｶﾅ"));
        assert!(!contains_japanese_script("workout"));
        assert!(!contains_japanese_script(""));
    }

    #[test]
    fn test_all_supported_codes_resolve_with_region_suffix() {
        for lang in HEADER_SCAN_ORDER {
            let tag = format!("{}-XX", lang.as_str());
            assert_eq!(resolve_language("筋トレ", Some(&tag), None), lang);
        }
    }

    #[test]
    fn test_auto_resolution_falls_back() {
        assert_eq!(resolve_language("筋トレ", Some("auto"), Some("")), Lang::Ja);
        assert_eq!(resolve_language("", Some("auto"), Some("")), Lang::En);
        assert_eq!(resolve_language("", None, None), Lang::En);
    }
}
