//! Coarse script-based language detection.

use serde::Serialize;
use std::fmt;

/// Language tags the detector can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Chinese,
    Japanese,
    Korean,
    Russian,
}

impl Language {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Chinese => "chinese",
            Self::Japanese => "japanese",
            Self::Korean => "korean",
            Self::Russian => "russian",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const fn is_cjk_ideograph(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FAF}')
}

const fn is_kana(c: char) -> bool {
    // あ..ん and ア..ン
    matches!(c, '\u{3042}'..='\u{3093}' | '\u{30A2}'..='\u{30F3}')
}

const fn is_hangul_syllable(c: char) -> bool {
    matches!(c, '\u{AC00}'..='\u{D7A3}')
}

const fn is_cyrillic_letter(c: char) -> bool {
    matches!(c, 'а'..='я' | 'А'..='Я' | 'ё' | 'Ё')
}

/// Returns the language of `text` based on which script appears in it.
///
/// Rules are tried in order (Chinese, Japanese, Korean, Russian) and the
/// first script found anywhere in the text wins, so mixed-script text is
/// not classified by majority. Japanese text that contains kanji is
/// therefore reported as Chinese. Anything else is English.
pub fn detect_language(text: &str) -> Language {
    let rules: [(fn(char) -> bool, Language); 4] = [
        (is_cjk_ideograph, Language::Chinese),
        (is_kana, Language::Japanese),
        (is_hangul_syllable, Language::Korean),
        (is_cyrillic_letter, Language::Russian),
    ];

    rules
        .iter()
        .find(|(rule, _)| text.chars().any(rule))
        .map_or(Language::English, |(_, language)| *language)
}
