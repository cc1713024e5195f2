//! Conversation detection and last-message extraction.
//!
//! Both functions are best-effort heuristics over line shapes. They are
//! not a chat-log parser and will misjudge unusually formatted text.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Line prefixes that suggest a chat transcript.
#[allow(clippy::unwrap_used)]
static SIGNAL_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    // unwrap is safe: patterns are compile-time constants
    [
        // "Name: message"
        Regex::new(r"^[A-Z][^:]+:\s").unwrap(),
        // "> quoted reply"
        Regex::new(r"^>\s").unwrap(),
        // "[12:01] ..." or "[alice] ..."
        Regex::new(r"^\[.*?\]\s").unwrap(),
        // "9:41 ..." or "09:41 ..."
        Regex::new(r"^\d{1,2}:\d{2}").unwrap(),
    ]
});

const QUOTE_PREFIX: char = '>';

/// Minimum length (in characters) of the line that starts the last message.
const MIN_MESSAGE_CHARS: usize = 10;

/// Thresholds for the conversation heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversationRules {
    /// Number of leading lines inspected for conversation signals.
    pub scan_lines: usize,
    /// Number of signal lines required to call the text a conversation.
    pub min_matches: usize,
}

impl Default for ConversationRules {
    fn default() -> Self {
        Self {
            scan_lines: 5,
            min_matches: 2,
        }
    }
}

fn is_signal_line(line: &str) -> bool {
    SIGNAL_PATTERNS.iter().any(|pattern| pattern.is_match(line))
}

/// Returns `true` if `text` looks like a chat transcript.
///
/// Text with fewer than two non-empty lines is never a conversation.
/// Otherwise the first `rules.scan_lines` lines are checked against the
/// signal patterns and at least `rules.min_matches` of them must match.
pub fn is_conversation(text: &str, rules: &ConversationRules) -> bool {
    let text = text.trim();

    if text.lines().filter(|line| !line.trim().is_empty()).count() < 2 {
        return false;
    }

    let matches = text
        .split('\n')
        .take(rules.scan_lines)
        .filter(|line| is_signal_line(line))
        .count();

    matches >= rules.min_matches
}

/// Returns the trailing message of a conversation.
///
/// Scans from the bottom for the first line that is non-empty, not a quote,
/// and longer than ten characters, then returns that line and everything
/// below it. Falls back to the whole text when no line qualifies.
pub fn extract_last_message(text: &str) -> String {
    let lines: Vec<&str> = text.trim().split('\n').collect();

    let start = lines.iter().rposition(|line| {
        let line = line.trim();
        !line.is_empty()
            && !line.starts_with(QUOTE_PREFIX)
            && line.chars().count() > MIN_MESSAGE_CHARS
    });

    start.map_or_else(|| text.to_string(), |index| lines[index..].join("\n"))
}
