use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Preferred length of the reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    Short,
    Medium,
    Long,
}

impl Length {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-supplied annotations for a single request.
///
/// Unset fields are left out of the prompt entirely; no defaults are
/// substituted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub intent: Option<String>,
    pub style: Option<String>,
    pub length: Option<Length>,
}

impl Options {
    /// Builds options from raw front-door values, treating blank strings as unset.
    pub fn new(intent: Option<String>, style: Option<String>, length: Option<Length>) -> Self {
        Self {
            intent: non_blank(intent),
            style: non_blank(style),
            length,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Style values offered to users. Any other free-form style is accepted too.
pub const SUGGESTED_STYLES: &[(&str, &str)] = &[
    ("formal", "Polite, business-appropriate wording"),
    ("casual", "Relaxed, conversational tone"),
    ("professional", "Clear and workplace-ready"),
    ("friendly", "Warm and approachable"),
    ("technical", "Precise, uses domain terminology"),
    ("simple", "Plain language, short sentences"),
    ("detailed", "Thorough, covers the specifics"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values_become_none() {
        let options = Options::new(Some("   ".to_string()), Some(String::new()), None);
        assert_eq!(options, Options::default());
    }

    #[test]
    fn test_values_are_trimmed() {
        let options = Options::new(Some("  decline politely ".to_string()), None, None);
        assert_eq!(options.intent.as_deref(), Some("decline politely"));
    }

    #[test]
    fn test_length_display() {
        assert_eq!(Length::Short.to_string(), "short");
        assert_eq!(Length::Medium.to_string(), "medium");
        assert_eq!(Length::Long.to_string(), "long");
    }

    #[test]
    fn test_suggested_styles_are_unique() {
        let mut keys: Vec<_> = SUGGESTED_STYLES.iter().map(|(key, _)| *key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), SUGGESTED_STYLES.len());
    }
}
