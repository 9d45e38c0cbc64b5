//! A single tagged transcript entry.

use serde::{Deserialize, Serialize};

/// Tag marking user prompts in a transcript.
pub const USER_TAG: &str = "user";

/// One tagged entry of a transcript (Value Object)
///
/// Serialized as `"<tag>: <text>"`. The tag is a persona name, a composite
/// name, or [`USER_TAG`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub tag: String,
    pub text: String,
}

impl TranscriptEntry {
    pub fn new(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: text.into(),
        }
    }

    /// Entry for a user prompt.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(USER_TAG, text)
    }

    /// Whether this entry records a user prompt.
    pub fn is_user(&self) -> bool {
        self.tag == USER_TAG
    }

    /// Parse one transcript line.
    ///
    /// Splits on the first `": "` only, so colons inside the content
    /// survive. Returns `None` for lines without a tag prefix.
    pub fn parse(line: &str) -> Option<Self> {
        let (tag, text) = line.split_once(": ")?;
        Some(Self::new(tag, text))
    }
}

impl std::fmt::Display for TranscriptEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.tag, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_tag_colon_space_text() {
        let entry = TranscriptEntry::new("Angel", "tell the truth");
        assert_eq!(entry.to_string(), "Angel: tell the truth");
    }

    #[test]
    fn test_parse_splits_on_first_colon_space_only() {
        let entry = TranscriptEntry::parse("Devil: easy: just deny it").unwrap();
        assert_eq!(entry.tag, "Devil");
        assert_eq!(entry.text, "easy: just deny it");
    }

    #[test]
    fn test_parse_rejects_untagged_lines() {
        assert!(TranscriptEntry::parse("no tag here").is_none());
        assert!(TranscriptEntry::parse("").is_none());
    }

    #[test]
    fn test_line_roundtrip() {
        let entry = TranscriptEntry::user("Should I tell the truth?");
        let parsed = TranscriptEntry::parse(&entry.to_string()).unwrap();
        assert_eq!(parsed, entry);
        assert!(parsed.is_user());
    }
}
