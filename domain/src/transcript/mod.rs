//! The tagged transcript — structured in memory, tag-prefixed text at the edge.
//!
//! Lines have the form `"<tag>: <content>"`. The text shape is a fragile ad
//! hoc protocol shared with downstream tooling, so rendering and parsing
//! reproduce it exactly; everything inside the engine works on
//! [`TranscriptEntry`](entry::TranscriptEntry) records instead.

pub mod entry;
pub mod thoughtbubble;

pub use entry::{TranscriptEntry, USER_TAG};
pub use thoughtbubble::Thoughtbubble;

/// Parse a transcript into structured entries, skipping unmatched lines.
pub fn parse(transcript: &str) -> Vec<TranscriptEntry> {
    transcript.lines().filter_map(TranscriptEntry::parse).collect()
}

/// Collect the contents of every line carrying the given tag, in order.
///
/// Contents are trimmed of surrounding whitespace; the tag match is exact.
pub fn tagged_contents(transcript: &str, tag: &str) -> Vec<String> {
    transcript
        .lines()
        .filter_map(TranscriptEntry::parse)
        .filter(|entry| entry.tag == tag)
        .map(|entry| entry.text.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_blank_and_unmatched_lines() {
        let transcript = "user: hi\n\nAngel: be honest\nnot a tagged line\n";
        let entries = parse(transcript);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].tag, "user");
        assert_eq!(entries[1].tag, "Angel");
    }

    #[test]
    fn test_tagged_contents_filters_and_trims() {
        let transcript = "Angel: tell the truth \nDevil: lie\nAngel: honesty pays\n";
        assert_eq!(
            tagged_contents(transcript, "Angel"),
            vec!["tell the truth", "honesty pays"]
        );
        assert_eq!(tagged_contents(transcript, "Devil"), vec!["lie"]);
        assert!(tagged_contents(transcript, "angel").is_empty());
    }
}
