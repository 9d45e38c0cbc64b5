//! The thoughtbubble — ordered record of everything a chorus exchanged.

use crate::transcript::entry::TranscriptEntry;
use serde::{Deserialize, Serialize};

/// Ordered, tag-prefixed log of every exchanged message (Entity)
///
/// Records each user prompt, each member's candidate response, and each
/// committed final answer, in the order they occurred. Serves as the debug
/// trace and as the input to transcript extraction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Thoughtbubble {
    entries: Vec<TranscriptEntry>,
}

impl Thoughtbubble {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry.
    pub fn push(&mut self, entry: TranscriptEntry) {
        self.entries.push(entry);
    }

    /// Append a `"<tag>: <text>"` entry.
    pub fn record(&mut self, tag: impl Into<String>, text: impl Into<String>) {
        self.entries.push(TranscriptEntry::new(tag, text));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Render the transcript text.
    ///
    /// One `"<tag>: <text>"` line per entry, each newline-terminated, with
    /// an extra blank line before any user entry that is not the first:
    /// the visual turn separator downstream parsers rely on.
    ///
    /// Returns `None` when no thoughts have been recorded yet; callers must
    /// treat that distinctly from a non-empty transcript.
    pub fn render(&self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }

        let mut transcript = String::new();
        for (index, entry) in self.entries.iter().enumerate() {
            if index > 0 && entry.is_user() {
                transcript.push('\n');
            }
            transcript.push_str(&entry.to_string());
            transcript.push('\n');
        }
        Some(transcript)
    }
}
