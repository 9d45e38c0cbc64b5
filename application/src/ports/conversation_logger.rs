//! Port for structured conversation logging.
//!
//! `tracing` handles human-readable diagnostics; this port captures the
//! turn-level exchange (prompts, candidates, committed answers) in a
//! machine-readable form. The JSONL adapter lives in infrastructure.

use serde_json::{Value, json};

/// A structured conversation event for logging.
pub struct ConversationEvent {
    /// Event type identifier (e.g. "user_prompt", "candidate", "final_answer").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    /// A user prompt entering a composite's turn.
    pub fn user_prompt(composite: &str, prompt: &str) -> Self {
        Self::new("user_prompt", json!({ "composite": composite, "prompt": prompt }))
    }

    /// One member's candidate response.
    pub fn candidate(persona: &str, text: &str) -> Self {
        Self::new("candidate", json!({ "persona": persona, "text": text }))
    }

    /// The referee-committed final answer.
    pub fn final_answer(composite: &str, text: &str) -> Self {
        Self::new("final_answer", json!({ "composite": composite, "text": text }))
    }
}

/// Port for logging conversation events to a structured log.
///
/// `log` is intentionally synchronous and non-fallible so logging can never
/// disrupt a turn; adapters swallow their own write errors.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
