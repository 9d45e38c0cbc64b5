//! Progress notification port
//!
//! Defines the interface for reporting progress while a chorus works
//! through a turn. Implementations live in presentation code (console,
//! TUI); the engine itself never prints.

/// Callback for progress updates during a turn
pub trait TurnProgress: Send + Sync {
    /// Called before a persona is solicited.
    fn on_persona_start(&self, name: &str);

    /// Called once a persona's solicitation finished or failed.
    fn on_persona_complete(&self, name: &str, success: bool);

    /// Called when the referee starts deliberating over the candidates.
    fn on_deliberation_start(&self, _candidate_count: usize) {}

    /// Called when the final answer has been committed to history.
    fn on_answer_committed(&self, _name: &str) {}
}

/// No-op notifier for when progress reporting is not needed
pub struct NoProgress;

impl TurnProgress for NoProgress {
    fn on_persona_start(&self, _name: &str) {}
    fn on_persona_complete(&self, _name: &str, _success: bool) {}
}
