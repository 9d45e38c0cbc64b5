//! Application layer for persona-chorus
//!
//! This crate contains the agents, port definitions, and evaluation
//! harnesses. It depends only on the domain layer.

pub mod agents;
pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use agents::{
    composite::{CandidateSource, CompositeAgent, CompositionError},
    persona::{DEFAULT_MAX_TOKENS, PersonaAgent},
};
pub use config::RetryPolicy;
pub use ports::{
    completion::{CompletionGateway, CompletionRequest, GatewayError},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    progress::{NoProgress, TurnProgress},
};
pub use use_cases::collect_responses::{
    CollectError, Extraction, ResponseCollector, Selector,
};
pub use use_cases::sweep_referee::{SweepError, replay, sweep};
