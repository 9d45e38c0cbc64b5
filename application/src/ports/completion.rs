//! Completion port
//!
//! Defines the interface for the external completion capability. Concrete
//! backends (hosted APIs, local runtimes) live outside this workspace;
//! the infrastructure crate ships an in-memory scripted adapter and a
//! model-routing adapter for composition and tests.

use async_trait::async_trait;
use chorus_domain::{Message, Model};
use thiserror::Error;

/// Errors that can occur during a completion call
///
/// All variants are treated as transient by the persona retry policy;
/// only exhausting the policy escalates them to the caller.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Token limit exceeded: {0}")]
    TokenLimit(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Timeout")]
    Timeout,

    #[error("Transport closed")]
    TransportClosed,

    #[error("Other error: {0}")]
    Other(String),
}

/// One completion request
///
/// Carries exactly the sampling fields forwarded to the backend; the
/// persona's repeat penalty is deliberately absent (reserved, never sent).
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: Model,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    pub temperature: f64,
    pub seed: i64,
}

/// Gateway to the completion capability
///
/// This port defines how personas reach a language model. Implementations
/// (adapters) live in the infrastructure layer or downstream crates.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Produce one text completion for the request.
    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError>;
}
