//! A single persona — one sampling configuration, one completion call per
//! solicitation, single-shot memory.

use crate::config::RetryPolicy;
use crate::ports::completion::{CompletionGateway, CompletionRequest, GatewayError};
use chorus_domain::{Message, Model, PersonaSpec, Prompt, SamplingParams};
use std::sync::Arc;
use tracing::{debug, warn};

/// Default token limit for one solicitation.
pub const DEFAULT_MAX_TOKENS: u32 = 100;

/// A persona-configured agent issuing single-shot completion requests.
///
/// The private buffer holds exactly one system message (the directive)
/// between calls: `respond` grows it for the duration of the call and
/// resets it before returning, on success and failure alike. Personas do
/// not accumulate chat; multi-turn memory belongs to the composite.
pub struct PersonaAgent {
    name: String,
    directive: String,
    model: Model,
    sampling: SamplingParams,
    buffer: Vec<Message>,
    gateway: Arc<dyn CompletionGateway>,
    retry: RetryPolicy,
}

impl PersonaAgent {
    /// Build a persona from its spec, falling back to the chorus-wide model.
    pub fn new(
        spec: &PersonaSpec,
        default_model: &Model,
        gateway: Arc<dyn CompletionGateway>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            name: spec.name.clone(),
            directive: spec.directive.clone(),
            model: spec.model.clone().unwrap_or_else(|| default_model.clone()),
            sampling: spec.sampling(),
            buffer: vec![Message::system(&spec.directive)],
            gateway,
            retry,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn directive(&self) -> &str {
        &self.directive
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn sampling(&self) -> &SamplingParams {
        &self.sampling
    }

    pub fn temperature(&self) -> f64 {
        self.sampling.temperature
    }

    /// Temperature is scoped, restorable state: harnesses that override it
    /// are responsible for restoring the prior value on every exit path.
    pub fn set_temperature(&mut self, temperature: f64) {
        self.sampling.temperature = temperature;
    }

    /// The conversation buffer. Between external calls this is exactly the
    /// directive system message.
    pub fn buffer(&self) -> &[Message] {
        &self.buffer
    }

    /// Name and directive, the way the persona introduces itself.
    pub fn describe(&self) -> String {
        format!("{}\n{}", self.name, self.directive)
    }

    /// Solicit the persona with the default token limit.
    pub async fn respond(&mut self, input: impl Into<Prompt>) -> Result<String, GatewayError> {
        self.respond_with_limit(input, DEFAULT_MAX_TOKENS).await
    }

    /// Solicit the persona.
    ///
    /// Accepts either a bare text prompt or an ordered message list (see
    /// [`Prompt`]). The input is appended to the buffer, the completion
    /// capability is invoked under the retry policy, and the buffer is
    /// reset to system-only before returning.
    pub async fn respond_with_limit(
        &mut self,
        input: impl Into<Prompt>,
        max_tokens: u32,
    ) -> Result<String, GatewayError> {
        self.buffer.extend(input.into().into_messages());

        let request = CompletionRequest {
            model: self.model.clone(),
            messages: self.buffer.clone(),
            max_tokens,
            temperature: self.sampling.temperature,
            seed: self.sampling.seed,
        };

        let result = self.complete_with_retry(request).await;
        self.clear_history();
        result
    }

    /// Reset the buffer to the directive system message. Idempotent.
    pub fn clear_history(&mut self) {
        self.buffer = vec![Message::system(&self.directive)];
    }

    /// Issue the request, pausing and reattempting on any gateway failure
    /// until the policy is exhausted; the last error escalates.
    async fn complete_with_retry(
        &self,
        request: CompletionRequest,
    ) -> Result<String, GatewayError> {
        let mut attempt = 1;
        loop {
            match self.gateway.complete(request.clone()).await {
                Ok(text) => {
                    debug!("{}: completion succeeded on attempt {}", self.name, attempt);
                    return Ok(text);
                }
                Err(error) if attempt >= self.retry.max_attempts => {
                    warn!(
                        "{}: completion failed on final attempt {}/{}: {}",
                        self.name, attempt, self.retry.max_attempts, error
                    );
                    return Err(error);
                }
                Err(error) => {
                    warn!(
                        "{}: completion failed on attempt {}/{} (will retry after pause): {}",
                        self.name, attempt, self.retry.max_attempts, error
                    );
                    tokio::time::sleep(self.retry.delay).await;
                    attempt += 1;
                }
            }
        }
    }
}
