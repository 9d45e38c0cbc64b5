//! Scripted completion gateway — ordered canned responses.

use async_trait::async_trait;
use chorus_application::{CompletionGateway, CompletionRequest, GatewayError};
use std::collections::VecDeque;
use std::sync::Mutex;

/// A completion gateway that hands out scripted results in order.
///
/// Each `complete` call consumes the next scripted step; an exhausted
/// script is a gateway error, which the persona retry policy treats like
/// any other transient failure. Failures can be interleaved with responses
/// to exercise retry behavior.
#[derive(Default)]
pub struct ScriptedGateway {
    script: Mutex<VecDeque<Result<String, GatewayError>>>,
}

impl ScriptedGateway {
    /// An empty script: every call fails with exhaustion.
    pub fn new() -> Self {
        Self::default()
    }

    /// A script of successful responses, served in order.
    pub fn from_responses<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: Mutex::new(responses.into_iter().map(|r| Ok(r.into())).collect()),
        }
    }

    /// Append a successful response to the script.
    pub fn push_response(&self, response: impl Into<String>) {
        self.script.lock().unwrap().push_back(Ok(response.into()));
    }

    /// Append a failure to the script.
    pub fn push_failure(&self, error: GatewayError) {
        self.script.lock().unwrap().push_back(Err(error));
    }

    /// Scripted steps not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionGateway for ScriptedGateway {
    async fn complete(&self, _request: CompletionRequest) -> Result<String, GatewayError> {
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Other("script exhausted".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chorus_application::{CompositeAgent, PersonaAgent, RetryPolicy};
    use chorus_domain::{Model, PersonaSpec};
    use std::sync::Arc;

    fn request() -> CompletionRequest {
        CompletionRequest {
            model: Model::Gpt41,
            messages: vec![],
            max_tokens: 100,
            temperature: 0.5,
            seed: 0,
        }
    }

    #[tokio::test]
    async fn test_responses_are_served_in_order() {
        let gateway = ScriptedGateway::from_responses(["first", "second"]);
        assert_eq!(gateway.complete(request()).await.unwrap(), "first");
        assert_eq!(gateway.complete(request()).await.unwrap(), "second");
        assert_eq!(gateway.remaining(), 0);
    }

    #[tokio::test]
    async fn test_exhausted_script_is_a_gateway_error() {
        let gateway = ScriptedGateway::new();
        let error = gateway.complete(request()).await.unwrap_err();
        assert!(matches!(error, GatewayError::Other(_)));
    }

    #[tokio::test]
    async fn test_injected_failures_drive_persona_retries() {
        let gateway = Arc::new(ScriptedGateway::new());
        gateway.push_failure(GatewayError::RateLimited("busy".to_string()));
        gateway.push_response("recovered");

        let spec = PersonaSpec::new("Angel", "Persuade honesty.");
        let mut persona = PersonaAgent::new(
            &spec,
            &Model::Gpt41,
            Arc::clone(&gateway) as Arc<dyn CompletionGateway>,
            RetryPolicy::immediate(3),
        );

        let answer = persona.respond("hello").await.unwrap();
        assert_eq!(answer, "recovered");
        assert_eq!(gateway.remaining(), 0);
    }

    #[tokio::test]
    async fn test_scripted_gateway_drives_a_full_turn() {
        let roster = vec![
            PersonaSpec::new("Referee", "Choose the best response."),
            PersonaSpec::new("Angel", "Persuade honesty."),
            PersonaSpec::new("Devil", "Persuade convenient lies."),
        ];
        let gateway = Arc::new(ScriptedGateway::from_responses([
            "Tell the truth.",
            "Lie.",
            "Honesty is better.",
        ]));
        let mut chorus = CompositeAgent::new(
            "Alex",
            "A thoughtful conversationalist.",
            &roster,
            Model::Gpt41,
            gateway,
            RetryPolicy::immediate(1),
        )
        .unwrap();

        let answer = chorus.answer("Should I tell the truth?").await.unwrap();
        assert_eq!(answer, "Honesty is better.");
        assert_eq!(chorus.thoughtbubble().len(), 4);
    }
}
