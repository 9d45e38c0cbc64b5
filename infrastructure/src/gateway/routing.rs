//! Routing completion gateway — per-model backend dispatch.

use async_trait::async_trait;
use chorus_application::{CompletionGateway, CompletionRequest, GatewayError};
use chorus_domain::Model;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Dispatches each completion request to the gateway registered for its
/// model id, falling back to a default gateway.
///
/// This is how a persona's model override selects its backend: the
/// composite holds one gateway, and routing happens per request.
pub struct RoutingGateway {
    routes: HashMap<String, Arc<dyn CompletionGateway>>,
    default: Arc<dyn CompletionGateway>,
}

impl RoutingGateway {
    /// Create a router that sends everything to `default`.
    pub fn new(default: Arc<dyn CompletionGateway>) -> Self {
        Self {
            routes: HashMap::new(),
            default,
        }
    }

    /// Register a gateway for one model id.
    pub fn route(mut self, model: Model, gateway: Arc<dyn CompletionGateway>) -> Self {
        self.routes.insert(model.as_str().to_string(), gateway);
        self
    }

    fn resolve(&self, model: &Model) -> &Arc<dyn CompletionGateway> {
        self.routes.get(model.as_str()).unwrap_or(&self.default)
    }
}

#[async_trait]
impl CompletionGateway for RoutingGateway {
    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError> {
        let routed = self.routes.contains_key(request.model.as_str());
        debug!(
            "routing completion for {} ({})",
            request.model,
            if routed { "explicit" } else { "default" }
        );
        self.resolve(&request.model).complete(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::ScriptedGateway;
    use chorus_domain::Message;

    fn request(model: Model) -> CompletionRequest {
        CompletionRequest {
            model,
            messages: vec![Message::user("hi")],
            max_tokens: 100,
            temperature: 0.5,
            seed: 0,
        }
    }

    #[tokio::test]
    async fn test_explicit_route_wins() {
        let claude = Arc::new(ScriptedGateway::from_responses(["from claude"]));
        let fallback = Arc::new(ScriptedGateway::from_responses(["from default"]));

        let router = RoutingGateway::new(fallback)
            .route(Model::ClaudeHaiku45, claude);

        let answer = router.complete(request(Model::ClaudeHaiku45)).await.unwrap();
        assert_eq!(answer, "from claude");
    }

    #[tokio::test]
    async fn test_unrouted_model_falls_back_to_default() {
        let claude = Arc::new(ScriptedGateway::from_responses(["from claude"]));
        let fallback = Arc::new(ScriptedGateway::from_responses(["from default"]));

        let router = RoutingGateway::new(fallback)
            .route(Model::ClaudeHaiku45, claude);

        let answer = router.complete(request(Model::Gpt41)).await.unwrap();
        assert_eq!(answer, "from default");
    }

    #[tokio::test]
    async fn test_custom_models_route_by_string_id() {
        let local = Arc::new(ScriptedGateway::from_responses(["from local"]));
        let fallback = Arc::new(ScriptedGateway::new());

        let router = RoutingGateway::new(fallback)
            .route(Model::Custom("local-completion-v1".to_string()), local);

        let answer = router
            .complete(request("local-completion-v1".parse().unwrap()))
            .await
            .unwrap();
        assert_eq!(answer, "from local");
    }
}
