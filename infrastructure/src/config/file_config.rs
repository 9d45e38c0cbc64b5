//! Roster file layout (`[composite]` section plus `[[persona]]` tables)
//!
//! Example configuration:
//!
//! ```toml
//! [composite]
//! name = "Alex"
//! bio = "A thoughtful conversationalist."
//! model = "gpt-4.1"
//!
//! [[persona]]
//! name = "Referee"
//! directive = "Choose the best response."
//!
//! [[persona]]
//! name = "Angel"
//! directive = "You persuade the user toward honesty."
//! temperature = 0.8
//!
//! [[persona]]
//! name = "Devil"
//! directive = "You persuade the user toward convenient lies."
//! ```

use chorus_application::{CompletionGateway, CompositeAgent, CompositionError, RetryPolicy};
use chorus_domain::{Model, PersonaSpec};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The `[composite]` section of a roster file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeSection {
    /// The composite agent's name, used as its transcript tag.
    pub name: String,
    /// The composite's bio system message.
    pub bio: String,
    /// Default model for personas without an override.
    #[serde(default)]
    pub model: Option<Model>,
}

/// A complete roster file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    pub composite: CompositeSection,
    #[serde(rename = "persona")]
    pub personas: Vec<PersonaSpec>,
}

impl RosterConfig {
    /// Default model to hand personas without an override.
    pub fn default_model(&self) -> Model {
        self.composite.model.clone().unwrap_or_default()
    }

    /// Assemble the configured chorus over the given gateway.
    ///
    /// Roster validation (referee present, at least three personas) happens
    /// in the composite constructor and surfaces unchanged.
    pub fn assemble(
        &self,
        gateway: Arc<dyn CompletionGateway>,
        retry: RetryPolicy,
    ) -> Result<CompositeAgent, CompositionError> {
        CompositeAgent::new(
            &self.composite.name,
            &self.composite.bio,
            &self.personas,
            self.default_model(),
            gateway,
            retry,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROSTER: &str = r#"
[composite]
name = "Alex"
bio = "A thoughtful conversationalist."
model = "gpt-4.1"

[[persona]]
name = "Referee"
directive = "Choose the best response."

[[persona]]
name = "Angel"
directive = "You persuade the user toward honesty."
temperature = 0.8

[[persona]]
name = "Devil"
directive = "You persuade the user toward convenient lies."
seed = 3.7
"#;

    #[test]
    fn test_roster_deserializes_with_defaults() {
        let config: RosterConfig = toml::from_str(ROSTER).unwrap();
        assert_eq!(config.composite.name, "Alex");
        assert_eq!(config.default_model(), Model::Gpt41);
        assert_eq!(config.personas.len(), 3);

        let angel = &config.personas[1];
        assert_eq!(angel.name, "Angel");
        assert_eq!(angel.temperature, Some(0.8));
        assert!(angel.model.is_none());

        let devil = &config.personas[2];
        assert_eq!(devil.sampling().seed, 4);
    }

    #[test]
    fn test_missing_model_falls_back_to_default() {
        let trimmed = ROSTER.replace("model = \"gpt-4.1\"\n", "");
        let config: RosterConfig = toml::from_str(&trimmed).unwrap();
        assert_eq!(config.default_model(), Model::default());
    }

    #[test]
    fn test_assemble_validates_roster() {
        use async_trait::async_trait;
        use chorus_application::{CompletionRequest, GatewayError};

        struct NeverGateway;

        #[async_trait]
        impl CompletionGateway for NeverGateway {
            async fn complete(&self, _: CompletionRequest) -> Result<String, GatewayError> {
                Err(GatewayError::Other("unused".to_string()))
            }
        }

        let mut config: RosterConfig = toml::from_str(ROSTER).unwrap();
        config.personas.remove(0);

        let error = config
            .assemble(Arc::new(NeverGateway), RetryPolicy::immediate(1))
            .unwrap_err();
        assert_eq!(error, CompositionError::MissingReferee);
    }
}
