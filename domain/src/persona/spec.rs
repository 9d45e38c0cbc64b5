//! Persona specification — the roster entry a chorus is built from.

use crate::core::model::Model;
use crate::persona::sampling::SamplingParams;
use serde::{Deserialize, Serialize};

/// Name the distinguished referee persona must carry (case-insensitive).
pub const REFEREE_NAME: &str = "referee";

/// Specification of one persona in a roster (Value Object)
///
/// Name and directive are required; everything else defaults. The model
/// override selects the persona's backend through gateway routing.
///
/// # Example
///
/// ```toml
/// [[persona]]
/// name = "Angel"
/// directive = "You persuade the user toward honesty."
/// temperature = 0.8
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaSpec {
    /// Persona name, used as the transcript tag for its responses.
    pub name: String,
    /// System message establishing the persona's point of view.
    pub directive: String,
    /// Model override; the chorus default applies when absent.
    #[serde(default)]
    pub model: Option<Model>,
    /// Temperature override (default 0.5).
    #[serde(default)]
    pub temperature: Option<f64>,
    /// Seed override, rounded to the nearest integer (default random).
    #[serde(default)]
    pub seed: Option<f64>,
    /// Repeat-penalty override (default 1.1, reserved).
    #[serde(default)]
    pub repeat_penalty: Option<f64>,
}

impl PersonaSpec {
    pub fn new(name: impl Into<String>, directive: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            directive: directive.into(),
            model: None,
            temperature: None,
            seed: None,
            repeat_penalty: None,
        }
    }

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = Some(model);
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_seed(mut self, seed: f64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Whether this spec names the distinguished referee persona.
    pub fn is_referee(&self) -> bool {
        self.name.eq_ignore_ascii_case(REFEREE_NAME)
    }

    /// Resolve this spec's sampling overrides against the defaults.
    pub fn sampling(&self) -> SamplingParams {
        SamplingParams::resolve(self.temperature, self.seed, self.repeat_penalty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::sampling::DEFAULT_TEMPERATURE;

    #[test]
    fn test_referee_detection_is_case_insensitive() {
        assert!(PersonaSpec::new("Referee", "choose").is_referee());
        assert!(PersonaSpec::new("REFEREE", "choose").is_referee());
        assert!(!PersonaSpec::new("Angel", "persuade").is_referee());
    }

    #[test]
    fn test_sampling_defaults_apply() {
        let spec = PersonaSpec::new("Angel", "persuade honesty");
        let params = spec.sampling();
        assert_eq!(params.temperature, DEFAULT_TEMPERATURE);
    }

    #[test]
    fn test_builder_overrides() {
        let spec = PersonaSpec::new("Devil", "persuade convenient lies")
            .with_model(Model::Gpt5Mini)
            .with_temperature(0.9)
            .with_seed(11.7);
        assert_eq!(spec.model, Some(Model::Gpt5Mini));
        assert_eq!(spec.sampling().temperature, 0.9);
        assert_eq!(spec.sampling().seed, 12);
    }

    #[test]
    fn test_deserializes_with_optional_fields_absent() {
        let spec: PersonaSpec =
            serde_json::from_str(r#"{"name":"Angel","directive":"persuade"}"#).unwrap();
        assert_eq!(spec.name, "Angel");
        assert!(spec.model.is_none());
        assert!(spec.temperature.is_none());
    }
}
