//! Model value object representing a completion model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Completion models a persona can sample from (Value Object)
///
/// Personas default to the chorus-wide model but may carry their own
/// override, which the gateway layer uses to route the request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    // Claude models
    ClaudeSonnet45,
    ClaudeHaiku45,
    ClaudeOpus45,
    // GPT models
    Gpt52,
    Gpt5Mini,
    Gpt41,
    // Gemini models
    Gemini3Pro,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::ClaudeSonnet45 => "claude-sonnet-4.5",
            Model::ClaudeHaiku45 => "claude-haiku-4.5",
            Model::ClaudeOpus45 => "claude-opus-4.5",
            Model::Gpt52 => "gpt-5.2",
            Model::Gpt5Mini => "gpt-5-mini",
            Model::Gpt41 => "gpt-4.1",
            Model::Gemini3Pro => "gemini-3-pro-preview",
            Model::Custom(s) => s,
        }
    }

    /// Check if this is a Claude model
    pub fn is_claude(&self) -> bool {
        matches!(
            self,
            Model::ClaudeSonnet45 | Model::ClaudeHaiku45 | Model::ClaudeOpus45
        )
    }

    /// Check if this is a GPT model
    pub fn is_gpt(&self) -> bool {
        matches!(self, Model::Gpt52 | Model::Gpt5Mini | Model::Gpt41)
    }

    /// Check if this is a Gemini model
    pub fn is_gemini(&self) -> bool {
        matches!(self, Model::Gemini3Pro)
    }
}

impl Default for Model {
    /// Returns the default model (GPT-4.1)
    fn default() -> Self {
        Model::Gpt41
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "claude-sonnet-4.5" => Model::ClaudeSonnet45,
            "claude-haiku-4.5" => Model::ClaudeHaiku45,
            "claude-opus-4.5" => Model::ClaudeOpus45,
            "gpt-5.2" => Model::Gpt52,
            "gpt-5-mini" => Model::Gpt5Mini,
            "gpt-4.1" => Model::Gpt41,
            "gemini-3-pro-preview" => Model::Gemini3Pro,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        for model in [Model::ClaudeSonnet45, Model::Gpt41, Model::Gemini3Pro] {
            let s = model.to_string();
            let parsed: Model = s.parse().unwrap();
            assert_eq!(model, parsed);
        }
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "local-completion-v1".parse().unwrap();
        assert_eq!(model, Model::Custom("local-completion-v1".to_string()));
        assert_eq!(model.to_string(), "local-completion-v1");
    }

    #[test]
    fn test_model_family_detection() {
        assert!(Model::ClaudeSonnet45.is_claude());
        assert!(Model::Gpt52.is_gpt());
        assert!(Model::Gemini3Pro.is_gemini());
        assert!(!Model::ClaudeSonnet45.is_gpt());
    }
}
