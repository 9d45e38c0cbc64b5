//! Prompt templates for referee deliberation

/// Templates for the synthetic messages the engine injects
pub struct PromptTemplate;

impl PromptTemplate {
    /// System message handing the candidate responses to the referee.
    ///
    /// The candidate list is embedded in serialized form inside a fenced
    /// block; the referee is instructed to choose or synthesize one final
    /// response from it.
    pub fn referee_choice(candidates: &[String]) -> String {
        let serialized =
            serde_json::to_string(candidates).unwrap_or_else(|_| format!("{candidates:?}"));
        format!("CHOOSE A RESPONSE:```{serialized}```.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_referee_choice_embeds_every_candidate() {
        let candidates = vec!["tell the truth".to_string(), "deny everything".to_string()];
        let prompt = PromptTemplate::referee_choice(&candidates);
        assert!(prompt.starts_with("CHOOSE A RESPONSE:"));
        assert!(prompt.contains("tell the truth"));
        assert!(prompt.contains("deny everything"));
    }

    #[test]
    fn test_referee_choice_handles_empty_candidate_list() {
        let prompt = PromptTemplate::referee_choice(&[]);
        assert!(prompt.contains("[]"));
    }
}
