//! Response collection — generate a transcript by driving a chorus, or
//! extract structured prompt/response data back out of one.
//!
//! Pairing is positional: the collector scans for its two member tags,
//! truncates both lists to the shorter length, and zips them. Unpaired
//! excess lines are dropped silently, never an error.

use crate::agents::composite::CompositeAgent;
use crate::ports::completion::GatewayError;
use chorus_domain::transcript::tagged_contents;
use chorus_domain::USER_TAG;
use std::str::FromStr;
use thiserror::Error;
use tracing::info;

/// Referee temperature pinned while generating a reference transcript.
const MEDIUM_TEMPERATURE: f64 = 0.5;

/// Errors from response collection and extraction
#[derive(Error, Debug)]
pub enum CollectError {
    #[error("`prompts` must contain at least one prompt")]
    EmptyPrompts,

    #[error("transcript must be non-empty text")]
    EmptyTranscript,

    #[error("unsupported selector: '{0}' (expected 'anthro', 'user', or 'user+anthro')")]
    UnsupportedSelector(String),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// What to pull out of an existing transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// The paired member responses ("anthro").
    Members,
    /// The ordered user prompts ("user").
    User,
    /// Both, user prompts first ("user+anthro").
    Both,
}

impl FromStr for Selector {
    type Err = CollectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "anthro" => Ok(Selector::Members),
            "user" => Ok(Selector::User),
            "user+anthro" => Ok(Selector::Both),
            other => Err(CollectError::UnsupportedSelector(other.to_string())),
        }
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Selector::Members => "anthro",
            Selector::User => "user",
            Selector::Both => "user+anthro",
        };
        write!(f, "{s}")
    }
}

/// Data extracted from a transcript, shaped by the [`Selector`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Pairs(Vec<(String, String)>),
    User(Vec<String>),
    Both(Vec<String>, Vec<(String, String)>),
}

/// Collects paired member responses from generated or captured transcripts.
///
/// Constructed over the two member tags whose responses are paired; the
/// pairing convention is shared between generation and extraction, so one
/// collector serves both directions.
pub struct ResponseCollector {
    first_tag: String,
    second_tag: String,
}

impl ResponseCollector {
    pub fn new(first_tag: impl Into<String>, second_tag: impl Into<String>) -> Self {
        Self {
            first_tag: first_tag.into(),
            second_tag: second_tag.into(),
        }
    }

    /// The pair of member tags this collector scans for.
    pub fn tags(&self) -> (&str, &str) {
        (&self.first_tag, &self.second_tag)
    }

    /// Generate mode: drive the chorus through `prompts` and collect the
    /// paired member responses from the resulting transcript.
    ///
    /// The referee temperature is pinned to 0.5 for the pass and the
    /// history cleared first; history accumulates across the prompts
    /// within the pass. Unless `persist` is set, the history is cleared
    /// again and the original temperature restored afterwards. The
    /// temperature is restored on error paths regardless of `persist`.
    pub async fn collect(
        &self,
        composite: &mut CompositeAgent,
        prompts: &[String],
        persist: bool,
    ) -> Result<Vec<(String, String)>, CollectError> {
        if prompts.is_empty() {
            return Err(CollectError::EmptyPrompts);
        }

        let original_temperature = composite.referee_temperature();
        composite.set_referee_temperature(MEDIUM_TEMPERATURE);
        composite.clear_history();

        info!(
            "collecting {} / {} response pairs over {} prompts",
            self.first_tag,
            self.second_tag,
            prompts.len()
        );

        match self.drive(composite, prompts).await {
            Ok(pairs) => {
                if !persist {
                    composite.clear_history();
                    composite.set_referee_temperature(original_temperature);
                }
                Ok(pairs)
            }
            Err(error) => {
                composite.set_referee_temperature(original_temperature);
                Err(error)
            }
        }
    }

    async fn drive(
        &self,
        composite: &mut CompositeAgent,
        prompts: &[String],
    ) -> Result<Vec<(String, String)>, CollectError> {
        for prompt in prompts {
            composite.answer(prompt).await?;
        }
        let transcript = composite.thoughts().unwrap_or_default();
        Ok(self.pair(&transcript))
    }

    /// Extract mode: pull data out of an existing transcript.
    pub fn extract(&self, transcript: &str, selector: Selector) -> Result<Extraction, CollectError> {
        if transcript.is_empty() {
            return Err(CollectError::EmptyTranscript);
        }
        Ok(match selector {
            Selector::Members => Extraction::Pairs(self.pair(transcript)),
            Selector::User => Extraction::User(tagged_contents(transcript, USER_TAG)),
            Selector::Both => Extraction::Both(
                tagged_contents(transcript, USER_TAG),
                self.pair(transcript),
            ),
        })
    }

    /// The paired member responses of a transcript.
    pub fn member_pairs(&self, transcript: &str) -> Result<Vec<(String, String)>, CollectError> {
        match self.extract(transcript, Selector::Members)? {
            Extraction::Pairs(pairs) => Ok(pairs),
            _ => unreachable!("Members selector always yields pairs"),
        }
    }

    /// The ordered user prompts of a transcript.
    pub fn user_prompts(&self, transcript: &str) -> Result<Vec<String>, CollectError> {
        match self.extract(transcript, Selector::User)? {
            Extraction::User(prompts) => Ok(prompts),
            _ => unreachable!("User selector always yields prompts"),
        }
    }

    /// Zip the two tag streams positionally, truncating to the shorter.
    fn pair(&self, transcript: &str) -> Vec<(String, String)> {
        let first = tagged_contents(transcript, &self.first_tag);
        let second = tagged_contents(transcript, &self.second_tag);
        first.into_iter().zip(second).collect()
    }
}
