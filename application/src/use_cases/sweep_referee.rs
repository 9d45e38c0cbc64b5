//! Referee sweep — exercise the referee across named temperature
//! configurations, or replay its past answers from a captured transcript.

use crate::agents::composite::CompositeAgent;
use crate::ports::completion::GatewayError;
use chorus_domain::transcript::tagged_contents;
use indexmap::IndexMap;
use thiserror::Error;
use tracing::info;

/// Errors from the referee sweep and replay
#[derive(Error, Debug)]
pub enum SweepError {
    #[error("`prompts` must contain at least one prompt")]
    EmptyPrompts,

    #[error(
        "`choices` must be non-empty and the same length as `prompts` ({prompts} prompts, {choices} choices)"
    )]
    MismatchedChoices { prompts: usize, choices: usize },

    #[error("replay history must be exactly one entry: a composite's name mapped to its non-empty transcript")]
    InvalidReplayShape,

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Sweep the referee across named temperature configurations.
///
/// For each configuration, in mapping order: pin the referee temperature,
/// clear history, answer every prompt in order (bypassing member
/// generation with that prompt's candidate pair when `choices` are
/// supplied), and clear history again before advancing. Input shape is
/// validated before any completion call; the pre-sweep referee temperature
/// is restored on every exit path, including mid-sweep failure.
pub async fn sweep(
    composite: &mut CompositeAgent,
    prompts: &[String],
    choices: Option<&[(String, String)]>,
    temperatures: &IndexMap<String, f64>,
) -> Result<IndexMap<String, Vec<String>>, SweepError> {
    if prompts.is_empty() {
        return Err(SweepError::EmptyPrompts);
    }
    if let Some(pairs) = choices
        && pairs.len() != prompts.len()
    {
        return Err(SweepError::MismatchedChoices {
            prompts: prompts.len(),
            choices: pairs.len(),
        });
    }

    let original_temperature = composite.referee_temperature();
    let result = run_sweep(composite, prompts, choices, temperatures).await;
    composite.set_referee_temperature(original_temperature);
    result
}

async fn run_sweep(
    composite: &mut CompositeAgent,
    prompts: &[String],
    choices: Option<&[(String, String)]>,
    temperatures: &IndexMap<String, f64>,
) -> Result<IndexMap<String, Vec<String>>, SweepError> {
    let mut collected = IndexMap::with_capacity(temperatures.len());

    for (label, &temperature) in temperatures {
        info!("generating referee responses at temperature {temperature} ({label})");
        composite.set_referee_temperature(temperature);
        composite.clear_history();

        let mut answers = Vec::with_capacity(prompts.len());
        for (index, prompt) in prompts.iter().enumerate() {
            let answer = match choices {
                Some(pairs) => {
                    let (first, second) = pairs[index].clone();
                    composite.answer_bypass(prompt, &[first, second]).await?
                }
                None => composite.answer(prompt).await?,
            };
            answers.push(answer);
        }

        composite.clear_history();
        collected.insert(label.clone(), answers);
    }

    Ok(collected)
}

/// Replay the referee's committed answers from a captured transcript.
///
/// `history` must hold exactly one entry keyed by the composite's name,
/// whose value is its non-empty transcript; the answers are the ordered
/// contents of the lines tagged with that exact name.
pub fn replay(history: &IndexMap<String, String>) -> Result<Vec<String>, SweepError> {
    if history.len() != 1 {
        return Err(SweepError::InvalidReplayShape);
    }
    let Some((name, transcript)) = history.iter().next() else {
        return Err(SweepError::InvalidReplayShape);
    };
    if transcript.is_empty() {
        return Err(SweepError::InvalidReplayShape);
    }
    Ok(tagged_contents(transcript, name))
}
