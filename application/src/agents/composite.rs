//! The composite agent — a roster of personas deliberating behind one name.
//!
//! Each `answer` call drives one turn: broadcast the prompt to every member
//! in order, hand the candidates to the referee, commit the referee's
//! answer to the persistent history and the thoughtbubble.

use crate::agents::persona::PersonaAgent;
use crate::config::RetryPolicy;
use crate::ports::completion::{CompletionGateway, GatewayError};
use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger};
use crate::ports::progress::{NoProgress, TurnProgress};
use chorus_domain::{Message, Model, PersonaSpec, Prompt, PromptTemplate, Thoughtbubble, USER_TAG};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised when a chorus cannot be assembled from its roster
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CompositionError {
    #[error("missing required persona: 'referee'")]
    MissingReferee,

    #[error("three (3) personas required (referee and at least two others), got {0}")]
    NotEnoughPersonas(usize),
}

/// Where a turn's candidate responses come from.
#[derive(Debug, Clone, Copy)]
pub enum CandidateSource<'a> {
    /// Solicit every member (the normal path).
    Generate,
    /// Bypass the members and hand these candidates to the referee,
    /// enabling replay of previously captured candidates.
    Supplied(&'a [String]),
}

/// A composite agent: ordered members plus the referee that speaks for them.
///
/// The persistent history grows across turns until
/// [`clear_history`](Self::clear_history); members themselves stay
/// single-shot and receive the history explicitly on every solicitation.
pub struct CompositeAgent {
    name: String,
    bio: String,
    history: Vec<Message>,
    members: Vec<PersonaAgent>,
    referee: PersonaAgent,
    thoughtbubble: Thoughtbubble,
    logger: Arc<dyn ConversationLogger>,
}

impl std::fmt::Debug for CompositeAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeAgent")
            .field("name", &self.name)
            .field("bio", &self.bio)
            .field("history", &self.history)
            .field("members", &self.members.len())
            .field("thoughtbubble", &self.thoughtbubble)
            .finish_non_exhaustive()
    }
}

impl CompositeAgent {
    /// Assemble a chorus from its roster.
    ///
    /// The roster must contain a persona named "referee" (case-insensitive)
    /// and at least three personas in total; the referee is excluded from
    /// the member collection and stored separately.
    pub fn new(
        name: impl Into<String>,
        bio: impl Into<String>,
        roster: &[PersonaSpec],
        default_model: Model,
        gateway: Arc<dyn CompletionGateway>,
        retry: RetryPolicy,
    ) -> Result<Self, CompositionError> {
        if !roster.iter().any(PersonaSpec::is_referee) {
            return Err(CompositionError::MissingReferee);
        }
        if roster.len() < 3 {
            return Err(CompositionError::NotEnoughPersonas(roster.len()));
        }

        let mut members = Vec::with_capacity(roster.len() - 1);
        let mut referee = None;
        for spec in roster {
            let agent = PersonaAgent::new(spec, &default_model, Arc::clone(&gateway), retry.clone());
            if spec.is_referee() {
                referee = Some(agent);
            } else {
                members.push(agent);
            }
        }
        let Some(referee) = referee else {
            return Err(CompositionError::MissingReferee);
        };

        let bio = bio.into();
        Ok(Self {
            name: name.into(),
            history: vec![Message::system(&bio)],
            bio,
            members,
            referee,
            thoughtbubble: Thoughtbubble::new(),
            logger: Arc::new(NoConversationLogger),
        })
    }

    /// Attach a structured conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bio(&self) -> &str {
        &self.bio
    }

    /// Member names in solicitation order (referee excluded).
    pub fn member_names(&self) -> Vec<&str> {
        self.members.iter().map(PersonaAgent::name).collect()
    }

    /// Look up a member by name (case-insensitive, referee excluded).
    pub fn member(&self, name: &str) -> Option<&PersonaAgent> {
        self.members
            .iter()
            .find(|member| member.name().eq_ignore_ascii_case(name))
    }

    pub fn referee(&self) -> &PersonaAgent {
        &self.referee
    }

    pub fn referee_temperature(&self) -> f64 {
        self.referee.temperature()
    }

    /// Override the referee's temperature. Callers that scope an override
    /// must restore the prior value on every exit path.
    pub fn set_referee_temperature(&mut self, temperature: f64) {
        self.referee.set_temperature(temperature);
    }

    /// The persistent conversation history (bio system message first).
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn thoughtbubble(&self) -> &Thoughtbubble {
        &self.thoughtbubble
    }

    /// Solicit every member in member order, one blocking call at a time.
    ///
    /// The members' viewpoints are independent, but execution is strictly
    /// sequential so the returned candidates and the thoughtbubble appends
    /// keep member order deterministic.
    pub async fn think(
        &mut self,
        conversation: impl Into<Prompt>,
    ) -> Result<Vec<String>, GatewayError> {
        self.think_with_progress(conversation, &NoProgress).await
    }

    /// [`think`](Self::think) with progress callbacks.
    pub async fn think_with_progress(
        &mut self,
        conversation: impl Into<Prompt>,
        progress: &dyn TurnProgress,
    ) -> Result<Vec<String>, GatewayError> {
        let conversation = conversation.into();
        info!("{}: soliciting {} members", self.name, self.members.len());

        let mut candidates = Vec::with_capacity(self.members.len());
        for member in self.members.iter_mut() {
            progress.on_persona_start(member.name());
            let response = match member.respond(conversation.clone()).await {
                Ok(response) => response,
                Err(error) => {
                    progress.on_persona_complete(member.name(), false);
                    return Err(error);
                }
            };
            progress.on_persona_complete(member.name(), true);

            self.thoughtbubble.record(member.name(), &response);
            self.logger
                .log(ConversationEvent::candidate(member.name(), &response));
            candidates.push(response);
        }
        Ok(candidates)
    }

    /// Drive one full turn: think, deliberate, commit.
    pub async fn answer(&mut self, prompt: &str) -> Result<String, GatewayError> {
        self.answer_with_progress(prompt, CandidateSource::Generate, &NoProgress)
            .await
    }

    /// One turn with externally supplied candidates instead of `think`.
    pub async fn answer_bypass(
        &mut self,
        prompt: &str,
        choices: &[String],
    ) -> Result<String, GatewayError> {
        self.answer_with_progress(prompt, CandidateSource::Supplied(choices), &NoProgress)
            .await
    }

    /// One turn with explicit candidate source and progress callbacks.
    pub async fn answer_with_progress(
        &mut self,
        prompt: &str,
        source: CandidateSource<'_>,
        progress: &dyn TurnProgress,
    ) -> Result<String, GatewayError> {
        self.history.push(Message::user(prompt));
        self.thoughtbubble.record(USER_TAG, prompt);
        self.logger
            .log(ConversationEvent::user_prompt(&self.name, prompt));

        let candidates = match source {
            CandidateSource::Generate => {
                let conversation = self.history.clone();
                self.think_with_progress(conversation, progress).await?
            }
            CandidateSource::Supplied(choices) => choices.to_vec(),
        };

        progress.on_deliberation_start(candidates.len());
        debug!(
            "{}: referee deliberating over {} candidates",
            self.name,
            candidates.len()
        );

        let mut context = self.history.clone();
        context.push(Message::system(PromptTemplate::referee_choice(&candidates)));
        let final_answer = self.referee.respond(context).await?;

        self.history.push(Message::assistant(&final_answer));
        self.thoughtbubble.record(self.name.clone(), &final_answer);
        self.logger
            .log(ConversationEvent::final_answer(&self.name, &final_answer));
        progress.on_answer_committed(&self.name);

        info!("{}: turn committed", self.name);
        Ok(final_answer)
    }

    /// The thoughtbubble rendered as transcript text, or `None` when the
    /// chorus has no thoughts yet.
    pub fn thoughts(&self) -> Option<String> {
        self.thoughtbubble.render()
    }

    /// The persistent conversation rendered for display, assistant turns
    /// labelled with the chorus's own name. `None` until the first turn.
    pub fn render_history(&self) -> Option<String> {
        if self.history.len() <= 1 {
            return None;
        }
        let lines: Vec<String> = self.history[1..]
            .iter()
            .map(|message| match message.role {
                chorus_domain::Role::Assistant => format!("{}: {}", self.name, message.content),
                role => format!("{}: {}", role, message.content),
            })
            .collect();
        Some(lines.join("\n\n"))
    }

    /// Reset the chorus: history back to bio-only, thoughtbubble emptied,
    /// referee and every member cleared recursively. Idempotent.
    pub fn clear_history(&mut self) {
        self.history = vec![Message::system(&self.bio)];
        self.thoughtbubble.clear();
        self.referee.clear_history();
        for member in self.members.iter_mut() {
            member.clear_history();
        }
        debug!("{}: history cleared", self.name);
    }
}
