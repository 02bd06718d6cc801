//! Run Debate use case.
//!
//! Orchestrates an AI-vs-AI debate: two personas alternate for N turns with
//! a bounded context window, then a judge scores the exchange.
//!
//! The orchestrator itself is stateless; every debate owns its
//! [`DebateState`] and nothing is shared between runs.

use crate::config::{EngineConfig, budgets};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::oracle::{LanguageOracle, OracleError};
use crate::ports::progress::DebateProgressNotifier;
use agora_domain::debate::{context_window, format_transcript, opponent_excerpt, to_oracle_messages};
use agora_domain::util::truncate_chars;
use agora_domain::{
    DebatePhase, DebatePromptTemplate, DebateReport, DebateSetup, DebateSide, DebateState,
    Debater, DomainError, Judgment, OracleMessage, OracleRequest, Persona,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while running a debate
#[derive(Error, Debug)]
pub enum DebateError {
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Invalid turn count: {0} (must be at least 1)")]
    InvalidTurnCount(usize),

    #[error("Oracle error on turn {turn}: {source}")]
    Oracle {
        turn: usize,
        #[source]
        source: OracleError,
    },
}

impl From<DomainError> for DebateError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidState(detail) => DebateError::InvalidState(detail),
            other => DebateError::InvalidState(other.to_string()),
        }
    }
}

/// Use case for running debates.
#[derive(Clone)]
pub struct DebateOrchestrator {
    oracle: Arc<dyn LanguageOracle>,
    context_window: usize,
    excerpt_chars: usize,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl DebateOrchestrator {
    pub fn new(oracle: Arc<dyn LanguageOracle>, config: &EngineConfig) -> Self {
        Self {
            oracle,
            context_window: config.debate_context_window,
            excerpt_chars: config.opponent_excerpt_chars,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Configure a debate, discarding any previous exchange.
    ///
    /// Unknown persona keys fall back to the default persona.
    pub fn setup(
        &self,
        state: &mut DebateState,
        topic: &str,
        persona_a: &str,
        persona_b: &str,
        position_a: &str,
        position_b: &str,
    ) {
        for key in [persona_a, persona_b] {
            if Persona::lookup(key).is_none() {
                warn!(
                    "Unknown persona '{}' in debate, falling back to {}",
                    key,
                    Persona::default_persona().key
                );
            }
        }
        let setup = DebateSetup::new(
            topic,
            Debater::new(persona_a, position_a),
            Debater::new(persona_b, position_b),
        );
        info!(
            "Debate configured: {} vs {} on {}",
            setup.a.persona.key,
            setup.b.persona.key,
            truncate_chars(topic, 80)
        );
        state.configure(setup);
    }

    /// Run `turns` alternating turns, A first.
    ///
    /// An oracle failure aborts the run; entries already logged are kept and
    /// a new `setup` is needed before running again.
    pub async fn run(
        &self,
        state: &mut DebateState,
        turns: usize,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<(), DebateError> {
        if turns == 0 {
            return Err(DebateError::InvalidTurnCount(turns));
        }
        let setup = state.begin()?.clone();
        info!("Running debate for {} turns", turns);

        for turn in 1..=turns {
            let side = DebateSide::for_turn(turn);
            let debater = setup.debater(side);
            progress.on_turn_start(turn, turns, side, debater.name());

            let request = self.turn_request(&setup, state, turn, side);
            debug!(
                "Debate turn {}: {} with {} messages",
                turn,
                debater.persona.key,
                request.messages.len()
            );

            let reply = self.oracle.generate(&request).await.map_err(|source| {
                warn!("Debate aborted on turn {}: {}", turn, source);
                DebateError::Oracle { turn, source }
            })?;

            let entry = state.record(reply)?;
            progress.on_turn_complete(entry);
            self.conversation_logger
                .log(ConversationEvent::debate_turn(entry));
        }

        state.complete();
        Ok(())
    }

    fn turn_request(
        &self,
        setup: &DebateSetup,
        state: &DebateState,
        turn: usize,
        side: DebateSide,
    ) -> OracleRequest {
        let debater = setup.debater(side);
        let log = state.exchange_log();

        let (mut messages, prompt) = if turn == 1 {
            (Vec::new(), DebatePromptTemplate::opening(&setup.topic))
        } else {
            let context = context_window(log, self.context_window);
            let excerpt = opponent_excerpt(log, side, self.excerpt_chars);
            (
                to_oracle_messages(context, side),
                DebatePromptTemplate::rebuttal(excerpt),
            )
        };
        messages.push(OracleMessage::human(prompt));

        let system = DebatePromptTemplate::debater_system(
            debater.persona.instruction_template,
            &debater.position,
            &setup.topic,
            turn == 1,
        );
        OracleRequest::new(system, messages, budgets::DEBATE_TURN)
    }

    /// Ask the judge for a verdict on a completed debate.
    ///
    /// Unparseable or failed judge calls yield [`Judgment::Unavailable`];
    /// there is no guessed winner.
    pub async fn judge(
        &self,
        state: &mut DebateState,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<Judgment, DebateError> {
        if state.phase() != DebatePhase::Completed {
            return Err(DebateError::InvalidState(format!(
                "debate must be completed before judging (phase: {:?})",
                state.phase()
            )));
        }
        if state.exchange_log().len() < 2 {
            return Err(DebateError::InvalidState(
                "not enough debate history to judge".to_string(),
            ));
        }
        let setup = state
            .setup()
            .ok_or_else(|| DebateError::InvalidState("debate has no setup".to_string()))?;

        progress.on_judging();
        let prompt = DebatePromptTemplate::judge(
            &setup.topic,
            (setup.a.name(), &setup.a.position),
            (setup.b.name(), &setup.b.position),
            &format_transcript(state.exchange_log()),
        );
        let request = OracleRequest::single_prompt(prompt, budgets::JUDGE);

        let judgment = match self.oracle.generate(&request).await {
            Ok(reply) => Judgment::from_reply(&reply, setup),
            Err(e) => {
                warn!("Judge unavailable: {}", e);
                Judgment::Unavailable {
                    reason: e.to_string(),
                    raw: None,
                }
            }
        };

        match &judgment {
            Judgment::Verdict(v) => info!("Debate judged: {:?}", v.winner),
            Judgment::Unavailable { reason, .. } => warn!("No verdict: {}", reason),
        }
        self.conversation_logger
            .log(ConversationEvent::debate_judged(&setup.topic, &judgment));

        state.mark_judged();
        progress.on_judged(&judgment);
        Ok(judgment)
    }

    /// Configure, run and judge in one go.
    pub async fn run_full(
        &self,
        setup: DebateSetup,
        turns: usize,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<DebateReport, DebateError> {
        let mut state = DebateState::default();
        state.configure(setup);
        self.run(&mut state, turns, progress).await?;
        let judgment = self.judge(&mut state, progress).await?;

        let topic = state
            .setup()
            .map(|s| s.topic.clone())
            .unwrap_or_default();
        Ok(DebateReport {
            topic,
            entries: state.exchange_log().to_vec(),
            judgment,
        })
    }
}
