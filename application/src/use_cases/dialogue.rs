//! Dialogue turn use case.
//!
//! Appends a human turn to a [`DialogueSession`], asks the oracle for the
//! philosopher's reply and appends that too.
//!
//! The system instructions always come from the session itself. Callers that
//! want to adjust them (adaptive difficulty) pass an [`InstructionDecorator`];
//! the session never knows about it.

use crate::config::EngineConfig;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::oracle::{LanguageOracle, OracleError};
use agora_domain::util::truncate_chars;
use agora_domain::{
    DialogueSession, DomainError, OracleRequest, Persona, PromptTemplate, TopicSelection,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can fail a dialogue turn
#[derive(Error, Debug)]
pub enum TurnError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Oracle error: {0}")]
    Oracle(#[from] OracleError),
}

/// Strategy applied to the session's base instructions before each call
pub trait InstructionDecorator: Send + Sync {
    fn decorate(&self, base: String) -> String;
}

/// Leaves the instructions as the session composed them
pub struct PlainInstructions;

impl InstructionDecorator for PlainInstructions {
    fn decorate(&self, base: String) -> String {
        base
    }
}

/// Use case for running dialogue turns.
#[derive(Clone)]
pub struct DialogueService {
    oracle: Arc<dyn LanguageOracle>,
    max_tokens: u32,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl DialogueService {
    pub fn new(oracle: Arc<dyn LanguageOracle>, config: &EngineConfig) -> Self {
        Self {
            oracle,
            max_tokens: config.dialogue_max_tokens,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Switch the session's persona.
    ///
    /// Unknown keys fall back to the default persona; the history is cleared
    /// either way.
    pub fn select_persona(&self, session: &mut DialogueSession, key: &str) -> &'static Persona {
        if !session.set_persona(key) {
            warn!(
                "Unknown persona '{}', falling back to {}",
                key,
                session.persona().key
            );
        }
        info!("Session {} persona: {}", session.id(), session.persona().key);
        session.persona()
    }

    /// Set the session's topic, clearing the history.
    pub fn select_topic(
        &self,
        session: &mut DialogueSession,
        selection: TopicSelection,
        security: bool,
    ) -> Result<String, DomainError> {
        let topic = session.set_topic(selection, security)?.to_string();
        info!(
            "Session {} topic: {} (security: {})",
            session.id(),
            truncate_chars(&topic, 80),
            security
        );
        Ok(topic)
    }

    /// Start the dialogue by sending the opening seed for the current topic.
    pub async fn open(
        &self,
        session: &mut DialogueSession,
        decorator: &dyn InstructionDecorator,
    ) -> Result<String, TurnError> {
        let seed = session
            .topic()
            .map(PromptTemplate::opening_seed)
            .ok_or_else(|| DomainError::invalid_state("no topic selected"))?;
        self.append_and_generate(session, &seed, decorator).await
    }

    /// Append the human turn, generate and append the philosopher's reply.
    ///
    /// History grows by two on success. When the oracle fails the human turn
    /// stays in the history and the error is returned.
    pub async fn append_and_generate(
        &self,
        session: &mut DialogueSession,
        human_text: &str,
        decorator: &dyn InstructionDecorator,
    ) -> Result<String, TurnError> {
        let text = human_text.trim();
        if text.is_empty() {
            return Err(DomainError::EmptyInput.into());
        }
        let instructions = decorator.decorate(session.compose_instructions()?);

        session.push_human(text);
        let request = OracleRequest::new(instructions, session.oracle_messages(), self.max_tokens);

        debug!(
            "Session {}: generating reply ({} messages in context)",
            session.id(),
            request.messages.len()
        );

        let reply = match self.oracle.generate(&request).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Session {}: oracle failed: {}", session.id(), e);
                return Err(e.into());
            }
        };
        session.push_philosopher(reply.clone());

        self.conversation_logger
            .log(ConversationEvent::dialogue_turn(session, text, &reply));

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingLogger, ScriptedOracle};
    use agora_domain::{OracleMessage, Role, Turn};

    fn service(oracle: Arc<ScriptedOracle>) -> DialogueService {
        DialogueService::new(oracle, &EngineConfig::default())
    }

    fn session_on(topic: &str) -> DialogueSession {
        let mut session = DialogueSession::new("s1");
        session
            .set_topic(TopicSelection::Catalog(topic.to_string()), false)
            .unwrap();
        session
    }

    struct Suffix;

    impl InstructionDecorator for Suffix {
        fn decorate(&self, base: String) -> String {
            format!("{}\n\nSUFFIX", base)
        }
    }

    #[tokio::test]
    async fn test_justice_scenario() {
        let oracle = Arc::new(ScriptedOracle::replying(&["What do you mean by fair?"]));
        let service = service(oracle.clone());
        let mut session = DialogueSession::new("s1");

        let topic = service
            .select_topic(&mut session, TopicSelection::Catalog("justice".into()), false)
            .unwrap();
        let reply = service
            .append_and_generate(&mut session, "Justice is fairness", &PlainInstructions)
            .await
            .unwrap();

        assert_eq!(topic, "What is justice?");
        assert_eq!(session.topic(), Some("What is justice?"));
        assert_eq!(reply, "What do you mean by fair?");
        assert_eq!(
            session.history(),
            &[
                Turn::human("Justice is fairness"),
                Turn::philosopher("What do you mean by fair?")
            ]
        );
    }

    #[tokio::test]
    async fn test_request_carries_instructions_and_history() {
        let oracle = Arc::new(ScriptedOracle::replying(&["first", "second"]));
        let service = service(oracle.clone());
        let mut session = session_on("virtue");

        service
            .append_and_generate(&mut session, "Virtue is knowledge", &PlainInstructions)
            .await
            .unwrap();
        service
            .append_and_generate(&mut session, "Knowledge of the good", &Suffix)
            .await
            .unwrap();

        let requests = oracle.requests();
        assert_eq!(requests[0].max_output_tokens, 300);
        assert_eq!(requests[0].messages, vec![OracleMessage::human("Virtue is knowledge")]);
        assert!(requests[0].system_instructions.contains("Current topic:"));
        assert!(!requests[0].system_instructions.ends_with("SUFFIX"));

        let roles: Vec<_> = requests[1].messages.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::Human, Role::Philosopher, Role::Human]);
        assert!(requests[1].system_instructions.ends_with("SUFFIX"));
    }

    #[tokio::test]
    async fn test_oracle_failure_keeps_human_turn() {
        let oracle = Arc::new(ScriptedOracle::new(vec![Err(OracleError::Transport(
            "connection reset".into(),
        ))]));
        let service = service(oracle);
        let mut session = session_on("truth");

        let err = service
            .append_and_generate(&mut session, "Truth is correspondence", &PlainInstructions)
            .await
            .unwrap_err();

        assert!(matches!(err, TurnError::Oracle(OracleError::Transport(_))));
        assert_eq!(session.history(), &[Turn::human("Truth is correspondence")]);
    }

    #[tokio::test]
    async fn test_no_topic_is_invalid_state_without_append() {
        let oracle = Arc::new(ScriptedOracle::replying(&["unused"]));
        let service = service(oracle.clone());
        let mut session = DialogueSession::new("s1");

        let err = service
            .append_and_generate(&mut session, "Hello", &PlainInstructions)
            .await
            .unwrap_err();

        assert!(matches!(err, TurnError::Domain(DomainError::InvalidState(_))));
        assert!(session.history().is_empty());
        assert_eq!(oracle.call_count(), 0);
    }

    #[tokio::test]
    async fn test_blank_input_rejected() {
        let oracle = Arc::new(ScriptedOracle::replying(&["unused"]));
        let service = service(oracle.clone());
        let mut session = session_on("love");

        let err = service
            .append_and_generate(&mut session, "   ", &PlainInstructions)
            .await
            .unwrap_err();

        assert!(matches!(err, TurnError::Domain(DomainError::EmptyInput)));
        assert_eq!(oracle.call_count(), 0);
    }

    #[tokio::test]
    async fn test_open_sends_seed() {
        let oracle = Arc::new(ScriptedOracle::replying(&["Let us begin."]));
        let service = service(oracle.clone());
        let mut session = session_on("courage");

        service.open(&mut session, &PlainInstructions).await.unwrap();

        assert_eq!(
            session.history()[0],
            Turn::human("I want to discuss: What is courage?")
        );
        assert_eq!(session.history().len(), 2);
    }

    #[tokio::test]
    async fn test_topic_and_persona_change_clear_history() {
        let oracle = Arc::new(ScriptedOracle::echoing(2, "Hmm?"));
        let service = service(oracle);
        let mut session = session_on("beauty");

        service
            .append_and_generate(&mut session, "Beauty is symmetry", &PlainInstructions)
            .await
            .unwrap();
        service.select_persona(&mut session, "stoic");
        assert!(session.history().is_empty());
        assert_eq!(session.persona().key, "stoic");

        service
            .append_and_generate(&mut session, "Beauty is order", &PlainInstructions)
            .await
            .unwrap();
        service
            .select_topic(&mut session, TopicSelection::Custom("Is art useful?".into()), false)
            .unwrap();
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_unknown_persona_falls_back() {
        let oracle = Arc::new(ScriptedOracle::replying(&[]));
        let service = service(oracle);
        let mut session = DialogueSession::new("s1");
        assert_eq!(service.select_persona(&mut session, "sophist").key, "socratic");
    }

    #[tokio::test]
    async fn test_turn_logged() {
        let oracle = Arc::new(ScriptedOracle::replying(&["Why?"]));
        let logger = Arc::new(RecordingLogger::default());
        let service = service(oracle).with_conversation_logger(logger.clone());
        let mut session = session_on("death");

        service
            .append_and_generate(&mut session, "Death is nothing to us", &PlainInstructions)
            .await
            .unwrap();

        let payloads = logger.payloads("dialogue_turn");
        assert_eq!(payloads.len(), 1);
        assert_eq!(payloads[0]["philosopher"], "Why?");
        assert_eq!(payloads[0]["history_len"], 2);
    }
}
