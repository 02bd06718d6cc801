//! Adaptive difficulty use case.
//!
//! Periodically measures how sophisticated the human's contributions are and
//! adjusts the philosopher's register to match. The adjustment is installed as
//! a [`DifficultyDecorator`] around the session's own instructions.
//!
//! Reassessment is a sampling policy: a failed or unparseable assessment
//! degrades to a fixed fallback and never fails the turn.

use crate::config::{EngineConfig, budgets};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::oracle::LanguageOracle;
use crate::use_cases::dialogue::{DialogueService, InstructionDecorator, TurnError};
use agora_domain::dialogue::human_turns;
use agora_domain::difficulty::{augment, should_reassess};
use agora_domain::{
    Conversation, DifficultyAssessment, DifficultyLevel, DomainError, OracleRequest,
    PromptTemplate, Turn,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Appends the fixed guidance block for a difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyDecorator {
    level: DifficultyLevel,
}

impl DifficultyDecorator {
    pub fn new(level: DifficultyLevel) -> Self {
        Self { level }
    }

    pub fn level(&self) -> DifficultyLevel {
        self.level
    }
}

impl InstructionDecorator for DifficultyDecorator {
    fn decorate(&self, base: String) -> String {
        augment(&base, self.level)
    }
}

/// Use case for difficulty-aware dialogue turns.
pub struct DifficultyController {
    oracle: Arc<dyn LanguageOracle>,
    dialogue: DialogueService,
    reassess_every: usize,
    assessment_window: usize,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl DifficultyController {
    pub fn new(oracle: Arc<dyn LanguageOracle>, config: &EngineConfig) -> Self {
        Self {
            dialogue: DialogueService::new(oracle.clone(), config),
            oracle,
            reassess_every: config.reassess_every,
            assessment_window: config.assessment_window,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger (shared with the dialogue service).
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.dialogue = self.dialogue.with_conversation_logger(logger.clone());
        self.conversation_logger = logger;
        self
    }

    pub fn dialogue(&self) -> &DialogueService {
        &self.dialogue
    }

    /// Measure the human's sophistication from their most recent turns.
    ///
    /// Fewer than two human turns yields the initial assessment without an
    /// oracle call. Oracle or parse failures yield the fallback.
    pub async fn assess(&self, history: &[Turn]) -> DifficultyAssessment {
        let mut recent: Vec<&str> = human_turns(history)
            .rev()
            .take(self.assessment_window)
            .map(|turn| turn.text.as_str())
            .collect();
        if recent.len() < 2 {
            debug!("Only {} human turn(s), keeping initial difficulty", recent.len());
            return DifficultyAssessment::initial();
        }
        recent.reverse();

        let prompt = PromptTemplate::assessment_prompt(&recent.join(" "));
        let request = OracleRequest::single_prompt(prompt, budgets::ASSESSMENT);

        match self.oracle.generate(&request).await {
            Ok(reply) => DifficultyAssessment::parse(&reply).unwrap_or_else(|e| {
                warn!("Unparseable difficulty assessment, using fallback: {}", e);
                DifficultyAssessment::fallback()
            }),
            Err(e) => {
                warn!("Difficulty assessment failed, using fallback: {}", e);
                DifficultyAssessment::fallback()
            }
        }
    }

    /// Reassess when the cadence is due, then return the decorator for the
    /// current level.
    pub async fn prepare_turn(&self, conversation: &mut Conversation) -> DifficultyDecorator {
        let len = conversation.session.history().len();
        let generation = conversation.session.history_generation();
        let already_assessed = conversation.difficulty.assessed_at(generation, len);

        if should_reassess(len, self.reassess_every) && !already_assessed {
            let assessment = self.assess(conversation.session.history()).await;
            conversation.difficulty.apply(&assessment, generation, len);
            info!(
                "Session {} difficulty: {}",
                conversation.session.id(),
                conversation.difficulty.label()
            );
            self.conversation_logger.log(ConversationEvent::difficulty_assessed(
                &conversation.session,
                len,
                &assessment,
            ));
        }

        DifficultyDecorator::new(conversation.difficulty.level)
    }

    /// The session's instructions with the current difficulty block applied.
    pub fn compose_augmented_instructions(
        &self,
        conversation: &Conversation,
    ) -> Result<String, DomainError> {
        let base = conversation.session.compose_instructions()?;
        Ok(DifficultyDecorator::new(conversation.difficulty.level).decorate(base))
    }

    /// Run one difficulty-aware dialogue turn.
    pub async fn respond(
        &self,
        conversation: &mut Conversation,
        human_text: &str,
    ) -> Result<String, TurnError> {
        let decorator = self.prepare_turn(conversation).await;
        self.dialogue
            .append_and_generate(&mut conversation.session, human_text, &decorator)
            .await
    }

    /// Open the dialogue at the current difficulty.
    pub async fn open(&self, conversation: &mut Conversation) -> Result<String, TurnError> {
        let decorator = self.prepare_turn(conversation).await;
        self.dialogue
            .open(&mut conversation.session, &decorator)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::oracle::OracleError;
    use crate::testing::{RecordingLogger, ScriptedOracle};
    use agora_domain::{DifficultyState, TopicSelection};

    const ADVANCED: &str = r#"{"vocabulary": 90, "argumentation": 85, "self_awareness": 80,
        "depth": 88, "overall_score": 86, "level": "advanced",
        "indicators": ["cites Rawls"], "recommendations": []}"#;

    fn conversation() -> Conversation {
        let mut conversation = Conversation::new("c1");
        conversation
            .session
            .set_topic(TopicSelection::Catalog("justice".into()), false)
            .unwrap();
        conversation
    }

    fn fill(conversation: &mut Conversation, pairs: usize) {
        for i in 0..pairs {
            conversation.session.push_human(format!("claim {}", i));
            conversation.session.push_philosopher(format!("question {}", i));
        }
    }

    #[tokio::test]
    async fn test_assess_short_history_skips_oracle() {
        let oracle = Arc::new(ScriptedOracle::replying(&[ADVANCED]));
        let controller = DifficultyController::new(oracle.clone(), &EngineConfig::default());

        let assessment = controller.assess(&[Turn::human("only one")]).await;

        assert_eq!(assessment, DifficultyAssessment::initial());
        assert_eq!(oracle.call_count(), 0);
    }

    #[tokio::test]
    async fn test_assess_uses_last_five_human_turns() {
        let oracle = Arc::new(ScriptedOracle::replying(&[ADVANCED]));
        let controller = DifficultyController::new(oracle.clone(), &EngineConfig::default());
        let mut conversation = conversation();
        fill(&mut conversation, 7);

        let assessment = controller.assess(conversation.session.history()).await;

        assert_eq!(assessment.level, DifficultyLevel::Advanced);
        assert_eq!(assessment.score, 86);
        let prompt = &oracle.requests()[0].messages[0].text;
        assert!(prompt.contains("claim 2 claim 3 claim 4 claim 5 claim 6"));
        assert!(!prompt.contains("claim 1"));
        assert_eq!(oracle.requests()[0].max_output_tokens, 800);
    }

    #[tokio::test]
    async fn test_assess_failures_fall_back() {
        let oracle = Arc::new(ScriptedOracle::new(vec![
            Ok("I'd say they're doing fine.".to_string()),
            Err(OracleError::RateLimited("slow down".into())),
        ]));
        let controller = DifficultyController::new(oracle, &EngineConfig::default());
        let history = [Turn::human("a"), Turn::philosopher("b"), Turn::human("c")];

        assert_eq!(controller.assess(&history).await, DifficultyAssessment::fallback());
        assert_eq!(controller.assess(&history).await, DifficultyAssessment::fallback());
    }

    #[tokio::test]
    async fn test_reassessment_fires_only_on_cadence() {
        let oracle = Arc::new(ScriptedOracle::new(Vec::new()));
        let controller = DifficultyController::new(oracle.clone(), &EngineConfig::default());

        for pairs in 0..=6 {
            let mut conversation = conversation();
            fill(&mut conversation, pairs);
            controller.prepare_turn(&mut conversation).await;
            // cumulative: one call each at lengths 6 and 12
            let expected = (1..=pairs).filter(|p| (p * 2) % 6 == 0).count();
            assert_eq!(oracle.call_count(), expected, "history length {}", pairs * 2);
        }
    }

    #[tokio::test]
    async fn test_prepare_turn_applies_assessment() {
        let oracle = Arc::new(ScriptedOracle::replying(&[ADVANCED]));
        let logger = Arc::new(RecordingLogger::default());
        let controller = DifficultyController::new(oracle.clone(), &EngineConfig::default())
            .with_conversation_logger(logger.clone());
        let mut conversation = conversation();
        fill(&mut conversation, 3);

        let decorator = controller.prepare_turn(&mut conversation).await;

        assert_eq!(decorator.level(), DifficultyLevel::Advanced);
        assert_eq!(conversation.difficulty.score, 86);
        assert_eq!(conversation.difficulty.last_assessed_turn_count, 6);
        assert_eq!(logger.event_types(), vec!["difficulty_assessed"]);

        controller.prepare_turn(&mut conversation).await;
        assert_eq!(oracle.call_count(), 1);
    }

    #[tokio::test]
    async fn test_topic_change_reassesses_at_same_length() {
        let oracle = Arc::new(ScriptedOracle::new(Vec::new()));
        let controller = DifficultyController::new(oracle.clone(), &EngineConfig::default());
        let mut conversation = conversation();
        fill(&mut conversation, 3);
        controller.prepare_turn(&mut conversation).await;
        assert_eq!(oracle.call_count(), 1);

        conversation
            .session
            .set_topic(TopicSelection::Catalog("virtue".into()), false)
            .unwrap();
        fill(&mut conversation, 3);
        controller.prepare_turn(&mut conversation).await;

        assert_eq!(conversation.session.history().len(), 6);
        assert_eq!(oracle.call_count(), 2);
    }

    #[tokio::test]
    async fn test_persona_change_reassesses_at_same_length() {
        let oracle = Arc::new(ScriptedOracle::new(Vec::new()));
        let controller = DifficultyController::new(oracle.clone(), &EngineConfig::default());
        let mut conversation = conversation();
        fill(&mut conversation, 3);
        controller.prepare_turn(&mut conversation).await;

        controller
            .dialogue()
            .select_persona(&mut conversation.session, "stoic");
        fill(&mut conversation, 3);
        controller.prepare_turn(&mut conversation).await;

        assert_eq!(oracle.call_count(), 2);
    }

    #[tokio::test]
    async fn test_reset_then_regrow_reassesses() {
        let oracle = Arc::new(ScriptedOracle::new(Vec::new()));
        let controller = DifficultyController::new(oracle.clone(), &EngineConfig::default());
        let mut conversation = conversation();
        fill(&mut conversation, 3);
        controller.prepare_turn(&mut conversation).await;

        conversation.reset();
        conversation
            .session
            .set_topic(TopicSelection::Catalog("justice".into()), false)
            .unwrap();
        fill(&mut conversation, 3);
        controller.prepare_turn(&mut conversation).await;
        assert_eq!(oracle.call_count(), 2);

        // a repeated call within the same history stays a no-op
        controller.prepare_turn(&mut conversation).await;
        assert_eq!(oracle.call_count(), 2);
    }

    #[tokio::test]
    async fn test_level_stays_defined_after_parse_failure() {
        let oracle = Arc::new(ScriptedOracle::replying(&["{\"level\": \"genius\"}", "Good."]));
        let controller = DifficultyController::new(oracle.clone(), &EngineConfig::default());
        let mut conversation = conversation();
        fill(&mut conversation, 3);

        controller.respond(&mut conversation, "Justice is harmony").await.unwrap();

        assert_eq!(conversation.difficulty.level, DifficultyLevel::Intermediate);
        assert_eq!(conversation.difficulty.score, 50);
        let turn_request = &oracle.requests()[1];
        assert!(turn_request.system_instructions.contains("DIFFICULTY: INTERMEDIATE"));
    }

    #[tokio::test]
    async fn test_respond_decorates_without_changing_session() {
        let oracle = Arc::new(ScriptedOracle::replying(&["What is fairness?"]));
        let controller = DifficultyController::new(oracle.clone(), &EngineConfig::default());
        let mut conversation = conversation();

        controller.respond(&mut conversation, "Justice is fairness").await.unwrap();

        let instructions = &oracle.requests()[0].system_instructions;
        let base = conversation.session.compose_instructions().unwrap();
        assert!(instructions.starts_with(&base));
        assert!(instructions.contains("DIFFICULTY: BEGINNER"));
        assert!(!base.contains("DIFFICULTY"));
        assert_eq!(
            controller.compose_augmented_instructions(&conversation).unwrap(),
            *instructions
        );
        assert_eq!(conversation.difficulty, DifficultyState::default());
    }

    #[tokio::test]
    async fn test_respond_oracle_failure_surfaces() {
        let oracle = Arc::new(ScriptedOracle::new(vec![Err(OracleError::Transport("down".into()))]));
        let controller = DifficultyController::new(oracle, &EngineConfig::default());
        let mut conversation = conversation();

        let result = controller.respond(&mut conversation, "Justice is fairness").await;

        assert!(matches!(result, Err(TurnError::Oracle(_))));
        assert_eq!(conversation.session.history().len(), 1);
    }
}
