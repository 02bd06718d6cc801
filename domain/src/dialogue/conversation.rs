//! Conversation record

use crate::dialogue::entities::{DialogueSession, SessionId};
use crate::difficulty::DifficultyState;

/// A dialogue session together with its difficulty state
///
/// This is the value a session store keeps per conversation identity.
#[derive(Debug, Clone)]
pub struct Conversation {
    pub session: DialogueSession,
    pub difficulty: DifficultyState,
}

impl Conversation {
    pub fn new(id: impl Into<SessionId>) -> Self {
        Self {
            session: DialogueSession::new(id),
            difficulty: DifficultyState::default(),
        }
    }

    /// Reset the session and return difficulty to its initial value
    pub fn reset(&mut self) {
        self.session.reset();
        self.difficulty.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogue::TopicSelection;
    use crate::difficulty::DifficultyLevel;

    #[test]
    fn test_reset_restores_initial_difficulty() {
        let mut conversation = Conversation::new("abc");
        conversation
            .session
            .set_topic(TopicSelection::Catalog("justice".into()), false)
            .unwrap();
        conversation.difficulty.level = DifficultyLevel::Advanced;
        conversation.difficulty.score = 90;

        conversation.reset();

        assert_eq!(conversation.session.topic(), None);
        assert_eq!(conversation.difficulty, DifficultyState::default());
    }
}
