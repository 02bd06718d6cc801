//! Conversation logging port
//!
//! Dialogue turns, difficulty assessments and debate events are recorded as
//! [`ConversationEvent`]s, one machine-readable record each. Diagnostic
//! messages go through `tracing` instead.

use agora_domain::{DebateEntry, DialogueSession, DifficultyAssessment, Judgment};
use serde_json::{Value, json};

/// One transcript record: a type tag plus an event-specific JSON payload
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationEvent {
    pub event_type: &'static str,
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    /// A completed human/philosopher exchange
    pub fn dialogue_turn(session: &DialogueSession, human: &str, philosopher: &str) -> Self {
        Self::new(
            "dialogue_turn",
            json!({
                "session": session.id().as_str(),
                "persona": session.persona().key,
                "topic": session.topic(),
                "human": human,
                "philosopher": philosopher,
                "history_len": session.history().len(),
            }),
        )
    }

    /// A reassessment taken when the history had `history_len` turns
    pub fn difficulty_assessed(
        session: &DialogueSession,
        history_len: usize,
        assessment: &DifficultyAssessment,
    ) -> Self {
        Self::new(
            "difficulty_assessed",
            json!({
                "session": session.id().as_str(),
                "history_len": history_len,
                "level": assessment.level.as_str(),
                "score": assessment.score,
                "indicators": assessment.indicators,
            }),
        )
    }

    pub fn debate_turn(entry: &DebateEntry) -> Self {
        Self::new(
            "debate_turn",
            json!({
                "turn": entry.turn,
                "side": entry.side.label(),
                "persona": entry.persona,
                "text": entry.text,
            }),
        )
    }

    pub fn debate_judged(topic: &str, judgment: &Judgment) -> Self {
        Self::new(
            "debate_judged",
            json!({
                "topic": topic,
                "judgment": judgment,
            }),
        )
    }
}

/// Sink for conversation events
///
/// `log` never fails: a broken log must not interrupt a dialogue or debate.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// Discards every event
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
