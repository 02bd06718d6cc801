//! Difficulty state and the pure policy functions around it

use super::assessment::DifficultyAssessment;
use super::level::DifficultyLevel;
use crate::prompt::PromptTemplate;
use serde::{Deserialize, Serialize};

/// Score of a fresh conversation
pub const INITIAL_SCORE: u8 = 30;

/// Difficulty attached 1:1 to a dialogue session
///
/// Never absent: a new conversation starts at beginner/30, and failed
/// assessments fall back to a concrete level instead of clearing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyState {
    pub level: DifficultyLevel,
    pub score: u8,
    pub last_assessed_turn_count: usize,
    /// History generation the last assessment was taken in
    #[serde(default)]
    pub last_assessed_generation: u64,
}

impl Default for DifficultyState {
    fn default() -> Self {
        Self {
            level: DifficultyLevel::Beginner,
            score: INITIAL_SCORE,
            last_assessed_turn_count: 0,
            last_assessed_generation: 0,
        }
    }
}

impl DifficultyState {
    /// Record an assessment taken at `turn_count` of history `generation`
    pub fn apply(
        &mut self,
        assessment: &DifficultyAssessment,
        generation: u64,
        turn_count: usize,
    ) {
        self.level = assessment.level;
        self.score = assessment.score;
        self.last_assessed_generation = generation;
        self.last_assessed_turn_count = turn_count;
    }

    /// Whether this exact point of this exact history was already assessed
    pub fn assessed_at(&self, generation: u64, turn_count: usize) -> bool {
        turn_count > 0
            && self.last_assessed_generation == generation
            && self.last_assessed_turn_count == turn_count
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Display label, e.g. `Beginner (30/100)`
    pub fn label(&self) -> String {
        format!("{} ({}/100)", self.level.title(), self.score)
    }
}

/// Reassessment sampling policy: every `cadence` turns, never at zero.
pub fn should_reassess(history_len: usize, cadence: usize) -> bool {
    cadence > 0 && history_len > 0 && history_len % cadence == 0
}

/// Append the instruction block for `level` to `base`.
pub fn augment(base: &str, level: DifficultyLevel) -> String {
    format!("{}\n\n{}", base, PromptTemplate::difficulty_block(level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = DifficultyState::default();
        assert_eq!(state.level, DifficultyLevel::Beginner);
        assert_eq!(state.score, 30);
        assert_eq!(state.last_assessed_turn_count, 0);
        assert_eq!(state.label(), "Beginner (30/100)");
    }

    #[test]
    fn test_should_reassess_every_six() {
        let fired: Vec<usize> = (0..=20).filter(|&n| should_reassess(n, 6)).collect();
        assert_eq!(fired, vec![6, 12, 18]);
    }

    #[test]
    fn test_should_reassess_zero_cadence_never_fires() {
        assert!(!should_reassess(6, 0));
    }

    #[test]
    fn test_augment_appends_level_block() {
        let out = augment("BASE", DifficultyLevel::Advanced);
        assert!(out.starts_with("BASE\n\n"));
        assert!(out.ends_with(PromptTemplate::difficulty_block(DifficultyLevel::Advanced)));
    }

    #[test]
    fn test_apply_and_reset() {
        let mut state = DifficultyState::default();
        state.apply(&DifficultyAssessment::fallback(), 2, 12);
        assert_eq!(state.level, DifficultyLevel::Intermediate);
        assert_eq!(state.score, 50);
        assert_eq!(state.last_assessed_turn_count, 12);
        assert!(state.assessed_at(2, 12));
        assert!(!state.assessed_at(3, 12));
        assert!(!state.assessed_at(2, 18));

        state.reset();
        assert_eq!(state, DifficultyState::default());
    }
}
