//! Engine parameters
//!
//! [`EngineConfig`] groups the knobs that control the dialogue and debate
//! loops. Values come from the file config layer; the defaults reproduce the
//! reference behaviour.

use serde::{Deserialize, Serialize};

/// Dialogue and debate loop parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Output budget of a philosopher reply in a dialogue.
    pub dialogue_max_tokens: u32,
    /// Reassess difficulty whenever the history length is a multiple of this.
    pub reassess_every: usize,
    /// How many recent human turns the assessor reads.
    pub assessment_window: usize,
    /// How many recent exchange entries a debater sees.
    pub debate_context_window: usize,
    /// Length of the opponent quote in a rebuttal prompt.
    pub opponent_excerpt_chars: usize,
    /// Turn count when a caller does not pick one.
    pub default_debate_turns: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dialogue_max_tokens: 300,
            reassess_every: 6,
            assessment_window: 5,
            debate_context_window: 3,
            opponent_excerpt_chars: 200,
            default_debate_turns: 6,
        }
    }
}

impl EngineConfig {
    // ==================== Builder Methods ====================

    pub fn with_dialogue_max_tokens(mut self, tokens: u32) -> Self {
        self.dialogue_max_tokens = tokens;
        self
    }

    pub fn with_reassess_every(mut self, turns: usize) -> Self {
        self.reassess_every = turns;
        self
    }

    pub fn with_assessment_window(mut self, turns: usize) -> Self {
        self.assessment_window = turns;
        self
    }

    pub fn with_debate_context_window(mut self, entries: usize) -> Self {
        self.debate_context_window = entries;
        self
    }

    pub fn with_opponent_excerpt_chars(mut self, chars: usize) -> Self {
        self.opponent_excerpt_chars = chars;
        self
    }

    pub fn with_default_debate_turns(mut self, turns: usize) -> Self {
        self.default_debate_turns = turns;
        self
    }
}

/// Output budgets of the analytical oracle roles
pub mod budgets {
    pub const ASSESSMENT: u32 = 800;
    pub const DEBATE_TURN: u32 = 400;
    pub const JUDGE: u32 = 1200;
    pub const DIALOGUE_ANALYSIS: u32 = 2000;
    pub const CONTRADICTION: u32 = 300;
    pub const CLAIMS: u32 = 500;
    pub const THREAT_MODEL: u32 = 2000;
    pub const CONTROL: u32 = 2000;
    pub const CHALLENGE: u32 = 800;
    pub const RED_TEAM: u32 = 2000;
    pub const COMPLIANCE: u32 = 1500;
}
