//! Debate configuration from TOML (`[debate]` section)

use serde::{Deserialize, Serialize};

/// Raw debate configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDebateConfig {
    /// Turns when `--turns` is not given
    pub turns: usize,
    /// Prior entries each debater sees
    pub context_window: usize,
    /// Length of the opponent quote in rebuttal prompts
    pub excerpt_chars: usize,
}

impl Default for FileDebateConfig {
    fn default() -> Self {
        Self {
            turns: 6,
            context_window: 3,
            excerpt_chars: 200,
        }
    }
}
