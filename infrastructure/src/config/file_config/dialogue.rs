//! Dialogue and difficulty configuration from TOML (`[dialogue]`, `[difficulty]`)

use serde::{Deserialize, Serialize};

/// Raw dialogue configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDialogueConfig {
    /// Persona key used when a chat starts
    pub persona: String,
    /// Output budget of a philosopher reply
    pub max_tokens: u32,
}

impl Default for FileDialogueConfig {
    fn default() -> Self {
        Self {
            persona: "socratic".to_string(),
            max_tokens: 300,
        }
    }
}

/// Raw difficulty configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDifficultyConfig {
    /// Adapt the philosopher's register to the human
    pub adaptive: bool,
    /// Reassess whenever the history length is a multiple of this
    pub reassess_every: usize,
    /// Recent human turns read by the assessor
    pub assessment_window: usize,
}

impl Default for FileDifficultyConfig {
    fn default() -> Self {
        Self {
            adaptive: true,
            reassess_every: 6,
            assessment_window: 5,
        }
    }
}
