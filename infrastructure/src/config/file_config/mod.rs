//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application types
//! after validation.

mod debate;
mod dialogue;
mod logging;
mod oracle;

pub use debate::FileDebateConfig;
pub use dialogue::{FileDialogueConfig, FileDifficultyConfig};
pub use logging::FileLoggingConfig;
pub use oracle::FileOracleConfig;

use agora_application::EngineConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("oracle.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("oracle.model cannot be empty")]
    EmptyModelName,

    #[error("{0} must be at least 1")]
    ZeroValue(&'static str),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Language oracle connection
    pub oracle: FileOracleConfig,
    /// Dialogue defaults
    pub dialogue: FileDialogueConfig,
    /// Adaptive difficulty
    pub difficulty: FileDifficultyConfig,
    /// Debate defaults
    pub debate: FileDebateConfig,
    /// Log destinations
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.oracle.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.oracle.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        let counts = [
            ("dialogue.max_tokens", self.dialogue.max_tokens as usize),
            ("difficulty.reassess_every", self.difficulty.reassess_every),
            ("difficulty.assessment_window", self.difficulty.assessment_window),
            ("debate.turns", self.debate.turns),
            ("debate.context_window", self.debate.context_window),
            ("debate.excerpt_chars", self.debate.excerpt_chars),
        ];
        if let Some((field, _)) = counts.iter().find(|(_, value)| *value == 0) {
            return Err(ConfigValidationError::ZeroValue(*field));
        }

        Ok(())
    }

    /// Engine parameters described by this file
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::default()
            .with_dialogue_max_tokens(self.dialogue.max_tokens)
            .with_reassess_every(self.difficulty.reassess_every)
            .with_assessment_window(self.difficulty.assessment_window)
            .with_debate_context_window(self.debate.context_window)
            .with_opponent_excerpt_chars(self.debate.excerpt_chars)
            .with_default_debate_turns(self.debate.turns)
    }

    /// Render the effective configuration as TOML with any inline API key masked
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        let mut shown = self.clone();
        if shown.oracle.api_key.is_some() {
            shown.oracle.api_key = Some("********".to_string());
        }
        toml::to_string_pretty(&shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_toml_masks_api_key() {
        let mut config = FileConfig::default();
        config.oracle.api_key = Some("sk-secret".to_string());

        let rendered = config.to_toml_string().unwrap();

        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("********"));
        let reparsed: FileConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(reparsed.debate, config.debate);
    }

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[oracle]
model = "claude-opus-4"
api_key_env = "AGORA_KEY"
timeout_seconds = 30

[dialogue]
persona = "stoic"
max_tokens = 500

[difficulty]
adaptive = false
reassess_every = 4

[debate]
turns = 8
context_window = 2

[logging]
conversation_log = "agora.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.oracle.model, "claude-opus-4");
        assert_eq!(config.oracle.api_key_env, "AGORA_KEY");
        assert_eq!(config.oracle.base_url, "https://api.anthropic.com");
        assert_eq!(config.dialogue.persona, "stoic");
        assert!(!config.difficulty.adaptive);
        assert_eq!(config.difficulty.assessment_window, 5);
        assert_eq!(config.debate.turns, 8);
        assert_eq!(config.logging.conversation_log.as_deref(), Some("agora.jsonl"));
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.engine_config(), EngineConfig::default());
    }

    #[test]
    fn test_engine_config_conversion() {
        let config: FileConfig = toml::from_str(
            r#"
[dialogue]
max_tokens = 450

[debate]
excerpt_chars = 120
"#,
        )
        .unwrap();

        let engine = config.engine_config();
        assert_eq!(engine.dialogue_max_tokens, 450);
        assert_eq!(engine.opponent_excerpt_chars, 120);
        assert_eq!(engine.reassess_every, 6);
    }

    #[test]
    fn test_validate_zero_timeout() {
        let config: FileConfig = toml::from_str("[oracle]\ntimeout_seconds = 0").unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));
    }

    #[test]
    fn test_validate_zero_cadence() {
        let config: FileConfig = toml::from_str("[difficulty]\nreassess_every = 0").unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::ZeroValue("difficulty.reassess_every"))
        );
    }

    #[test]
    fn test_validate_empty_model() {
        let config: FileConfig = toml::from_str("[oracle]\nmodel = \"  \"").unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyModelName));
    }

    #[test]
    fn test_inline_api_key_wins() {
        let oracle = FileOracleConfig {
            api_key: Some("sk-inline".to_string()),
            api_key_env: "AGORA_TEST_UNSET_VARIABLE".to_string(),
            ..Default::default()
        };
        assert_eq!(oracle.resolve_api_key().as_deref(), Some("sk-inline"));

        let missing = FileOracleConfig {
            api_key_env: "AGORA_TEST_UNSET_VARIABLE".to_string(),
            ..Default::default()
        };
        assert!(missing.resolve_api_key().is_none());
    }
}
