//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL transcript of dialogue and debate events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_log: Option<String>,
    /// Diagnostic log file (in addition to stderr)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}
