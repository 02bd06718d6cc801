//! Oracle configuration from TOML (`[oracle]` section)

use serde::{Deserialize, Serialize};

/// Raw oracle configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOracleConfig {
    /// Model identifier sent to the API
    pub model: String,
    /// API base URL (without `/v1/messages`)
    pub base_url: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Inline API key; takes precedence over `api_key_env`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// `anthropic-version` header value
    pub api_version: String,
    /// Per-request timeout
    pub timeout_seconds: u64,
}

impl Default for FileOracleConfig {
    fn default() -> Self {
        Self {
            model: "claude-sonnet-4-20250514".to_string(),
            base_url: "https://api.anthropic.com".to_string(),
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
            api_key: None,
            api_version: "2023-06-01".to_string(),
            timeout_seconds: 60,
        }
    }
}

impl FileOracleConfig {
    /// The inline key, or the value of the configured environment variable
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|key| !key.trim().is_empty())
    }
}
