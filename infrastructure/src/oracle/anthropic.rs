//! Anthropic Messages API oracle.
//!
//! Sends one non-streaming `POST {base_url}/v1/messages` per request. No
//! retries; the configured timeout bounds every call.

use agora_application::ports::oracle::{LanguageOracle, OracleError};
use agora_domain::{OracleRequest, Role};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_API_VERSION: &str = "2023-06-01";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Connection settings for the Anthropic API
#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub api_version: String,
    pub timeout: Duration,
}

impl AnthropicConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/messages", self.base_url.trim_end_matches('/'))
    }
}

/// [`LanguageOracle`] backed by the Anthropic Messages API
pub struct AnthropicOracle {
    client: reqwest::Client,
    config: AnthropicConfig,
}

impl AnthropicOracle {
    pub fn new(config: AnthropicConfig) -> Result<Self, OracleError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| OracleError::Other(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }
}

fn api_role(role: Role) -> &'static str {
    match role {
        Role::Human => "user",
        Role::Philosopher => "assistant",
    }
}

/// Build the Messages API body.
///
/// Consecutive messages with the same role are merged, since the API
/// expects alternating roles. Empty system instructions are omitted.
fn request_body(model: &str, request: &OracleRequest) -> Value {
    let mut messages: Vec<(Role, String)> = Vec::with_capacity(request.messages.len());
    for message in &request.messages {
        match messages.last_mut() {
            Some((role, text)) if *role == message.role => {
                text.push_str("\n\n");
                text.push_str(&message.text);
            }
            _ => messages.push((message.role, message.text.clone())),
        }
    }

    let mut body = json!({
        "model": model,
        "max_tokens": request.max_output_tokens,
        "messages": messages
            .iter()
            .map(|(role, text)| json!({"role": api_role(*role), "content": text}))
            .collect::<Vec<_>>(),
    });
    if !request.system_instructions.is_empty() {
        body["system"] = Value::String(request.system_instructions.clone());
    }
    body
}

/// Concatenate the text blocks of a Messages API response.
fn response_text(response: &Value) -> Result<String, OracleError> {
    let blocks = response["content"]
        .as_array()
        .ok_or_else(|| OracleError::InvalidResponse("missing content array".to_string()))?;

    let text: Vec<&str> = blocks
        .iter()
        .filter(|block| block["type"] == "text")
        .filter_map(|block| block["text"].as_str())
        .collect();
    if text.is_empty() {
        return Err(OracleError::InvalidResponse(
            "response contained no text".to_string(),
        ));
    }
    Ok(text.concat())
}

fn status_error(status: StatusCode, body: String) -> OracleError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => OracleError::Authentication(body),
        StatusCode::TOO_MANY_REQUESTS => OracleError::RateLimited(body),
        _ => OracleError::Other(format!("HTTP {}: {}", status, body)),
    }
}

#[async_trait]
impl LanguageOracle for AnthropicOracle {
    async fn generate(&self, request: &OracleRequest) -> Result<String, OracleError> {
        let body = request_body(&self.config.model, request);
        debug!(
            "Anthropic request: model={}, messages={}, max_tokens={}",
            self.config.model,
            request.messages.len(),
            request.max_output_tokens
        );

        let response = self
            .client
            .post(self.config.endpoint())
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", &self.config.api_version)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    OracleError::Transport(format!("request timed out: {}", e))
                } else {
                    OracleError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(status_error(status, error_text));
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| OracleError::InvalidResponse(e.to_string()))?;
        response_text(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_domain::OracleMessage;

    #[test]
    fn test_request_body_merges_consecutive_roles() {
        let request = OracleRequest::new(
            "You are Socrates.",
            vec![
                OracleMessage::human("argument 6"),
                OracleMessage::philosopher("argument 7"),
                OracleMessage::human("argument 8"),
                OracleMessage::human("Respond to your opponent: 'argument 8...'"),
            ],
            400,
        );

        let body = request_body("claude-test", &request);

        assert_eq!(body["model"], "claude-test");
        assert_eq!(body["max_tokens"], 400);
        assert_eq!(body["system"], "You are Socrates.");
        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1]["role"], "assistant");
        assert_eq!(
            messages[2]["content"],
            "argument 8\n\nRespond to your opponent: 'argument 8...'"
        );
    }

    #[test]
    fn test_request_body_omits_empty_system() {
        let body = request_body("m", &OracleRequest::single_prompt("Judge", 1200));
        assert!(body.get("system").is_none());
        assert_eq!(body["messages"][0]["role"], "user");
    }

    #[test]
    fn test_response_text() {
        let response = json!({
            "content": [
                {"type": "text", "text": "What is "},
                {"type": "text", "text": "justice?"}
            ]
        });
        assert_eq!(response_text(&response).unwrap(), "What is justice?");

        let empty = json!({"content": []});
        assert!(matches!(response_text(&empty), Err(OracleError::InvalidResponse(_))));
        assert!(response_text(&json!({"error": "x"})).is_err());
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            status_error(StatusCode::UNAUTHORIZED, "bad key".into()),
            OracleError::Authentication(_)
        ));
        assert!(matches!(
            status_error(StatusCode::TOO_MANY_REQUESTS, "slow".into()),
            OracleError::RateLimited(_)
        ));
        assert!(matches!(
            status_error(StatusCode::INTERNAL_SERVER_ERROR, "boom".into()),
            OracleError::Other(_)
        ));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let config = AnthropicConfig::new("key").with_base_url("http://localhost:8080/");
        assert_eq!(config.endpoint(), "http://localhost:8080/v1/messages");
    }
}
