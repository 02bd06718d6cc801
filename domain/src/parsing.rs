//! Structured payload extraction from free-form oracle replies.
//!
//! The oracle is asked to answer in JSON but routinely wraps the payload in
//! prose or markdown fences. These functions locate the largest bracketed
//! span (first opening bracket to last closing bracket) and parse it. They
//! are pure domain logic: no I/O, no retries.
//!
//! | Function | Span | Use Case |
//! |----------|------|----------|
//! | [`extract_json_object`] | `{ ... }` | assessments, verdicts, analyses |
//! | [`extract_json_array`] | `[ ... ]` | claim lists, question lists |
//! | [`parse_json_object`] | `{ ... }` → `T` | typed payloads |
//! | [`parse_json_array`] | `[ ... ]` → `Vec<T>` | typed lists |

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Why a structured payload could not be recovered from a reply
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    #[error("no {0} payload found in reply")]
    NotFound(&'static str),

    #[error("malformed payload: {0}")]
    Malformed(String),
}

/// Find the largest `{...}` span in `text`.
///
/// # Examples
///
/// ```
/// use agora_domain::parsing::extract_json_object;
///
/// let reply = "Here you go:\n```json\n{\"level\": \"advanced\"}\n```";
/// assert_eq!(extract_json_object(reply), Some("{\"level\": \"advanced\"}"));
/// assert_eq!(extract_json_object("no payload"), None);
/// ```
pub fn extract_json_object(text: &str) -> Option<&str> {
    extract_span(text, '{', '}')
}

/// Find the largest `[...]` span in `text`.
pub fn extract_json_array(text: &str) -> Option<&str> {
    extract_span(text, '[', ']')
}

fn extract_span(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Extract and deserialize the largest `{...}` span.
pub fn parse_json_object<T: DeserializeOwned>(text: &str) -> Result<T, PayloadError> {
    let span = extract_json_object(text).ok_or(PayloadError::NotFound("object"))?;
    serde_json::from_str(span).map_err(|e| PayloadError::Malformed(e.to_string()))
}

/// Extract and deserialize the largest `[...]` span.
pub fn parse_json_array<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, PayloadError> {
    let span = extract_json_array(text).ok_or(PayloadError::NotFound("array"))?;
    serde_json::from_str(span).map_err(|e| PayloadError::Malformed(e.to_string()))
}
