use crate::parsing::PayloadError;
use serde::Serialize;

/// What an analyzer hands back
///
/// Callers always receive a value; the variant says how far the analysis got.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum AnalysisOutcome<T> {
    Ready(T),
    /// Input was rejected before any oracle call
    InsufficientInput(String),
    /// The oracle replied but the payload could not be used
    Unparseable { reason: String, raw: String },
    OracleUnavailable(String),
}

impl<T> AnalysisOutcome<T> {
    /// Wrap a payload parse result, keeping the raw reply on failure
    pub fn from_parse(result: Result<T, PayloadError>, raw: &str) -> Self {
        match result {
            Ok(value) => AnalysisOutcome::Ready(value),
            Err(e) => AnalysisOutcome::Unparseable {
                reason: e.to_string(),
                raw: raw.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, AnalysisOutcome::Ready(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            AnalysisOutcome::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_ready(self) -> Option<T> {
        match self {
            AnalysisOutcome::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> AnalysisOutcome<U> {
        match self {
            AnalysisOutcome::Ready(value) => AnalysisOutcome::Ready(f(value)),
            AnalysisOutcome::InsufficientInput(r) => AnalysisOutcome::InsufficientInput(r),
            AnalysisOutcome::Unparseable { reason, raw } => {
                AnalysisOutcome::Unparseable { reason, raw }
            }
            AnalysisOutcome::OracleUnavailable(d) => AnalysisOutcome::OracleUnavailable(d),
        }
    }

    /// Short human-readable reason when not ready
    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            AnalysisOutcome::Ready(_) => None,
            AnalysisOutcome::InsufficientInput(r) => Some(r),
            AnalysisOutcome::Unparseable { reason, .. } => Some(reason),
            AnalysisOutcome::OracleUnavailable(d) => Some(d),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parse_keeps_raw() {
        let outcome: AnalysisOutcome<u8> =
            AnalysisOutcome::from_parse(Err(PayloadError::NotFound("object")), "nope");
        assert_eq!(
            outcome,
            AnalysisOutcome::Unparseable {
                reason: "no object payload found in reply".to_string(),
                raw: "nope".to_string(),
            }
        );
        assert!(outcome.failure_reason().is_some());
    }

    #[test]
    fn test_map_ready() {
        let outcome = AnalysisOutcome::Ready(2).map(|n| n * 10);
        assert_eq!(outcome.into_ready(), Some(20));
    }
}
