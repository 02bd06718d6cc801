//! Shared utilities for use cases.
//!
//! Contains the one-shot oracle consultation used by the stateless analyzers
//! (ArgumentAnalyzer, ThreatInterrogator).

use crate::ports::oracle::LanguageOracle;
use agora_domain::{AnalysisOutcome, OracleRequest, PayloadError};
use tracing::{debug, warn};

/// Reject blank input before any oracle call.
pub(crate) fn require_text<T>(label: &str, text: &str) -> Result<(), AnalysisOutcome<T>> {
    if text.trim().is_empty() {
        return Err(AnalysisOutcome::InsufficientInput(format!(
            "{} cannot be empty",
            label
        )));
    }
    Ok(())
}

/// Send a single analytical prompt and parse the payload out of the reply.
///
/// Oracle failures become [`AnalysisOutcome::OracleUnavailable`] and parse
/// failures [`AnalysisOutcome::Unparseable`] with the raw reply attached.
pub(crate) async fn consult<T>(
    oracle: &dyn LanguageOracle,
    role: &'static str,
    prompt: String,
    max_output_tokens: u32,
    parse: impl FnOnce(&str) -> Result<T, PayloadError>,
) -> AnalysisOutcome<T> {
    let request = OracleRequest::single_prompt(prompt, max_output_tokens);
    debug!("Consulting oracle for {}", role);

    let reply = match oracle.generate(&request).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!("{}: oracle unavailable: {}", role, e);
            return AnalysisOutcome::OracleUnavailable(e.to_string());
        }
    };

    let outcome = AnalysisOutcome::from_parse(parse(&reply), &reply);
    if let Some(reason) = outcome.failure_reason() {
        warn!("{}: unusable reply: {}", role, reason);
    }
    outcome
}
