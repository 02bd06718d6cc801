//! Bounded debate context
//!
//! Each debater sees only the last few exchange entries. Its own entries are
//! replayed in the philosopher role and its opponent's in the human role, so
//! the oracle always speaks as the debater whose turn it is.

use super::entities::{DebateEntry, DebateSide};
use crate::oracle::OracleMessage;
use crate::util::truncate_chars;

/// The last `window` entries of the log
pub fn context_window(log: &[DebateEntry], window: usize) -> &[DebateEntry] {
    &log[log.len().saturating_sub(window)..]
}

/// Replay `entries` from the point of view of `speaker`
///
/// Roles are keyed by side rather than persona so a persona can debate
/// itself.
pub fn to_oracle_messages(entries: &[DebateEntry], speaker: DebateSide) -> Vec<OracleMessage> {
    entries
        .iter()
        .map(|entry| {
            if entry.side == speaker {
                OracleMessage::philosopher(entry.text.clone())
            } else {
                OracleMessage::human(entry.text.clone())
            }
        })
        .collect()
}

/// The opponent's latest message, cut to `max_chars`
pub fn opponent_excerpt(log: &[DebateEntry], speaker: DebateSide, max_chars: usize) -> &str {
    log.iter()
        .rev()
        .find(|entry| entry.side != speaker)
        .map(|entry| truncate_chars(&entry.text, max_chars))
        .unwrap_or_default()
}

/// Plain-text rendering of the whole exchange for the judge
pub fn format_transcript(log: &[DebateEntry]) -> String {
    let mut lines = Vec::with_capacity(log.len() * 3);
    for entry in log {
        lines.push(format!("Turn {} - {} ({}):", entry.turn, entry.persona_name(), entry.side));
        lines.push(entry.text.clone());
        lines.push(String::new());
    }
    lines.join("\n")
}
