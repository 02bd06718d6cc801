//! Debate progress port
//!
//! Defines the interface for reporting progress while a debate runs.

use agora_domain::{DebateEntry, DebateSide, Judgment};

/// Callback for progress updates during a debate
///
/// Implementations live in the presentation layer (spinner, web UI, ...).
pub trait DebateProgressNotifier: Send + Sync {
    /// Called before the oracle is asked for turn `turn` of `total`
    fn on_turn_start(&self, turn: usize, total: usize, side: DebateSide, speaker: &str);

    /// Called once the turn has been logged
    fn on_turn_complete(&self, entry: &DebateEntry);

    /// Called before the judge is consulted
    fn on_judging(&self);

    /// Called with the judge's outcome
    fn on_judged(&self, _judgment: &Judgment) {}
}

/// No-op notifier for when progress reporting is not needed
pub struct NoDebateProgress;

impl DebateProgressNotifier for NoDebateProgress {
    fn on_turn_start(&self, _turn: usize, _total: usize, _side: DebateSide, _speaker: &str) {}
    fn on_turn_complete(&self, _entry: &DebateEntry) {}
    fn on_judging(&self) {}
}
