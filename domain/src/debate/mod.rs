//! Debate domain
//!
//! Two personas argue opposing positions in strict alternation; a third
//! oracle call judges the exchange.
//!
//! ```text
//! Idle ──setup──▶ Configured ──run──▶ Running(1..N) ──▶ Completed ──judge──▶ Judged
//!   ▲                                                                        │
//!   └──────────────────────────────── setup / reset ─────────────────────────┘
//! ```

mod context;
mod entities;
mod verdict;

pub use context::{context_window, format_transcript, opponent_excerpt, to_oracle_messages};
pub use entities::{DebatePhase, DebateSetup, DebateSide, DebateState, Debater, DebateEntry};
pub use verdict::{DebateReport, DebateScores, DebateVerdict, DebateWinner, Judgment};
