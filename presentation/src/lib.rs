//! Presentation layer for agora
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive dialogue REPL.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{DialogueEngine, DialogueRepl, ReplCommand};
pub use cli::commands::{ChatArgs, Cli, Command, DebateArgs, ThreatCommand};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{DebateProgressReporter, SimpleDebateProgress, thinking_spinner};
