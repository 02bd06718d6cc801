//! Interactive dialogue module
//!
//! Provides a line-editor based REPL for talking with a philosopher persona.

mod repl;

pub use repl::{DialogueEngine, DialogueRepl, ReplCommand};
