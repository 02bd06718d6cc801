//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod adaptive_difficulty;
pub mod analyze_arguments;
pub mod dialogue;
pub mod interrogate_threats;
pub mod run_debate;
pub(crate) mod shared;
