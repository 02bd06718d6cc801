//! Application layer for agora
//!
//! This crate contains use cases, port definitions, and engine configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use config::EngineConfig;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    oracle::{LanguageOracle, OracleError},
    progress::{DebateProgressNotifier, NoDebateProgress},
    session_store::{SessionStore, SharedConversation},
};
pub use use_cases::adaptive_difficulty::{DifficultyController, DifficultyDecorator};
pub use use_cases::analyze_arguments::ArgumentAnalyzer;
pub use use_cases::dialogue::{DialogueService, InstructionDecorator, PlainInstructions, TurnError};
pub use use_cases::interrogate_threats::ThreatInterrogator;
pub use use_cases::run_debate::{DebateError, DebateOrchestrator};
