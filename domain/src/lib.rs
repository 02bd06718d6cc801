//! Domain layer for agora
//!
//! This crate contains the rules of philosophical dialogue and debate:
//! entities, value objects and prompt templates. It performs no I/O; every
//! generation is described as an [`OracleRequest`] and executed by the
//! application layer.
//!
//! # Core Concepts
//!
//! ## Dialogue
//!
//! A human converses with one philosopher [`Persona`] about a topic. The
//! [`DialogueSession`] owns the history and composes the system instructions
//! (persona, optional security framing, topic) for every turn.
//!
//! ## Difficulty
//!
//! The human's sophistication is periodically measured and the philosopher's
//! register follows it ([`DifficultyState`], [`DifficultyLevel`]).
//!
//! ## Debate
//!
//! Two personas defend opposing positions in strict alternation with a
//! bounded context window, then a judge scores the exchange
//! ([`DebateState`], [`Judgment`]).
//!
//! ## Analysis
//!
//! Stateless argument and security interrogation results
//! ([`AnalysisOutcome`]).

pub mod analysis;
pub mod core;
pub mod debate;
pub mod dialogue;
pub mod difficulty;
pub mod oracle;
pub mod parsing;
pub mod persona;
pub mod prompt;
pub mod util;

// Re-export commonly used types
pub use analysis::{
    AnalysisOutcome, ArgumentAnalysis, ArgumentGraph, ComplianceAssessment, ContradictionCheck,
    ControlInterrogation, RedTeamReport, ThreatModelAnalysis,
};
pub use core::error::DomainError;
pub use debate::{
    DebateEntry, DebatePhase, DebateReport, DebateScores, DebateSetup, DebateSide, DebateState,
    DebateVerdict, DebateWinner, Debater, Judgment,
};
pub use dialogue::{Conversation, DialogueSession, Role, SessionId, TopicSelection, Turn};
pub use difficulty::{DifficultyAssessment, DifficultyLevel, DifficultyState};
pub use oracle::{OracleMessage, OracleRequest};
pub use parsing::PayloadError;
pub use persona::{Persona, TopicCatalog, TopicEntry};
pub use prompt::{AnalysisPromptTemplate, DebatePromptTemplate, PromptTemplate};
