//! Application-level configuration.
//!
//! - [`EngineConfig`]: dialogue, difficulty and debate loop parameters
//! - [`budgets`]: output token budgets of the analytical oracle roles

pub mod engine;

pub use engine::{EngineConfig, budgets};
