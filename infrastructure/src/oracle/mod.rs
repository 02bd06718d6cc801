//! Language oracle adapters
//!
//! Implementations of the [`LanguageOracle`](agora_application::LanguageOracle)
//! port.

mod anthropic;

pub use anthropic::{AnthropicConfig, AnthropicOracle};
