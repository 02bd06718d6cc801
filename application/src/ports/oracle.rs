//! Language oracle port
//!
//! Defines the single interface through which every generation happens:
//! system instructions plus ordered messages in, text out.

use agora_domain::OracleRequest;
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while calling the oracle
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OracleError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway to a language model
///
/// Non-deterministic and fallible. Implementations (adapters) live in the
/// infrastructure layer; timeouts are their concern.
#[async_trait]
pub trait LanguageOracle: Send + Sync {
    /// Generate one reply for the request
    async fn generate(&self, request: &OracleRequest) -> Result<String, OracleError>;
}
