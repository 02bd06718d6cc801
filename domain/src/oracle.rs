//! Oracle request value objects
//!
//! Every generation the engine performs is described by one
//! [`OracleRequest`]: system instructions plus an ordered message history.

use crate::dialogue::Role;
use serde::{Deserialize, Serialize};

/// One message in an oracle request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleMessage {
    pub role: Role,
    pub text: String,
}

impl OracleMessage {
    pub fn human(text: impl Into<String>) -> Self {
        Self {
            role: Role::Human,
            text: text.into(),
        }
    }

    pub fn philosopher(text: impl Into<String>) -> Self {
        Self {
            role: Role::Philosopher,
            text: text.into(),
        }
    }
}

/// A complete request to the language oracle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleRequest {
    pub system_instructions: String,
    pub messages: Vec<OracleMessage>,
    pub max_output_tokens: u32,
}

impl OracleRequest {
    pub fn new(
        system_instructions: impl Into<String>,
        messages: Vec<OracleMessage>,
        max_output_tokens: u32,
    ) -> Self {
        Self {
            system_instructions: system_instructions.into(),
            messages,
            max_output_tokens,
        }
    }

    /// A single human-role prompt with no system instructions
    ///
    /// Used for the analytical roles (assessor, judge, analyzer) where the
    /// whole task is carried by the prompt.
    pub fn single_prompt(prompt: impl Into<String>, max_output_tokens: u32) -> Self {
        Self::new(String::new(), vec![OracleMessage::human(prompt)], max_output_tokens)
    }
}
