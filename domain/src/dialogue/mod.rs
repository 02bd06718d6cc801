//! Dialogue domain
//!
//! - [`Turn`]: one message of a human/philosopher exchange
//! - [`DialogueSession`]: one conversation's mutable state
//! - [`Conversation`]: a session together with its difficulty state, the
//!   unit kept per conversation identity

mod conversation;
mod entities;
mod turn;

pub use conversation::Conversation;
pub use entities::{DialogueSession, SessionId, TopicSelection};
pub use turn::{Role, Turn, human_turns};
