//! Session store port
//!
//! Conversations are looked up by an opaque id instead of living in
//! process-wide globals. Each conversation sits behind its own async mutex,
//! so holding the guard serializes turns against that session.

use agora_domain::{Conversation, SessionId};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared handle to one conversation
pub type SharedConversation = Arc<Mutex<Conversation>>;

/// Keyed storage of conversations
pub trait SessionStore: Send + Sync {
    /// Fetch the conversation for `id`, creating a fresh one when absent
    fn get_or_create(&self, id: &SessionId) -> SharedConversation;

    /// Fetch an existing conversation
    fn get(&self, id: &SessionId) -> Option<SharedConversation>;

    /// Drop a conversation; returns whether it existed
    fn remove(&self, id: &SessionId) -> bool;

    /// Number of stored conversations
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
