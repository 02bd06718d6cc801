//! Process-local session store.

use agora_application::ports::session_store::{SessionStore, SharedConversation};
use agora_domain::{Conversation, SessionId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::Mutex as AsyncMutex;
use tracing::debug;

/// [`SessionStore`] keeping conversations in a map for the life of the
/// process. Nothing is persisted.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<SessionId, SharedConversation>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn sessions(&self) -> MutexGuard<'_, HashMap<SessionId, SharedConversation>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStore for InMemorySessionStore {
    fn get_or_create(&self, id: &SessionId) -> SharedConversation {
        self.sessions()
            .entry(id.clone())
            .or_insert_with(|| {
                debug!("Creating session {}", id);
                Arc::new(AsyncMutex::new(Conversation::new(id.clone())))
            })
            .clone()
    }

    fn get(&self, id: &SessionId) -> Option<SharedConversation> {
        self.sessions().get(id).cloned()
    }

    fn remove(&self, id: &SessionId) -> bool {
        self.sessions().remove(id).is_some()
    }

    fn len(&self) -> usize {
        self.sessions().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_domain::TopicSelection;

    #[tokio::test]
    async fn test_get_or_create_returns_same_conversation() {
        let store = InMemorySessionStore::new();
        let id = SessionId::new("abc");

        {
            let conversation = store.get_or_create(&id);
            let mut guard = conversation.lock().await;
            guard
                .session
                .set_topic(TopicSelection::Catalog("justice".into()), false)
                .unwrap();
        }

        let again = store.get_or_create(&id);
        assert_eq!(again.lock().await.session.topic(), Some("What is justice?"));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = InMemorySessionStore::new();
        let a = store.get_or_create(&SessionId::new("a"));
        let b = store.get_or_create(&SessionId::new("b"));

        a.lock().await.session.push_human("hello");

        assert_eq!(b.lock().await.session.history().len(), 0);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove() {
        let store = InMemorySessionStore::new();
        let id = SessionId::new("gone");
        store.get_or_create(&id);

        assert!(store.remove(&id));
        assert!(!store.remove(&id));
        assert!(store.get(&id).is_none());
        assert!(store.is_empty());
    }
}
