//! Dialogue session entity

use crate::core::error::DomainError;
use crate::dialogue::turn::Turn;
use crate::oracle::OracleMessage;
use crate::persona::{Persona, TopicCatalog};
use crate::prompt::PromptTemplate;
use serde::{Deserialize, Serialize};

/// Opaque identifier of an external conversation (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        SessionId::new(s)
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        SessionId(s)
    }
}

/// How the caller picked a topic
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicSelection {
    /// A catalog key. Keys missing from the active catalog are taken as
    /// literal topic text.
    Catalog(String),
    /// Free text used verbatim
    Custom(String),
}

impl TopicSelection {
    pub fn from_input(key_or_text: impl Into<String>, is_custom: bool) -> Self {
        if is_custom {
            TopicSelection::Custom(key_or_text.into())
        } else {
            TopicSelection::Catalog(key_or_text.into())
        }
    }

    fn resolve(&self, catalog: TopicCatalog) -> Result<String, DomainError> {
        let resolved = match self {
            TopicSelection::Catalog(key) => catalog
                .lookup(key.trim())
                .map(str::to_string)
                .unwrap_or_else(|| key.trim().to_string()),
            TopicSelection::Custom(text) => text.clone(),
        };

        if resolved.trim().is_empty() {
            return Err(DomainError::EmptyTopic);
        }
        Ok(resolved)
    }
}

/// One conversation's mutable state (Entity)
///
/// History is append-only while a conversation is live and is cleared as a
/// whole whenever the topic or persona changes. The security flag only
/// changes together with such a reset. Each clear bumps the history
/// generation, so equal lengths from different histories stay distinct.
#[derive(Debug, Clone)]
pub struct DialogueSession {
    id: SessionId,
    persona: &'static Persona,
    topic: Option<String>,
    security_mode: bool,
    history: Vec<Turn>,
    history_generation: u64,
}

impl DialogueSession {
    pub fn new(id: impl Into<SessionId>) -> Self {
        Self {
            id: id.into(),
            persona: Persona::default_persona(),
            topic: None,
            security_mode: false,
            history: Vec::new(),
            history_generation: 0,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn persona(&self) -> &'static Persona {
        self.persona
    }

    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    pub fn is_security_mode(&self) -> bool {
        self.security_mode
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    pub fn history_generation(&self) -> u64 {
        self.history_generation
    }

    fn clear_history(&mut self) {
        self.history.clear();
        self.history_generation += 1;
    }

    /// Switch persona and clear the history.
    ///
    /// Unknown keys select the default persona. Returns `false` when that
    /// fallback was taken.
    pub fn set_persona(&mut self, key: &str) -> bool {
        let found = Persona::lookup(key);
        self.persona = found.unwrap_or_else(Persona::default_persona);
        self.clear_history();
        found.is_some()
    }

    /// Resolve and set the topic, clearing the history.
    ///
    /// On error the session is left untouched.
    pub fn set_topic(
        &mut self,
        selection: TopicSelection,
        security: bool,
    ) -> Result<&str, DomainError> {
        let topic = selection.resolve(TopicCatalog::for_mode(security))?;
        self.topic = Some(topic);
        self.security_mode = security;
        self.clear_history();
        Ok(self.topic.as_deref().unwrap_or_default())
    }

    /// Build the system instructions for the next turn.
    ///
    /// Order: persona template, security augmentation (security mode only),
    /// topic statement.
    pub fn compose_instructions(&self) -> Result<String, DomainError> {
        let topic = self
            .topic
            .as_deref()
            .ok_or_else(|| DomainError::invalid_state("no topic selected"))?;

        let mut parts: Vec<String> = vec![self.persona.instruction_template.to_string()];
        if self.security_mode {
            parts.push(PromptTemplate::security_augmentation().to_string());
        }
        parts.push(PromptTemplate::topic_statement(topic));

        Ok(parts.join("\n\n"))
    }

    /// The full history as oracle messages
    pub fn oracle_messages(&self) -> Vec<OracleMessage> {
        self.history
            .iter()
            .map(|turn| OracleMessage {
                role: turn.role,
                text: turn.text.clone(),
            })
            .collect()
    }

    pub fn push_human(&mut self, text: impl Into<String>) {
        self.history.push(Turn::human(text));
    }

    pub fn push_philosopher(&mut self, text: impl Into<String>) {
        self.history.push(Turn::philosopher(text));
    }

    /// Clear history, topic and security flag. The persona is kept.
    pub fn reset(&mut self) {
        self.clear_history();
        self.topic = None;
        self.security_mode = false;
    }

    /// Plain-text export of the dialogue
    pub fn transcript(&self) -> Result<String, DomainError> {
        if self.history.is_empty() {
            return Err(DomainError::invalid_state("no dialogue to export"));
        }

        let rule = "=".repeat(60);
        let mut out = String::new();
        out.push_str("Agora Dialogue Export\n");
        out.push_str(&format!("Topic: {}\n", self.topic.as_deref().unwrap_or("Open inquiry")));
        out.push_str(&format!("Persona: {}\n", self.persona.display_name));
        if self.security_mode {
            out.push_str("Mode: Security\n");
        }
        out.push_str(&rule);
        out.push_str("\n\n");

        for (i, turn) in self.history.iter().enumerate() {
            let speaker = if turn.is_human() {
                "You"
            } else {
                self.persona.display_name
            };
            out.push_str(&format!("{} (Turn {}):\n{}\n\n", speaker, i + 1, turn.text));
        }

        out.push_str(&rule);
        out.push('\n');
        Ok(out)
    }

    /// Suggested file name for an exported transcript
    pub fn transcript_file_name(&self) -> String {
        let topic: String = self
            .topic
            .as_deref()
            .unwrap_or("dialogue")
            .chars()
            .take(20)
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect();
        format!("dialogue_{}.txt", topic)
    }
}
