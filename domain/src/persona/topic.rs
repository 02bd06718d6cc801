//! Topic catalogs

use serde::Serialize;

/// Menu key under which callers offer a free-text topic
pub const CUSTOM_TOPIC_KEY: &str = "custom";

/// A catalog topic: short key plus the question the dialogue examines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopicEntry {
    pub key: &'static str,
    pub text: &'static str,
}

/// Which topic catalog applies
///
/// Security mode selects [`TopicCatalog::Security`]; every other session
/// uses [`TopicCatalog::General`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicCatalog {
    General,
    Security,
}

impl TopicCatalog {
    /// Catalog for a session's security flag
    pub fn for_mode(security: bool) -> Self {
        if security {
            TopicCatalog::Security
        } else {
            TopicCatalog::General
        }
    }

    /// Entries in declaration order
    pub fn entries(self) -> &'static [TopicEntry] {
        match self {
            TopicCatalog::General => &GENERAL_TOPICS,
            TopicCatalog::Security => &SECURITY_TOPICS,
        }
    }

    /// Resolve a topic key to its question text
    pub fn lookup(self, key: &str) -> Option<&'static str> {
        self.entries()
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.text)
    }

    /// Resolve a 1-based menu position to its entry
    pub fn nth(self, position: usize) -> Option<&'static TopicEntry> {
        position
            .checked_sub(1)
            .and_then(|index| self.entries().get(index))
    }
}

static GENERAL_TOPICS: [TopicEntry; 11] = [
    TopicEntry { key: "justice", text: "What is justice?" },
    TopicEntry { key: "knowledge", text: "What is knowledge? How do we know what we know?" },
    TopicEntry { key: "virtue", text: "What is virtue? Can it be taught?" },
    TopicEntry { key: "beauty", text: "What is beauty?" },
    TopicEntry { key: "truth", text: "What is truth?" },
    TopicEntry { key: "love", text: "What is love? (Eros, philia, agape)" },
    TopicEntry { key: "death", text: "Should we fear death?" },
    TopicEntry { key: "freedom", text: "What is freedom? Are we truly free?" },
    TopicEntry { key: "happiness", text: "What is the good life? What makes a life worth living?" },
    TopicEntry { key: "courage", text: "What is courage?" },
    TopicEntry { key: "piety", text: "What is piety? What do we owe the gods (or the sacred)?" },
];

static SECURITY_TOPICS: [TopicEntry; 8] = [
    TopicEntry { key: "trust", text: "What does it mean to trust a system? Can trust ever be verified?" },
    TopicEntry { key: "security_theater", text: "When does a security control protect, and when does it only reassure?" },
    TopicEntry { key: "insider", text: "Who is the insider? Where does the perimeter of an organization really lie?" },
    TopicEntry { key: "privacy", text: "What is privacy? Is it a right, a preference, or a property of systems?" },
    TopicEntry { key: "risk", text: "What is an acceptable risk, and who gets to accept it?" },
    TopicEntry { key: "compliance", text: "Is a compliant system a secure system?" },
    TopicEntry { key: "disclosure", text: "Is it ever right to disclose a vulnerability before it is fixed?" },
    TopicEntry { key: "zero_trust", text: "Can a system trust nothing and still function?" },
];
