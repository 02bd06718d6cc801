//! Turn value object

use serde::{Deserialize, Serialize};

/// Who produced a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Human,
    Philosopher,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Human => "human",
            Role::Philosopher => "philosopher",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One message in a dialogue history
///
/// The sequence position is the index in the owning history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
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

    pub fn is_human(&self) -> bool {
        self.role == Role::Human
    }
}

/// The human turns of a history, oldest first
pub fn human_turns(history: &[Turn]) -> impl DoubleEndedIterator<Item = &Turn> {
    history.iter().filter(|turn| turn.is_human())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&Turn::human("hi")).unwrap();
        assert_eq!(json, r#"{"role":"human","text":"hi"}"#);
    }

    #[test]
    fn test_human_turns_filter() {
        let history = vec![
            Turn::human("a"),
            Turn::philosopher("b"),
            Turn::human("c"),
        ];
        let texts: Vec<_> = human_turns(&history).map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "c"]);
    }
}
