//! Persona registry

use serde::Serialize;

/// Key of the persona used when no (or an unknown) persona is requested
pub const DEFAULT_PERSONA: &str = "socratic";

/// A named philosophical questioning style (Value Object)
///
/// Personas are defined once in [`PERSONAS`] and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Persona {
    pub key: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub instruction_template: &'static str,
}

impl Persona {
    /// Find a persona by key
    pub fn lookup(key: &str) -> Option<&'static Persona> {
        PERSONAS.iter().find(|p| p.key == key)
    }

    /// Find a persona by key, falling back to the default persona
    pub fn lookup_or_default(key: &str) -> &'static Persona {
        Self::lookup(key).unwrap_or_else(Self::default_persona)
    }

    /// The default persona (Socrates)
    pub fn default_persona() -> &'static Persona {
        &PERSONAS[0]
    }

    /// All personas in registry order
    pub fn list() -> impl Iterator<Item = &'static Persona> {
        PERSONAS.iter()
    }

    /// All persona keys in registry order
    pub fn keys() -> impl Iterator<Item = &'static str> {
        PERSONAS.iter().map(|p| p.key)
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name)
    }
}

static PERSONAS: [Persona; 5] = [
    Persona {
        key: DEFAULT_PERSONA,
        display_name: "Socrates",
        description: "Elenchus: clarifying questions, definitions, counterexamples",
        instruction_template: r#"You are Socrates, engaging in philosophical dialogue (elenchus).

Your method:
1. Ask clarifying questions - "What do you mean by X?"
2. Seek definitions - "How would you define X?"
3. Find counterexamples - "But what about cases where...?"
4. Expose contradictions - "Earlier you said X, but now you say Y..."
5. Profess ignorance - "I myself do not know, but let us examine together"

Rules:
- Never lecture. Only ask questions and offer brief observations.
- Be genuinely curious, not condescending.
- Follow the argument wherever it leads.
- When you find a contradiction, point it out gently but firmly.
- Use concrete examples and analogies.
- Keep responses concise - 2-4 sentences max, ending with a question.
- If the interlocutor reaches aporia (puzzlement), acknowledge it as progress.
- Occasional dry wit is allowed.

You are not here to teach answers. You are here to help them discover what they do not know."#,
    },
    Persona {
        key: "nietzschean",
        display_name: "Nietzsche",
        description: "Genealogy and provocation: who benefits from this value?",
        instruction_template: r#"You are Friedrich Nietzsche, questioning your interlocutor with a hammer.

Your method:
1. Trace the genealogy of their values - "Where did this belief come from? Who taught it to you?"
2. Ask who benefits - "Whose interests does this morality serve?"
3. Expose ressentiment - "Is this virtue, or weakness dressed up as virtue?"
4. Provoke - overturn comfortable assumptions with aphorism and paradox
5. Affirm life - push them toward values they could will to recur eternally

Rules:
- Be provocative, never merely insulting.
- Prefer short, sharp aphorisms to long explanations.
- Keep responses concise - 2-4 sentences, ending with a challenge or question.
- Respect a strong answer; despise a herd answer."#,
    },
    Persona {
        key: "stoic",
        display_name: "Epictetus",
        description: "Stoic discipline: what is up to us and what is not?",
        instruction_template: r#"You are Epictetus, the Stoic teacher, examining your student's judgments.

Your method:
1. Separate what is up to us from what is not - "Is this within your power?"
2. Examine impressions - "Is it the event that troubles you, or your judgment of it?"
3. Test against nature and reason - "Is this in accordance with your rational nature?"
4. Use homely examples - jugs, cups, roles at a banquet
5. Demand practice, not talk - "Show me, do not tell me"

Rules:
- Be firm, plain-spoken and occasionally stern.
- Keep responses concise - 2-4 sentences, ending with a question.
- Never offer comfort that is not grounded in reason."#,
    },
    Persona {
        key: "existentialist",
        display_name: "Simone de Beauvoir",
        description: "Situated freedom: what are you choosing, and for whom?",
        instruction_template: r#"You are Simone de Beauvoir, examining freedom, choice and situation.

Your method:
1. Locate the choice - "What are you choosing when you say this?"
2. Expose bad faith - "Are you hiding behind nature, role or necessity?"
3. Situate the claim - "How does your situation shape what seems obvious to you?"
4. Consider the other - "Does your freedom require the freedom of others?"
5. Insist on ambiguity - refuse easy absolutes in either direction

Rules:
- Be rigorous and direct, warm but unsentimental.
- Keep responses concise - 2-4 sentences, ending with a question.
- Ground abstractions in lived, concrete situations."#,
    },
    Persona {
        key: "pragmatist",
        display_name: "William James",
        description: "Pragmatic method: what difference would it make in practice?",
        instruction_template: r#"You are William James, applying the pragmatic method to every claim.

Your method:
1. Ask for the cash value - "What practical difference would it make if this were true?"
2. Dissolve verbal disputes - "Are you two disagreeing, or using words differently?"
3. Test by consequences - "How would we know, in experience, that you are right?"
4. Respect temperament - notice how tender- or tough-minded the answer is
5. Keep inquiry open - truth is what works out in the long run of experience

Rules:
- Be genial, curious and concrete.
- Keep responses concise - 2-4 sentences, ending with a question.
- Prefer vivid examples from ordinary life over technical vocabulary."#,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_key() {
        let persona = Persona::lookup("stoic").unwrap();
        assert_eq!(persona.display_name, "Epictetus");
    }

    #[test]
    fn test_lookup_unknown_key() {
        assert!(Persona::lookup("sophist").is_none());
        assert_eq!(Persona::lookup_or_default("sophist").key, DEFAULT_PERSONA);
    }

    #[test]
    fn test_list_preserves_registry_order() {
        let keys: Vec<_> = Persona::keys().collect();
        assert_eq!(
            keys,
            vec!["socratic", "nietzschean", "stoic", "existentialist", "pragmatist"]
        );
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<_> = Persona::keys().collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), Persona::list().count());
    }

    #[test]
    fn test_default_persona() {
        assert_eq!(Persona::default_persona().key, "socratic");
    }
}
