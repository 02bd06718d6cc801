//! Prompt templates for AI-vs-AI debates

/// Templates for debater instructions, turn prompts and judging
pub struct DebatePromptTemplate;

impl DebatePromptTemplate {
    /// System instructions for one debater
    ///
    /// The persona's own style comes first, followed by the debate rules.
    pub fn debater_system(
        persona_instructions: &str,
        position: &str,
        topic: &str,
        is_first: bool,
    ) -> String {
        let closing_rule = if is_first {
            "7. You speak first - open by stating your position clearly"
        } else {
            "7. Respond to your opponent then advance your position"
        };

        format!(
            r#"{}

DEBATE MODE ACTIVE

Your position: {}
Topic: {}

Rules:
1. Defend your position using your philosophical tradition
2. Address your opponent's arguments directly
3. Use your characteristic style (questions, assertions, provocations)
4. Be rigorous but respectful
5. Keep responses concise (3-5 sentences)
6. End with either a question or a strong assertion
{}

Remember: You're not seeking truth together - you're defending a position.
Be intellectually honest but argue forcefully."#,
            persona_instructions, position, topic, closing_rule
        )
    }

    /// Prompt for the opening turn
    pub fn opening(topic: &str) -> String {
        format!("Open the debate. State your position on: {}", topic)
    }

    /// Prompt for every turn after the first
    pub fn rebuttal(opponent_excerpt: &str) -> String {
        format!("Respond to your opponent: '{}...'", opponent_excerpt)
    }

    /// Prompt for the judge
    ///
    /// Debaters are labelled `A` and `B` in the verdict contract so that two
    /// debaters sharing a persona stay distinguishable.
    pub fn judge(
        topic: &str,
        debater_a: (&str, &str),
        debater_b: (&str, &str),
        transcript: &str,
    ) -> String {
        format!(
            r#"You are judging a philosophical debate.

Topic: {topic}

Debaters:
- A ({a_name}): Position "{a_position}"
- B ({b_name}): Position "{b_position}"

Debate:
{transcript}

Judge based on:
1. Logical consistency
2. Effective use of philosophical tradition
3. Addressing opponent's arguments
4. Strength of reasoning

Respond in JSON:
{{
    "winner": "A|B|draw",
    "scores": {{
        "A": {{"logic": 0-10, "tradition": 0-10, "engagement": 0-10, "reasoning": 0-10}},
        "B": {{"logic": 0-10, "tradition": 0-10, "engagement": 0-10, "reasoning": 0-10}}
    }},
    "analysis": "Brief analysis of debate",
    "best_moment": "Quote the best argument from the debate",
    "verdict": "One-sentence verdict"
}}"#,
            topic = topic,
            a_name = debater_a.0,
            a_position = debater_a.1,
            b_name = debater_b.0,
            b_position = debater_b.1,
            transcript = transcript,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debater_system_first_speaker_rule() {
        let first = DebatePromptTemplate::debater_system("STYLE", "Yes", "Is virtue teachable?", true);
        assert!(first.starts_with("STYLE"));
        assert!(first.contains("You speak first"));

        let later = DebatePromptTemplate::debater_system("STYLE", "No", "Is virtue teachable?", false);
        assert!(later.contains("Respond to your opponent then advance"));
        assert!(later.contains("Your position: No"));
    }

    #[test]
    fn test_rebuttal_quotes_excerpt() {
        assert_eq!(
            DebatePromptTemplate::rebuttal("Justice is power"),
            "Respond to your opponent: 'Justice is power...'"
        );
    }

    #[test]
    fn test_judge_prompt_lists_both_positions() {
        let prompt = DebatePromptTemplate::judge(
            "What is justice?",
            ("Socrates", "Justice is objective"),
            ("Nietzsche", "Justice is power"),
            "Turn 1 - Socrates:\n...",
        );
        assert!(prompt.contains("A (Socrates): Position \"Justice is objective\""));
        assert!(prompt.contains("B (Nietzsche): Position \"Justice is power\""));
        assert!(prompt.contains("\"winner\": \"A|B|draw\""));
    }
}
