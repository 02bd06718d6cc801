//! Prompt templates for the dialogue flow

use crate::difficulty::DifficultyLevel;

/// Templates for dialogue instructions and difficulty assessment
pub struct PromptTemplate;

impl PromptTemplate {
    /// Augmentation appended to the persona instructions in security mode
    pub fn security_augmentation() -> &'static str {
        r#"SECURITY MODE
You are applying your philosophical method to security reasoning: threat models, controls, trust and risk.
- Treat every security claim as a philosophical claim: ask what it assumes.
- Distinguish real risk reduction from the appearance of security.
- Ask who the adversary is, what they want, and what they are able to do.
- Probe trust boundaries: who is trusted, by whom, and on what evidence?
- Use concrete attack scenarios as counterexamples."#
    }

    /// Statement of the current topic, closing the system instructions
    pub fn topic_statement(topic: &str) -> String {
        format!(
            "Current topic: {}\n\nBegin by asking what they believe about this topic, or respond to their opening position.",
            topic
        )
    }

    /// Human-role seed that makes the philosopher open the dialogue
    pub fn opening_seed(topic: &str) -> String {
        format!("I want to discuss: {}", topic)
    }

    /// Instruction block for a difficulty level
    pub fn difficulty_block(level: DifficultyLevel) -> &'static str {
        match level {
            DifficultyLevel::Beginner => {
                r#"DIFFICULTY: BEGINNER
- Use simple, everyday language
- Define philosophical terms when first used
- Give concrete examples for abstract concepts
- Ask one clear question at a time
- Be encouraging and patient
- Connect to familiar experiences"#
            }
            DifficultyLevel::Intermediate => {
                r#"DIFFICULTY: INTERMEDIATE
- Use some philosophical terminology with light context
- Present more complex counterexamples
- Ask compound questions occasionally
- Introduce historical philosophical positions
- Push harder on contradictions
- Expect more rigorous reasoning"#
            }
            DifficultyLevel::Advanced => {
                r#"DIFFICULTY: ADVANCED
- Use philosophical terminology freely
- Present sophisticated counterexamples
- Reference historical arguments and positions
- Ask multi-layered questions
- Demand logical precision
- Challenge implicit assumptions aggressively
- Expect familiarity with philosophical concepts"#
            }
        }
    }

    /// Rubric prompt for scoring the speaker's sophistication
    pub fn assessment_prompt(responses: &str) -> String {
        format!(
            r#"Assess the philosophical sophistication of this speaker based on their responses.

Speaker's responses:
{}

Rate on these dimensions (0-100 each):
1. **Vocabulary**: Use of philosophical terms, precision of language
2. **Argumentation**: Logical structure, use of examples, coherence
3. **Self-awareness**: Recognition of own assumptions, willingness to question beliefs
4. **Depth**: Going beyond surface-level, considering implications

Respond in JSON:
{{
    "vocabulary": 0-100,
    "argumentation": 0-100,
    "self_awareness": 0-100,
    "depth": 0-100,
    "overall_score": 0-100,
    "level": "beginner|intermediate|advanced",
    "indicators": ["what suggests this level"],
    "recommendations": ["how to adjust dialogue"]
}}

Be fair but accurate. Most people start as beginners."#,
            responses
        )
    }
}
