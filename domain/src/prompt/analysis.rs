//! Prompt templates for argument analysis and threat interrogation

/// Templates for the analyzer functions
///
/// Every template fixes the JSON shape the reply must contain; the
/// analyzers extract and parse that payload.
pub struct AnalysisPromptTemplate;

impl AnalysisPromptTemplate {
    pub fn dialogue_analysis(dialogue: &str) -> String {
        format!(
            r#"Analyze this philosophical dialogue for logical structure.

Dialogue:
{}

Provide analysis in JSON format:
{{
    "claims": [
        {{"id": 1, "text": "brief claim", "speaker": "user", "turn": 1}}
    ],
    "contradictions": [
        {{"claim_1_id": 1, "claim_2_id": 3, "explanation": "why they contradict"}}
    ],
    "fallacies": [
        {{"turn": 2, "type": "ad hominem", "explanation": "attacks character not argument"}}
    ],
    "argument_strength": "weak|moderate|strong",
    "consistency_score": 0-100,
    "aporia_reached": true|false,
    "key_insights": ["insight 1", "insight 2"]
}}

Focus on the user's claims and reasoning. Be precise and fair."#,
            dialogue
        )
    }

    pub fn contradiction(claim1: &str, claim2: &str) -> String {
        format!(
            r#"Do these two claims contradict each other? Respond in JSON.

Claim 1: {}
Claim 2: {}

Format:
{{
    "contradicts": true|false,
    "explanation": "brief explanation",
    "severity": "direct|implicit|none"
}}"#,
            claim1, claim2
        )
    }

    pub fn extract_claims(text: &str) -> String {
        format!(
            r#"Extract the explicit claims or assertions from this text.
Return as a JSON array of strings.

Text: {}

Format: ["claim 1", "claim 2", ...]

Only include factual or normative claims, not questions or acknowledgments."#,
            text
        )
    }

    pub fn threat_model(description: &str) -> String {
        format!(
            r#"You are a security philosopher applying the Socratic method to threat modeling.

A security professional describes their threat model:
"{}"

Apply philosophical rigor to expose assumptions, gaps, and unexplored scenarios.

Generate your analysis in JSON format:
{{
    "assumptions": [
        {{"assumption": "what they're assuming", "question": "probing question"}}
    ],
    "gaps": [
        {{"gap": "what's missing", "risk": "potential impact"}}
    ],
    "questions": [
        "Deep question 1",
        "Deep question 2",
        "Deep question 3"
    ],
    "alternative_perspectives": [
        {{"perspective": "different view", "implication": "what it means"}}
    ],
    "severity": "low|medium|high|critical"
}}

Be incisive but not dismissive. Find what they haven't considered."#,
            description
        )
    }

    pub fn control_interrogation(control: &str, context: &str) -> String {
        let context = if context.trim().is_empty() {
            "General enterprise security"
        } else {
            context
        };

        format!(
            r#"A security control is described: "{}"

Context: {}

Apply the Socratic method to determine:
1. Does this control actually reduce risk, or just give the appearance of security?
2. What assumptions underlie this control?
3. How could an attacker bypass or abuse this control?
4. What are we NOT protecting by focusing here?
5. Is this compliance-driven or risk-driven?

Respond in JSON:
{{
    "effectiveness": "low|medium|high",
    "security_theater_risk": 0-100,
    "key_assumptions": ["assumption 1", "assumption 2"],
    "bypass_scenarios": [
        {{"scenario": "how to bypass", "likelihood": "low|medium|high"}}
    ],
    "probing_questions": [
        "Question 1",
        "Question 2",
        "Question 3"
    ],
    "verdict": "This control...",
    "recommendations": ["rec 1", "rec 2"]
}}

Be rigorous. Security theater is dangerous."#,
            control, context
        )
    }

    pub fn challenge_assumptions(claim: &str) -> String {
        format!(
            r#"Security claim: "{}"

Generate 5 penetrating Socratic questions that challenge the assumptions in this claim.

Format as JSON array:
["Question 1?", "Question 2?", "Question 3?", "Question 4?", "Question 5?"]

Make questions progressively deeper. Start with obvious, end with subtle."#,
            claim
        )
    }

    pub fn red_team(system: &str) -> String {
        format!(
            r#"System description: {}

You are both a philosopher and a red team attacker. Generate questions from both perspectives:

1. **Philosophical questions**: Expose assumptions about trust, risk, and adversaries
2. **Red team questions**: How would you actually attack this?

Respond in JSON:
{{
    "philosophical": [
        {{"question": "philosophical question", "targets": "what assumption"}}
    ],
    "red_team": [
        {{"question": "attacker question", "attack_vector": "brief description"}}
    ],
    "blind_spots": ["potential blind spot 1", "potential blind spot 2"],
    "recommendations": ["what to explore", "what to test"]
}}

Be adversarial but constructive."#,
            system
        )
    }

    pub fn compliance(requirement: &str, implementation: &str) -> String {
        format!(
            r#"Compliance requirement: {}
Implementation: {}

Analyze: Does this implementation actually improve security, or just check a compliance box?

Respond in JSON:
{{
    "security_improvement": "none|minimal|moderate|significant",
    "compliance_score": "passes|fails",
    "gap_analysis": "What security gaps remain despite compliance?",
    "security_theater_elements": ["element 1", "element 2"],
    "actual_risk_reduction": "Describe real risk reduction",
    "questions_to_ask": [
        "Question 1",
        "Question 2",
        "Question 3"
    ],
    "verdict": "One-line summary"
}}

Distinguish compliance from security."#,
            requirement, implementation
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_interrogation_default_context() {
        let prompt = AnalysisPromptTemplate::control_interrogation("MFA on VPN", "  ");
        assert!(prompt.contains("Context: General enterprise security"));

        let prompt = AnalysisPromptTemplate::control_interrogation("MFA on VPN", "hospital");
        assert!(prompt.contains("Context: hospital"));
    }

    #[test]
    fn test_templates_embed_input() {
        assert!(AnalysisPromptTemplate::dialogue_analysis("Turn 1 (User): hi").contains("Turn 1 (User): hi"));
        assert!(AnalysisPromptTemplate::contradiction("a", "b").contains("Claim 2: b"));
        assert!(AnalysisPromptTemplate::red_team("payments api").contains("payments api"));
        assert!(AnalysisPromptTemplate::compliance("PCI 8.3", "TOTP").contains("Implementation: TOTP"));
    }
}
