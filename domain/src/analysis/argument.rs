//! Argument analysis payloads

use serde::{Deserialize, Serialize};

/// A claim identified in a dialogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub id: u32,
    pub text: String,
    #[serde(default)]
    pub speaker: String,
    #[serde(default)]
    pub turn: u32,
}

/// Two claims that contradict each other
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contradiction {
    pub claim_1_id: u32,
    pub claim_2_id: u32,
    #[serde(default)]
    pub explanation: String,
}

/// A reasoning fallacy spotted at a turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fallacy {
    #[serde(default)]
    pub turn: u32,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub explanation: String,
}

/// Logical structure of a whole dialogue
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArgumentAnalysis {
    pub claims: Vec<Claim>,
    pub contradictions: Vec<Contradiction>,
    pub fallacies: Vec<Fallacy>,
    /// weak, moderate or strong
    pub argument_strength: String,
    #[serde(deserialize_with = "super::percent")]
    pub consistency_score: u8,
    pub aporia_reached: bool,
    pub key_insights: Vec<String>,
}

/// Whether two specific claims contradict
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContradictionCheck {
    pub contradicts: bool,
    #[serde(default)]
    pub explanation: String,
    /// direct, implicit or none
    #[serde(default)]
    pub severity: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_json_object;

    #[test]
    fn test_parse_analysis_with_defaults() {
        let reply = r#"Analysis:
{
    "claims": [{"id": 1, "text": "Justice is fairness", "speaker": "user", "turn": 1}],
    "fallacies": [{"turn": 2, "type": "ad hominem", "explanation": "attacks character"}],
    "consistency_score": 72.6,
    "aporia_reached": true
}"#;
        let analysis: ArgumentAnalysis = parse_json_object(reply).unwrap();
        assert_eq!(analysis.claims.len(), 1);
        assert!(analysis.contradictions.is_empty());
        assert_eq!(analysis.fallacies[0].kind, "ad hominem");
        assert_eq!(analysis.consistency_score, 73);
        assert!(analysis.aporia_reached);
        assert!(analysis.argument_strength.is_empty());
    }

    #[test]
    fn test_contradiction_check_requires_verdict() {
        let parsed: Result<ContradictionCheck, _> =
            parse_json_object(r#"{"explanation": "unclear"}"#);
        assert!(parsed.is_err());
    }
}
