//! Security interrogation payloads

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreatAssumption {
    pub assumption: String,
    pub question: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreatGap {
    pub gap: String,
    pub risk: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreatPerspective {
    pub perspective: String,
    pub implication: String,
}

/// Socratic review of a threat model
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreatModelAnalysis {
    pub assumptions: Vec<ThreatAssumption>,
    pub gaps: Vec<ThreatGap>,
    pub questions: Vec<String>,
    pub alternative_perspectives: Vec<ThreatPerspective>,
    /// low, medium, high or critical
    pub severity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BypassScenario {
    pub scenario: String,
    pub likelihood: String,
}

/// Whether a control reduces risk or only looks like it does
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlInterrogation {
    pub effectiveness: String,
    #[serde(deserialize_with = "super::percent")]
    pub security_theater_risk: u8,
    pub key_assumptions: Vec<String>,
    pub bypass_scenarios: Vec<BypassScenario>,
    pub probing_questions: Vec<String>,
    pub verdict: String,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PhilosophicalQuestion {
    pub question: String,
    pub targets: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AttackQuestion {
    pub question: String,
    pub attack_vector: String,
}

/// Questions from the philosopher's and the attacker's side
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RedTeamReport {
    pub philosophical: Vec<PhilosophicalQuestion>,
    pub red_team: Vec<AttackQuestion>,
    pub blind_spots: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Compliance versus actual security
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplianceAssessment {
    /// none, minimal, moderate or significant
    pub security_improvement: String,
    /// passes or fails
    pub compliance_score: String,
    pub gap_analysis: String,
    pub security_theater_elements: Vec<String>,
    pub actual_risk_reduction: String,
    pub questions_to_ask: Vec<String>,
    pub verdict: String,
}
