//! Threat interrogation use case.
//!
//! Applies Socratic questioning to security thinking: threat models,
//! controls, claims, system designs and compliance work.

use crate::config::budgets;
use crate::ports::oracle::LanguageOracle;
use crate::use_cases::shared::{consult, require_text};
use agora_domain::parsing::{parse_json_array, parse_json_object};
use agora_domain::{
    AnalysisOutcome, AnalysisPromptTemplate, ComplianceAssessment, ControlInterrogation,
    RedTeamReport, ThreatModelAnalysis,
};
use std::sync::Arc;

/// Use case for security interrogation.
#[derive(Clone)]
pub struct ThreatInterrogator {
    oracle: Arc<dyn LanguageOracle>,
}

impl ThreatInterrogator {
    pub fn new(oracle: Arc<dyn LanguageOracle>) -> Self {
        Self { oracle }
    }

    /// Expose assumptions and gaps in a threat model.
    pub async fn analyze_threat_model(
        &self,
        description: &str,
    ) -> AnalysisOutcome<ThreatModelAnalysis> {
        if let Err(outcome) = require_text("threat model", description) {
            return outcome;
        }
        consult(
            self.oracle.as_ref(),
            "threat model analysis",
            AnalysisPromptTemplate::threat_model(description),
            budgets::THREAT_MODEL,
            parse_json_object,
        )
        .await
    }

    /// Question whether a control reduces risk. A blank context means a
    /// general enterprise setting.
    pub async fn interrogate_control(
        &self,
        control: &str,
        context: &str,
    ) -> AnalysisOutcome<ControlInterrogation> {
        if let Err(outcome) = require_text("control", control) {
            return outcome;
        }
        consult(
            self.oracle.as_ref(),
            "control interrogation",
            AnalysisPromptTemplate::control_interrogation(control, context),
            budgets::CONTROL,
            parse_json_object,
        )
        .await
    }

    /// Penetrating questions about a security claim.
    pub async fn challenge_assumptions(&self, claim: &str) -> AnalysisOutcome<Vec<String>> {
        if let Err(outcome) = require_text("claim", claim) {
            return outcome;
        }
        consult(
            self.oracle.as_ref(),
            "assumption challenge",
            AnalysisPromptTemplate::challenge_assumptions(claim),
            budgets::CHALLENGE,
            parse_json_array,
        )
        .await
    }

    /// Philosophical and attacker questions about a system.
    pub async fn red_team_questions(&self, system: &str) -> AnalysisOutcome<RedTeamReport> {
        if let Err(outcome) = require_text("system description", system) {
            return outcome;
        }
        consult(
            self.oracle.as_ref(),
            "red team questions",
            AnalysisPromptTemplate::red_team(system),
            budgets::RED_TEAM,
            parse_json_object,
        )
        .await
    }

    /// Does an implementation improve security or only satisfy a requirement?
    pub async fn compliance_vs_security(
        &self,
        requirement: &str,
        implementation: &str,
    ) -> AnalysisOutcome<ComplianceAssessment> {
        if let Err(outcome) = require_text("requirement", requirement)
            .and_then(|_| require_text("implementation", implementation))
        {
            return outcome;
        }
        consult(
            self.oracle.as_ref(),
            "compliance assessment",
            AnalysisPromptTemplate::compliance(requirement, implementation),
            budgets::COMPLIANCE,
            parse_json_object,
        )
        .await
    }
}
