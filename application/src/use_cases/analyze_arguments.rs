//! Argument analysis use case.
//!
//! Reads a dialogue for claims, contradictions and fallacies. Stateless:
//! every call is one oracle request and the result is always a value.

use crate::config::budgets;
use crate::ports::oracle::LanguageOracle;
use crate::use_cases::shared::{consult, require_text};
use agora_domain::dialogue::human_turns;
use agora_domain::parsing::{parse_json_array, parse_json_object};
use agora_domain::{
    AnalysisOutcome, AnalysisPromptTemplate, ArgumentAnalysis, ContradictionCheck, Turn,
};
use std::sync::Arc;

/// Minimum number of human turns worth analysing
pub const MIN_HUMAN_TURNS: usize = 2;

/// Use case for analysing the logic of a dialogue.
#[derive(Clone)]
pub struct ArgumentAnalyzer {
    oracle: Arc<dyn LanguageOracle>,
}

impl ArgumentAnalyzer {
    pub fn new(oracle: Arc<dyn LanguageOracle>) -> Self {
        Self { oracle }
    }

    /// Structure of a whole dialogue. Needs at least two human turns.
    pub async fn analyze_dialogue(&self, history: &[Turn]) -> AnalysisOutcome<ArgumentAnalysis> {
        let human = human_turns(history).count();
        if human < MIN_HUMAN_TURNS {
            return AnalysisOutcome::InsufficientInput(format!(
                "need at least {} human turns to analyze, have {}",
                MIN_HUMAN_TURNS, human
            ));
        }

        consult(
            self.oracle.as_ref(),
            "dialogue analysis",
            AnalysisPromptTemplate::dialogue_analysis(&format_dialogue(history)),
            budgets::DIALOGUE_ANALYSIS,
            parse_json_object,
        )
        .await
    }

    /// Whether two claims contradict each other.
    pub async fn detect_contradiction(
        &self,
        claim1: &str,
        claim2: &str,
    ) -> AnalysisOutcome<ContradictionCheck> {
        if let Err(outcome) = require_text("first claim", claim1)
            .and_then(|_| require_text("second claim", claim2))
        {
            return outcome;
        }

        consult(
            self.oracle.as_ref(),
            "contradiction check",
            AnalysisPromptTemplate::contradiction(claim1, claim2),
            budgets::CONTRADICTION,
            parse_json_object,
        )
        .await
    }

    /// The explicit claims made in a text.
    pub async fn extract_claims(&self, text: &str) -> AnalysisOutcome<Vec<String>> {
        if let Err(outcome) = require_text("text", text) {
            return outcome;
        }

        consult(
            self.oracle.as_ref(),
            "claim extraction",
            AnalysisPromptTemplate::extract_claims(text),
            budgets::CLAIMS,
            parse_json_array,
        )
        .await
    }
}

/// Render a history as numbered turns for the analyst
fn format_dialogue(history: &[Turn]) -> String {
    history
        .iter()
        .enumerate()
        .map(|(i, turn)| {
            let speaker = if turn.is_human() { "User" } else { "Philosopher" };
            format!("Turn {} ({}): {}", i + 1, speaker, turn.text)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
