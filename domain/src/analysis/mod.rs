//! Argument and threat analysis results
//!
//! The analyzers are stateless: each asks the oracle for a JSON payload and
//! turns the reply into one of these types. Failures are values
//! ([`AnalysisOutcome`]), never errors.

mod argument;
mod graph;
mod outcome;
mod threat;

pub use argument::{ArgumentAnalysis, Claim, Contradiction, ContradictionCheck, Fallacy};
pub use graph::{ArgumentGraph, GraphEdge, GraphNode, GraphStats};
pub use outcome::AnalysisOutcome;
pub use threat::{
    AttackQuestion, BypassScenario, ComplianceAssessment, ControlInterrogation, PhilosophicalQuestion,
    RedTeamReport, ThreatAssumption, ThreatGap, ThreatModelAnalysis, ThreatPerspective,
};

use serde::{Deserialize, Deserializer};

/// Lenient 0-100 score: accepts integers or floats, clamps out-of-range values
pub(crate) fn percent<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    Ok(value.round().clamp(0.0, 100.0) as u8)
}
