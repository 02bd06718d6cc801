//! Debate verdicts

use super::entities::{DebateEntry, DebateSetup, DebateSide};
use crate::parsing::{PayloadError, parse_json_object};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Judge's scores for one debater, each 0-10
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DebateScores {
    pub logic: u8,
    pub tradition: u8,
    pub engagement: u8,
    pub reasoning: u8,
}

impl DebateScores {
    pub fn total(&self) -> u32 {
        [self.logic, self.tradition, self.engagement, self.reasoning]
            .iter()
            .map(|&s| u32::from(s))
            .sum()
    }
}

/// Outcome of a judged debate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DebateWinner {
    Side(DebateSide),
    Draw,
}

/// A parsed verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebateVerdict {
    pub winner: DebateWinner,
    pub scores_a: DebateScores,
    pub scores_b: DebateScores,
    pub analysis: String,
    pub best_moment: String,
    pub verdict: String,
}

/// Result of asking the judge
///
/// There is no safe fallback verdict, so an unusable reply is reported as
/// such rather than replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Judgment {
    Verdict(DebateVerdict),
    Unavailable { reason: String, raw: Option<String> },
}

impl Judgment {
    pub fn verdict(&self) -> Option<&DebateVerdict> {
        match self {
            Judgment::Verdict(v) => Some(v),
            Judgment::Unavailable { .. } => None,
        }
    }

    /// Parse a judge reply, keeping the raw text when it is unusable
    pub fn from_reply(reply: &str, setup: &DebateSetup) -> Self {
        match DebateVerdict::parse(reply, setup) {
            Ok(verdict) => Judgment::Verdict(verdict),
            Err(e) => Judgment::Unavailable {
                reason: e.to_string(),
                raw: Some(reply.to_string()),
            },
        }
    }
}

/// A finished debate: what was said and how it was judged
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebateReport {
    pub topic: String,
    pub entries: Vec<DebateEntry>,
    pub judgment: Judgment,
}

#[derive(Debug, Deserialize)]
struct RawScores {
    #[serde(default)]
    logic: f64,
    #[serde(default)]
    tradition: f64,
    #[serde(default)]
    engagement: f64,
    #[serde(default)]
    reasoning: f64,
}

impl From<RawScores> for DebateScores {
    fn from(raw: RawScores) -> Self {
        let clamp = |v: f64| v.round().clamp(0.0, 10.0) as u8;
        Self {
            logic: clamp(raw.logic),
            tradition: clamp(raw.tradition),
            engagement: clamp(raw.engagement),
            reasoning: clamp(raw.reasoning),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawVerdict {
    winner: String,
    scores: HashMap<String, RawScores>,
    #[serde(default)]
    analysis: String,
    #[serde(default)]
    best_moment: String,
    #[serde(default)]
    verdict: String,
}

impl DebateVerdict {
    /// Parse the judge's JSON reply
    ///
    /// Sides are labelled `A`/`B`. Persona keys or display names are also
    /// accepted when the two debaters use different personas.
    pub fn parse(reply: &str, setup: &DebateSetup) -> Result<Self, PayloadError> {
        let mut raw: RawVerdict = parse_json_object(reply)?;

        let winner = resolve_winner(&raw.winner, setup).ok_or_else(|| {
            PayloadError::Malformed(format!("unrecognised winner: {}", raw.winner))
        })?;
        let scores_a = take_scores(&mut raw.scores, DebateSide::A, setup)?;
        let scores_b = take_scores(&mut raw.scores, DebateSide::B, setup)?;

        Ok(Self {
            winner,
            scores_a,
            scores_b,
            analysis: raw.analysis,
            best_moment: raw.best_moment,
            verdict: raw.verdict,
        })
    }

    pub fn scores(&self, side: DebateSide) -> &DebateScores {
        match side {
            DebateSide::A => &self.scores_a,
            DebateSide::B => &self.scores_b,
        }
    }
}

fn distinct_personas(setup: &DebateSetup) -> bool {
    setup.a.persona.key != setup.b.persona.key
}

fn side_aliases(side: DebateSide, setup: &DebateSetup) -> Vec<&str> {
    let mut aliases = vec![side.label()];
    if distinct_personas(setup) {
        let persona = setup.debater(side).persona;
        aliases.push(persona.key);
        aliases.push(persona.display_name);
    }
    aliases
}

fn resolve_winner(label: &str, setup: &DebateSetup) -> Option<DebateWinner> {
    let label = label.trim();
    if label.eq_ignore_ascii_case("draw") || label.eq_ignore_ascii_case("tie") {
        return Some(DebateWinner::Draw);
    }
    [DebateSide::A, DebateSide::B]
        .into_iter()
        .find(|&side| {
            side_aliases(side, setup)
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(label))
        })
        .map(DebateWinner::Side)
}

fn take_scores(
    scores: &mut HashMap<String, RawScores>,
    side: DebateSide,
    setup: &DebateSetup,
) -> Result<DebateScores, PayloadError> {
    let aliases = side_aliases(side, setup);
    let key = scores
        .keys()
        .find(|k| aliases.iter().any(|alias| alias.eq_ignore_ascii_case(k.trim())))
        .cloned()
        .ok_or_else(|| PayloadError::Malformed(format!("missing scores for side {}", side)))?;
    scores
        .remove(&key)
        .map(DebateScores::from)
        .ok_or_else(|| PayloadError::Malformed(format!("missing scores for side {}", side)))
}
