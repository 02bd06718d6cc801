//! Sophistication assessment parsed from the assessor's reply

use super::level::{DifficultyLevel, ParseLevelError};
use super::state::INITIAL_SCORE;
use crate::parsing::{PayloadError, parse_json_object};
use serde::{Deserialize, Serialize};

const FALLBACK_SCORE: u8 = 50;

/// One scored rubric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyAssessment {
    pub level: DifficultyLevel,
    /// Overall score, 0-100
    pub score: u8,
    pub vocabulary: Option<u8>,
    pub argumentation: Option<u8>,
    pub self_awareness: Option<u8>,
    pub depth: Option<u8>,
    pub indicators: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Deserialize)]
struct RawAssessment {
    level: String,
    #[serde(default)]
    overall_score: Option<f64>,
    #[serde(default)]
    score: Option<f64>,
    #[serde(default)]
    vocabulary: Option<f64>,
    #[serde(default)]
    argumentation: Option<f64>,
    #[serde(default)]
    self_awareness: Option<f64>,
    #[serde(default)]
    depth: Option<f64>,
    #[serde(default)]
    indicators: Vec<String>,
    #[serde(default)]
    recommendations: Vec<String>,
}

fn to_score(value: f64) -> u8 {
    value.clamp(0.0, 100.0).round() as u8
}

impl DifficultyAssessment {
    fn bare(level: DifficultyLevel, score: u8) -> Self {
        Self {
            level,
            score,
            vocabulary: None,
            argumentation: None,
            self_awareness: None,
            depth: None,
            indicators: Vec::new(),
            recommendations: Vec::new(),
        }
    }

    /// Assessment used while there is too little human input to judge
    pub fn initial() -> Self {
        Self::bare(DifficultyLevel::Beginner, INITIAL_SCORE)
    }

    /// Assessment used when the assessor's reply cannot be used
    pub fn fallback() -> Self {
        Self::bare(DifficultyLevel::Intermediate, FALLBACK_SCORE)
    }

    /// Parse the assessor's reply.
    ///
    /// `level` must be one of the three labels. The overall score falls
    /// back to the mean of the sub-scores, then to 50.
    pub fn parse(reply: &str) -> Result<Self, PayloadError> {
        let raw: RawAssessment = parse_json_object(reply)?;
        let level: DifficultyLevel = raw
            .level
            .parse()
            .map_err(|e: ParseLevelError| PayloadError::Malformed(e.to_string()))?;

        let subs: Vec<f64> = [raw.vocabulary, raw.argumentation, raw.self_awareness, raw.depth]
            .into_iter()
            .flatten()
            .collect();
        let mean = if subs.is_empty() {
            None
        } else {
            Some(subs.iter().sum::<f64>() / subs.len() as f64)
        };

        let score = raw
            .overall_score
            .or(raw.score)
            .or(mean)
            .map(to_score)
            .unwrap_or(FALLBACK_SCORE);

        Ok(Self {
            level,
            score,
            vocabulary: raw.vocabulary.map(to_score),
            argumentation: raw.argumentation.map(to_score),
            self_awareness: raw.self_awareness.map(to_score),
            depth: raw.depth.map(to_score),
            indicators: raw.indicators,
            recommendations: raw.recommendations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_reply() {
        let reply = r#"Here is my assessment:
```json
{
    "vocabulary": 70,
    "argumentation": 65,
    "self_awareness": 80,
    "depth": 60,
    "overall_score": 68,
    "level": "Intermediate",
    "indicators": ["uses counterexamples"],
    "recommendations": ["introduce Rawls"]
}
```"#;
        let assessment = DifficultyAssessment::parse(reply).unwrap();
        assert_eq!(assessment.level, DifficultyLevel::Intermediate);
        assert_eq!(assessment.score, 68);
        assert_eq!(assessment.self_awareness, Some(80));
        assert_eq!(assessment.indicators, vec!["uses counterexamples".to_string()]);
    }

    #[test]
    fn test_parse_score_from_sub_scores() {
        let reply = r#"{"level": "advanced", "vocabulary": 90, "argumentation": 80}"#;
        let assessment = DifficultyAssessment::parse(reply).unwrap();
        assert_eq!(assessment.score, 85);
    }

    #[test]
    fn test_parse_clamps_score() {
        let reply = r#"{"level": "advanced", "overall_score": 140}"#;
        assert_eq!(DifficultyAssessment::parse(reply).unwrap().score, 100);
    }

    #[test]
    fn test_parse_rejects_unknown_level() {
        let reply = r#"{"level": "genius", "overall_score": 99}"#;
        assert!(matches!(
            DifficultyAssessment::parse(reply),
            Err(PayloadError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_rejects_prose() {
        assert_eq!(
            DifficultyAssessment::parse("They seem fairly advanced."),
            Err(PayloadError::NotFound("object"))
        );
    }

    #[test]
    fn test_initial_and_fallback() {
        assert_eq!(DifficultyAssessment::initial().level, DifficultyLevel::Beginner);
        assert_eq!(DifficultyAssessment::initial().score, 30);
        assert_eq!(DifficultyAssessment::fallback().level, DifficultyLevel::Intermediate);
        assert_eq!(DifficultyAssessment::fallback().score, 50);
    }
}
