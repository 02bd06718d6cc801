//! Argument graph derived from an analysis

use super::argument::ArgumentAnalysis;
use crate::util::ellipsize;
use serde::Serialize;

const LABEL_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub speaker: String,
    pub turn: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub total_claims: usize,
    pub contradictions: usize,
    pub consistency: u8,
}

/// Claims as nodes, contradictions as edges
///
/// Serializes to the node/edge shape graph renderers expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgumentGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub stats: GraphStats,
}

fn claim_node_id(id: u32) -> String {
    format!("claim_{}", id)
}

impl ArgumentGraph {
    pub fn from_analysis(analysis: &ArgumentAnalysis) -> Self {
        let nodes: Vec<GraphNode> = analysis
            .claims
            .iter()
            .map(|claim| GraphNode {
                id: claim_node_id(claim.id),
                label: ellipsize(&claim.text, LABEL_CHARS),
                kind: "claim",
                speaker: claim.speaker.clone(),
                turn: claim.turn,
            })
            .collect();

        let edges: Vec<GraphEdge> = analysis
            .contradictions
            .iter()
            .map(|c| GraphEdge {
                source: claim_node_id(c.claim_1_id),
                target: claim_node_id(c.claim_2_id),
                kind: "contradiction",
                label: "contradicts",
            })
            .collect();

        let stats = GraphStats {
            total_claims: nodes.len(),
            contradictions: edges.len(),
            consistency: analysis.consistency_score,
        };

        Self { nodes, edges, stats }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{Claim, Contradiction};

    #[test]
    fn test_from_analysis() {
        let analysis = ArgumentAnalysis {
            claims: vec![
                Claim {
                    id: 1,
                    text: "a".repeat(60),
                    speaker: "user".to_string(),
                    turn: 1,
                },
                Claim {
                    id: 3,
                    text: "Justice is the interest of the stronger".to_string(),
                    speaker: "user".to_string(),
                    turn: 5,
                },
            ],
            contradictions: vec![Contradiction {
                claim_1_id: 1,
                claim_2_id: 3,
                explanation: String::new(),
            }],
            consistency_score: 40,
            ..Default::default()
        };

        let graph = ArgumentGraph::from_analysis(&analysis);
        assert_eq!(graph.nodes[0].label, format!("{}...", "a".repeat(50)));
        assert_eq!(graph.nodes[1].label, "Justice is the interest of the stronger");
        assert_eq!(graph.edges[0].source, "claim_1");
        assert_eq!(graph.edges[0].target, "claim_3");
        assert_eq!(
            graph.stats,
            GraphStats {
                total_claims: 2,
                contradictions: 1,
                consistency: 40
            }
        );
    }

    #[test]
    fn test_empty_analysis() {
        let graph = ArgumentGraph::from_analysis(&ArgumentAnalysis::default());
        assert!(graph.nodes.is_empty());
        assert_eq!(graph.stats.total_claims, 0);
    }
}
