//! Console output formatter for dialogue, debate and analysis results

use agora_domain::{
    AnalysisOutcome, ArgumentAnalysis, ArgumentGraph, ComplianceAssessment, ControlInterrogation,
    DebateEntry, DebateReport, DebateScores, DebateSide, DebateWinner, DifficultyState, Judgment,
    Persona, RedTeamReport, ThreatModelAnalysis, TopicCatalog,
};
use colored::Colorize;
use serde::Serialize;

/// Formats engine results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// A philosopher's reply in the dialogue REPL
    pub fn format_reply(speaker: &str, text: &str) -> String {
        format!(
            "\n{}\n{}\n",
            format!("── {} ──", speaker).yellow().bold(),
            text
        )
    }

    /// The current difficulty, e.g. for `/difficulty`
    pub fn format_difficulty(state: &DifficultyState) -> String {
        format!("{} {}", "Difficulty:".cyan().bold(), state.label())
    }

    pub fn format_debate_entry(entry: &DebateEntry) -> String {
        format!(
            "\n{}\n{}\n",
            format!("── Turn {} · {} ──", entry.turn, entry.speaker)
                .yellow()
                .bold(),
            entry.text
        )
    }

    /// Format a finished debate: exchange followed by the judgment
    pub fn format_debate_report(report: &DebateReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Agora Debate"));
        output.push('\n');
        output.push_str(&format!("{} {}\n", "Topic:".cyan().bold(), report.topic));

        for side in [DebateSide::A, DebateSide::B] {
            if let Some(speaker) = Self::speaker_for(report, side) {
                output.push_str(&format!(
                    "{} {}\n",
                    format!("Side {}:", side).cyan().bold(),
                    speaker
                ));
            }
        }

        output.push_str(&Self::section_header("Exchange"));
        for entry in &report.entries {
            output.push_str(&Self::format_debate_entry(entry));
        }

        output.push_str(&Self::section_header("Judgment"));
        output.push_str(&Self::format_judgment(report));
        output.push_str(&Self::footer());

        output
    }

    /// Format only the judge's verdict of a debate
    pub fn format_judgment(report: &DebateReport) -> String {
        let verdict = match &report.judgment {
            Judgment::Verdict(verdict) => verdict,
            Judgment::Unavailable { reason, raw } => {
                let mut output = format!("{} {}\n", "Judge unavailable:".red().bold(), reason);
                if let Some(raw) = raw {
                    output.push_str(&format!("\n{}\n{}\n", "Raw reply:".dimmed(), raw));
                }
                return output;
            }
        };

        let mut output = String::new();
        let winner = match verdict.winner {
            DebateWinner::Draw => "Draw".to_string(),
            DebateWinner::Side(side) => match Self::speaker_for(report, side) {
                Some(speaker) => format!("Side {} - {}", side, speaker),
                None => format!("Side {}", side),
            },
        };
        output.push_str(&format!("{} {}\n\n", "Winner:".green().bold(), winner));

        output.push_str(&Self::format_scores(DebateSide::A, &verdict.scores_a));
        output.push_str(&Self::format_scores(DebateSide::B, &verdict.scores_b));

        if !verdict.analysis.is_empty() {
            output.push_str(&format!("\n{}\n{}\n", "Analysis:".cyan().bold(), verdict.analysis));
        }
        if !verdict.best_moment.is_empty() {
            output.push_str(&format!(
                "\n{}\n{}\n",
                "Best moment:".cyan().bold(),
                verdict.best_moment
            ));
        }
        if !verdict.verdict.is_empty() {
            output.push_str(&format!("\n{}\n{}\n", "Verdict:".cyan().bold(), verdict.verdict));
        }

        output
    }

    fn format_scores(side: DebateSide, scores: &DebateScores) -> String {
        format!(
            "  {} logic {:>2}  tradition {:>2}  engagement {:>2}  reasoning {:>2}  = {}\n",
            format!("Side {}:", side).bold(),
            scores.logic,
            scores.tradition,
            scores.engagement,
            scores.reasoning,
            scores.total()
        )
    }

    fn speaker_for(report: &DebateReport, side: DebateSide) -> Option<&str> {
        report
            .entries
            .iter()
            .find(|entry| entry.side == side)
            .map(|entry| entry.speaker.as_str())
    }

    /// Format an analyzer result, or the reason it is not available
    pub fn format_outcome<T>(outcome: &AnalysisOutcome<T>, format: impl Fn(&T) -> String) -> String {
        match outcome {
            AnalysisOutcome::Ready(value) => format(value),
            AnalysisOutcome::InsufficientInput(reason) => {
                format!("{} {}\n", "Not enough input:".yellow().bold(), reason)
            }
            AnalysisOutcome::Unparseable { reason, raw } => format!(
                "{} {}\n\n{}\n{}\n",
                "Could not read the analysis:".red().bold(),
                reason,
                "Raw reply:".dimmed(),
                raw
            ),
            AnalysisOutcome::OracleUnavailable(detail) => {
                format!("{} {}\n", "Oracle unavailable:".red().bold(), detail)
            }
        }
    }

    pub fn format_argument_analysis(analysis: &ArgumentAnalysis) -> String {
        let graph = ArgumentGraph::from_analysis(analysis);
        let mut output = Self::section_header("Argument Analysis");

        output.push_str(&format!(
            "{} {}  {} {}/100  {} {}\n",
            "Strength:".cyan().bold(),
            analysis.argument_strength,
            "Consistency:".cyan().bold(),
            graph.stats.consistency,
            "Aporia:".cyan().bold(),
            if analysis.aporia_reached { "reached" } else { "not yet" }
        ));

        if !analysis.claims.is_empty() {
            output.push_str(&format!("\n{}\n", "Claims:".cyan().bold()));
            for claim in &analysis.claims {
                output.push_str(&format!(
                    "  [{}] {} (turn {}, {})\n",
                    claim.id, claim.text, claim.turn, claim.speaker
                ));
            }
        }

        if !analysis.contradictions.is_empty() {
            output.push_str(&format!("\n{}\n", "Contradictions:".red().bold()));
            for c in &analysis.contradictions {
                output.push_str(&format!(
                    "  [{}] vs [{}]: {}\n",
                    c.claim_1_id, c.claim_2_id, c.explanation
                ));
            }
        }

        if !analysis.fallacies.is_empty() {
            output.push_str(&format!("\n{}\n", "Fallacies:".yellow().bold()));
            for f in &analysis.fallacies {
                output.push_str(&format!("  turn {} - {}: {}\n", f.turn, f.kind, f.explanation));
            }
        }

        output.push_str(&Self::bullet_list("Key insights:", &analysis.key_insights));
        output
    }

    pub fn format_threat_model(analysis: &ThreatModelAnalysis) -> String {
        let mut output = Self::header("Threat Model Interrogation");
        output.push('\n');

        if !analysis.severity.is_empty() {
            output.push_str(&format!("{} {}\n", "Severity:".cyan().bold(), analysis.severity));
        }

        if !analysis.assumptions.is_empty() {
            output.push_str(&Self::section_header("Hidden assumptions"));
            for a in &analysis.assumptions {
                output.push_str(&format!("  - {}\n    {}\n", a.assumption, a.question.dimmed()));
            }
        }

        if !analysis.gaps.is_empty() {
            output.push_str(&Self::section_header("Gaps"));
            for g in &analysis.gaps {
                output.push_str(&format!("  - {} ({})\n", g.gap, g.risk));
            }
        }

        if !analysis.alternative_perspectives.is_empty() {
            output.push_str(&Self::section_header("Other perspectives"));
            for p in &analysis.alternative_perspectives {
                output.push_str(&format!("  - {}: {}\n", p.perspective, p.implication));
            }
        }

        output.push_str(&Self::bullet_list("Questions:", &analysis.questions));
        output
    }

    pub fn format_control(interrogation: &ControlInterrogation) -> String {
        let mut output = Self::header("Control Interrogation");
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n{} {}/100\n",
            "Effectiveness:".cyan().bold(),
            interrogation.effectiveness,
            "Security theater risk:".cyan().bold(),
            interrogation.security_theater_risk
        ));

        output.push_str(&Self::bullet_list("Key assumptions:", &interrogation.key_assumptions));

        if !interrogation.bypass_scenarios.is_empty() {
            output.push_str(&format!("\n{}\n", "Bypass scenarios:".red().bold()));
            for s in &interrogation.bypass_scenarios {
                output.push_str(&format!("  - {} (likelihood: {})\n", s.scenario, s.likelihood));
            }
        }

        output.push_str(&Self::bullet_list("Probing questions:", &interrogation.probing_questions));
        output.push_str(&Self::bullet_list("Recommendations:", &interrogation.recommendations));

        if !interrogation.verdict.is_empty() {
            output.push_str(&format!(
                "\n{} {}\n",
                "Verdict:".green().bold(),
                interrogation.verdict
            ));
        }
        output
    }

    /// Numbered list of Socratic questions
    pub fn format_questions(title: &str, questions: &[String]) -> String {
        let mut output = Self::section_header(title);
        for (i, question) in questions.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, question));
        }
        output
    }

    pub fn format_red_team(report: &RedTeamReport) -> String {
        let mut output = Self::header("Red Team Questions");
        output.push('\n');

        if !report.philosophical.is_empty() {
            output.push_str(&Self::section_header("Philosophical"));
            for q in &report.philosophical {
                output.push_str(&format!("  - {}\n    {}\n", q.question, q.targets.dimmed()));
            }
        }

        if !report.red_team.is_empty() {
            output.push_str(&Self::section_header("Adversarial"));
            for q in &report.red_team {
                output.push_str(&format!("  - {}\n    {}\n", q.question, q.attack_vector.dimmed()));
            }
        }

        output.push_str(&Self::bullet_list("Blind spots:", &report.blind_spots));
        output.push_str(&Self::bullet_list("Recommendations:", &report.recommendations));
        output
    }

    pub fn format_compliance(assessment: &ComplianceAssessment) -> String {
        let mut output = Self::header("Compliance vs Security");
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n{} {}\n{} {}\n",
            "Security improvement:".cyan().bold(),
            assessment.security_improvement,
            "Compliance:".cyan().bold(),
            assessment.compliance_score,
            "Risk reduction:".cyan().bold(),
            assessment.actual_risk_reduction
        ));

        if !assessment.gap_analysis.is_empty() {
            output.push_str(&format!("\n{}\n{}\n", "Gap analysis:".cyan().bold(), assessment.gap_analysis));
        }

        output.push_str(&Self::bullet_list(
            "Security theater:",
            &assessment.security_theater_elements,
        ));
        output.push_str(&Self::bullet_list("Questions to ask:", &assessment.questions_to_ask));

        if !assessment.verdict.is_empty() {
            output.push_str(&format!("\n{} {}\n", "Verdict:".green().bold(), assessment.verdict));
        }
        output
    }

    /// Numbered topic menu for a catalog
    pub fn format_topics(catalog: TopicCatalog) -> String {
        let title = match catalog {
            TopicCatalog::General => "Topics",
            TopicCatalog::Security => "Security Topics",
        };
        let mut output = Self::section_header(title);
        for (i, entry) in catalog.entries().iter().enumerate() {
            output.push_str(&format!(
                "  {:>2}. {:<22} {}\n",
                i + 1,
                entry.key.yellow(),
                entry.text
            ));
        }
        output
    }

    pub fn format_personas() -> String {
        let mut output = Self::section_header("Personas");
        for persona in Persona::list() {
            output.push_str(&format!(
                "  {:<14} {} - {}\n",
                persona.key.yellow(),
                persona.display_name.bold(),
                persona.description
            ));
        }
        output
    }

    /// Format any result as pretty JSON
    pub fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn bullet_list(title: &str, items: &[String]) -> String {
        if items.is_empty() {
            return String::new();
        }
        let mut output = format!("\n{}\n", title.cyan().bold());
        for item in items {
            output.push_str(&format!("  - {}\n", item));
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
