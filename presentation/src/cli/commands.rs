//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for agora
#[derive(Parser, Debug)]
#[command(name = "agora")]
#[command(author, version, about = "Philosophical dialogue and debate engine")]
#[command(long_about = r#"
Agora holds Socratic dialogues with you, stages debates between philosopher
personas, and interrogates security claims with philosophical questions.

Modes:
1. chat     Interactive dialogue with a philosopher persona
2. debate   Two personas argue opposing positions, then a judge scores them
3. threat   Philosophical interrogation of threat models and controls

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./agora.toml        Project-level config
3. ~/.config/agora/config.toml   Global config

Example:
  agora chat --topic justice --persona socratic
  agora debate --topic "Is lying ever right?" --persona-a stoic --persona-b existentialist \
      --position-a "Never" --position-b "Only we can decide"
  agora threat control "MFA on all admin accounts" --context "cloud console"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start an interactive dialogue
    Chat(ChatArgs),
    /// Stage a debate between two personas
    Debate(DebateArgs),
    /// Interrogate security claims
    #[command(subcommand)]
    Threat(ThreatCommand),
    /// List the topic catalog
    Topics {
        /// Show the security catalog instead of the general one
        #[arg(long)]
        security: bool,
    },
    /// List the available personas
    Personas,
}

#[derive(Args, Debug, Default)]
pub struct ChatArgs {
    /// Topic key from the catalog (unknown keys are used as the topic text)
    #[arg(short, long, value_name = "KEY")]
    pub topic: Option<String>,

    /// Free-text topic, used verbatim
    #[arg(long, value_name = "TEXT", conflicts_with = "topic")]
    pub custom: Option<String>,

    /// Persona key (defaults to the configured persona)
    #[arg(short, long, value_name = "KEY")]
    pub persona: Option<String>,

    /// Use the security topic catalog and questioning style
    #[arg(long)]
    pub security: bool,

    /// Disable adaptive difficulty
    #[arg(long)]
    pub no_adaptive: bool,
}

#[derive(Args, Debug)]
pub struct DebateArgs {
    /// The question under debate
    #[arg(long)]
    pub topic: String,

    /// Persona arguing side A (speaks first)
    #[arg(long, value_name = "KEY")]
    pub persona_a: String,

    /// Persona arguing side B
    #[arg(long, value_name = "KEY")]
    pub persona_b: String,

    /// Position defended by side A
    #[arg(long, value_name = "TEXT")]
    pub position_a: String,

    /// Position defended by side B
    #[arg(long, value_name = "TEXT")]
    pub position_b: String,

    /// Number of turns (defaults to the configured count)
    #[arg(short = 'n', long)]
    pub turns: Option<usize>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum ThreatCommand {
    /// Question the assumptions of a threat model
    Analyze {
        /// Threat model description
        description: String,
        #[arg(long)]
        json: bool,
    },
    /// Interrogate a security control
    Control {
        /// The control under examination
        control: String,
        /// Where the control is deployed
        #[arg(long, default_value = "")]
        context: String,
        #[arg(long)]
        json: bool,
    },
    /// Produce Socratic questions challenging a security claim
    Challenge {
        claim: String,
        #[arg(long)]
        json: bool,
    },
    /// Generate philosophical and red-team questions for a system
    Redteam {
        /// System description
        system: String,
        #[arg(long)]
        json: bool,
    },
    /// Compare compliance with actual security improvement
    Compliance {
        requirement: String,
        implementation: String,
        #[arg(long)]
        json: bool,
    },
}

impl ThreatCommand {
    pub fn json(&self) -> bool {
        match self {
            ThreatCommand::Analyze { json, .. }
            | ThreatCommand::Control { json, .. }
            | ThreatCommand::Challenge { json, .. }
            | ThreatCommand::Redteam { json, .. }
            | ThreatCommand::Compliance { json, .. } => *json,
        }
    }
}
