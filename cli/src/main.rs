//! CLI entrypoint for agora
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use agora_application::{
    ArgumentAnalyzer, ConversationLogger, DebateOrchestrator, DebateProgressNotifier,
    DialogueService, DifficultyController, EngineConfig, LanguageOracle, NoConversationLogger,
    NoDebateProgress, ThreatInterrogator,
};
use agora_domain::{AnalysisOutcome, DebateReport, DebateState, SessionId, TopicCatalog, TopicSelection};
use agora_infrastructure::{
    AnthropicConfig, AnthropicOracle, ConfigLoader, FileConfig, InMemorySessionStore,
    JsonlConversationLogger,
};
use agora_presentation::{
    ChatArgs, Cli, Command, ConsoleFormatter, DebateArgs, DebateProgressReporter, DialogueEngine,
    DialogueRepl, SimpleDebateProgress, ThreatCommand,
};
use anyhow::{Context, Result, anyhow};
use clap::Parser;
use serde::Serialize;
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("failed to load configuration: {}", e))?
    };

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        println!("\nEffective configuration:\n");
        println!("{}", config.to_toml_string()?);
        return Ok(());
    }

    config.validate()?;

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, config.logging.file.as_deref())?;

    info!("Starting agora");

    let command = cli.command.unwrap_or(Command::Chat(ChatArgs::default()));

    // Catalog listings need no oracle
    match &command {
        Command::Topics { security } => {
            println!("{}", ConsoleFormatter::format_topics(TopicCatalog::for_mode(*security)));
            return Ok(());
        }
        Command::Personas => {
            println!("{}", ConsoleFormatter::format_personas());
            return Ok(());
        }
        _ => {}
    }

    // === Dependency Injection ===
    let engine_config = config.engine_config();
    let oracle = build_oracle(&config)?;
    let logger = build_conversation_logger(&config)?;

    match command {
        Command::Chat(args) => run_chat(args, &config, &engine_config, oracle, logger).await,
        Command::Debate(args) => run_debate(args, &engine_config, oracle, logger).await,
        Command::Threat(cmd) => run_threat(cmd, oracle).await,
        Command::Topics { .. } | Command::Personas => Ok(()),
    }
}

/// Initialize logging based on verbosity level, optionally mirrored to a file
fn init_logging(verbose: u8, file: Option<&str>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let (file_layer, guard) = match file {
        Some(path) => {
            let path = Path::new(path);
            let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
            let dir = dir.unwrap_or_else(|| Path::new("."));
            std::fs::create_dir_all(dir)
                .with_context(|| format!("cannot create log directory {}", dir.display()))?;
            let name = path
                .file_name()
                .ok_or_else(|| anyhow!("invalid log file path: {}", path.display()))?;

            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false)
                .with_filter(EnvFilter::new(level));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(EnvFilter::new(level)),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

fn build_oracle(config: &FileConfig) -> Result<Arc<dyn LanguageOracle>> {
    let api_key = config.oracle.resolve_api_key().ok_or_else(|| {
        anyhow!(
            "No API key found. Set {} or oracle.api_key in agora.toml.",
            config.oracle.api_key_env
        )
    })?;

    let oracle = AnthropicOracle::new(
        AnthropicConfig::new(api_key)
            .with_model(config.oracle.model.clone())
            .with_base_url(config.oracle.base_url.clone())
            .with_api_version(config.oracle.api_version.clone())
            .with_timeout(Duration::from_secs(config.oracle.timeout_seconds)),
    )?;
    info!("Using model {}", oracle.model());

    Ok(Arc::new(oracle))
}

fn build_conversation_logger(config: &FileConfig) -> Result<Arc<dyn ConversationLogger>> {
    match config.logging.conversation_log.as_deref() {
        Some(path) => {
            let logger = JsonlConversationLogger::open(path)
                .with_context(|| format!("cannot open conversation log {}", path))?;
            info!("Writing conversation log to {}", logger.path().display());
            Ok(Arc::new(logger))
        }
        None => Ok(Arc::new(NoConversationLogger)),
    }
}

async fn run_chat(
    args: ChatArgs,
    config: &FileConfig,
    engine_config: &EngineConfig,
    oracle: Arc<dyn LanguageOracle>,
    logger: Arc<dyn ConversationLogger>,
) -> Result<()> {
    let adaptive = config.difficulty.adaptive && !args.no_adaptive;
    let engine = if adaptive {
        DialogueEngine::Adaptive(
            DifficultyController::new(oracle.clone(), engine_config).with_conversation_logger(logger),
        )
    } else {
        DialogueEngine::Plain(
            DialogueService::new(oracle.clone(), engine_config).with_conversation_logger(logger),
        )
    };

    let session_id = SessionId::new(format!("cli-{}", chrono::Utc::now().format("%Y%m%d%H%M%S")));
    let repl = DialogueRepl::new(
        engine,
        ArgumentAnalyzer::new(oracle),
        Arc::new(InMemorySessionStore::new()),
        session_id,
    )
    .with_security(args.security);

    let persona = args.persona.as_deref().unwrap_or(&config.dialogue.persona);
    repl.select_persona(persona).await;

    let selection = match (args.custom, args.topic) {
        (Some(text), _) => Some(TopicSelection::from_input(text, true)),
        (None, Some(key)) => Some(TopicSelection::from_input(key, false)),
        (None, None) => None,
    };
    if let Some(selection) = selection {
        repl.begin_topic(selection).await;
    }

    repl.run().await?;
    Ok(())
}

async fn run_debate(
    args: DebateArgs,
    engine_config: &EngineConfig,
    oracle: Arc<dyn LanguageOracle>,
    logger: Arc<dyn ConversationLogger>,
) -> Result<()> {
    let orchestrator =
        DebateOrchestrator::new(oracle, engine_config).with_conversation_logger(logger);
    let turns = args.turns.unwrap_or(engine_config.default_debate_turns);

    let progress: Box<dyn DebateProgressNotifier> = if args.quiet {
        Box::new(NoDebateProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(DebateProgressReporter::new())
    } else if args.json {
        Box::new(NoDebateProgress)
    } else {
        Box::new(SimpleDebateProgress)
    };

    let mut state = DebateState::default();
    orchestrator.setup(
        &mut state,
        &args.topic,
        &args.persona_a,
        &args.persona_b,
        &args.position_a,
        &args.position_b,
    );
    orchestrator.run(&mut state, turns, progress.as_ref()).await?;
    let judgment = orchestrator.judge(&mut state, progress.as_ref()).await?;

    let report = DebateReport {
        topic: args.topic,
        entries: state.exchange_log().to_vec(),
        judgment,
    };

    if report.judgment.verdict().is_none() {
        warn!("Judge produced no usable verdict");
    }

    let output = if args.json {
        ConsoleFormatter::format_json(&report)
    } else {
        ConsoleFormatter::format_debate_report(&report)
    };
    println!("{}", output);

    Ok(())
}

async fn run_threat(cmd: ThreatCommand, oracle: Arc<dyn LanguageOracle>) -> Result<()> {
    let interrogator = ThreatInterrogator::new(oracle);
    let json = cmd.json();

    let output = match cmd {
        ThreatCommand::Analyze { description, .. } => {
            let outcome = interrogator.analyze_threat_model(&description).await;
            render(&outcome, json, ConsoleFormatter::format_threat_model)
        }
        ThreatCommand::Control { control, context, .. } => {
            let outcome = interrogator.interrogate_control(&control, &context).await;
            render(&outcome, json, ConsoleFormatter::format_control)
        }
        ThreatCommand::Challenge { claim, .. } => {
            let outcome = interrogator.challenge_assumptions(&claim).await;
            render(&outcome, json, |questions| {
                ConsoleFormatter::format_questions("Socratic Challenges", questions)
            })
        }
        ThreatCommand::Redteam { system, .. } => {
            let outcome = interrogator.red_team_questions(&system).await;
            render(&outcome, json, ConsoleFormatter::format_red_team)
        }
        ThreatCommand::Compliance {
            requirement,
            implementation,
            ..
        } => {
            let outcome = interrogator
                .compliance_vs_security(&requirement, &implementation)
                .await;
            render(&outcome, json, ConsoleFormatter::format_compliance)
        }
    };

    println!("{}", output);
    Ok(())
}

fn render<T: Serialize>(
    outcome: &AnalysisOutcome<T>,
    json: bool,
    format: impl Fn(&T) -> String,
) -> String {
    if json {
        ConsoleFormatter::format_json(outcome)
    } else {
        ConsoleFormatter::format_outcome(outcome, format)
    }
}
