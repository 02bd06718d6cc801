//! REPL (Read-Eval-Print Loop) for interactive dialogue

use crate::ConsoleFormatter;
use crate::progress::reporter::thinking_spinner;
use agora_application::{
    ArgumentAnalyzer, DialogueService, DifficultyController, PlainInstructions, SessionStore,
    TurnError,
};
use agora_domain::{Conversation, DialogueSession, SessionId, TopicCatalog, TopicSelection};
use colored::Colorize;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

const HISTORY_CAPACITY: usize = 1000;

/// How philosopher replies are produced
pub enum DialogueEngine {
    /// Difficulty is reassessed on cadence and shapes every reply
    Adaptive(DifficultyController),
    /// Replies use the session's instructions unchanged
    Plain(DialogueService),
}

impl DialogueEngine {
    fn dialogue(&self) -> &DialogueService {
        match self {
            DialogueEngine::Adaptive(controller) => controller.dialogue(),
            DialogueEngine::Plain(service) => service,
        }
    }

    fn is_adaptive(&self) -> bool {
        matches!(self, DialogueEngine::Adaptive(_))
    }

    async fn open(&self, conversation: &mut Conversation) -> Result<String, TurnError> {
        match self {
            DialogueEngine::Adaptive(controller) => controller.open(conversation).await,
            DialogueEngine::Plain(service) => {
                service
                    .open(&mut conversation.session, &PlainInstructions)
                    .await
            }
        }
    }

    async fn respond(&self, conversation: &mut Conversation, text: &str) -> Result<String, TurnError> {
        match self {
            DialogueEngine::Adaptive(controller) => controller.respond(conversation, text).await,
            DialogueEngine::Plain(service) => {
                service
                    .append_and_generate(&mut conversation.session, text, &PlainInstructions)
                    .await
            }
        }
    }
}

/// A slash command typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// `/topic` lists the catalog; `/topic <key|number|text>` selects a topic
    Topic(Option<String>),
    /// `/persona` lists personas; `/persona <key>` switches persona
    Persona(Option<String>),
    Difficulty,
    Analyze,
    Export,
    Reset,
    Help,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line starting with `/`. Returns `None` for ordinary input.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let rest = line.strip_prefix('/')?;
        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, Some(arg.trim().to_string()).filter(|a| !a.is_empty())),
            None => (rest, None),
        };

        Some(match name {
            "topic" | "t" => ReplCommand::Topic(arg),
            "persona" | "p" => ReplCommand::Persona(arg),
            "difficulty" | "d" => ReplCommand::Difficulty,
            "analyze" | "a" => ReplCommand::Analyze,
            "export" | "e" => ReplCommand::Export,
            "reset" => ReplCommand::Reset,
            "help" | "h" | "?" => ReplCommand::Help,
            "quit" | "exit" | "q" => ReplCommand::Quit,
            _ => ReplCommand::Unknown(line.to_string()),
        })
    }
}

/// Interactive dialogue REPL
pub struct DialogueRepl {
    engine: DialogueEngine,
    analyzer: ArgumentAnalyzer,
    store: Arc<dyn SessionStore>,
    session_id: SessionId,
    security: bool,
    show_progress: bool,
    export_dir: PathBuf,
}

impl DialogueRepl {
    pub fn new(
        engine: DialogueEngine,
        analyzer: ArgumentAnalyzer,
        store: Arc<dyn SessionStore>,
        session_id: SessionId,
    ) -> Self {
        Self {
            engine,
            analyzer,
            store,
            session_id,
            security: false,
            show_progress: true,
            export_dir: PathBuf::from("."),
        }
    }

    /// Use the security topic catalog for `/topic`
    pub fn with_security(mut self, security: bool) -> Self {
        self.security = security;
        self
    }

    /// Set whether to show a spinner while waiting for replies
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Directory `/export` writes transcripts to
    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = dir.into();
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> io::Result<()> {
        let mut editor = Reedline::create();

        let history_path = dirs::data_dir().map(|p| p.join("agora").join("history.txt"));
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            if let Ok(history) = FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
                editor = editor.with_history(Box::new(history));
            }
        }

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("agora".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome().await;

        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    if self.handle_line(&line).await {
                        break;
                    }
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Process one line of input. Returns true if the REPL should exit.
    pub async fn handle_line(&self, line: &str) -> bool {
        let line = line.trim();
        if line.is_empty() {
            return false;
        }

        match ReplCommand::parse(line) {
            Some(command) => self.handle_command(command).await,
            None => {
                self.process_message(line).await;
                false
            }
        }
    }

    /// Switch persona. Returns the display name of the persona now active.
    pub async fn select_persona(&self, key: &str) -> &'static str {
        let conversation = self.store.get_or_create(&self.session_id);
        let mut conversation = conversation.lock().await;
        self.engine
            .dialogue()
            .select_persona(&mut conversation.session, key)
            .display_name
    }

    /// Select a topic and let the philosopher open the dialogue.
    pub async fn begin_topic(&self, selection: TopicSelection) {
        let conversation = self.store.get_or_create(&self.session_id);
        let mut conversation = conversation.lock().await;

        let topic = match self
            .engine
            .dialogue()
            .select_topic(&mut conversation.session, selection, self.security)
        {
            Ok(topic) => topic,
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
                return;
            }
        };
        println!("{} {}", "Topic:".cyan().bold(), topic);

        let spinner = self.show_progress.then(|| thinking_spinner("Thinking..."));
        let result = self.engine.open(&mut conversation).await;
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }
        Self::print_turn(&conversation, result);
    }

    async fn process_message(&self, text: &str) {
        let conversation = self.store.get_or_create(&self.session_id);
        let mut conversation = conversation.lock().await;

        if conversation.session.topic().is_none() {
            println!("Choose a topic first with /topic (type /topic to list them).");
            return;
        }

        let spinner = self.show_progress.then(|| thinking_spinner("Thinking..."));
        let result = self.engine.respond(&mut conversation, text).await;
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }
        Self::print_turn(&conversation, result);
    }

    fn print_turn(conversation: &Conversation, result: Result<String, TurnError>) {
        match result {
            Ok(reply) => println!(
                "{}",
                ConsoleFormatter::format_reply(conversation.session.persona().display_name, &reply)
            ),
            Err(e) => eprintln!("{} {}", "Error:".red().bold(), e),
        }
    }

    /// Handle slash commands. Returns true if should exit.
    async fn handle_command(&self, command: ReplCommand) -> bool {
        debug!("REPL command: {:?}", command);
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Help => Self::print_help(),
            ReplCommand::Topic(None) => {
                println!("{}", ConsoleFormatter::format_topics(TopicCatalog::for_mode(self.security)));
                println!("Use /topic <number|key> or /topic custom <your question>.");
            }
            ReplCommand::Topic(Some(arg)) => {
                let selection = self.topic_selection(&arg);
                self.begin_topic(selection).await;
            }
            ReplCommand::Persona(None) => {
                println!("{}", ConsoleFormatter::format_personas());
            }
            ReplCommand::Persona(Some(key)) => {
                let name = self.select_persona(&key).await;
                println!("{} {} (history cleared)", "Persona:".cyan().bold(), name);
            }
            ReplCommand::Difficulty => {
                let conversation = self.store.get_or_create(&self.session_id);
                let conversation = conversation.lock().await;
                println!("{}", ConsoleFormatter::format_difficulty(&conversation.difficulty));
                if !self.engine.is_adaptive() {
                    println!("Adaptive difficulty is disabled for this session.");
                }
            }
            ReplCommand::Analyze => {
                let conversation = self.store.get_or_create(&self.session_id);
                let conversation = conversation.lock().await;
                let spinner = self.show_progress.then(|| thinking_spinner("Analyzing..."));
                let outcome = self
                    .analyzer
                    .analyze_dialogue(conversation.session.history())
                    .await;
                if let Some(spinner) = spinner {
                    spinner.finish_and_clear();
                }
                println!(
                    "{}",
                    ConsoleFormatter::format_outcome(
                        &outcome,
                        ConsoleFormatter::format_argument_analysis
                    )
                );
            }
            ReplCommand::Export => {
                let conversation = self.store.get_or_create(&self.session_id);
                let conversation = conversation.lock().await;
                match self.export(&conversation.session) {
                    Ok(path) => println!("{} {}", "Exported to".green(), path.display()),
                    Err(e) => eprintln!("{} {}", "Export failed:".red().bold(), e),
                }
            }
            ReplCommand::Reset => {
                let conversation = self.store.get_or_create(&self.session_id);
                conversation.lock().await.reset();
                println!("Conversation reset. Choose a new topic with /topic.");
            }
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        false
    }

    /// Menu numbers pick from the active catalog; `custom <text>` is free text.
    fn topic_selection(&self, arg: &str) -> TopicSelection {
        if let Some(text) = arg.strip_prefix("custom ") {
            return TopicSelection::Custom(text.trim().to_string());
        }
        let catalog = TopicCatalog::for_mode(self.security);
        match arg.parse::<usize>().ok().and_then(|n| catalog.nth(n)) {
            Some(entry) => TopicSelection::Catalog(entry.key.to_string()),
            None => TopicSelection::Catalog(arg.to_string()),
        }
    }

    /// Write the session transcript into the export directory
    pub fn export(&self, session: &DialogueSession) -> io::Result<PathBuf> {
        let transcript = session
            .transcript()
            .map_err(|e| io::Error::other(e.to_string()))?;
        std::fs::create_dir_all(&self.export_dir)?;
        let path = self.export_dir.join(session.transcript_file_name());
        std::fs::write(&path, transcript)?;
        Ok(path)
    }

    async fn print_welcome(&self) {
        let conversation = self.store.get_or_create(&self.session_id);
        let conversation = conversation.lock().await;

        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│            Agora - Dialogue Mode            │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Persona: {}", conversation.session.persona().display_name);
        if let Some(topic) = conversation.session.topic() {
            println!("Topic:   {}", topic);
        }
        if self.security {
            println!("Mode:    Security");
        }
        println!();
        println!("Type /help for commands.");
        println!();
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  /topic [n|key|custom text] - List or choose a topic");
        println!("  /persona [key]             - List or switch persona");
        println!("  /difficulty                - Show the current difficulty");
        println!("  /analyze                   - Analyze your arguments so far");
        println!("  /export                    - Save the transcript to a file");
        println!("  /reset                     - Clear topic and history");
        println!("  /help, /h, /?              - Show this help");
        println!("  /quit, /exit, /q           - Exit");
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_application::{EngineConfig, LanguageOracle, OracleError, SharedConversation};
    use agora_domain::OracleRequest;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct FixedOracle(&'static str);

    #[async_trait]
    impl LanguageOracle for FixedOracle {
        async fn generate(&self, _request: &OracleRequest) -> Result<String, OracleError> {
            Ok(self.0.to_string())
        }
    }

    #[derive(Default)]
    struct MapStore(Mutex<HashMap<SessionId, SharedConversation>>);

    impl SessionStore for MapStore {
        fn get_or_create(&self, id: &SessionId) -> SharedConversation {
            self.0
                .lock()
                .unwrap()
                .entry(id.clone())
                .or_insert_with(|| {
                    Arc::new(tokio::sync::Mutex::new(Conversation::new(id.clone())))
                })
                .clone()
        }

        fn get(&self, id: &SessionId) -> Option<SharedConversation> {
            self.0.lock().unwrap().get(id).cloned()
        }

        fn remove(&self, id: &SessionId) -> bool {
            self.0.lock().unwrap().remove(id).is_some()
        }

        fn len(&self) -> usize {
            self.0.lock().unwrap().len()
        }
    }

    fn repl(store: Arc<MapStore>) -> DialogueRepl {
        let oracle = Arc::new(FixedOracle("What do you mean by that?"));
        let engine = DialogueEngine::Plain(DialogueService::new(
            oracle.clone(),
            &EngineConfig::default(),
        ));
        DialogueRepl::new(engine, ArgumentAnalyzer::new(oracle), store, SessionId::new("repl"))
            .with_progress(false)
    }

    async fn history_len(store: &MapStore) -> usize {
        let conversation = store.get_or_create(&SessionId::new("repl"));
        let len = conversation.lock().await.session.history().len();
        len
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ReplCommand::parse("hello"), None);
        assert_eq!(ReplCommand::parse("/quit"), Some(ReplCommand::Quit));
        assert_eq!(ReplCommand::parse("/q"), Some(ReplCommand::Quit));
        assert_eq!(ReplCommand::parse("/topic"), Some(ReplCommand::Topic(None)));
        assert_eq!(
            ReplCommand::parse("/topic  custom What is time? "),
            Some(ReplCommand::Topic(Some("custom What is time?".to_string())))
        );
        assert_eq!(
            ReplCommand::parse("/persona stoic"),
            Some(ReplCommand::Persona(Some("stoic".to_string())))
        );
        assert_eq!(
            ReplCommand::parse("/bogus"),
            Some(ReplCommand::Unknown("/bogus".to_string()))
        );
    }

    #[test]
    fn test_topic_selection_by_number_key_and_text() {
        let repl = repl(Arc::new(MapStore::default()));

        assert_eq!(
            repl.topic_selection("1"),
            TopicSelection::Catalog(TopicCatalog::General.entries()[0].key.to_string())
        );
        assert_eq!(
            repl.topic_selection("justice"),
            TopicSelection::Catalog("justice".to_string())
        );
        assert_eq!(
            repl.topic_selection("custom Is time real?"),
            TopicSelection::Custom("Is time real?".to_string())
        );
    }

    #[tokio::test]
    async fn test_message_without_topic_makes_no_turn() {
        let store = Arc::new(MapStore::default());
        let repl = repl(store.clone());

        assert!(!repl.handle_line("I think justice is fairness").await);
        assert_eq!(history_len(&store).await, 0);
    }

    #[tokio::test]
    async fn test_topic_then_message_grows_history() {
        let store = Arc::new(MapStore::default());
        let repl = repl(store.clone());

        repl.handle_line("/topic justice").await;
        assert_eq!(history_len(&store).await, 2);

        repl.handle_line("Justice is giving each their due.").await;
        assert_eq!(history_len(&store).await, 4);

        repl.handle_line("/persona stoic").await;
        assert_eq!(history_len(&store).await, 0);
    }

    #[tokio::test]
    async fn test_reset_clears_topic() {
        let store = Arc::new(MapStore::default());
        let repl = repl(store.clone());

        repl.handle_line("/topic justice").await;
        repl.handle_line("/reset").await;

        let conversation = store.get_or_create(&SessionId::new("repl"));
        let conversation = conversation.lock().await;
        assert_eq!(conversation.session.topic(), None);
        assert!(conversation.session.history().is_empty());
    }

    #[tokio::test]
    async fn test_export_writes_transcript() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(MapStore::default());
        let repl = repl(store.clone()).with_export_dir(dir.path());

        repl.handle_line("/topic justice").await;

        let conversation = store.get_or_create(&SessionId::new("repl"));
        let conversation = conversation.lock().await;
        let path = repl.export(&conversation.session).unwrap();

        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.contains("What is justice?"));
        assert!(written.contains("What do you mean by that?"));
    }

    #[tokio::test]
    async fn test_export_without_dialogue_fails() {
        let dir = tempfile::tempdir().unwrap();
        let repl = repl(Arc::new(MapStore::default())).with_export_dir(dir.path());

        let session = DialogueSession::new("empty");
        assert!(repl.export(&session).is_err());
    }

    #[tokio::test]
    async fn test_quit_ends_loop() {
        let repl = repl(Arc::new(MapStore::default()));
        assert!(repl.handle_line("/quit").await);
        assert!(!repl.handle_line("/help").await);
    }
}
