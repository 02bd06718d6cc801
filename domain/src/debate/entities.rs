//! Debate entities

use crate::core::error::DomainError;
use crate::persona::Persona;
use serde::Serialize;

/// Which debater
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DebateSide {
    A,
    B,
}

impl DebateSide {
    /// Speaker of 1-based turn `turn`: B on even turns, A otherwise.
    ///
    /// A always opens. With an even turn count B closes; with an odd one A
    /// both opens and closes.
    pub fn for_turn(turn: usize) -> Self {
        if turn % 2 == 0 {
            DebateSide::B
        } else {
            DebateSide::A
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            DebateSide::A => DebateSide::B,
            DebateSide::B => DebateSide::A,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DebateSide::A => "A",
            DebateSide::B => "B",
        }
    }
}

impl std::fmt::Display for DebateSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A persona defending a position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Debater {
    pub persona: &'static Persona,
    pub position: String,
}

impl Debater {
    /// Unknown persona keys fall back to the default persona
    pub fn new(persona_key: &str, position: impl Into<String>) -> Self {
        Self {
            persona: Persona::lookup_or_default(persona_key),
            position: position.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.persona.display_name
    }
}

/// What a debate is about and who argues it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebateSetup {
    pub topic: String,
    pub a: Debater,
    pub b: Debater,
}

impl DebateSetup {
    pub fn new(topic: impl Into<String>, a: Debater, b: Debater) -> Self {
        Self {
            topic: topic.into(),
            a,
            b,
        }
    }

    pub fn debater(&self, side: DebateSide) -> &Debater {
        match side {
            DebateSide::A => &self.a,
            DebateSide::B => &self.b,
        }
    }
}

/// One logged debate turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebateEntry {
    /// 1-based turn index
    pub turn: usize,
    pub side: DebateSide,
    pub persona: &'static str,
    pub speaker: String,
    pub text: String,
}

impl DebateEntry {
    pub fn persona_name(&self) -> &'static str {
        Persona::lookup_or_default(self.persona).display_name
    }
}

/// Lifecycle of a debate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum DebatePhase {
    #[default]
    Idle,
    Configured,
    Running {
        turn: usize,
    },
    Completed,
    Judged,
}

/// State of one debate run (ephemeral)
#[derive(Debug, Clone, Default)]
pub struct DebateState {
    setup: Option<DebateSetup>,
    exchange_log: Vec<DebateEntry>,
    phase: DebatePhase,
}

impl DebateState {
    pub fn phase(&self) -> DebatePhase {
        self.phase
    }

    pub fn setup(&self) -> Option<&DebateSetup> {
        self.setup.as_ref()
    }

    pub fn exchange_log(&self) -> &[DebateEntry] {
        &self.exchange_log
    }

    /// Idle/any → Configured, with an empty log
    pub fn configure(&mut self, setup: DebateSetup) {
        self.setup = Some(setup);
        self.exchange_log.clear();
        self.phase = DebatePhase::Configured;
    }

    /// Configured → Running(0)
    pub fn begin(&mut self) -> Result<&DebateSetup, DomainError> {
        if self.phase != DebatePhase::Configured {
            return Err(DomainError::invalid_state(format!(
                "debate must be configured before it runs (phase: {:?})",
                self.phase
            )));
        }
        self.phase = DebatePhase::Running { turn: 0 };
        self.setup
            .as_ref()
            .ok_or_else(|| DomainError::invalid_state("debate has no setup"))
    }

    /// Side due to speak next while running
    pub fn next_side(&self) -> DebateSide {
        DebateSide::for_turn(self.exchange_log.len() + 1)
    }

    /// Append one turn for the side due to speak and advance
    pub fn record(&mut self, text: impl Into<String>) -> Result<&DebateEntry, DomainError> {
        if !matches!(self.phase, DebatePhase::Running { .. }) {
            return Err(DomainError::invalid_state("debate is not running"));
        }
        let setup = self
            .setup
            .as_ref()
            .ok_or_else(|| DomainError::invalid_state("debate has no setup"))?;

        let turn = self.exchange_log.len() + 1;
        let side = DebateSide::for_turn(turn);
        let debater = setup.debater(side);
        self.exchange_log.push(DebateEntry {
            turn,
            side,
            persona: debater.persona.key,
            speaker: format!("{} (Position: {})", debater.name(), debater.position),
            text: text.into(),
        });
        self.phase = DebatePhase::Running { turn };
        Ok(&self.exchange_log[turn - 1])
    }

    /// Running → Completed
    pub fn complete(&mut self) {
        if matches!(self.phase, DebatePhase::Running { .. }) {
            self.phase = DebatePhase::Completed;
        }
    }

    /// Completed → Judged
    pub fn mark_judged(&mut self) {
        if self.phase == DebatePhase::Completed {
            self.phase = DebatePhase::Judged;
        }
    }

    /// Back to Idle, dropping setup and log
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
