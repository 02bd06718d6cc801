//! Progress reporting while a debate runs

use agora_application::DebateProgressNotifier;
use agora_domain::{DebateEntry, DebateSide, Judgment};
use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Reports debate progress with a turn bar and a judging spinner
pub struct DebateProgressReporter {
    multi: MultiProgress,
    turn_bar: Mutex<Option<ProgressBar>>,
    judge_spinner: Mutex<Option<ProgressBar>>,
}

impl DebateProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            turn_bar: Mutex::new(None),
            judge_spinner: Mutex::new(None),
        }
    }

    fn turn_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for DebateProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DebateProgressNotifier for DebateProgressReporter {
    fn on_turn_start(&self, turn: usize, total: usize, side: DebateSide, speaker: &str) {
        let mut guard = self.turn_bar.lock().unwrap_or_else(PoisonError::into_inner);
        let pb = guard.get_or_insert_with(|| {
            let pb = self.multi.add(ProgressBar::new(total as u64));
            pb.set_style(Self::turn_style());
            pb.set_prefix("Debate");
            pb.enable_steady_tick(Duration::from_millis(120));
            pb
        });
        pb.set_message(format!("Turn {} · {} ({})", turn, speaker, side));
    }

    fn on_turn_complete(&self, entry: &DebateEntry) {
        if let Some(pb) = self
            .turn_bar
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            pb.set_message(format!("{} {}", "v".green(), entry.persona_name()));
            pb.inc(1);
        }
    }

    fn on_judging(&self) {
        if let Some(pb) = self
            .turn_bar
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            pb.finish_with_message(format!("{}", "exchange complete!".green()));
        }

        let spinner = self.multi.add(ProgressBar::new_spinner());
        spinner.set_style(Self::spinner_style());
        spinner.set_prefix("Judge");
        spinner.set_message("Weighing the arguments...");
        spinner.enable_steady_tick(Duration::from_millis(120));
        *self
            .judge_spinner
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(spinner);
    }

    fn on_judged(&self, judgment: &Judgment) {
        if let Some(pb) = self
            .judge_spinner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            match judgment {
                Judgment::Verdict(_) => {
                    pb.finish_with_message(format!("{} verdict reached", "v".green()))
                }
                Judgment::Unavailable { .. } => {
                    pb.finish_with_message(format!("{} no usable verdict", "x".red()))
                }
            }
        }
    }
}

/// Spinner shown while waiting on a single reply
pub fn thinking_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(DebateProgressReporter::spinner_style());
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleDebateProgress;

impl DebateProgressNotifier for SimpleDebateProgress {
    fn on_turn_start(&self, turn: usize, total: usize, side: DebateSide, speaker: &str) {
        println!(
            "{} {} ({}/{}, side {})",
            "->".cyan(),
            speaker.bold(),
            turn,
            total,
            side
        );
    }

    fn on_turn_complete(&self, entry: &DebateEntry) {
        println!("  {} {}", "v".green(), entry.persona_name());
    }

    fn on_judging(&self) {
        println!("{} {}", "->".cyan(), "Judging".bold());
    }

    fn on_judged(&self, judgment: &Judgment) {
        match judgment {
            Judgment::Verdict(_) => println!("  {} verdict reached\n", "v".green()),
            Judgment::Unavailable { .. } => println!("  {} no usable verdict\n", "x".red()),
        }
    }
}
