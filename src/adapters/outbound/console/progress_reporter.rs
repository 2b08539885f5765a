use crate::ports::outbound::ProgressReporter;
use chrono::{Local, Timelike};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::sync::{Mutex, MutexGuard};

/// Wall-clock prefix for log lines, e.g. `[9:5:3]` (components are not zero-padded)
pub fn timestamp() -> String {
    let now = Local::now();
    format!("[{}:{}:{}]", now.hour(), now.minute(), now.second())
}

/// StderrProgressReporter adapter for timestamped progress output on stderr
///
/// Every line is prefixed with [`timestamp`]. While an extraction progress
/// bar is active, log lines are printed above it.
pub struct StderrProgressReporter {
    progress_bar: Mutex<Option<ProgressBar>>,
    colored: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: Mutex::new(None),
            colored: std::io::stderr().is_terminal(),
        }
    }

    fn bar(&self) -> MutexGuard<'_, Option<ProgressBar>> {
        self.progress_bar
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn emit(&self, line: &str) {
        let line = format!("{} {}", timestamp(), line);
        match self.bar().as_ref() {
            Some(pb) => pb.suspend(|| eprintln!("{}", line)),
            None => eprintln!("{}", line),
        }
    }

    fn finish_bar(&self) {
        if let Some(pb) = self.bar().take() {
            pb.finish_and_clear();
        }
    }

    fn new_bar(total: usize) -> ProgressBar {
        let pb = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) - {msg}")
        {
            pb.set_style(style.progress_chars("=>-"));
        }
        pb
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        self.emit(message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let mut guard = self.bar();
        let pb = guard.get_or_insert_with(|| Self::new_bar(total));
        pb.set_length(total as u64);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        if self.colored {
            self.emit(&message.red().to_string());
        } else {
            self.emit(message);
        }
    }

    fn report_completion(&self, message: &str) {
        self.finish_bar();
        if self.colored {
            self.emit(&message.green().to_string());
        } else {
            self.emit(message);
        }
    }
}
