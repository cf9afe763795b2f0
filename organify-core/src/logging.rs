//! The line-oriented logger collaborator.
//!
//! Operations emit severity-tagged lines through [`OpLog`]; rendering and
//! persistence belong to the host. [`TermLog`] writes timestamped colored
//! lines to stderr, [`MemoryLog`] records everything for tests and for hosts
//! that render the log themselves.

use chrono::Local;
use nu_ansi_term::Color;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    /// Short marker rendered in front of terminal log lines.
    fn tag(self) -> &'static str {
        match self {
            Self::Info => " ",
            Self::Success => "+",
            Self::Warning => "!",
            Self::Error => "x",
        }
    }
}

pub trait OpLog: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);

    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    fn success(&self, message: &str) {
        self.log(LogLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

/// Timestamped, severity-colored log lines on stderr.
pub struct TermLog {
    use_color: bool,
}

impl TermLog {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl OpLog for TermLog {
    fn log(&self, level: LogLevel, message: &str) {
        let timestamp = Local::now().format("%H:%M:%S");
        let line = format!("[{timestamp}] {} {message}", level.tag());
        if self.use_color {
            let painted = match level {
                LogLevel::Info => line.into(),
                LogLevel::Success => Color::Green.paint(line),
                LogLevel::Warning => Color::Yellow.paint(line),
                LogLevel::Error => Color::Red.paint(line),
            };
            eprintln!("{painted}");
        } else {
            eprintln!("{line}");
        }
    }
}

/// Collects log lines in memory.
#[derive(Default)]
pub struct MemoryLog {
    entries: Mutex<Vec<(LogLevel, String)>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        self.entries.lock().expect("log mutex poisoned").clone()
    }

    /// Messages only, in emission order.
    pub fn messages(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .map(|(_, message)| message)
            .collect()
    }

    pub fn clear(&self) {
        self.entries.lock().expect("log mutex poisoned").clear();
    }
}

impl OpLog for MemoryLog {
    fn log(&self, level: LogLevel, message: &str) {
        self.entries
            .lock()
            .expect("log mutex poisoned")
            .push((level, message.to_string()));
    }
}
