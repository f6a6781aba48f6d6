//! Standard stream appender

use crate::core::{Appender, LoggerError, Result};
use std::io::{self, Write};

/// Which standard stream a [`ConsoleAppender`] writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    Stderr,
}

impl ConsoleTarget {
    /// Resolve the reserved output path names `stdout` and `stderr`
    pub fn from_path_name(name: &str) -> Option<Self> {
        match name {
            "stdout" => Some(ConsoleTarget::Stdout),
            "stderr" => Some(ConsoleTarget::Stderr),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConsoleTarget::Stdout => "stdout",
            ConsoleTarget::Stderr => "stderr",
        }
    }
}

/// Writes every line to standard output or standard error, regardless of level
#[derive(Debug, Default)]
pub struct ConsoleAppender {
    target: ConsoleTarget,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self::stdout()
    }

    pub fn stdout() -> Self {
        Self::with_target(ConsoleTarget::Stdout)
    }

    pub fn stderr() -> Self {
        Self::with_target(ConsoleTarget::Stderr)
    }

    pub fn with_target(target: ConsoleTarget) -> Self {
        Self { target }
    }

    pub fn target(&self) -> ConsoleTarget {
        self.target
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, line: &str) -> Result<()> {
        let written = match self.target {
            ConsoleTarget::Stdout => writeln!(io::stdout().lock(), "{}", line),
            ConsoleTarget::Stderr => writeln!(io::stderr().lock(), "{}", line),
        };
        let target = self.target.as_str();
        written.map_err(|e| LoggerError::io_operation(format!("writing to {target}"), "write failed", e))
    }

    fn flush(&mut self) -> Result<()> {
        let flushed = match self.target {
            ConsoleTarget::Stdout => io::stdout().flush(),
            ConsoleTarget::Stderr => io::stderr().flush(),
        };
        let target = self.target.as_str();
        flushed.map_err(|e| LoggerError::io_operation(format!("flushing {target}"), "flush failed", e))
    }

    fn name(&self) -> &str {
        self.target.as_str()
    }
}
