//! Console encoding of log entries
//!
//! Every appender of a logger receives the same tab-separated line:
//!
//! ```text
//! 2025-01-08 10:30:45	INFO	src/server.rs:42	Request processed	{"status": 200}
//! ```
//!
//! The field column is omitted when the entry carries no fields.

use super::log_entry::LogEntry;
use colored::Colorize;

/// Default timestamp layout (local time, second precision)
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleEncoder {
    use_colors: bool,
    time_format: String,
}

impl ConsoleEncoder {
    pub fn new() -> Self {
        Self::with_colors(true)
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }

    /// Set a custom strftime-compatible timestamp layout
    #[must_use]
    pub fn with_time_format(mut self, format_str: &str) -> Self {
        self.time_format = format_str.to_string();
        self
    }

    pub fn use_colors(&self) -> bool {
        self.use_colors
    }

    /// Encode an entry as one line, without the trailing newline
    pub fn encode(&self, entry: &LogEntry) -> String {
        let level_str = if self.use_colors {
            entry
                .level
                .to_str()
                .color(entry.level.color_code())
                .to_string()
        } else {
            entry.level.to_str().to_string()
        };

        let mut line = format!(
            "{}\t{}",
            entry.timestamp.format(&self.time_format),
            level_str
        );

        if let Some(caller) = entry.caller {
            line.push('\t');
            line.push_str(&caller.to_string());
        }

        line.push('\t');
        line.push_str(&entry.message);

        if !entry.fields.is_empty() {
            line.push('\t');
            line.push_str(&entry.fields.encode());
        }

        line
    }
}

impl Default for ConsoleEncoder {
    fn default() -> Self {
        Self::new()
    }
}
