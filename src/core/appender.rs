//! Appender trait for log output destinations

use super::error::Result;

/// A destination for encoded log lines.
///
/// `append` receives one line without its trailing newline; the appender
/// terminates it.
pub trait Appender: Send + Sync {
    fn append(&mut self, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
