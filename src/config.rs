//! Logger configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Options for [`crate::Logger::new`].
///
/// Missing keys deserialize to their defaults, so the struct can sit inside
/// an application's own config file:
///
/// ```
/// use logwrap::Config;
///
/// let cfg: Config = serde_json::from_str(r#"{"files": ["/tmp/app.log"]}"#).unwrap();
/// assert!(!cfg.disable_stdout);
/// assert_eq!(cfg.files.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Do not write to standard output
    pub disable_stdout: bool,
    /// Print plain level names instead of colored ones
    pub disable_color: bool,
    /// Files that receive every log line, created if missing. The names
    /// `stdout` and `stderr` select the standard streams instead.
    pub files: Vec<PathBuf>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value"]
    pub fn disable_stdout(mut self, disable: bool) -> Self {
        self.disable_stdout = disable;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn disable_color(mut self, disable: bool) -> Self {
        self.disable_color = disable;
        self
    }

    /// Add one output file
    #[must_use = "builder methods return a new value"]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }
}
