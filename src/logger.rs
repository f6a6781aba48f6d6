//! The wrapper logger: configuration, level control, child loggers and
//! per-level emission methods

use crate::appenders::{ConsoleAppender, ConsoleTarget, FileAppender};
use crate::config::Config;
use crate::core::{
    Appender, Caller, ConsoleEncoder, Fields, LogCore, LogEntry, LogLevel, LoggerMetrics, Result,
};
use crate::fatal::{self, FatalAction};
use parking_lot::RwLock;
use serde::Serialize;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// Cheaply clonable logger handle.
///
/// Clones and children created with the `with_*` methods share the output
/// core and the level: raising the level on a child raises it everywhere.
/// Fields belong to the handle that added them.
///
/// # Example
///
/// ```no_run
/// use logwrap::{Config, Logger};
///
/// let log = Logger::new(Config::new().file("/var/log/app.log"))?;
/// log.set_level("info");
///
/// let req = log.with_field("request_id", "abc-123");
/// req.info("accepted");
/// req.with_field("status", 200).infof(format_args!("done in {}ms", 12));
/// # Ok::<(), logwrap::LoggerError>(())
/// ```
#[derive(Clone)]
pub struct Logger {
    core: Arc<LogCore>,
    level: Arc<RwLock<LogLevel>>,
    fields: Fields,
    on_fatal: FatalAction,
}

impl Logger {
    /// Build a logger writing to stdout and/or the configured files.
    ///
    /// The file names `stdout` and `stderr` select the standard streams
    /// instead of regular files. The level starts at `Debug`. Fatal entries
    /// raise SIGINT.
    ///
    /// Unless `disable_color` is set, this forces ANSI colors on for the
    /// whole process (`colored::control::set_override(true)`), so colored
    /// level names reach files and pipes too, not just terminals.
    pub fn new(cfg: Config) -> Result<Self> {
        let mut appenders: Vec<Box<dyn Appender>> = Vec::with_capacity(cfg.files.len() + 1);
        if !cfg.disable_stdout {
            appenders.push(Box::new(ConsoleAppender::stdout()));
        }
        for path in &cfg.files {
            match path.to_str().and_then(ConsoleTarget::from_path_name) {
                Some(target) => appenders.push(Box::new(ConsoleAppender::with_target(target))),
                None => appenders.push(Box::new(FileAppender::new(path)?)),
            }
        }

        if !cfg.disable_color {
            colored::control::set_override(true);
        }
        let encoder = ConsoleEncoder::with_colors(!cfg.disable_color);
        Ok(Self::from_appenders(encoder, appenders, LogLevel::Debug))
    }

    /// A logger that writes nothing.
    ///
    /// Level checks and side effects still apply: `panic` unwinds and
    /// `fatal` exits the process.
    pub fn noop() -> Self {
        Self {
            core: Arc::new(LogCore::discard()),
            level: Arc::new(RwLock::new(LogLevel::Info)),
            fields: Fields::new(),
            on_fatal: FatalAction::Exit,
        }
    }

    /// Build a logger on top of caller-supplied appenders
    pub fn from_appenders(
        encoder: ConsoleEncoder,
        appenders: Vec<Box<dyn Appender>>,
        level: LogLevel,
    ) -> Self {
        Self {
            core: Arc::new(LogCore::new(encoder, appenders)),
            level: Arc::new(RwLock::new(level)),
            fields: Fields::new(),
            on_fatal: FatalAction::Interrupt,
        }
    }

    /// Add an output to this logger and every logger sharing its core
    pub fn add_appender(&self, appender: Box<dyn Appender>) {
        self.core.add_appender(appender);
    }

    pub fn level(&self) -> LogLevel {
        *self.level.read()
    }

    /// Change the level by name.
    ///
    /// `trace` maps to `debug` and an empty name means `info`. Unknown
    /// names leave the level unchanged.
    pub fn set_level(&self, level: &str) {
        let level = if level.eq_ignore_ascii_case("trace") {
            "debug"
        } else {
            level
        };

        if let Ok(parsed) = level.parse::<LogLevel>() {
            self.set_min_level(parsed);
        }
    }

    pub fn set_min_level(&self, level: LogLevel) {
        *self.level.write() = level;
    }

    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= *self.level.read()
    }

    /// Child logger with one more field
    #[must_use]
    pub fn with_field<K, V>(&self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Serialize,
    {
        self.child(self.fields.with_field(key, &value))
    }

    /// Child logger with the given fields appended in iteration order
    #[must_use]
    pub fn with_fields<I, K, V>(&self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Serialize,
    {
        let fields = fields
            .into_iter()
            .map(|(key, value)| (key.into(), Fields::value_of(&value)));
        self.child(self.fields.extended(fields))
    }

    /// Shorthand for `with_field("error", err.to_string())`
    #[must_use]
    pub fn with_error<E: fmt::Display + ?Sized>(&self, err: &E) -> Self {
        self.with_field("error", err.to_string())
    }

    /// Clone of this logger with a different fatal action
    #[must_use]
    pub fn with_fatal_action(&self, action: FatalAction) -> Self {
        Self {
            on_fatal: action,
            ..self.clone()
        }
    }

    fn child(&self, fields: Fields) -> Self {
        Self {
            fields,
            ..self.clone()
        }
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        self.core.metrics()
    }

    /// Flush buffered output of every appender
    pub fn sync(&self) -> Result<()> {
        self.core.sync()
    }

    /// Log a message at the given level
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl fmt::Display) {
        self.emit(level, || message.to_string());
    }

    /// Log pre-built format arguments; formatting is skipped when the level
    /// is disabled
    #[track_caller]
    pub fn log_args(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        self.emit(level, || fmt::format(args));
    }

    /// Log the operands joined by single spaces
    #[track_caller]
    pub fn logln(&self, level: LogLevel, args: &[&dyn fmt::Display]) {
        self.emit(level, || {
            args.iter()
                .map(|arg| arg.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        });
    }

    #[track_caller]
    fn emit<F>(&self, level: LogLevel, message: F)
    where
        F: FnOnce() -> String,
    {
        let enabled = self.enabled(level);
        if !enabled {
            self.core.metrics().record_filtered();
            // panic and fatal keep their side effects below the level
            if level < LogLevel::Panic {
                return;
            }
        }

        let message = message();
        if enabled {
            let entry = LogEntry::new(level, message.clone())
                .with_caller(Caller::from_location(Location::caller()))
                .with_fields(self.fields.clone());
            self.core.write(&entry);
        }

        match level {
            LogLevel::Panic => panic!("{}", message),
            LogLevel::Fatal => {
                let _ = self.core.sync();
                self.run_fatal_action(&message);
            }
            _ => {}
        }
    }

    #[track_caller]
    fn run_fatal_action(&self, message: &str) {
        match &self.on_fatal {
            FatalAction::Interrupt => {
                if let Err(e) = fatal::raise_interrupt() {
                    self.with_error(&e)
                        .error("failed to raise SIGINT on fatal entry");
                    let _ = self.core.sync();
                    std::process::exit(1);
                }
            }
            FatalAction::Exit => std::process::exit(1),
            FatalAction::Callback(callback) => callback(message),
        }
    }
}

/// Generates the plain, formatted and line-joined method for a level
macro_rules! level_methods {
    ($($level:expr => $plain:ident, $formatted:ident, $line:ident;)+) => {
        $(
            #[track_caller]
            #[inline]
            pub fn $plain(&self, message: impl fmt::Display) {
                self.log($level, message);
            }

            #[track_caller]
            #[inline]
            pub fn $formatted(&self, args: fmt::Arguments<'_>) {
                self.log_args($level, args);
            }

            #[track_caller]
            #[inline]
            pub fn $line(&self, args: &[&dyn fmt::Display]) {
                self.logln($level, args);
            }
        )+
    };
}

impl Logger {
    level_methods! {
        LogLevel::Debug => debug, debugf, debugln;
        LogLevel::Info => info, infof, infoln;
        LogLevel::Warn => warn, warnf, warnln;
        LogLevel::Warn => warning, warningf, warningln;
        LogLevel::Error => error, errorf, errorln;
        LogLevel::Fatal => fatal, fatalf, fatalln;
        LogLevel::Panic => panic, panicf, panicln;
        LogLevel::Info => print, printf, println;
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::noop()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("fields", &self.fields.encode())
            .field("appenders", &self.core.appender_names())
            .field("on_fatal", &self.on_fatal)
            .finish()
    }
}
