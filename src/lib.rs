//! # logwrap
//!
//! A thin wrapper that takes the boilerplate out of setting up a structured
//! logger.
//!
//! ## Features
//!
//! - **Simple setup**: one [`Config`] for stdout, files and color
//! - **Dynamic levels**: change the level at runtime by name
//! - **Child loggers**: attach fields once, reuse the logger everywhere
//! - **Global logger**: a process-wide default, no-op until replaced
//!
//! ```no_run
//! use logwrap::{l, set_global, Config, Logger};
//!
//! let log = Logger::new(Config::new().disable_color(true).file("app.log"))?;
//! set_global(log);
//!
//! l().with_field("user", "alice").info("logged in");
//! # Ok::<(), logwrap::LoggerError>(())
//! ```

pub mod appenders;
pub mod config;
pub mod core;
pub mod fatal;
pub mod global;
pub mod logger;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, ConsoleTarget, FileAppender};
    pub use crate::config::Config;
    pub use crate::core::{
        Appender, Caller, ConsoleEncoder, Fields, LogEntry, LogLevel, LoggerError,
        LoggerMetrics, Result,
    };
    pub use crate::fatal::{FatalAction, FatalCallback};
    pub use crate::global::{l, set_global};
    pub use crate::logger::Logger;
}

pub use appenders::{ConsoleAppender, ConsoleTarget, FileAppender};
pub use config::Config;
pub use core::{
    Appender, Caller, ConsoleEncoder, Fields, LogEntry, LogLevel, LoggerError, LoggerMetrics,
    Result,
};
pub use fatal::{FatalAction, FatalCallback};
pub use global::{l, set_global};
pub use logger::Logger;
