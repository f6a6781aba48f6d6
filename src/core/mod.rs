//! Logging engine: levels, entries, fields, encoding and appenders

pub mod appender;
pub mod encoder;
pub mod error;
pub mod fields;
pub mod log_core;
pub mod log_entry;
pub mod log_level;
pub mod metrics;

pub use appender::Appender;
pub use encoder::{ConsoleEncoder, DEFAULT_TIME_FORMAT};
pub use error::{LoggerError, Result};
pub use fields::Fields;
pub use log_core::LogCore;
pub use log_entry::{Caller, LogEntry};
pub use log_level::LogLevel;
pub use metrics::LoggerMetrics;
