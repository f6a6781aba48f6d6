//! Process-wide default logger

use crate::logger::Logger;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

static GLOBAL: Lazy<RwLock<Logger>> = Lazy::new(|| RwLock::new(Logger::noop()));

/// Replace the process-wide logger
pub fn set_global(logger: Logger) {
    *GLOBAL.write() = logger;
}

/// The current process-wide logger.
///
/// Until [`set_global`] is called this is [`Logger::noop`].
pub fn l() -> Logger {
    GLOBAL.read().clone()
}
