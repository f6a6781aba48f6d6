//! Shared output stage: one encoder feeding a list of appenders

use super::{
    appender::Appender,
    encoder::ConsoleEncoder,
    error::{LoggerError, Result},
    log_entry::LogEntry,
    metrics::LoggerMetrics,
};
use parking_lot::RwLock;

/// Encoder, appenders and metrics shared by a logger and all its children
pub struct LogCore {
    encoder: ConsoleEncoder,
    appenders: RwLock<Vec<Box<dyn Appender>>>,
    metrics: LoggerMetrics,
}

impl LogCore {
    pub fn new(encoder: ConsoleEncoder, appenders: Vec<Box<dyn Appender>>) -> Self {
        Self {
            encoder,
            appenders: RwLock::new(appenders),
            metrics: LoggerMetrics::new(),
        }
    }

    /// A core that writes nowhere
    pub fn discard() -> Self {
        Self::new(ConsoleEncoder::with_colors(false), Vec::new())
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn appender_names(&self) -> Vec<String> {
        self.appenders
            .read()
            .iter()
            .map(|appender| appender.name().to_string())
            .collect()
    }

    pub fn add_appender(&self, appender: Box<dyn Appender>) {
        self.appenders.write().push(appender);
    }

    /// Encode the entry once and hand the line to every appender.
    ///
    /// **Per-Appender Panic Isolation**: each appender call is wrapped in
    /// `catch_unwind` so a failing appender cannot keep the entry from the
    /// others. Failures are reported on stderr and counted, never returned.
    pub fn write(&self, entry: &LogEntry) {
        let mut appenders = self.appenders.write();
        if appenders.is_empty() {
            return;
        }

        let line = self.encoder.encode(entry);
        let mut has_error = false;

        for (idx, appender) in appenders.iter_mut().enumerate() {
            let append_result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                appender.append(&line)
            }));

            match append_result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!(
                        "[LOGGER ERROR] Appender #{} ({}) failed: {}",
                        idx,
                        appender.name(),
                        e
                    );
                    has_error = true;
                }
                Err(panic_info) => {
                    eprintln!(
                        "[LOGGER CRITICAL] Appender #{} ({}) panicked: {}. \
                         Other appenders continue to function.",
                        idx,
                        appender.name(),
                        panic_message(panic_info.as_ref())
                    );
                    has_error = true;
                }
            }
        }

        if has_error {
            self.metrics.record_failed();
        } else {
            self.metrics.record_written();
        }
    }

    /// Flush every appender, returning the first error after all were tried.
    ///
    /// Flush calls get the same panic isolation as writes; a panicking
    /// flush counts as that appender's error.
    pub fn sync(&self) -> Result<()> {
        let mut appenders = self.appenders.write();
        let mut first_error = None;

        for (idx, appender) in appenders.iter_mut().enumerate() {
            let flush_result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                appender.flush()
            }));

            let error = match flush_result {
                Ok(Ok(())) => continue,
                Ok(Err(e)) => e,
                Err(panic_info) => {
                    let panic_msg = panic_message(panic_info.as_ref());
                    eprintln!(
                        "[LOGGER CRITICAL] Appender #{} ({}) panicked during flush: {}. \
                         Other appenders continue to function.",
                        idx,
                        appender.name(),
                        panic_msg
                    );
                    LoggerError::writer(format!(
                        "appender '{}' panicked during flush: {}",
                        appender.name(),
                        panic_msg
                    ))
                }
            };

            if first_error.is_none() {
                first_error = Some(error);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

fn panic_message(panic_info: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
