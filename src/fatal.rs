//! What happens after a fatal entry has been written

use std::fmt;
use std::io;
use std::sync::Arc;

/// Callback invoked with the message of a fatal entry
pub type FatalCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Action a [`crate::Logger`] takes once a `Fatal` entry is written and
/// its outputs are synced.
///
/// Loggers built from a [`crate::Config`] interrupt the process instead of
/// exiting, so the application's own SIGINT handling gets to run its
/// shutdown path.
#[derive(Clone, Default)]
pub enum FatalAction {
    /// Raise SIGINT on the current process. If that fails, the failure is
    /// logged at error level and the process exits with status 1.
    #[default]
    Interrupt,

    /// Exit the process with status 1
    Exit,

    /// Hand the message to a user-supplied callback and return
    Callback(FatalCallback),
}

impl FatalAction {
    /// Wrap a closure as a callback action
    pub fn callback<F>(f: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        FatalAction::Callback(Arc::new(f))
    }
}

impl fmt::Debug for FatalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FatalAction::Interrupt => write!(f, "Interrupt"),
            FatalAction::Exit => write!(f, "Exit"),
            FatalAction::Callback(_) => write!(f, "Callback(..)"),
        }
    }
}

/// Send SIGINT to the current process
#[cfg(unix)]
pub(crate) fn raise_interrupt() -> io::Result<()> {
    use nix::sys::signal::{kill, Signal};
    use nix::unistd::Pid;

    kill(Pid::this(), Signal::SIGINT).map_err(io::Error::from)
}

#[cfg(not(unix))]
pub(crate) fn raise_interrupt() -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "SIGINT cannot be raised on this platform",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_default_is_interrupt() {
        assert!(matches!(FatalAction::default(), FatalAction::Interrupt));
    }

    #[test]
    fn test_callback_receives_message() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = Arc::clone(&calls);
        let action = FatalAction::callback(move |msg| {
            assert_eq!(msg, "disk gone");
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        if let FatalAction::Callback(cb) = &action {
            cb("disk gone");
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_debug_hides_closure() {
        let action = FatalAction::callback(|_| {});
        assert_eq!(format!("{:?}", action), "Callback(..)");
        assert_eq!(format!("{:?}", FatalAction::Exit), "Exit");
    }
}
