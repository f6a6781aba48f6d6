//! Fatal entries interrupt the process instead of exiting.
//!
//! Lives in its own binary: the SIGINT handler registered here would
//! otherwise swallow interrupts meant for other tests.
#![cfg(unix)]

use logwrap::prelude::*;
use signal_hook::consts::SIGINT;
use std::fs;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tempfile::TempDir;

#[test]
fn test_fatal_raises_sigint() {
    let interrupted = Arc::new(AtomicBool::new(false));
    signal_hook::flag::register(SIGINT, Arc::clone(&interrupted))
        .expect("Failed to register SIGINT handler");

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file = temp_dir.path().join("fatal.log");
    let log = Logger::new(
        Config::new()
            .disable_stdout(true)
            .disable_color(true)
            .file(&file),
    )
    .expect("Failed to create logger");

    log.fatal("fatal");

    // the signal can arrive with a little delay
    let deadline = Instant::now() + Duration::from_secs(1);
    while !interrupted.load(Ordering::SeqCst) && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(5));
    }
    assert!(interrupted.load(Ordering::SeqCst), "didn't get interrupt signal");

    // the call returned and the entry made it to disk first
    let content = fs::read_to_string(&file).expect("Failed to read log file");
    assert!(content.contains("\tFATAL\t"));
    assert!(content.trim_end().ends_with("\tfatal"));
}
