//! Basic logger usage example
//!
//! Demonstrates setup from a config, level changes, child loggers and the
//! global logger.
//!
//! Run with: cargo run --example basic_usage

use logwrap::prelude::*;
use logwrap::{errorf, infof};

fn main() -> Result<()> {
    println!("=== logwrap - Basic Usage Example ===\n");

    let log_path = std::env::temp_dir().join("logwrap_basic_usage.log");
    let logger = Logger::new(Config::new().file(&log_path))?;

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");

    println!("\n2. Raising the level to warn:");
    logger.set_level("warn");
    logger.info("Info message (hidden)");
    logger.warn("Warning message (visible)");
    logger.set_level("debug");

    println!("\n3. Child loggers carry fields:");
    let request = logger.with_field("request_id", "abc-123");
    infof!(request, "Handling {} {}", "GET", "/items");
    request
        .with_error(&std::io::Error::new(std::io::ErrorKind::TimedOut, "upstream timeout"))
        .warn("Retrying");
    errorf!(request.with_field("attempts", 3), "Giving up after {} attempts", 3);

    println!("\n4. Global logger:");
    l().info("Not printed: the global logger is a no-op until replaced");
    set_global(logger);
    l().with_field("component", "main").info("Printed through the global logger");

    l().sync()?;
    println!("\nLog file written to {}", log_path.display());
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
