//! File logging example
//!
//! Demonstrates logging to both console and file handlers simultaneously,
//! and a FATAL record ending the program.
//!
//! Run with: cargo run --example file_logging

use rust_mini_logger::prelude::*;
use rust_mini_logger::{debug, error, fatal, info, warn};

fn main() -> Result<()> {
    println!("=== Rust Mini Logger - File Logging Example ===\n");

    let mut logger = Logger::new();

    // Console shows warnings and up, the file keeps everything
    logger.add_handler(
        Handler::new(Sink::stderr(), LogLevel::Warn).with_template("[%(level)] %(message)\n"),
    );
    logger.add_handler(
        Handler::new(Sink::file("application.log")?, LogLevel::NotSet)
            .with_template("[%(time)] [%(level)] %(file):%(line) %(message)\n"),
    );

    println!("1. Logging to both console and file:");

    info!(logger, "Application started");
    debug!(logger, "Loading configuration...");
    info!(logger, "Configuration loaded successfully");
    warn!(logger, "Using default settings for some options");
    error!(logger, "Failed to load optional plugin");
    logger.flush()?;

    println!("\n2. Log file written to: application.log");
    println!("\n3. A FATAL record flushes both handlers, then exits with status 1:");

    fatal!(logger, "Unrecoverable error: {}", "disk full");
    Ok(())
}
