//! Basic logger usage example
//!
//! Demonstrates a console handler and per-handler thresholds.
//!
//! Run with: cargo run --example basic_usage

use rust_mini_logger::prelude::*;
use rust_mini_logger::{debug, error, info, notset, warn};

fn main() {
    println!("=== Rust Mini Logger - Basic Usage Example ===\n");

    // Create a logger with one stdout handler
    let mut logger = Logger::new();
    let console = logger.add_handler(
        Handler::new(Sink::stdout(), LogLevel::NotSet)
            .with_template("[%(level)] %(message)\n")
            .with_colors(true),
    );

    // Log messages at different levels
    println!("1. Logging at different levels:");
    notset!(logger, "This is a notset message");
    debug!(logger, "This is a debug message");
    info!(logger, "This is an info message");
    warn!(logger, "This is a warning message");
    error!(logger, "This is an error message");

    println!("\n2. Raising the handler threshold:");

    if let Some(handler) = logger.handler_mut(console) {
        handler.set_threshold(LogLevel::Info);
    }
    println!("   Threshold set to INFO - notset and debug won't show:");
    notset!(logger, "Notset message (hidden)");
    debug!(logger, "Debug message (hidden)");
    info!(logger, "Info message (visible)");
    warn!(logger, "Warning message (visible)");

    println!("\n=== Example completed successfully! ===");
    logger.destroy();
}
