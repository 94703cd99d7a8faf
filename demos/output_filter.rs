//! Output filter example
//!
//! Only records at DEBUG or above whose message starts with "OuO" are shown.
//!
//! Run with: cargo run --example output_filter

use rust_mini_logger::prelude::*;
use rust_mini_logger::{info, notset};

fn at_least_debug(level: LogLevel, _message: &str) -> bool {
    level >= LogLevel::Debug
}

fn tagged(_level: LogLevel, message: &str) -> bool {
    message.starts_with("OuO")
}

fn main() {
    let mut logger = Logger::new();
    logger.add_handler(
        Handler::new(Sink::stdout(), LogLevel::NotSet)
            .with_filter(at_least_debug)
            .with_filter(tagged),
    );

    notset!(logger, "OuO number 1: {}\n", 42);
    info!(logger, "OuO number 2: {}\n", 42);
    logger.destroy();
}
