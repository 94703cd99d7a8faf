//! User-defined format example
//!
//! Run with: cargo run --example user_defined_format

use rust_mini_logger::prelude::*;
use rust_mini_logger::info;

fn main() {
    let mut logger = Logger::new();
    logger.add_handler(
        Handler::new(Sink::stdout(), LogLevel::NotSet)
            .with_template("[%(time)] [%(level)] %(file):%(func):%(line):%(message)"),
    );

    info!(logger, "OuO number: {}\n", 42);
    logger.destroy();
}
