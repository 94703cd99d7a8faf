//! # Rust Mini Logger
//!
//! A small handler-based logging library. A [`Logger`] fans each record out
//! to its [`Handler`]s; every handler has its own threshold, filter chain
//! and format template, and writes to its own [`Sink`].
//!
//! ## Features
//!
//! - **Per-handler thresholds**: records below a handler's level never
//!   reach its filters
//! - **Filter chains**: any `Fn(LogLevel, &str) -> bool`, evaluated in order
//!   and stopping at the first rejection
//! - **Format templates**: `%(message)`, `%(file)`, `%(func)`, `%(line)`,
//!   `%(time)` and `%(level)` placeholders
//! - **FATAL exits**: a FATAL record ends the process after every handler
//!   had its chance to emit it
//!
//! ```
//! use rust_mini_logger::prelude::*;
//! use rust_mini_logger::{info, debug};
//!
//! let memory = MemorySink::new();
//! let mut logger = Logger::new();
//! logger.add_handler(
//!     Handler::new(memory.clone().into(), LogLevel::Info)
//!         .with_template("[%(level)] %(func): %(message)\n"),
//! );
//!
//! debug!(logger, "not shown");
//! info!(logger, "OuO number: {}", 42);
//! assert!(memory.contents().starts_with("[INFO] "));
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        filter, Filter, Handler, HandlerId, Location, LogLevel, Logger, LoggerBuilder,
        LoggerError, Result, Template, FATAL_EXIT_CODE,
    };
    pub use crate::sinks::{MemorySink, Sink};
}

pub use crate::core::{
    filter, Filter, Handler, HandlerId, Location, LogLevel, Logger, LoggerBuilder, LoggerError,
    Placeholder, RenderContext, Result, Template, FATAL_EXIT_CODE,
};
pub use crate::sinks::{MemorySink, Sink};
