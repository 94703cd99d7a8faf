//! Core logger types and traits

pub mod error;
pub mod fatal;
pub mod filter;
pub mod handler;
pub mod location;
pub mod log_level;
pub mod logger;
pub mod template;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use fatal::{FatalHook, FATAL_EXIT_CODE};
pub use filter::Filter;
pub use handler::Handler;
pub use location::Location;
pub use log_level::LogLevel;
pub use logger::{HandlerId, Logger, LoggerBuilder, MESSAGE_BUFFER_SIZE};
pub use template::{Placeholder, RenderContext, Template, DEFAULT_TEMPLATE};
