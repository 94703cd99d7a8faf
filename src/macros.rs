//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. Each one
//! captures the caller's file, function and line.
//!
//! # Examples
//!
//! ```
//! use rust_mini_logger::prelude::*;
//! use rust_mini_logger::info;
//!
//! let mut logger = Logger::new();
//! logger.add_handler(Handler::new(Sink::stdout(), LogLevel::Info));
//!
//! // Basic logging
//! info!(logger, "Server started\n");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}\n", port);
//! ```

/// Capture the current file, function and line as a
/// [`Location`](crate::core::Location).
///
/// ```
/// fn serve() -> rust_mini_logger::Location {
///     rust_mini_logger::location!()
/// }
/// assert_eq!(serve().function, "serve");
/// ```
#[macro_export]
macro_rules! location {
    () => {{
        fn __probe() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::core::Location::new(
            file!(),
            $crate::core::location::function_name(__type_name_of(__probe)),
            line!(),
        )
    }};
}

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_mini_logger::prelude::*;
/// # let mut logger = Logger::new();
/// use rust_mini_logger::log;
/// log!(logger, LogLevel::Info, "Simple message\n");
/// log!(logger, LogLevel::Error, "Error code: {}\n", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.dispatch($level, &$crate::location!(), format_args!($($arg)+))
    };
}

/// Log at NOTSET, the level every handler with a default threshold accepts.
///
/// # Examples
///
/// ```
/// # use rust_mini_logger::prelude::*;
/// # let mut logger = Logger::new();
/// use rust_mini_logger::notset;
/// notset!(logger, "OuO number 1: {}\n", 42);
/// ```
#[macro_export]
macro_rules! notset {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::NotSet, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_mini_logger::prelude::*;
/// # let mut logger = Logger::new();
/// use rust_mini_logger::debug;
/// debug!(logger, "Debug information\n");
/// debug!(logger, "Counter value: {}\n", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_mini_logger::prelude::*;
/// # let mut logger = Logger::new();
/// use rust_mini_logger::info;
/// info!(logger, "Application started\n");
/// info!(logger, "Processing {} items\n", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use rust_mini_logger::prelude::*;
/// # let mut logger = Logger::new();
/// use rust_mini_logger::warn;
/// warn!(logger, "Low disk space\n");
/// warn!(logger, "Retry attempt {} of {}\n", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_mini_logger::prelude::*;
/// # let mut logger = Logger::new();
/// use rust_mini_logger::error;
/// error!(logger, "Failed to connect to database\n");
/// error!(logger, "Error code: {}, message: {}\n", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message, then end the process with exit status 1 once
/// every handler has seen the record.
///
/// # Examples
///
/// ```no_run
/// # use rust_mini_logger::prelude::*;
/// # let mut logger = Logger::new();
/// use rust_mini_logger::fatal;
/// fatal!(logger, "Unable to recover from error: {}\n", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}
