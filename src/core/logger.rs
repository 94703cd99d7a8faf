//! Main logger implementation

use super::{
    error::Result,
    fatal::{self, FatalHook, FATAL_EXIT_CODE},
    handler::Handler,
    location::Location,
    log_level::LogLevel,
};
use std::fmt;

/// Initial capacity of the buffer a message is rendered into. Longer
/// messages grow the buffer to fit.
pub const MESSAGE_BUFFER_SIZE: usize = 32;

/// Identifies a handler registered on a [`Logger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerId(usize);

impl HandlerId {
    /// Registration index; also the dispatch position.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Fan-out point for log calls.
///
/// A logger owns its handlers and offers every record to each of them in
/// registration order. It is not synchronized; share it across threads
/// behind an external lock, or use one logger per thread.
///
/// ```
/// use rust_mini_logger::prelude::*;
/// use rust_mini_logger::info;
///
/// let memory = MemorySink::new();
/// let mut logger = Logger::new();
/// logger.add_handler(
///     Handler::new(memory.clone().into(), LogLevel::NotSet)
///         .with_template("[%(level)] %(message)"),
/// );
///
/// info!(logger, "listening on port {}", 8080);
/// assert_eq!(memory.contents(), "[INFO] listening on port 8080");
/// ```
pub struct Logger {
    handlers: Vec<Handler>,
    fatal_hook: FatalHook,
}

impl Logger {
    /// An empty logger. Records dispatched to it are discarded.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            fatal_hook: fatal::exit_process(),
        }
    }

    /// Create a new builder for constructing a Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Register a handler. Handlers receive records in the order they were
    /// added.
    pub fn add_handler(&mut self, handler: Handler) -> HandlerId {
        fatal::reserve_one(&mut self.handlers, "handler list");
        self.handlers.push(handler);
        HandlerId(self.handlers.len() - 1)
    }

    pub fn handler(&self, id: HandlerId) -> Option<&Handler> {
        self.handlers.get(id.0)
    }

    /// Reconfigure a registered handler. Changes apply to later dispatches.
    pub fn handler_mut(&mut self, id: HandlerId) -> Option<&mut Handler> {
        self.handlers.get_mut(id.0)
    }

    pub fn handlers(&self) -> impl Iterator<Item = &Handler> {
        self.handlers.iter()
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Replace what happens after a FATAL record has been dispatched. The
    /// hook receives the exit status; the default exits the process.
    pub fn set_fatal_hook(&mut self, hook: impl FnMut(i32) + 'static) {
        self.fatal_hook = Box::new(hook);
    }

    /// Render the message once and offer it to every handler.
    ///
    /// Each handler applies its own threshold and filters; a rejection by
    /// one handler does not affect the others. A FATAL record flushes all
    /// sinks and then runs the fatal hook.
    pub fn dispatch(&mut self, level: LogLevel, location: &Location, args: fmt::Arguments<'_>) {
        let message = render_message(args);
        self.log_str(level, location, &message);
    }

    /// Dispatch an already rendered message.
    pub fn log_str(&mut self, level: LogLevel, location: &Location, message: &str) {
        self.deliver(level, location, message);

        if level.is_fatal() {
            self.flush_reporting("fatal exit");
            (self.fatal_hook)(FATAL_EXIT_CODE);
        }
    }

    fn deliver(&self, level: LogLevel, location: &Location, message: &str) {
        for handler in &self.handlers {
            handler.process(level, message, location);
        }
    }

    /// Flush every handler's sink, returning the first error.
    pub fn flush(&self) -> Result<()> {
        let mut first_error = None;
        for handler in &self.handlers {
            if let Err(e) = handler.flush() {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    fn flush_reporting(&self, during: &str) {
        for (idx, handler) in self.handlers.iter().enumerate() {
            if let Err(e) = handler.flush() {
                eprintln!(
                    "[LOGGER ERROR] Handler #{} ({}) flush failed during {}: {}",
                    idx,
                    handler.sink().name(),
                    during,
                    e
                );
            }
        }
    }

    /// Flush and release every handler. Same as dropping the logger.
    pub fn destroy(self) {
        drop(self);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.flush_reporting("shutdown");
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("handlers", &self.handlers)
            .finish_non_exhaustive()
    }
}

/// Growable buffer for message text. Running out of memory is fatal.
struct MessageBuffer {
    text: String,
}

impl MessageBuffer {
    fn new() -> Self {
        let mut text = String::new();
        if let Err(e) = text.try_reserve_exact(MESSAGE_BUFFER_SIZE) {
            fatal::exhausted("message buffer", e);
        }
        Self { text }
    }
}

impl fmt::Write for MessageBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if let Err(e) = self.text.try_reserve(s.len()) {
            fatal::exhausted("message buffer", e);
        }
        self.text.push_str(s);
        Ok(())
    }
}

/// Render printf-style arguments into a message of any length.
pub fn render_message(args: fmt::Arguments<'_>) -> String {
    let mut buffer = MessageBuffer::new();
    // Only a caller's Display impl can fail here; keep what was written.
    let _ = fmt::write(&mut buffer, args);
    buffer.text
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_mini_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .handler(Handler::new(Sink::stderr(), LogLevel::Warn))
///     .handler(Handler::default().with_template("%(time) %(message)"))
///     .fatal_hook(|code| eprintln!("would exit with {}", code))
///     .build();
/// assert_eq!(logger.handler_count(), 2);
/// ```
pub struct LoggerBuilder {
    handlers: Vec<Handler>,
    fatal_hook: Option<FatalHook>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            fatal_hook: None,
        }
    }

    /// Add a handler
    #[must_use = "builder methods return a new value"]
    pub fn handler(mut self, handler: Handler) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Replace the fatal hook
    #[must_use = "builder methods return a new value"]
    pub fn fatal_hook(mut self, hook: impl FnMut(i32) + 'static) -> Self {
        self.fatal_hook = Some(Box::new(hook));
        self
    }

    /// Build the logger
    pub fn build(self) -> Logger {
        let mut logger = Logger::new();
        for handler in self.handlers {
            logger.add_handler(handler);
        }
        if let Some(hook) = self.fatal_hook {
            logger.fatal_hook = hook;
        }
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemorySink;
    use std::cell::RefCell;
    use std::rc::Rc;

    const HERE: Location = Location::new("src/logger.rs", "tests", 1);

    #[test]
    fn test_no_handlers_is_noop() {
        let mut logger = Logger::new();
        logger.dispatch(LogLevel::Error, &HERE, format_args!("nobody listens"));
        assert_eq!(logger.handler_count(), 0);
        assert!(logger.flush().is_ok());
    }

    #[test]
    fn test_handlers_run_in_registration_order() {
        let memory = MemorySink::new();
        let mut logger = Logger::new();
        for tag in ["a", "b", "c"] {
            logger.add_handler(
                Handler::new(memory.clone().into(), LogLevel::NotSet)
                    .with_template(format!("{}%(message) ", tag)),
            );
        }

        logger.dispatch(LogLevel::Info, &HERE, format_args!("{}", 1));
        assert_eq!(memory.contents(), "a1 b1 c1 ");
    }

    #[test]
    fn test_rejection_is_per_handler() {
        let (strict, picky, open) = (MemorySink::new(), MemorySink::new(), MemorySink::new());
        let mut logger = Logger::new();
        let ids = [
            logger.add_handler(Handler::new(strict.clone().into(), LogLevel::Error)),
            logger.add_handler(
                Handler::new(picky.clone().into(), LogLevel::NotSet)
                    .with_filter(|_: LogLevel, m: &str| m.contains("disk")),
            ),
            logger.add_handler(Handler::new(open.clone().into(), LogLevel::NotSet)),
        ];

        logger.dispatch(LogLevel::Warn, &HERE, format_args!("cpu {}", "hot"));
        assert!(strict.is_empty());
        assert!(picky.is_empty());
        assert_eq!(open.contents(), "cpu hot");
        assert_eq!(ids.map(|id| id.index()), [0, 1, 2]);
    }

    #[test]
    fn test_handler_mut_reconfigures() {
        let memory = MemorySink::new();
        let mut logger = Logger::new();
        let id = logger.add_handler(Handler::new(memory.clone().into(), LogLevel::NotSet));

        logger
            .handler_mut(id)
            .expect("handler registered")
            .set_template("<%(message)>");
        logger.log_str(LogLevel::Debug, &HERE, "x");

        assert_eq!(memory.contents(), "<x>");
        assert_eq!(logger.handler(id).map(|h| h.template().as_str()), Some("<%(message)>"));
        assert!(logger.handler(HandlerId(9)).is_none());
    }

    #[test]
    fn test_long_message_not_truncated() {
        let message = "x".repeat(MESSAGE_BUFFER_SIZE * 4 + 3);
        let rendered = render_message(format_args!("[{}] {}", message.len(), message));
        assert_eq!(rendered, format!("[{}] {}", message.len(), message));

        let exact = "y".repeat(MESSAGE_BUFFER_SIZE);
        assert_eq!(render_message(format_args!("{}", exact)), exact);
    }

    #[test]
    fn test_fatal_runs_hook_after_all_handlers() {
        let first = MemorySink::new();
        let second = MemorySink::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let (a, b, record) = (first.clone(), second.clone(), Rc::clone(&seen));
        let mut logger = Logger::builder()
            .handler(Handler::new(first.clone().into(), LogLevel::NotSet))
            .handler(Handler::new(second.clone().into(), LogLevel::Fatal))
            .fatal_hook(move |code| {
                record.borrow_mut().push((code, a.contents(), b.contents()));
            })
            .build();

        logger.dispatch(LogLevel::Error, &HERE, format_args!("not fatal"));
        assert!(seen.borrow().is_empty());

        logger.dispatch(LogLevel::Fatal, &HERE, format_args!("boom"));
        assert_eq!(
            *seen.borrow(),
            vec![(1, "not fatalboom".to_string(), "boom".to_string())]
        );
    }

    #[test]
    fn test_fatal_with_filtered_handlers_still_terminates() {
        let codes = Rc::new(RefCell::new(Vec::new()));
        let record = Rc::clone(&codes);
        let mut logger = Logger::new();
        logger.add_handler(
            Handler::new(MemorySink::new().into(), LogLevel::NotSet)
                .with_filter(|_: LogLevel, _: &str| false),
        );
        logger.set_fatal_hook(move |code| record.borrow_mut().push(code));

        logger.log_str(LogLevel::Fatal, &HERE, "ignored by filter");
        assert_eq!(*codes.borrow(), vec![FATAL_EXIT_CODE]);
    }

    #[test]
    fn test_destroy_flushes() {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("destroy.log");

        let mut logger = Logger::new();
        logger.add_handler(Handler::new(
            crate::sinks::Sink::file(&path).expect("open sink"),
            LogLevel::NotSet,
        ));
        logger.log_str(LogLevel::Info, &HERE, "buffered\n");
        logger.destroy();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "buffered\n");
    }
}
