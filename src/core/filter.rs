//! Record filters
//!
//! A filter decides whether one handler emits a record. Any
//! `Fn(LogLevel, &str) -> bool` is a filter, so plain functions and
//! closures can be registered directly:
//!
//! ```
//! use rust_mini_logger::{Handler, LogLevel, MemorySink};
//!
//! fn only_tagged(_level: LogLevel, message: &str) -> bool {
//!     message.starts_with("OuO")
//! }
//!
//! let mut handler = Handler::new(MemorySink::new().into(), LogLevel::NotSet);
//! handler.add_filter(only_tagged);
//! handler.add_filter(|level: LogLevel, _: &str| level >= LogLevel::Debug);
//! assert_eq!(handler.filter_count(), 2);
//! ```

use super::log_level::LogLevel;

/// Predicate over a level and the rendered message text.
///
/// Filters are invoked only for their result; keeping them free of side
/// effects is a convention, not enforced.
pub trait Filter {
    fn accept(&self, level: LogLevel, message: &str) -> bool;
}

impl<F> Filter for F
where
    F: Fn(LogLevel, &str) -> bool,
{
    fn accept(&self, level: LogLevel, message: &str) -> bool {
        self(level, message)
    }
}

/// Accept records at `level` or above.
pub fn min_level(level: LogLevel) -> impl Filter {
    move |record_level: LogLevel, _: &str| record_level >= level
}

/// Accept records whose level is one of `levels`.
pub fn level_in(levels: &[LogLevel]) -> impl Filter {
    let levels = levels.to_vec();
    move |record_level: LogLevel, _: &str| levels.contains(&record_level)
}

/// Accept messages beginning with `prefix`.
pub fn starts_with(prefix: &str) -> impl Filter {
    let prefix = prefix.to_owned();
    move |_: LogLevel, message: &str| message.starts_with(prefix.as_str())
}

/// Accept messages containing `needle`.
pub fn contains(needle: &str) -> impl Filter {
    let needle = needle.to_owned();
    move |_: LogLevel, message: &str| message.contains(needle.as_str())
}

/// Invert another filter.
pub fn not<F: Filter>(inner: F) -> impl Filter {
    move |level: LogLevel, message: &str| !inner.accept(level, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_pointer_is_filter() {
        fn reject_all(_: LogLevel, _: &str) -> bool {
            false
        }
        assert!(!reject_all.accept(LogLevel::Fatal, "x"));
    }

    #[test]
    fn test_min_level() {
        let f = min_level(LogLevel::Warn);
        assert!(!f.accept(LogLevel::Info, "x"));
        assert!(f.accept(LogLevel::Warn, "x"));
        assert!(f.accept(LogLevel::Fatal, "x"));
    }

    #[test]
    fn test_level_in() {
        let f = level_in(&[LogLevel::Debug, LogLevel::Error]);
        assert!(f.accept(LogLevel::Debug, ""));
        assert!(!f.accept(LogLevel::Info, ""));
        assert!(f.accept(LogLevel::Error, ""));
    }

    #[test]
    fn test_message_filters() {
        let prefix = starts_with("OuO");
        assert!(prefix.accept(LogLevel::Info, "OuO number 1"));
        assert!(!prefix.accept(LogLevel::Info, "number OuO"));

        let needle = contains("disk");
        assert!(needle.accept(LogLevel::Warn, "low disk space"));
        assert!(!needle.accept(LogLevel::Warn, "low memory"));
    }

    #[test]
    fn test_not() {
        let f = not(starts_with("debug:"));
        assert!(f.accept(LogLevel::Info, "hello"));
        assert!(!f.accept(LogLevel::Info, "debug: hello"));
    }
}
