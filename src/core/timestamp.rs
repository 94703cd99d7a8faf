//! Wall-clock rendering for the `%(time)` placeholder
//!
//! Time is resolved when a record is rendered, at one-second resolution, in
//! the local time zone. Output that would not fit the fixed time buffer
//! degrades to [`NO_TIME`] instead of failing the render.

use chrono::{DateTime, Local, TimeZone};
use std::borrow::Cow;
use std::fmt;

/// strftime pattern for `%(time)`: `2025-01-08 10:30:45`
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Capacity of the time buffer, including room for a terminator.
pub const TIME_BUFFER_SIZE: usize = 20;

/// Substituted when the formatted time does not fit the buffer.
pub const NO_TIME: &str = "(no time)";

/// Format the current local time for `%(time)`.
#[must_use]
pub fn now() -> Cow<'static, str> {
    format_time(&Local::now(), TIME_BUFFER_SIZE)
}

/// Format `datetime` with [`TIME_FORMAT`], or return [`NO_TIME`] when the
/// text plus terminator exceeds `capacity`.
///
/// The degradation is reported on stderr, never on a handler's sink.
pub fn format_time<Tz>(datetime: &DateTime<Tz>, capacity: usize) -> Cow<'static, str>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let formatted = datetime.format(TIME_FORMAT).to_string();
    if formatted.len() < capacity {
        Cow::Owned(formatted)
    } else {
        eprintln!(
            "[LOGGER WARNING] The time buffer size ({} bytes) is not enough.",
            capacity
        );
        Cow::Borrowed(NO_TIME)
    }
}
