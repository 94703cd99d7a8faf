//! Process termination
//!
//! Two things end the process: a FATAL record after dispatch, and storage
//! that cannot grow. Both exit with [`FATAL_EXIT_CODE`]. The FATAL path goes
//! through a replaceable [`FatalHook`] so tests can observe it without
//! exiting.

use super::error::LoggerError;
use std::collections::TryReserveError;

/// Exit status used for FATAL records and resource exhaustion.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Invoked with the exit status once a FATAL record has been offered to
/// every handler.
pub type FatalHook = Box<dyn FnMut(i32)>;

/// Hook that exits the process.
pub fn exit_process() -> FatalHook {
    Box::new(|code| std::process::exit(code))
}

/// Report that `resource` could not grow and exit. Never returns.
pub fn exhausted(resource: &'static str, source: TryReserveError) -> ! {
    eprintln!("[LOGGER CRITICAL] {}", LoggerError::exhausted(resource, source));
    std::process::exit(FATAL_EXIT_CODE)
}

/// Make room for one more element or exit.
pub(crate) fn reserve_one<T>(items: &mut Vec<T>, resource: &'static str) {
    if let Err(e) = items.try_reserve(1) {
        exhausted(resource, e);
    }
}
