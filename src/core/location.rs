//! Caller source location

use std::fmt;

/// Where a log call was made. Supplied by the call site, usually through
/// the [`location!`](crate::location) macro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub file: &'static str,
    pub function: &'static str,
    pub line: u32,
}

impl Location {
    pub const fn new(file: &'static str, function: &'static str, line: u32) -> Self {
        Self { file, function, line }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.function, self.line)
    }
}

/// Reduce a `type_name` of a probe fn nested in the caller to the bare
/// name of the caller.
#[doc(hidden)]
pub fn function_name(probe_path: &'static str) -> &'static str {
    let mut path = probe_path.strip_suffix("::__probe").unwrap_or(probe_path);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    path.rsplit("::").next().unwrap_or(path)
}
