//! Format templates
//!
//! A template mixes literal text with six placeholder tokens:
//!
//! | token        | substituted with                      |
//! |--------------|---------------------------------------|
//! | `%(message)` | the rendered message text             |
//! | `%(file)`    | source file of the call site          |
//! | `%(func)`    | function name of the call site        |
//! | `%(line)`    | line number of the call site          |
//! | `%(time)`    | local time, `YYYY-MM-DD HH:MM:SS`     |
//! | `%(level)`   | level label, e.g. `INFO`              |
//!
//! Anything else, including unknown `%(...)` sequences, is copied through
//! literally. Tokens may repeat and appear in any order.
//!
//! ```
//! use rust_mini_logger::core::{Location, LogLevel, RenderContext, Template};
//!
//! let template = Template::parse("[%(level)] %(message)");
//! let location = Location::new("main.rs", "main", 3);
//! let ctx = RenderContext::new(LogLevel::Info, "x", &location);
//! assert_eq!(template.render_to_string(&ctx), "[INFO] x");
//! ```

use super::{location::Location, log_level::LogLevel, timestamp};
use std::borrow::Cow;
use std::fmt::{self, Write as _};

/// The template used by a handler that was never given one.
pub const DEFAULT_TEMPLATE: &str = "%(message)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Message,
    File,
    Func,
    Line,
    Time,
    Level,
}

impl Placeholder {
    /// Every placeholder, in the order candidates are tried while scanning.
    pub const ALL: [Placeholder; 6] = [
        Placeholder::Message,
        Placeholder::File,
        Placeholder::Func,
        Placeholder::Line,
        Placeholder::Time,
        Placeholder::Level,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            Placeholder::Message => "%(message)",
            Placeholder::File => "%(file)",
            Placeholder::Func => "%(func)",
            Placeholder::Line => "%(line)",
            Placeholder::Time => "%(time)",
            Placeholder::Level => "%(level)",
        }
    }

    fn match_at(text: &str) -> Option<Placeholder> {
        Self::ALL.into_iter().find(|p| text.starts_with(p.token()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(Placeholder),
}

/// Values available to a template while rendering one record.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub level: LogLevel,
    pub message: &'a str,
    pub location: &'a Location,
    /// Color the `%(level)` label. Ignored without the `console` feature.
    pub colors: bool,
}

impl<'a> RenderContext<'a> {
    pub fn new(level: LogLevel, message: &'a str, location: &'a Location) -> Self {
        Self {
            level,
            message,
            location,
            colors: false,
        }
    }

    #[must_use]
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }
}

/// A parsed format template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Scan `source` left to right. At each position the six tokens are
    /// tried; a match becomes a placeholder and the scan skips past it,
    /// otherwise one character is kept as literal text.
    pub fn parse(source: impl Into<String>) -> Self {
        let source = source.into();
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = source.as_str();

        while !rest.is_empty() {
            if let Some(placeholder) = Placeholder::match_at(rest) {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Placeholder(placeholder));
                rest = &rest[placeholder.token().len()..];
            } else {
                let mut chars = rest.chars();
                if let Some(c) = chars.next() {
                    literal.push(c);
                }
                rest = chars.as_str();
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { source, segments }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Placeholders in order of appearance, duplicates included.
    pub fn placeholders(&self) -> impl Iterator<Item = Placeholder> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(p) => Some(*p),
            Segment::Literal(_) => None,
        })
    }

    /// Append the substituted template to `out`.
    ///
    /// `%(time)` is read from the wall clock at most once per call.
    pub fn render(&self, ctx: &RenderContext<'_>, out: &mut String) {
        let mut time: Option<Cow<'static, str>> = None;

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(Placeholder::Message) => out.push_str(ctx.message),
                Segment::Placeholder(Placeholder::File) => out.push_str(ctx.location.file),
                Segment::Placeholder(Placeholder::Func) => out.push_str(ctx.location.function),
                Segment::Placeholder(Placeholder::Line) => {
                    let _ = write!(out, "{}", ctx.location.line);
                }
                Segment::Placeholder(Placeholder::Time) => {
                    out.push_str(time.get_or_insert_with(timestamp::now));
                }
                Segment::Placeholder(Placeholder::Level) => push_level(ctx, out),
            }
        }
    }

    #[must_use]
    pub fn render_to_string(&self, ctx: &RenderContext<'_>) -> String {
        let mut out = String::with_capacity(self.source.len() + ctx.message.len());
        self.render(ctx, &mut out);
        out
    }
}

#[cfg(feature = "console")]
fn push_level(ctx: &RenderContext<'_>, out: &mut String) {
    use colored::Colorize;
    if ctx.colors {
        let _ = write!(out, "{}", ctx.level.to_str().color(ctx.level.color_code()));
    } else {
        out.push_str(ctx.level.to_str());
    }
}

#[cfg(not(feature = "console"))]
fn push_level(ctx: &RenderContext<'_>, out: &mut String) {
    out.push_str(ctx.level.to_str());
}

impl Default for Template {
    fn default() -> Self {
        Self::parse(DEFAULT_TEMPLATE)
    }
}

impl From<&str> for Template {
    fn from(source: &str) -> Self {
        Self::parse(source)
    }
}

impl From<String> for Template {
    fn from(source: String) -> Self {
        Self::parse(source)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
