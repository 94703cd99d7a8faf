//! Handlers: one output destination each

use super::{
    error::Result,
    fatal,
    filter::Filter,
    location::Location,
    log_level::LogLevel,
    template::{RenderContext, Template},
};
use crate::sinks::Sink;
use std::fmt;

/// What a handler did with a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Emitted,
    BelowThreshold,
    Filtered,
}

/// An output destination with its own threshold, filter chain and template.
///
/// ```
/// use rust_mini_logger::{Handler, LogLevel, Location, MemorySink};
///
/// let memory = MemorySink::new();
/// let handler = Handler::new(memory.clone().into(), LogLevel::Info)
///     .with_template("[%(level)] %(message)\n");
///
/// let here = Location::new("main.rs", "main", 1);
/// handler.evaluate(LogLevel::Debug, "skipped", &here);
/// handler.evaluate(LogLevel::Warn, "disk almost full", &here);
/// assert_eq!(memory.contents(), "[WARN] disk almost full\n");
/// ```
pub struct Handler {
    sink: Sink,
    threshold: LogLevel,
    filters: Vec<Box<dyn Filter>>,
    template: Template,
    colors: bool,
}

impl Handler {
    /// New handler with no filters and the message-only template.
    pub fn new(sink: Sink, threshold: LogLevel) -> Self {
        Self {
            sink,
            threshold,
            filters: Vec::new(),
            template: Template::default(),
            colors: false,
        }
    }

    pub fn set_threshold(&mut self, level: LogLevel) {
        self.threshold = level;
    }

    pub fn set_sink(&mut self, sink: Sink) {
        self.sink = sink;
    }

    pub fn set_template(&mut self, template: impl Into<Template>) {
        self.template = template.into();
    }

    /// Color the `%(level)` label. Only has an effect with the `console`
    /// feature.
    pub fn set_colors(&mut self, colors: bool) {
        self.colors = colors;
    }

    /// Append a filter. Filters run in the order they were added.
    pub fn add_filter<F: Filter + 'static>(&mut self, filter: F) {
        fatal::reserve_one(&mut self.filters, "filter list");
        self.filters.push(Box::new(filter));
    }

    #[must_use]
    pub fn with_threshold(mut self, level: LogLevel) -> Self {
        self.set_threshold(level);
        self
    }

    #[must_use]
    pub fn with_template(mut self, template: impl Into<Template>) -> Self {
        self.set_template(template);
        self
    }

    #[must_use]
    pub fn with_filter<F: Filter + 'static>(mut self, filter: F) -> Self {
        self.add_filter(filter);
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.set_colors(colors);
        self
    }

    pub fn threshold(&self) -> LogLevel {
        self.threshold
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn sink(&self) -> &Sink {
        &self.sink
    }

    pub fn filter_count(&self) -> usize {
        self.filters.len()
    }

    /// Offer a record to this handler.
    ///
    /// Records below the threshold are dropped before any filter runs. The
    /// filter chain stops at the first rejection. Write errors on the sink
    /// are ignored.
    pub fn evaluate(&self, level: LogLevel, message: &str, location: &Location) {
        self.process(level, message, location);
    }

    pub(crate) fn process(&self, level: LogLevel, message: &str, location: &Location) -> Outcome {
        if level < self.threshold {
            return Outcome::BelowThreshold;
        }

        if !self.filters.iter().all(|filter| filter.accept(level, message)) {
            return Outcome::Filtered;
        }

        let ctx = RenderContext::new(level, message, location).with_colors(self.colors);
        let rendered = self.template.render_to_string(&ctx);
        let _ = self.sink.write_all(rendered.as_bytes());
        Outcome::Emitted
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.flush()
    }
}

impl Default for Handler {
    /// Stdout, threshold NOTSET.
    fn default() -> Self {
        Self::new(Sink::stdout(), LogLevel::NotSet)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("sink", &self.sink)
            .field("threshold", &self.threshold)
            .field("filters", &self.filters.len())
            .field("template", &self.template.as_str())
            .field("colors", &self.colors)
            .finish()
    }
}
