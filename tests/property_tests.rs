//! Property-based tests for rust_mini_logger using proptest

use proptest::prelude::*;
use rust_mini_logger::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    (0u8..6).prop_map(|rank| LogLevel::from_rank(rank).expect("rank in range"))
}

fn here() -> Location {
    Location::new("tests/property_tests.rs", "property", 1)
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Test that LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_level(), lower in any::<bool>()) {
        let text = if lower { level.to_str().to_lowercase() } else { level.to_str().to_string() };
        let parsed: LogLevel = text.parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Test that LogLevel ordering is consistent with rank
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        prop_assert_eq!(level1 <= level2, level1.rank() <= level2.rank());
        prop_assert_eq!(level1 < level2, level1.rank() < level2.rank());
        prop_assert_eq!(format!("{}", level1), level1.to_str());
    }
}

// ============================================================================
// Handler Threshold Tests
// ============================================================================

proptest! {
    /// A handler emits a record exactly when its level reaches the threshold
    #[test]
    fn test_threshold_cut(record in any_level(), threshold in any_level()) {
        let memory = MemorySink::new();
        let handler = Handler::new(memory.clone().into(), threshold);
        handler.evaluate(record, "m", &here());
        prop_assert_eq!(!memory.is_empty(), record >= threshold);
    }

    /// An accepting filter never widens what the threshold lets through
    #[test]
    fn test_threshold_precedes_filters(record in any_level(), threshold in any_level()) {
        let memory = MemorySink::new();
        let handler = Handler::new(memory.clone().into(), threshold)
            .with_filter(|_: LogLevel, _: &str| true);
        handler.evaluate(record, "m", &here());
        prop_assert_eq!(!memory.is_empty(), record >= threshold);
    }
}

// ============================================================================
// Template Tests
// ============================================================================

proptest! {
    /// The default template writes the message and nothing else
    #[test]
    fn test_message_template_is_identity(message in ".*", level in any_level()) {
        let memory = MemorySink::new();
        let handler = Handler::new(memory.clone().into(), LogLevel::NotSet);
        handler.evaluate(level, &message, &here());
        prop_assert_eq!(memory.contents(), message);
    }

    /// Text without any "%(" is copied through unchanged
    #[test]
    fn test_literal_text_passes_through(text in "[^%]*") {
        let template = Template::parse(text.clone());
        prop_assert_eq!(template.placeholders().count(), 0);

        let location = here();
        let ctx = rust_mini_logger::RenderContext::new(LogLevel::Info, "unused", &location);
        prop_assert_eq!(template.render_to_string(&ctx), text);
    }

    /// Unknown `%(name)` tokens are kept literally
    #[test]
    fn test_unknown_tokens_literal(name in "[a-z]{1,12}") {
        prop_assume!(!["message", "file", "func", "line", "time", "level"].contains(&name.as_str()));
        let source = format!("%({})", name);

        let location = here();
        let ctx = rust_mini_logger::RenderContext::new(LogLevel::Warn, "x", &location);
        prop_assert_eq!(Template::parse(source.clone()).render_to_string(&ctx), source);
    }
}

// ============================================================================
// Dispatch Tests
// ============================================================================

proptest! {
    /// Messages of any length are rendered in full
    #[test]
    fn test_dispatch_any_length(message in ".{0,300}") {
        let memory = MemorySink::new();
        let mut logger = Logger::new();
        logger.add_handler(Handler::new(memory.clone().into(), LogLevel::NotSet));

        logger.dispatch(LogLevel::Info, &here(), format_args!("{}", message));
        prop_assert_eq!(memory.contents(), message);
    }

    /// Every handler is offered the record once, in registration order
    #[test]
    fn test_dispatch_order(count in 0usize..16) {
        let memory = MemorySink::new();
        let mut logger = Logger::new();
        for i in 0..count {
            logger.add_handler(
                Handler::new(memory.clone().into(), LogLevel::NotSet)
                    .with_template(format!("{},", i)),
            );
        }

        logger.dispatch(LogLevel::Debug, &here(), format_args!("ignored"));

        let expected: String = (0..count).map(|i| format!("{},", i)).collect();
        prop_assert_eq!(memory.contents(), expected);
    }
}
