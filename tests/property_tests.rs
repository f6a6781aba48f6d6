//! Property-based tests for logwrap using proptest

use logwrap::prelude::*;
use proptest::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Panic),
        Just(LogLevel::Fatal),
    ]
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Test that LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    #[test]
    fn test_log_level_case_insensitive(level in any_level(), use_lower in any::<bool>()) {
        let name = if use_lower {
            level.to_str().to_lowercase()
        } else {
            level.to_str().to_string()
        };
        prop_assert_eq!(name.parse::<LogLevel>().unwrap(), level);
    }

    /// Names outside the known set never parse and never move the level
    #[test]
    fn test_set_level_ignores_invalid(name in "[0-9xyzq_]{1,12}") {
        let logger = Logger::noop();
        logger.set_min_level(LogLevel::Warn);

        prop_assert!(name.parse::<LogLevel>().is_err());
        logger.set_level(&name);
        prop_assert_eq!(logger.level(), LogLevel::Warn);
    }

    #[test]
    fn test_enabled_matches_ordering(current in any_level(), level in any_level()) {
        let logger = Logger::noop();
        logger.set_min_level(current);
        prop_assert_eq!(logger.enabled(level), level >= current);
    }
}

// ============================================================================
// Entry & Field Tests
// ============================================================================

proptest! {
    /// A sanitized message never spans more than one line or column
    #[test]
    fn test_message_sanitization(message in ".*") {
        let entry = LogEntry::new(LogLevel::Info, message);
        prop_assert!(!entry.message.contains('\n'));
        prop_assert!(!entry.message.contains('\r'));
        prop_assert!(!entry.message.contains('\t'));
    }

    /// The encoded field object is valid JSON holding every key in order
    #[test]
    fn test_fields_encode_as_json(
        pairs in prop::collection::vec(("[a-z]{1,8}", any::<i64>()), 0..8)
    ) {
        let fields = pairs
            .iter()
            .fold(Fields::new(), |acc, (k, v)| acc.with_field(k.as_str(), v));

        let encoded = fields.encode();
        let parsed: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        prop_assert!(parsed.is_object());

        let keys: Vec<&str> = fields.iter().map(|(k, _)| k).collect();
        let expected: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
        prop_assert_eq!(keys, expected);
    }

    /// Child loggers append; they never rewrite their parent's fields
    #[test]
    fn test_child_fields_extend_parent(
        parent in prop::collection::vec(("[a-z]{1,6}", any::<u16>()), 0..5),
        child in prop::collection::vec(("[a-z]{1,6}", any::<u16>()), 0..5)
    ) {
        let base = Logger::noop().with_fields(parent.clone());
        let derived = base.with_fields(child.clone());

        prop_assert_eq!(base.fields().len(), parent.len());
        prop_assert_eq!(derived.fields().len(), parent.len() + child.len());
    }

    #[test]
    fn test_encoder_line_shape(message in "[a-zA-Z0-9 ]{0,40}", level in any_level()) {
        let entry = LogEntry::new(level, message.clone());
        let line = ConsoleEncoder::with_colors(false).encode(&entry);
        let columns: Vec<&str> = line.split('\t').collect();

        prop_assert_eq!(columns.len(), 3);
        prop_assert_eq!(columns[1], level.to_str());
        prop_assert_eq!(columns[2], message.as_str());
    }
}
