//! Conformance pattern: a compiled regex searched unanchored in entry names.

use regex::Regex;

use crate::core::errors::{Result, UndError};

/// Default conformance pattern: six digits, a hyphen, one or more digits.
///
/// Matches the date-sequence prefix convention used by scanned-archive
/// filenames such as `210615-1.jpg` (YYMMDD, then a per-day sequence
/// number). The search is unanchored, so the sequence may appear anywhere
/// in the name.
pub const DATE_SEQUENCE_PATTERN: &str = r"\d{6}-\d+";

/// Compiled conformance pattern.
#[derive(Debug, Clone)]
pub struct SequencePattern {
    source: String,
    regex: Regex,
}

impl SequencePattern {
    /// Compile a pattern. Empty and non-compiling patterns are rejected.
    pub fn new(source: &str) -> Result<Self> {
        if source.trim().is_empty() {
            return Err(UndError::InvalidConfig {
                details: "audit.pattern must not be empty".to_string(),
            });
        }
        let regex = Regex::new(source)?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    /// The pattern text this instance was compiled from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether `name` contains a substring matching the pattern.
    #[must_use]
    pub fn is_conforming(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

#[cfg(test)]
mod tests {
    use super::{DATE_SEQUENCE_PATTERN, SequencePattern};
    use proptest::prelude::*;

    fn date_sequence() -> SequencePattern {
        SequencePattern::new(DATE_SEQUENCE_PATTERN).expect("builtin pattern compiles")
    }

    #[test]
    fn conforming_names_match() {
        let pattern = date_sequence();
        for name in ["210615-1.jpg", "990101-42.png", "123456-7"] {
            assert!(pattern.is_conforming(name), "{name} should conform");
        }
    }

    #[test]
    fn non_conforming_names_do_not_match() {
        let pattern = date_sequence();
        for name in [
            "broken_name.jpg",
            "abc-1",
            "12345-1",  // five digits, not six
            "123456-",  // hyphen but no sequence number
            "123456.7", // no hyphen
            "",
        ] {
            assert!(!pattern.is_conforming(name), "{name} should not conform");
        }
    }

    #[test]
    fn search_is_unanchored() {
        let pattern = date_sequence();
        assert!(pattern.is_conforming("scan-210615-3-final.tif"));
        assert!(pattern.is_conforming("x1234567-89y"));
    }

    #[test]
    fn seven_digit_run_still_contains_six() {
        // \d{6} matches a window inside a longer digit run; the original
        // behavior is preserved, not "exactly six".
        let pattern = date_sequence();
        assert!(pattern.is_conforming("1234567-1.jpg"));
    }

    #[test]
    fn empty_pattern_rejected() {
        assert!(SequencePattern::new("").is_err());
        assert!(SequencePattern::new("   ").is_err());
    }

    #[test]
    fn non_compiling_pattern_rejected() {
        let err = SequencePattern::new("(").expect_err("should not compile");
        assert_eq!(err.code(), "UND-1001");
    }

    #[test]
    fn source_round_trips() {
        let pattern = SequencePattern::new(r"\d{4}").expect("compiles");
        assert_eq!(pattern.source(), r"\d{4}");
    }

    proptest! {
        // Names with no digit at all can never contain a date sequence.
        #[test]
        fn digitless_names_never_conform(name in "[a-zA-Z_.-]{0,32}") {
            prop_assert!(!date_sequence().is_conforming(&name));
        }

        // Embedding a well-formed sequence anywhere makes any name conform.
        #[test]
        fn embedded_sequence_always_conforms(
            prefix in "[a-z_.-]{0,8}",
            digits in "[0-9]{6}",
            seq in "[0-9]{1,4}",
            suffix in "[a-z_.-]{0,8}",
        ) {
            let name = format!("{prefix}{digits}-{seq}{suffix}");
            prop_assert!(date_sequence().is_conforming(&name));
        }
    }
}
