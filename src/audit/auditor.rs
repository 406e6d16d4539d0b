//! Single-pass classification of entry names against the conformance pattern.

#![allow(missing_docs)]

use crate::audit::pattern::SequencePattern;

/// Result of one audit pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditOutcome {
    /// Non-conforming names, in listing order.
    pub flagged: Vec<String>,
    /// Count of names containing a pattern match.
    pub conforming: usize,
    /// Total entries examined.
    pub total: usize,
}

impl AuditOutcome {
    /// Accounting invariant: every entry is either flagged or conforming.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.flagged.len() + self.conforming == self.total
    }
}

/// Classifies entry names and tallies conforming ones.
#[derive(Debug, Clone)]
pub struct Auditor {
    pattern: SequencePattern,
}

impl Auditor {
    #[must_use]
    pub fn new(pattern: SequencePattern) -> Self {
        Self { pattern }
    }

    /// The pattern this auditor classifies against.
    #[must_use]
    pub fn pattern(&self) -> &SequencePattern {
        &self.pattern
    }

    /// Classify `entries` in one pass.
    ///
    /// A name is flagged iff it contains no substring matching the
    /// pattern. Flagged names keep their listing order. Matching cannot
    /// fail on any string input; an empty string is non-conforming.
    #[must_use]
    pub fn audit(&self, entries: &[String]) -> AuditOutcome {
        let mut flagged = Vec::new();
        let mut conforming = 0usize;

        for name in entries {
            if self.pattern.is_conforming(name) {
                conforming += 1;
            } else {
                flagged.push(name.clone());
            }
        }

        AuditOutcome {
            flagged,
            conforming,
            total: entries.len(),
        }
    }
}
