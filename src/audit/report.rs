//! Audit report rendering: operator-facing stdout and JSON payloads.

#![allow(missing_docs)]

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use serde_json::{Value, json};

use crate::audit::auditor::AuditOutcome;

/// One run's report, borrowed from the audit pipeline.
#[derive(Debug, Clone, Copy)]
pub struct AuditReport<'a> {
    pub root: &'a Path,
    pub pattern: &'a str,
    pub outcome: &'a AuditOutcome,
    pub duration: Duration,
}

impl AuditReport<'_> {
    /// Write the human output contract: each flagged name verbatim on its
    /// own line, in listing order, then one final line holding the
    /// conforming count. Nothing else goes to stdout, so the output stays
    /// pipe-friendly.
    pub fn write_human<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for name in &self.outcome.flagged {
            writeln!(out, "{name}")?;
        }
        writeln!(out, "{}", self.outcome.conforming)
    }

    /// Single-document JSON rendering of the run.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "root": self.root.to_string_lossy(),
            "pattern": self.pattern,
            "flagged": self.outcome.flagged,
            "conforming": self.outcome.conforming,
            "total": self.outcome.total,
            "duration_ms": u64::try_from(self.duration.as_millis()).unwrap_or(u64::MAX),
        })
    }

    /// One-line plain summary for verbose stderr reporting.
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "audited {} entries under {}: {} conforming, {} flagged ({} ms)",
            self.outcome.total,
            self.root.display(),
            self.outcome.conforming,
            self.outcome.flagged.len(),
            self.duration.as_millis(),
        )
    }
}
