//! Convenience re-exports for library consumers.
//!
//! ```rust,no_run
//! use undashed::prelude::*;
//! ```

// Core
pub use crate::core::config::Config;
pub use crate::core::errors::{Result, UndError};

// Audit
pub use crate::audit::auditor::{AuditOutcome, Auditor};
pub use crate::audit::lister::{ListOptions, list_entry_names};
pub use crate::audit::pattern::{DATE_SEQUENCE_PATTERN, SequencePattern};
pub use crate::audit::report::AuditReport;

// Logger
pub use crate::logger::jsonl::{EventType, JsonlConfig, JsonlWriter, LogEntry, Severity};
