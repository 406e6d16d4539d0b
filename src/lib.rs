#![forbid(unsafe_code)]

//! undashed — filename conformance auditor.
//!
//! Audits the entry names of one directory against a date-sequence naming
//! convention (six digits, a hyphen, one or more digits), prints the names
//! that lack it, and reports how many conform.
//!
//! # Library usage
//!
//! Use the [`prelude`] for convenient access to the most common types:
//!
//! ```rust,no_run
//! use undashed::prelude::*;
//! ```
//!
//! Individual modules can also be imported directly:
//!
//! ```rust,no_run
//! use undashed::audit::auditor::Auditor;
//! use undashed::audit::lister::{ListOptions, list_entry_names};
//! ```

pub mod prelude;

pub mod audit;
pub mod core;
pub mod logger;
