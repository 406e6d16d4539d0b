//! Filename audit: directory listing, conformance matching, report rendering.

pub mod auditor;
pub mod lister;
pub mod pattern;
pub mod report;
