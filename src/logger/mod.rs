//! JSONL activity logging with graceful degradation.

pub mod jsonl;
