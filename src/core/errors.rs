//! UND-prefixed error types with structured error codes.

#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, UndError>;

/// Top-level error type for undashed.
#[derive(Debug, Error)]
pub enum UndError {
    #[error("[UND-1001] invalid configuration: {details}")]
    InvalidConfig { details: String },

    #[error("[UND-1002] missing configuration file: {path}")]
    MissingConfig { path: PathBuf },

    #[error("[UND-1003] configuration parse failure in {context}: {details}")]
    ConfigParse {
        context: &'static str,
        details: String,
    },

    #[error("[UND-2001] audit directory does not exist: {path}")]
    MissingDirectory { path: PathBuf },

    #[error("[UND-2002] audit target is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("[UND-2101] serialization failure in {context}: {details}")]
    Serialization {
        context: &'static str,
        details: String,
    },

    #[error("[UND-3002] IO failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl UndError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => "UND-1001",
            Self::MissingConfig { .. } => "UND-1002",
            Self::ConfigParse { .. } => "UND-1003",
            Self::MissingDirectory { .. } => "UND-2001",
            Self::NotADirectory { .. } => "UND-2002",
            Self::Serialization { .. } => "UND-2101",
            Self::Io { .. } => "UND-3002",
        }
    }

    /// Convenience constructor for IO errors with a known path.
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl From<serde_json::Error> for UndError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization {
            context: "serde_json",
            details: value.to_string(),
        }
    }
}

impl From<toml::de::Error> for UndError {
    fn from(value: toml::de::Error) -> Self {
        Self::ConfigParse {
            context: "toml",
            details: value.to_string(),
        }
    }
}

impl From<regex::Error> for UndError {
    fn from(value: regex::Error) -> Self {
        Self::InvalidConfig {
            details: format!("pattern does not compile: {value}"),
        }
    }
}
