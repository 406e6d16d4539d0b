//! Configuration system: TOML file + env var overrides + defaults.

#![allow(missing_docs)]

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::audit::pattern::{DATE_SEQUENCE_PATTERN, SequencePattern};
use crate::core::errors::{Result, UndError};

/// Full undashed configuration model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
#[derive(Default)]
pub struct Config {
    pub audit: AuditConfig,
    pub paths: PathsConfig,
}

/// Audit behavior knobs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AuditConfig {
    /// Directory audited when the CLI gives no path.
    pub root: PathBuf,
    /// Conformance pattern searched (unanchored) in each entry name.
    pub pattern: String,
    /// Include dot-prefixed entries in the listing.
    pub include_hidden: bool,
}

/// Filesystem paths used by undashed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PathsConfig {
    pub config_file: PathBuf,
    pub jsonl_log: PathBuf,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            pattern: DATE_SEQUENCE_PATTERN.to_string(),
            include_hidden: false,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        let home_dir = env::var_os("HOME").map_or_else(
            || {
                eprintln!(
                    "[UND-CONFIG] WARNING: HOME not set, falling back to /tmp for data paths"
                );
                PathBuf::from("/tmp")
            },
            PathBuf::from,
        );
        let cfg = home_dir.join(".config").join("undashed").join("config.toml");
        let data = home_dir.join(".local").join("share").join("undashed");
        Self {
            config_file: cfg,
            jsonl_log: data.join("audit.jsonl"),
        }
    }
}

impl Config {
    /// Default configuration path.
    #[must_use]
    pub fn default_path() -> PathBuf {
        PathsConfig::default().config_file
    }

    /// Load config from default or explicit path, then apply env overrides.
    ///
    /// Missing config file is not an error when loading from the default
    /// path; defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path_buf = path.map_or_else(Self::default_path, Path::to_path_buf);
        let is_explicit_path = path.is_some();

        let mut cfg = if path_buf.exists() {
            let raw = fs::read_to_string(&path_buf).map_err(|source| UndError::Io {
                path: path_buf.clone(),
                source,
            })?;
            let parsed: Self = toml::from_str(&raw)?;
            parsed
        } else if is_explicit_path {
            return Err(UndError::MissingConfig { path: path_buf });
        } else {
            Self::default()
        };

        cfg.paths.config_file = path_buf;
        cfg.apply_env_overrides_from(env_var)?;
        cfg.normalize_paths();
        cfg.validate()?;
        Ok(cfg)
    }

    fn apply_env_overrides_from<F>(&mut self, mut lookup: F) -> Result<()>
    where
        F: FnMut(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("UNDASHED_AUDIT_ROOT") {
            self.audit.root = PathBuf::from(raw);
        }

        if let Some(raw) = lookup("UNDASHED_AUDIT_PATTERN") {
            self.audit.pattern = raw;
        }

        if let Some(raw) = lookup("UNDASHED_AUDIT_INCLUDE_HIDDEN") {
            self.audit.include_hidden = parse_env_bool("UNDASHED_AUDIT_INCLUDE_HIDDEN", &raw)?;
        }

        if let Some(raw) = lookup("UNDASHED_LOG_PATH") {
            self.paths.jsonl_log = PathBuf::from(raw);
        }

        Ok(())
    }

    /// Normalize paths for consistent comparison.
    fn normalize_paths(&mut self) {
        // Strip trailing slashes from the audit root.
        let s = self.audit.root.to_string_lossy();
        if s.len() > 1
            && let Some(stripped) = s.strip_suffix('/')
        {
            self.audit.root = PathBuf::from(stripped);
        }
    }

    fn validate(&self) -> Result<()> {
        // The pattern must compile before any directory is touched.
        SequencePattern::new(&self.audit.pattern)?;

        if self.audit.root.as_os_str().is_empty() {
            return Err(UndError::InvalidConfig {
                details: "audit.root must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|raw| !raw.trim().is_empty())
}

fn parse_env_bool(name: &str, raw: &str) -> Result<bool> {
    raw.parse::<bool>().map_err(|error| UndError::ConfigParse {
        context: "env",
        details: format!("{name}={raw:?}: {error}"),
    })
}
