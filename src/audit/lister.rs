//! Native directory listing: the ordered entry names of one directory.
//!
//! The listing is fully materialized before the audit pass begins and is
//! sorted byte-lexicographically so runs are deterministic across
//! platforms. Enumerating with `read_dir` (rather than shelling out to a
//! listing command) means no spurious trailing empty entry can appear.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::core::errors::{Result, UndError};

/// Listing options derived from config and CLI flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Include dot-prefixed entries. External listing commands omit them
    /// by default; so does the auditor.
    pub include_hidden: bool,
}

/// Produce the ordered entry names of `dir`.
///
/// Non-UTF-8 names are carried through lossily so they can still be
/// matched and printed. Fails when `dir` is missing, not a directory, or
/// unreadable; listing failures are fatal to the run.
pub fn list_entry_names(dir: &Path, options: ListOptions) -> Result<Vec<String>> {
    match fs::metadata(dir) {
        Ok(meta) if !meta.is_dir() => {
            return Err(UndError::NotADirectory {
                path: dir.to_path_buf(),
            });
        }
        Ok(_) => {}
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(UndError::MissingDirectory {
                path: dir.to_path_buf(),
            });
        }
        Err(err) => return Err(UndError::io(dir, err)),
    }

    let entries = fs::read_dir(dir).map_err(|source| UndError::io(dir, source))?;

    let mut names = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|source| UndError::io(dir, source))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !options.include_hidden && name.starts_with('.') {
            continue;
        }
        names.push(name);
    }

    names.sort_unstable();
    Ok(names)
}
