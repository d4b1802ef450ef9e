//! Recent-artifact scanning for `overture-scan`.
//!
//! [`find_recent`] lists files in a directory whose names match a glob
//! pattern, optionally restricted to a modification-time window, newest
//! first. The directory is created when absent — a missing directory means
//! "no artifacts yet", never an error.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use glob::Pattern;
use serde::Serialize;
use thiserror::Error;

use overture_core::{paths, CoreError};

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// A matched artifact file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub path: PathBuf,
    pub modified: DateTime<Utc>,
}

/// Errors from artifact scanning.
#[derive(Debug, Error)]
pub enum ScanError {
    /// An error from core path plumbing (directory creation).
    #[error("path setup error: {0}")]
    Paths(#[from] CoreError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The filename pattern was not a valid glob.
    #[error("invalid file pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> ScanError {
    ScanError::Io {
        path: path.into(),
        source,
    }
}

// ---------------------------------------------------------------------------
// find_recent
// ---------------------------------------------------------------------------

/// List files in `dir` whose names match `pattern`, newest first.
///
/// With `max_age_days`, entries modified earlier than that many days ago are
/// excluded, not errored. Subdirectories are skipped. Returns an empty vec
/// when nothing matches.
pub fn find_recent(
    dir: &Path,
    pattern: &str,
    max_age_days: Option<u32>,
) -> Result<Vec<FileEntry>, ScanError> {
    paths::ensure_dir(dir)?;

    let matcher = Pattern::new(pattern).map_err(|source| ScanError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;
    let cutoff = max_age_days.map(|days| Utc::now() - Duration::days(i64::from(days)));

    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| io_err(dir, e))? {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let file_type = entry.file_type().map_err(|e| io_err(entry.path(), e))?;
        if !file_type.is_file() {
            continue;
        }
        if !matcher.matches(&entry.file_name().to_string_lossy()) {
            continue;
        }

        let meta = entry.metadata().map_err(|e| io_err(entry.path(), e))?;
        let modified: DateTime<Utc> = meta
            .modified()
            .map_err(|e| io_err(entry.path(), e))?
            .into();
        if let Some(cutoff) = cutoff {
            if modified < cutoff {
                continue;
            }
        }

        entries.push(FileEntry {
            path: entry.path(),
            modified,
        });
    }

    entries.sort_by(|a, b| b.modified.cmp(&a.modified));
    Ok(entries)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
