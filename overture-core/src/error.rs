//! Error types for overture-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from hook filesystem plumbing.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `dirs::home_dir()` returned `None` — cannot locate `~/.claude/`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,
}

/// Convenience constructor for [`CoreError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> CoreError {
    CoreError::Io {
        path: path.into(),
        source,
    }
}
