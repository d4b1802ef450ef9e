//! Hook filesystem layout.
//!
//! # Storage layout
//!
//! ```text
//! ~/.claude/
//!   sessions/       (session context files — written by other hooks)
//!   skills/
//!     learned/      (learned procedure notes — written by other hooks)
//! ```
//!
//! # API pattern
//!
//! Every path helper has two forms:
//! - `fn_at(home: &Path)` — explicit home; used in tests with `TempDir`
//! - `fn()` — derives home from `dirs::home_dir()`, delegates to `_at`
//!
//! Tests must NEVER call the no-arg wrappers; always use `_at`.

use std::path::{Path, PathBuf};

use crate::error::{io_err, CoreError};

/// `<home>/.claude/` — pure, no I/O.
pub fn plugin_data_root(home: &Path) -> PathBuf {
    home.join(".claude")
}

/// `<home>/.claude/sessions/` — pure, no I/O.
pub fn sessions_dir_at(home: &Path) -> PathBuf {
    plugin_data_root(home).join("sessions")
}

/// `sessions_dir_at` convenience wrapper.
pub fn sessions_dir() -> Result<PathBuf, CoreError> {
    Ok(sessions_dir_at(&home()?))
}

/// `<home>/.claude/skills/learned/` — pure, no I/O.
pub fn learned_dir_at(home: &Path) -> PathBuf {
    plugin_data_root(home).join("skills").join("learned")
}

/// `learned_dir_at` convenience wrapper.
pub fn learned_dir() -> Result<PathBuf, CoreError> {
    Ok(learned_dir_at(&home()?))
}

/// Create `dir` (and parents) if it does not yet exist.
pub fn ensure_dir(dir: &Path) -> Result<(), CoreError> {
    if !dir.exists() {
        std::fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;
    }
    Ok(())
}

fn home() -> Result<PathBuf, CoreError> {
    dirs::home_dir().ok_or(CoreError::HomeNotFound)
}
