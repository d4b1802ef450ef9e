//! Overture core library — process runner, hook path layout, errors.
//!
//! Public API surface:
//! - [`runner`] — [`CommandResult`] and shell execution
//! - [`paths`] — `~/.claude/` layout helpers
//! - [`error`] — [`CoreError`]

pub mod error;
pub mod paths;
pub mod runner;

pub use error::CoreError;
pub use runner::{run, CommandResult};
