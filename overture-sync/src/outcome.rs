//! Terminal outcomes of the self-update routine.

use serde::Serialize;

/// The five-way terminal state of a synchronization attempt.
///
/// Failure is data here, not control flow: the state machine never returns
/// `Result`, and every variant carries a human-readable message for the
/// session log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum SyncOutcome {
    /// The plugin directory is not a tracked working copy. Expected when the
    /// plugin was installed by other means; reported silently.
    NotARepository { message: String },

    /// Local history already contains all remote history; nothing written.
    UpToDate { message: String },

    /// Local working copy fast-forwarded onto the fetched remote history.
    Updated { message: String },

    /// Automatic integration hit a conflict. The attempt was rolled back and
    /// the message carries manual-resolution instructions.
    Conflict { message: String },

    /// Operational failure — network, permissions, missing configuration.
    Error { message: String },
}

impl SyncOutcome {
    /// Stable kebab-case tag, matching the serialized `status` field.
    pub fn status(&self) -> &'static str {
        match self {
            SyncOutcome::NotARepository { .. } => "not-a-repository",
            SyncOutcome::UpToDate { .. } => "up-to-date",
            SyncOutcome::Updated { .. } => "updated",
            SyncOutcome::Conflict { .. } => "conflict",
            SyncOutcome::Error { .. } => "error",
        }
    }

    /// The human-readable message carried by every variant.
    pub fn message(&self) -> &str {
        match self {
            SyncOutcome::NotARepository { message }
            | SyncOutcome::UpToDate { message }
            | SyncOutcome::Updated { message }
            | SyncOutcome::Conflict { message }
            | SyncOutcome::Error { message } => message,
        }
    }
}
