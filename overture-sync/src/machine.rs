//! The self-update state machine.
//!
//! Five terminal states, each step short-circuiting on failure. Central
//! postcondition: the working copy is never left mid-rebase — a detected
//! conflict is rolled back before the routine returns, so the next session's
//! run starts from a clean state.

use std::path::{Path, PathBuf};

use crate::outcome::SyncOutcome;
use crate::vcs::{GitCli, Vcs, INTEGRATE_CMD};

/// Environment variable naming the plugin's installation root.
pub const PLUGIN_ROOT_ENV: &str = "CLAUDE_PLUGIN_ROOT";

/// Phrase `git status -uno` prints when local history already contains all
/// remote history.
const UP_TO_DATE_PHRASE: &str = "Your branch is up to date";

/// Markers in `git pull --rebase` output signaling an unresolved conflict.
const CONFLICT_MARKERS: [&str; 2] = ["CONFLICT", "conflict"];

/// Resolve the plugin root from [`PLUGIN_ROOT_ENV`] and synchronize it.
pub fn auto_update() -> SyncOutcome {
    match std::env::var(PLUGIN_ROOT_ENV) {
        Ok(root) if !root.trim().is_empty() => {
            let root = PathBuf::from(root);
            let git = GitCli::new(&root);
            synchronize(&root, &git)
        }
        _ => SyncOutcome::Error {
            message: format!("{PLUGIN_ROOT_ENV} not set"),
        },
    }
}

/// Fast-forward the working copy at `root` from its remote.
///
/// Whatever the outcome, the working copy on disk is either unchanged from
/// before the call or cleanly fast-forwarded.
pub fn synchronize<V: Vcs>(root: &Path, vcs: &V) -> SyncOutcome {
    // 1. Repository check. Absence of tracking is an expected configuration
    // (plugin installed via a non-versioned mechanism), not an error.
    if !vcs.exists().success {
        return SyncOutcome::NotARepository {
            message: "plugin directory is not a tracked repository".to_string(),
        };
    }

    // 2. Fetch remote history without merging.
    let fetch = vcs.fetch();
    if !fetch.success {
        return SyncOutcome::Error {
            message: format!("fetch failed: {}", fetch.output.trim()),
        };
    }

    // 3. Compare the local branch with its remote-tracking counterpart.
    let compare = vcs.compare_with_remote();
    if !compare.success {
        return SyncOutcome::Error {
            message: format!("status check failed: {}", compare.output.trim()),
        };
    }
    if compare.output.contains(UP_TO_DATE_PHRASE) {
        return SyncOutcome::UpToDate {
            message: "already up to date".to_string(),
        };
    }

    // 4. Local-change probe. Informational only: the update attempt proceeds
    // regardless of uncommitted modifications.
    let probe = vcs.local_changes();
    if probe.success && !probe.output.trim().is_empty() {
        tracing::debug!(stat = %probe.output.trim(), "uncommitted local modifications present");
    }

    // 5. Replay local commits on top of the fetched remote history.
    let integrate = vcs.integrate();
    if integrate.success {
        return SyncOutcome::Updated {
            message: "plugin updated to latest remote revision".to_string(),
        };
    }

    if CONFLICT_MARKERS
        .iter()
        .any(|marker| integrate.output.contains(marker))
    {
        // Roll back before reporting: a working copy left mid-rebase would
        // make every later session's update attempt fail in step 5.
        let abort = vcs.abort();
        if !abort.success {
            tracing::warn!(output = %abort.output.trim(), "rebase abort failed");
        }
        return SyncOutcome::Conflict {
            message: format!(
                "conflict detected; resolve manually: cd {} && {INTEGRATE_CMD}",
                root.display()
            ),
        };
    }

    SyncOutcome::Error {
        message: format!("update failed: {}", integrate.output.trim()),
    }
}
