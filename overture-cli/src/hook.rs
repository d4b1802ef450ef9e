//! The session-start flow: sync, scan, report.
//!
//! Steps are independent — a failing component logs and yields an empty
//! result instead of stopping the ones after it.

use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use overture_core::{paths, CoreError};
use overture_detector::{detect, selection_prompt, Selection};
use overture_scan::{find_recent, FileEntry, ScanError};
use overture_sync::{auto_update, SyncOutcome};

/// Filename pattern for session context files.
const SESSION_PATTERN: &str = "*.tmp";
/// Session files older than this many days are not surfaced.
const SESSION_WINDOW_DAYS: u32 = 7;
/// Filename pattern for learned procedure notes.
const LEARNED_PATTERN: &str = "*.md";

const PREFIX: &str = "[session-start]";

/// Machine-readable summary for `--json`.
#[derive(Debug, Serialize)]
struct HookSummary {
    sync: SyncOutcome,
    sessions: Vec<FileEntry>,
    learned: Vec<FileEntry>,
    package_manager: Selection,
}

/// Run the whole hook once.
pub fn run(json: bool) -> Result<()> {
    let sync = auto_update();
    if !json {
        report_sync(&sync);
    }

    let sessions = scan(paths::sessions_dir(), SESSION_PATTERN, Some(SESSION_WINDOW_DAYS));
    let learned = scan(paths::learned_dir(), LEARNED_PATTERN, None);
    if !json {
        report_artifacts(&sessions, &learned);
    }

    let package_manager = detect();
    if !json {
        report_package_manager(&package_manager);
    }

    if json {
        let summary = HookSummary {
            sync,
            sessions,
            learned,
            package_manager,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}

/// Scan one artifact directory; failures log and degrade to "nothing found".
fn scan(
    dir: Result<PathBuf, CoreError>,
    pattern: &str,
    window: Option<u32>,
) -> Vec<FileEntry> {
    let dir = match dir {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("{PREFIX} scan skipped: {err}");
            return Vec::new();
        }
    };
    match find_recent(&dir, pattern, window) {
        Ok(entries) => entries,
        Err(err @ ScanError::Pattern { .. }) => {
            eprintln!("{PREFIX} scan failed: {err}");
            Vec::new()
        }
        Err(err) => {
            eprintln!("{PREFIX} scan failed for {}: {err}", dir.display());
            Vec::new()
        }
    }
}

fn report_sync(outcome: &SyncOutcome) {
    match outcome {
        SyncOutcome::NotARepository { message } => {
            // Expected when the plugin was installed without version tracking.
            tracing::debug!("{message}");
        }
        SyncOutcome::UpToDate { message } | SyncOutcome::Updated { message } => {
            println!("{PREFIX} {} {message}", "✓".green());
        }
        SyncOutcome::Conflict { message } => {
            println!("{PREFIX} {} {message}", "⚠".yellow());
        }
        SyncOutcome::Error { message } => {
            println!("{PREFIX} update skipped: {message}");
        }
    }
}

fn report_artifacts(sessions: &[FileEntry], learned: &[FileEntry]) {
    if let Some(latest) = sessions.first() {
        println!("{PREFIX} found {} recent session(s)", sessions.len());
        println!("{PREFIX} latest: {}", latest.path.display());
    }
    if let Some(first) = learned.first() {
        let dir = first.path.parent().unwrap_or_else(|| Path::new(""));
        println!(
            "{PREFIX} {} learned procedure(s) available in {}",
            learned.len(),
            dir.display()
        );
    }
}

fn report_package_manager(selection: &Selection) {
    println!(
        "{PREFIX} package manager: {} ({})",
        selection.manager, selection.source
    );
    if selection.source.is_guess() {
        println!("{PREFIX} {}", selection_prompt());
    }
}
