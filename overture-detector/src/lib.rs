//! Package-manager detection for `overture-detector`.
//!
//! `detect_at(path)` resolves the package-manager convention of a project
//! root from an ordered list of sources, most to least confident: explicit
//! configuration, lockfile inference, the caller's environment, whatever is
//! installed on `PATH`, and finally a default. The first tier with an answer
//! wins.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Environment variable package managers set when they spawn child tooling.
const USER_AGENT_ENV: &str = "npm_config_user_agent";

/// Probe order for the `PATH` fallback tier.
const PATH_PROBE_ORDER: [PackageManager; 4] = [
    PackageManager::Pnpm,
    PackageManager::Yarn,
    PackageManager::Bun,
    PackageManager::Npm,
];

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// A JavaScript package manager convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    /// The executable name, as typed on a command line.
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "npm" => Some(PackageManager::Npm),
            "pnpm" => Some(PackageManager::Pnpm),
            "yarn" => Some(PackageManager::Yarn),
            "bun" => Some(PackageManager::Bun),
            _ => None,
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

/// How confidently the convention was determined, most to least.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Source {
    ExplicitConfig,
    LockfileInference,
    EnvironmentVariable,
    Fallback,
    Default,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Source::ExplicitConfig => "explicit-config",
            Source::LockfileInference => "lockfile-inference",
            Source::EnvironmentVariable => "environment-variable",
            Source::Fallback => "fallback",
            Source::Default => "default",
        };
        f.write_str(s)
    }
}

impl Source {
    /// Tiers below lockfile inference are guesses worth confirming.
    pub fn is_guess(&self) -> bool {
        matches!(self, Source::Fallback | Source::Default)
    }
}

/// A resolved package-manager convention and where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub manager: PackageManager,
    pub source: Source,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Detect the package-manager convention of the project at `root`.
///
/// Never fails: the `default` tier always answers.
pub fn detect_at(root: &Path) -> Selection {
    detect_with(root, std::env::var(USER_AGENT_ENV).ok(), |manager| {
        which::which(manager.command()).is_ok()
    })
}

/// `detect_at` for the current working directory.
pub fn detect() -> Selection {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    detect_at(&cwd)
}

/// One-time prompt shown when detection fell back to a guess.
pub fn selection_prompt() -> String {
    "no package manager preference found; pin one by setting the \
     \"packageManager\" field in package.json (e.g. \"pnpm@9.1.0\") \
     or by committing a lockfile"
        .to_string()
}

// ---------------------------------------------------------------------------
// Resolver tiers
// ---------------------------------------------------------------------------

fn detect_with(
    root: &Path,
    user_agent: Option<String>,
    on_path: impl Fn(PackageManager) -> bool,
) -> Selection {
    // Tried most-confident first; the first tier with an answer wins.
    if let Some(manager) = explicit_config(root) {
        return Selection {
            manager,
            source: Source::ExplicitConfig,
        };
    }
    if let Some(manager) = lockfile_inference(root) {
        return Selection {
            manager,
            source: Source::LockfileInference,
        };
    }
    if let Some(manager) = user_agent.as_deref().and_then(parse_user_agent) {
        return Selection {
            manager,
            source: Source::EnvironmentVariable,
        };
    }
    if let Some(manager) = PATH_PROBE_ORDER.iter().copied().find(|m| on_path(*m)) {
        return Selection {
            manager,
            source: Source::Fallback,
        };
    }
    Selection {
        manager: PackageManager::Npm,
        source: Source::Default,
    }
}

/// The `packageManager` field of `package.json` (e.g. `"pnpm@9.1.0"`).
///
/// Malformed JSON or an unrecognized manager name falls through to the next
/// tier rather than erroring.
fn explicit_config(root: &Path) -> Option<PackageManager> {
    let content = std::fs::read_to_string(root.join("package.json")).ok()?;
    let json: serde_json::Value = serde_json::from_str(&content).ok()?;
    let field = json.get("packageManager")?.as_str()?;
    let name = field.split('@').next()?;
    PackageManager::parse(name)
}

fn lockfile_inference(root: &Path) -> Option<PackageManager> {
    let lockfiles = [
        ("pnpm-lock.yaml", PackageManager::Pnpm),
        ("yarn.lock", PackageManager::Yarn),
        ("bun.lockb", PackageManager::Bun),
        ("bun.lock", PackageManager::Bun),
        ("package-lock.json", PackageManager::Npm),
        ("npm-shrinkwrap.json", PackageManager::Npm),
    ];
    lockfiles
        .iter()
        .find(|(name, _)| root.join(name).exists())
        .map(|(_, manager)| *manager)
}

/// First `name/version` token of the user-agent string names the manager,
/// e.g. `pnpm/9.1.0 npm/? node/v20.11.0 linux x64`.
fn parse_user_agent(agent: &str) -> Option<PackageManager> {
    let token = agent.split_whitespace().next()?;
    let name = token.split('/').next()?;
    PackageManager::parse(name)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
