//! Overture — session-start hook for a developer-tool plugin.
//!
//! # Usage
//!
//! ```text
//! overture [--json]
//! ```
//!
//! Invoked by the host tool at new-session start: attempts a self-update of
//! the plugin working copy, surfaces recent session artifacts and learned
//! procedures, and reports the project's package-manager convention. Always
//! exits 0 — the hook must never block session startup.

mod hook;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "overture",
    version,
    about = "Session-start hook: plugin self-update and context report",
    long_about = None,
)]
struct Cli {
    /// Emit one machine-readable JSON summary instead of log lines.
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    // Top-level boundary: any unexpected failure is logged and swallowed so
    // the host session always starts.
    if let Err(err) = hook::run(cli.json) {
        eprintln!("[session-start] error: {err:#}");
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    // Diagnostics go to stderr at `warn` unless RUST_LOG raises them;
    // stdout carries only the hook's report lines.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
