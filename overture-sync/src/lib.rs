//! # overture-sync
//!
//! Self-update synchronization for the plugin working copy.
//!
//! Call [`auto_update`] to resolve the plugin root from the environment and
//! fast-forward it from its remote, or [`synchronize`] to run the state
//! machine against an explicit root and [`Vcs`] implementation.

pub mod machine;
pub mod outcome;
pub mod vcs;

pub use machine::{auto_update, synchronize, PLUGIN_ROOT_ENV};
pub use outcome::SyncOutcome;
pub use vcs::{GitCli, Vcs};
