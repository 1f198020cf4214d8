//! # pushguard
//!
//! Pre-push safety checks and an interactive commit/push workflow.
//!
//! Running `pushguard` verifies that sensitive paths (`.env`, `.streamlit/`)
//! are covered by the repository's ignore rules, untracks any Python cache
//! directories that slipped into the index, then prompts for a commit
//! message and a confirmation before staging, committing, and pushing to
//! `origin/main`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod git;
pub mod utils;

pub use crate::cli::Cli;

/// The current version of pushguard.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
