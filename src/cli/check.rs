//! Read-only pre-push check.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use crate::utils::preflight::{self, CACHE_PATTERN};

/// Runs the ignore guards and the tracked-cache scan without prompting,
/// committing, or pushing anything.
#[derive(Parser, Default)]
pub struct CheckCommand {}

impl CheckCommand {
    /// Executes the check command.
    pub fn execute(self, repo_path: &Path) -> Result<()> {
        let repo = crate::git::GitRepository::open_at(repo_path)
            .context("Not in a git repository")?;

        preflight::check_sensitive_ignored(&repo)?;

        let cached = preflight::tracked_cache_files(&repo)?;
        if cached.is_empty() {
            println!("✅ No {CACHE_PATTERN} files tracked");
        } else {
            println!(
                "⚠️  {} tracked {CACHE_PATTERN} file(s) would be untracked by a push run:",
                cached.len()
            );
            for path in &cached {
                println!("   {path}");
            }
        }

        println!("✅ All pre-push checks passed");

        Ok(())
    }
}
