//! The full guard-and-push pipeline.

use std::io::{self, BufRead};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};

use crate::git::GitRepository;
use crate::utils::preflight::{self, CACHE_PATTERN};
use crate::utils::prompt;
use crate::utils::settings::{env_var_or, DEFAULT_BRANCH, DEFAULT_MESSAGE, DEFAULT_REMOTE};

/// Runs the pre-push safety checks, then prompts for a commit message and
/// a confirmation before staging, committing, and pushing.
#[derive(Parser, Default)]
pub struct PushCommand {}

impl PushCommand {
    /// Executes the push command, reading prompt responses from stdin.
    pub fn execute(self, repo_path: &Path) -> Result<()> {
        self.run(repo_path, &mut io::stdin().lock())
    }

    /// Runs the pipeline with prompt responses taken from `input`.
    pub fn run<R: BufRead>(self, repo_path: &Path, input: &mut R) -> Result<()> {
        let repo = GitRepository::open_at(repo_path).context("Not in a git repository")?;

        preflight::check_sensitive_ignored(&repo)?;
        clean_tracked_cache(&repo)?;

        let default_message = env_var_or("PUSHGUARD_MESSAGE", DEFAULT_MESSAGE);
        let message = prompt::read_commit_message(input, &default_message)?;

        if !prompt::confirm_push(input)? {
            println!("❌ Push cancelled.");
            return Ok(());
        }

        let remote = env_var_or("PUSHGUARD_REMOTE", DEFAULT_REMOTE);
        let branch = env_var_or("PUSHGUARD_BRANCH", DEFAULT_BRANCH);

        debug!(message = %message, remote = %remote, branch = %branch, "Pushing");

        repo.stage_all()?;
        repo.commit(&message)?;

        println!("📤 Pushing to {remote}/{branch}...");
        repo.push(&remote, &branch)?;

        println!("🎉 Push complete!");

        Ok(())
    }
}

/// Untracks any Python cache files found in the index, keeping them on disk.
pub(crate) fn clean_tracked_cache(repo: &GitRepository) -> Result<()> {
    let cached = preflight::tracked_cache_files(repo)?;
    if cached.is_empty() {
        debug!("No tracked cache files in index");
        return Ok(());
    }

    println!("⚠️  Found {CACHE_PATTERN} in tracked files, removing from git...");

    // The completion notice prints either way; a failed removal is
    // surfaced as a warning instead of aborting the run.
    if let Err(e) = repo.untrack_cached(&format!("*{CACHE_PATTERN}*")) {
        warn!(error = %e, "Cache cleanup failed");
        println!("⚠️  Cache cleanup did not fully succeed: {e}");
    }

    println!("✅ {CACHE_PATTERN} removed from tracking");

    Ok(())
}
