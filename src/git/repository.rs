//! Git repository operations.
//!
//! Queries (ignore status, index contents) go through libgit2. Mutations
//! (untrack, stage, commit, push) shell out to the `git` binary and check
//! its exit status, so behavior matches what an operator would get running
//! the same commands by hand.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use git2::Repository;
use tracing::debug;

/// Git repository wrapper.
pub struct GitRepository {
    repo: Repository,
    workdir: PathBuf,
}

impl GitRepository {
    /// Open repository at specified path.
    pub fn open_at<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::open(path).context("Failed to open git repository")?;
        let workdir = repo
            .workdir()
            .context("Repository has no working directory (bare repository)")?
            .to_path_buf();

        Ok(Self { repo, workdir })
    }

    /// Get workdir path.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Check whether a path is matched by the repository's ignore rules.
    ///
    /// A trailing slash on the path (directory notation) is accepted and
    /// stripped before the query.
    pub fn is_ignored(&self, path: &str) -> Result<bool> {
        let path = path.trim_end_matches('/');
        self.repo
            .is_path_ignored(path)
            .with_context(|| format!("Failed to query ignore status for '{path}'"))
    }

    /// List tracked paths whose repository-relative path contains `pattern`.
    pub fn tracked_paths_matching(&self, pattern: &str) -> Result<Vec<String>> {
        let index = self.repo.index().context("Failed to read git index")?;

        let matches: Vec<String> = index
            .iter()
            .map(|entry| String::from_utf8_lossy(&entry.path).into_owned())
            .filter(|path| path.contains(pattern))
            .collect();

        debug!(
            pattern = pattern,
            matches = matches.len(),
            "Scanned index for tracked paths"
        );

        Ok(matches)
    }

    /// Recursively remove paths matching `pathspec` from the index while
    /// keeping them on disk (`git rm -r --cached`).
    pub fn untrack_cached(&self, pathspec: &str) -> Result<()> {
        self.run_git(
            &["rm", "-r", "-q", "--cached", "--", pathspec],
            "remove cached files from tracking",
        )
    }

    /// Stage all working-tree changes (`git add --all`).
    pub fn stage_all(&self) -> Result<()> {
        self.run_git(&["add", "--all"], "stage changes")
    }

    /// Create a commit with the given message (`git commit -m`).
    pub fn commit(&self, message: &str) -> Result<()> {
        self.run_git(&["commit", "-m", message], "commit staged changes")
    }

    /// Push the given branch to the given remote (`git push <remote> <branch>`).
    pub fn push(&self, remote: &str, branch: &str) -> Result<()> {
        self.run_git(&["push", remote, branch], "push to remote")
    }

    /// Run a git subcommand in the working directory, failing on non-zero exit.
    fn run_git(&self, args: &[&str], action: &str) -> Result<()> {
        debug!(args = ?args, "Running git");

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .with_context(|| format!("Failed to execute git to {action}"))?;

        if !output.status.success() {
            let error_msg = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("Failed to {}: {}", action, error_msg.trim());
        }

        Ok(())
    }
}
