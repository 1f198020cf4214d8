//! Preflight validation checks for early failure detection.
//!
//! Commands call these checks before touching the repository so that a
//! misconfigured ignore file halts the run before anything is staged,
//! committed, or pushed.

use anyhow::Result;
use thiserror::Error;
use tracing::debug;

use crate::git::GitRepository;

/// Paths that must be covered by the repository's ignore rules, in the
/// order they are checked.
pub const SENSITIVE_PATHS: [&str; 2] = [".env", ".streamlit/"];

/// Substring identifying Python bytecode cache directories in the index.
pub const CACHE_PATTERN: &str = "__pycache__";

/// A failed pre-push safety check.
#[derive(Error, Debug)]
pub enum GuardError {
    /// A sensitive path is not matched by the ignore rules.
    #[error("{path} is NOT ignored! Add it to .gitignore before pushing")]
    NotIgnored {
        /// The path that failed the ignore check.
        path: String,
    },
}

/// Verifies that every sensitive path is ignored, printing a notice per
/// path as it passes.
///
/// Checks run in the fixed order of [`SENSITIVE_PATHS`]; the first failure
/// aborts, so later paths go unchecked.
pub fn check_sensitive_ignored(repo: &GitRepository) -> Result<()> {
    for path in SENSITIVE_PATHS {
        if repo.is_ignored(path)? {
            println!("✅ {path} is ignored");
        } else {
            debug!(path = path, "Ignore guard failed");
            return Err(GuardError::NotIgnored {
                path: path.to_string(),
            }
            .into());
        }
    }

    Ok(())
}

/// Returns the tracked paths that look like Python cache files.
pub fn tracked_cache_files(repo: &GitRepository) -> Result<Vec<String>> {
    repo.tracked_paths_matching(CACHE_PATTERN)
}
