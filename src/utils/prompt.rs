//! Interactive stdin prompts for the push workflow.
//!
//! Both prompts are written against [`BufRead`] so tests can drive them
//! with cursors; the CLI layer hands them a locked stdin.

use std::io::{self, BufRead, Write};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

/// Matches an affirmative confirmation: bare `y`/`Y` or any casing of `yes`.
static AFFIRMATIVE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^y(es)?$").unwrap());

/// Prompts for a commit message, substituting `default` for empty input.
pub fn read_commit_message<R: BufRead>(input: &mut R, default: &str) -> Result<String> {
    print!("Enter commit message (or press enter for '{default}'): ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read commit message")?;

    Ok(commit_message_or_default(&line, default))
}

/// Prompts for push confirmation. Anything not matching [`AFFIRMATIVE`]
/// (including empty input) is a decline; there is no re-prompt.
pub fn confirm_push<R: BufRead>(input: &mut R) -> Result<bool> {
    print!("Ready to push to GitHub? (y/n): ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read confirmation")?;

    Ok(is_affirmative(&line))
}

/// Returns the raw input with its line ending stripped, or `default` when
/// the input is empty after trimming.
fn commit_message_or_default(input: &str, default: &str) -> String {
    let message = input.strip_suffix('\n').unwrap_or(input);
    let message = message.strip_suffix('\r').unwrap_or(message);

    if message.trim().is_empty() {
        default.to_string()
    } else {
        message.to_string()
    }
}

/// Whether a confirmation response counts as "yes".
fn is_affirmative(input: &str) -> bool {
    AFFIRMATIVE.is_match(input.trim())
}
