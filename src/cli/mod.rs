//! CLI interface for pushguard.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod check;
pub mod push;

pub use check::CheckCommand;
pub use push::PushCommand;

/// pushguard: pre-push safety checks and an interactive commit/push workflow
#[derive(Parser)]
#[command(name = "pushguard")]
#[command(about = "Pre-push safety checks and an interactive commit/push workflow", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Repository root to operate on.
    #[arg(short = 'C', long = "repo", global = true, default_value = ".")]
    pub repo: PathBuf,

    /// The command to execute; the full push workflow when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Main command categories.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the full check-commit-push workflow (the default).
    Push(PushCommand),
    /// Run the safety checks only, without prompting or mutating anything.
    Check(CheckCommand),
}

impl Cli {
    /// Execute the CLI command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Some(Commands::Push(push_cmd)) => push_cmd.execute(&self.repo),
            Some(Commands::Check(check_cmd)) => check_cmd.execute(&self.repo),
            None => PushCommand::default().execute(&self.repo),
        }
    }
}
