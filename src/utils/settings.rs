//! Settings and configuration utilities.
//!
//! This module provides functionality to read settings from
//! $HOME/.pushguard/settings.json and use them as a fallback for
//! environment variables. The shipped defaults reproduce the stock
//! workflow (`origin`/`main`, `update dashboard`) when no settings file
//! exists and no variables are set.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Remote the push targets unless `PUSHGUARD_REMOTE` overrides it.
pub const DEFAULT_REMOTE: &str = "origin";

/// Branch the push targets unless `PUSHGUARD_BRANCH` overrides it.
pub const DEFAULT_BRANCH: &str = "main";

/// Commit message used for empty input unless `PUSHGUARD_MESSAGE` overrides it.
pub const DEFAULT_MESSAGE: &str = "update dashboard";

/// Settings loaded from $HOME/.pushguard/settings.json.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// Environment variable overrides.
    #[serde(default)]
    pub env: HashMap<String, String>,
}

impl Settings {
    /// Loads settings from the default location.
    pub fn load() -> Result<Self> {
        let settings_path = Self::get_settings_path()?;
        Self::load_from_path(&settings_path)
    }

    /// Loads settings from a specific path.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default settings
        if !path.exists() {
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        serde_json::from_str::<Settings>(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))
    }

    /// Returns the default settings path.
    pub fn get_settings_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to determine home directory")?;

        Ok(home_dir.join(".pushguard").join("settings.json"))
    }

    /// Returns an environment variable with fallback to settings.
    pub fn get_env_var(&self, key: &str) -> Option<String> {
        match env::var(key) {
            Ok(value) => Some(value),
            Err(_) => self.env.get(key).cloned(),
        }
    }
}

/// Returns an environment variable with fallback to settings, or `default`
/// when neither is set. An unreadable settings file counts as no settings.
pub fn env_var_or(key: &str, default: &str) -> String {
    Settings::load()
        .unwrap_or_default()
        .get_env_var(key)
        .unwrap_or_else(|| default.to_string())
}
