//! Utility functions and helpers.

pub mod preflight;
pub mod prompt;
pub mod settings;

pub use preflight::{check_sensitive_ignored, GuardError};
pub use settings::Settings;
