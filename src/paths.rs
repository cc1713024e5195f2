//! XDG-style path utilities for configuration.
//!
//! Paths follow XDG Base Directory conventions on every platform rather
//! than OS-specific locations.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "context";

/// Returns the configuration directory for context.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/context` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/context` otherwise
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join(APP_DIR)),
        _ => Ok(home_dir()?.join(".config").join(APP_DIR)),
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}
