//! Path utilities for shorthand.
//!
//! All data lives under `~/.shorthand/`:
//! - `~/.shorthand/config.toml` - main configuration
//! - `~/.shorthand/<store>.json` - one document per store name
//!
//! `SHORTHAND_HOME` relocates the whole directory.

use std::path::PathBuf;

/// Returns the shorthand home directory (`~/.shorthand/`).
pub fn home_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("SHORTHAND_HOME") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".shorthand")
}

/// Returns the default config file path (`~/.shorthand/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}
