//! Demo harness configuration.
//!
//! Loaded from `~/.termpix/config.toml`; every field has a default and the
//! file is optional.
//!
//! ```toml
//! # Delay between animation frames in milliseconds
//! frame_delay_ms = 5
//!
//! # Pause after each demo finishes
//! hold_ms = 1000
//!
//! # Warning-notice time before an all-demo run
//! intro_secs = 10
//! ```

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Demo pacing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Delay between animation frames, in milliseconds.
    pub frame_delay_ms: u64,
    /// Pause after a demo completes, in milliseconds.
    pub hold_ms: u64,
    /// Notice time before running the full demo suite, in seconds.
    pub intro_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_delay_ms: 5,
            hold_ms: 1000,
            intro_secs: 10,
        }
    }
}

impl Config {
    /// Load configuration, falling back to defaults on any problem.
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                if let Ok(content) = fs::read_to_string(&path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }

    fn config_path() -> Option<PathBuf> {
        home_dir().map(|home| home.join(".termpix").join("config.toml"))
    }
}

/// Dot-directory for config and logs, created on demand.
pub fn data_dir() -> Option<PathBuf> {
    let dir = home_dir()?.join(".termpix");
    if !dir.exists() {
        let _ = fs::create_dir_all(&dir);
    }
    Some(dir)
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
