// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! Walks from the current directory up to the git root looking for tagwarden.toml.

use std::path::{Path, PathBuf};

use crate::config::{self, CONFIG_FILE, Config};
use crate::error::{Error, Result};

/// Find tagwarden.toml starting from `start_dir` and walking up to git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Resolve config path from CLI arg, env var, or discovery.
///
/// Priority:
/// 1. CLI flag `-C`/`--config` (clap also reads `TAGWARDEN_CONFIG`)
/// 2. Discovery from current directory up to git root
/// 3. None (use defaults)
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) => {
            if path.exists() {
                Ok(Some(path.to_path_buf()))
            } else {
                Err(Error::Config {
                    message: format!("config file not found: {}", path.display()),
                    path: Some(path.to_path_buf()),
                })
            }
        }
        None => Ok(find_config(cwd)),
    }
}

/// Resolve and load the config, or defaults when none is found.
///
/// A relative `labels.file` is taken relative to the config file, so the
/// same config works from any subdirectory.
pub fn load_resolved(explicit: Option<&Path>, cwd: &Path) -> Result<Config> {
    let Some(path) = resolve_config(explicit, cwd)? else {
        return Ok(Config::default());
    };
    tracing::debug!(path = %path.display(), "loading config");

    let mut config = config::load_with_warnings(&path)?;
    if let Some(file) = config.labels.file.take() {
        config.labels.file = Some(anchor(&path, file));
    }
    Ok(config)
}

fn anchor(config_path: &Path, file: PathBuf) -> PathBuf {
    match config_path.parent() {
        Some(dir) if file.is_relative() => dir.join(file),
        _ => file,
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
