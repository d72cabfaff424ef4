// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles tagwarden.toml parsing with version validation and unknown key
//! warnings. Every setting has a default, so running without a config file
//! behaves like the stock CI action.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::evaluate::Mode;
use crate::labels::RequiredLabels;
use crate::rule::RULE_FAMILY;

/// Config file name looked up during discovery.
pub const CONFIG_FILE: &str = "tagwarden.toml";

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "labels", "report"];

/// Known `[labels]` keys.
const KNOWN_LABELS_KEYS: &[&str] = &["file", "fallback"];

/// Known `[report]` keys.
const KNOWN_REPORT_KEYS: &[&str] = &["pattern", "check_id"];

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Full configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    #[serde(default)]
    pub labels: LabelsConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            labels: LabelsConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

/// Required-tag source settings.
#[derive(Debug, Default, Deserialize)]
pub struct LabelsConfig {
    /// Path to the `config.json` artifact (default: `$GITHUB_ACTION_PATH/config.json`).
    pub file: Option<PathBuf>,

    /// List used when the artifact cannot be read. Applies to both scan
    /// modes; when unset each mode keeps its historical built-in list.
    pub fallback: Option<Vec<String>>,
}

impl LabelsConfig {
    /// Fallback list for `mode`.
    pub fn fallback_for(&self, mode: Mode) -> RequiredLabels {
        match &self.fallback {
            Some(names) => RequiredLabels::new(names.iter().cloned()),
            None => RequiredLabels::fallback(mode),
        }
    }
}

/// Result formatter settings.
#[derive(Debug, Deserialize)]
pub struct ReportConfig {
    /// Glob for result files inside the scan directory (default: `results_*.json`).
    #[serde(default = "ReportConfig::default_pattern")]
    pub pattern: String,

    /// Substring a `check_id` must contain to count (default: `CKV_AWS_TAG`).
    #[serde(default = "ReportConfig::default_check_id")]
    pub check_id: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            pattern: Self::default_pattern(),
            check_id: Self::default_check_id(),
        }
    }
}

impl ReportConfig {
    fn default_pattern() -> String {
        "results_*.json".to_string()
    }

    fn default_check_id() -> String {
        RULE_FAMILY.to_string()
    }
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    parse_with_warnings(&read(path)?, path)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Parse config from string content (strict mode).
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| config_error(e, path))?;

    let version = version_check.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})\n  Upgrade tagwarden to use this config.",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    toml::from_str(content).map_err(|e| config_error(e, path))
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let config = parse(content, path)?;

    let table: toml::Table = toml::from_str(content).map_err(|e| config_error(e, path))?;
    for key in unknown_keys(&table) {
        warn_unknown_key(path, &key);
    }

    Ok(config)
}

/// Dotted paths of keys tagwarden does not recognize.
fn unknown_keys(table: &toml::Table) -> Vec<String> {
    let mut unknown = Vec::new();
    for (key, value) in table {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            unknown.push(key.clone());
            continue;
        }
        let known: &[&str] = match key.as_str() {
            "labels" => KNOWN_LABELS_KEYS,
            "report" => KNOWN_REPORT_KEYS,
            _ => continue,
        };
        if let toml::Value::Table(section) = value {
            for sub in section.keys() {
                if !known.contains(&sub.as_str()) {
                    unknown.push(format!("{}.{}", key, sub));
                }
            }
        }
    }
    unknown
}

fn config_error(err: toml::de::Error, path: &Path) -> Error {
    Error::Config {
        message: err.to_string(),
        path: Some(path.to_path_buf()),
    }
}

fn warn_unknown_key(path: &Path, key: &str) {
    tracing::warn!(path = %path.display(), key, "unrecognized config field");
    eprintln!(
        "tagwarden: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
