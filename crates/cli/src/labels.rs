// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Required tag set.
//!
//! The set is read once from a JSON artifact (`{"required_tags": [...]}`)
//! and handed to the evaluator as an immutable value. Any failure to read
//! the artifact falls back to a built-in list; the caller never sees an
//! error from [`RequiredLabels::load`].
//!
//! The write side of the artifact lives here too, so the generator and
//! the loader cannot drift apart on file name or key.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::env;
use crate::error::{Error, Result};
use crate::evaluate::Mode;

/// File name of the label artifact.
pub const ARTIFACT_FILE: &str = "config.json";

/// Fallback used by static-configuration scans.
pub const STATIC_FALLBACK: &[&str] = &[
    "business-unit",
    "application",
    "owner",
    "is-production",
    "service-area",
    "environment-name",
];

/// Fallback used by plan scans. Differs from [`STATIC_FALLBACK`] in the
/// last entry; set `labels.fallback` in tagwarden.toml to pick one list
/// for both modes.
pub const PLAN_FALLBACK: &[&str] = &[
    "business-unit",
    "application",
    "owner",
    "is-production",
    "service-area",
    "environment",
];

/// Ordered list of tag names every resource must carry.
///
/// Order is significant: missing tags are reported in this order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredLabels {
    #[serde(rename = "required_tags")]
    names: Vec<String>,
}

impl RequiredLabels {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Built-in list for a scan mode.
    pub fn fallback(mode: Mode) -> Self {
        match mode {
            Mode::Static => Self::new(STATIC_FALLBACK.iter().copied()),
            Mode::Plan => Self::new(PLAN_FALLBACK.iter().copied()),
        }
    }

    /// Load from the artifact at `path`, or return `fallback`.
    pub fn load(path: &Path, fallback: RequiredLabels) -> Self {
        match read_artifact(path) {
            Ok(labels) => {
                tracing::debug!(
                    path = %path.display(),
                    count = labels.len(),
                    "loaded required tags"
                );
                labels
            }
            Err(err) => {
                tracing::debug!(%err, "falling back to built-in required tags");
                fallback
            }
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

fn read_artifact(path: &Path) -> Result<RequiredLabels> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| Error::Json {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Artifact to read: explicit flag, then configured path, then
/// `$GITHUB_ACTION_PATH/config.json`.
pub fn resolve_path(explicit: Option<&Path>, configured: Option<&Path>) -> PathBuf {
    explicit
        .or(configured)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| artifact_path(&env::action_dir()))
}

/// Location of the artifact inside `dir`.
pub fn artifact_path(dir: &Path) -> PathBuf {
    dir.join(ARTIFACT_FILE)
}

/// Split user input into tag names.
///
/// Input containing a comma is split on commas; otherwise on newlines.
/// Entries are trimmed and blanks dropped.
pub fn parse_label_input(input: &str) -> Vec<String> {
    let sep = if input.contains(',') { ',' } else { '\n' };
    input
        .split(sep)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Write the artifact into `dir`, returning the file written.
pub fn write_artifact(dir: &Path, labels: &RequiredLabels) -> Result<PathBuf> {
    let path = artifact_path(dir);
    let json = serde_json::to_string(labels).map_err(|e| Error::Json {
        path: path.clone(),
        source: e,
    })?;
    std::fs::write(&path, json).map_err(|e| Error::Io {
        path: path.clone(),
        source: e,
    })?;
    Ok(path)
}

#[cfg(test)]
#[path = "labels_tests.rs"]
mod tests;
