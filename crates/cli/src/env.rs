// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variable names read by tagwarden.
//!
//! The CI-facing names match what the composite action exports, so the
//! binary can be dropped into an existing workflow unchanged.

use std::path::PathBuf;

/// Environment variable names.
pub mod names {
    /// Required tags, comma- or newline-delimited.
    pub const REQUIRED_TAGS: &str = "REQUIRED_TAGS";
    /// Directory the action is installed in; home of `config.json`.
    pub const GITHUB_ACTION_PATH: &str = "GITHUB_ACTION_PATH";
    /// File that step outputs are appended to.
    pub const GITHUB_OUTPUT: &str = "GITHUB_OUTPUT";
    /// Directory holding the scanner's `results_*.json` files.
    pub const TERRAFORM_DIR: &str = "TERRAFORM_DIR";
    /// Report violations without failing the step.
    pub const SOFT_FAIL: &str = "SOFT_FAIL";
    /// Explicit config file location.
    pub const TAGWARDEN_CONFIG: &str = "TAGWARDEN_CONFIG";
    /// Tracing log filter.
    pub const TAGWARDEN_LOG: &str = "TAGWARDEN_LOG";
    /// Disables color output (any value).
    pub const NO_COLOR: &str = "NO_COLOR";
    /// Forces color output (any value).
    pub const COLOR: &str = "COLOR";
    /// Set by CI providers.
    pub const CI: &str = "CI";
}

/// Name of the tracing filter variable.
pub fn tagwarden_log_var() -> &'static str {
    names::TAGWARDEN_LOG
}

/// Directory the label artifact lives in: `$GITHUB_ACTION_PATH`, else `.`.
pub fn action_dir() -> PathBuf {
    std::env::var_os(names::GITHUB_ACTION_PATH)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
