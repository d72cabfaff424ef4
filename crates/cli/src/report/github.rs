// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Step outputs in the `$GITHUB_OUTPUT` key/value format.

use std::io::Write;
use std::path::Path;

use super::Summary;
use crate::error::{Error, Result};

/// Heredoc delimiter for the multi-line summary value.
const DELIMITER: &str = "EOF";

/// Output lines for `summary`.
pub fn format_github_output(summary: &Summary) -> String {
    format!(
        "violations_count={}\npassed={}\nviolations_summary<<{delim}\n{}\n{delim}\n",
        summary.violations_count,
        summary.passed,
        summary.text,
        delim = DELIMITER,
    )
}

/// Append the output lines to the file at `path`, creating it if needed.
pub fn write_github_output(path: &Path, summary: &Summary) -> Result<()> {
    let io_err = |e: std::io::Error| Error::Io {
        path: path.to_path_buf(),
        source: e,
    };
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_err)?;
    file.write_all(format_github_output(summary).as_bytes())
        .map_err(io_err)
}

#[cfg(test)]
#[path = "github_tests.rs"]
mod tests;
