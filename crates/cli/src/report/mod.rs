// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Result formatter.
//!
//! Reads the host scanner's aggregated JSON results, keeps the failures
//! raised by the required-tags rule family, and renders a CI summary.

mod github;
mod parse;
mod summary;

use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};
use serde::Serialize;

use crate::config::ReportConfig;
use crate::error::{Error, ExitCode, Result};

pub use github::{format_github_output, write_github_output};
pub use parse::parse_report;
pub use summary::{SUCCESS_BANNER, Summary, summarize};

/// One failed tag check pulled from a results file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViolationRecord {
    pub resource: String,
    pub file: String,
    pub start_line: u64,
    pub end_line: u64,
    pub check_id: String,
    pub message: String,
    /// Attributes the scanner evaluated, when it reports them.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl ViolationRecord {
    /// `file:start`, or `file:start-end` for multi-line ranges.
    pub fn location(&self) -> String {
        if self.end_line != self.start_line {
            format!("{}:{}-{}", self.file, self.start_line, self.end_line)
        } else {
            format!("{}:{}", self.file, self.start_line)
        }
    }
}

/// A results file that could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedReport {
    pub path: PathBuf,
    pub reason: String,
}

/// Everything gathered from one scan directory.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReportScan {
    pub violations: Vec<ViolationRecord>,
    /// Result files that parsed successfully.
    pub files_read: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedReport>,
}

/// Rendered outcome of a report run.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub scan: ReportScan,
    pub summary: Summary,
    pub exit_code: ExitCode,
}

/// Collect violations from every results file in `dir`.
///
/// Files are read in sorted order so repeated runs render identically.
/// Unreadable or malformed files are recorded in
/// [`ReportScan::skipped`] and do not stop the scan.
pub fn collect(dir: &Path, config: &ReportConfig) -> Result<ReportScan> {
    let matcher = compile_pattern(&config.pattern)?;
    let mut scan = ReportScan::default();

    for path in matching_files(dir, &matcher) {
        let parsed = std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|content| {
                parse_report(&content, &config.check_id).map_err(|e| e.to_string())
            });

        match parsed {
            Ok(mut violations) => {
                tracing::debug!(
                    path = %path.display(),
                    violations = violations.len(),
                    "read results file"
                );
                scan.files_read += 1;
                scan.violations.append(&mut violations);
            }
            Err(reason) => {
                tracing::warn!(path = %path.display(), %reason, "skipping results file");
                scan.skipped.push(SkippedReport { path, reason });
            }
        }
    }

    Ok(scan)
}

/// Collect and summarize `dir` in one step.
pub fn render(dir: &Path, soft_fail: bool, config: &ReportConfig) -> Result<Rendered> {
    let scan = collect(dir, config)?;
    let summary = summarize(&scan.violations);
    let exit_code = summary.exit_code(soft_fail);
    Ok(Rendered {
        scan,
        summary,
        exit_code,
    })
}

fn compile_pattern(pattern: &str) -> Result<GlobMatcher> {
    Glob::new(pattern)
        .map(|g| g.compile_matcher())
        .map_err(|e| Error::Config {
            message: format!("invalid report pattern `{}`: {}", pattern, e),
            path: None,
        })
}

/// Files directly inside `dir` whose name matches, sorted.
///
/// A missing or unreadable directory yields no files.
fn matching_files(dir: &Path, matcher: &GlobMatcher) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(dir = %dir.display(), %err, "cannot list results directory");
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| matcher.is_match(entry.file_name()))
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    files
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
