// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;

use chrono::Utc;
use serde::Serialize;

use crate::evaluate::{Evaluator, Mode, ResourceVerdict};
use crate::report::{Rendered, ReportScan};

/// `tagwarden evaluate -o json` document.
#[derive(Debug, Serialize)]
pub struct EvaluationOutput<'a> {
    pub timestamp: String,
    pub mode: Mode,
    pub passed: bool,
    pub required_tags: &'a [String],
    pub resources: Vec<ResourceOutput<'a>>,
}

/// One resource in [`EvaluationOutput`].
#[derive(Debug, Serialize)]
pub struct ResourceOutput<'a> {
    pub address: &'a str,
    pub result: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl<'a> EvaluationOutput<'a> {
    pub fn new(evaluator: &'a Evaluator, results: &'a [ResourceVerdict]) -> Self {
        Self {
            timestamp: timestamp(),
            mode: evaluator.mode(),
            passed: !results.iter().any(|r| r.verdict.is_failed()),
            required_tags: evaluator.labels().names(),
            resources: results
                .iter()
                .map(|r| ResourceOutput {
                    address: &r.address,
                    result: r.verdict.as_str(),
                    details: r.verdict.detail(),
                })
                .collect(),
        }
    }
}

/// `tagwarden report -o json` document.
#[derive(Debug, Serialize)]
pub struct ReportOutput<'a> {
    pub timestamp: String,
    pub passed: bool,
    pub violations_count: usize,
    pub summary: &'a str,
    #[serde(flatten)]
    pub scan: &'a ReportScan,
}

impl<'a> ReportOutput<'a> {
    pub fn new(rendered: &'a Rendered) -> Self {
        Self {
            timestamp: timestamp(),
            passed: rendered.summary.passed,
            violations_count: rendered.summary.violations_count,
            summary: &rendered.summary.text,
            scan: &rendered.scan,
        }
    }
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write one pretty-printed document.
    pub fn write<T: Serialize>(&mut self, value: &T) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

/// Current time, RFC 3339 with second precision.
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
