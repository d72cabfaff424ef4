// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parsing of the scanner's aggregated results JSON.
//!
//! A results file holds either one report object or, when several scan
//! frameworks ran, an array of them. Only `results.failed_checks` is read.

use serde::Deserialize;
use serde_json::Value;

use super::ViolationRecord;

const UNKNOWN: &str = "Unknown";
const DEFAULT_MESSAGE: &str = "Missing required tags";

#[derive(Debug, Default, Deserialize)]
struct RawReport {
    #[serde(default)]
    results: Option<RawResults>,
}

/// Check entries stay untyped until their `check_id` matches, so an odd
/// shape in an unrelated check cannot reject the whole file.
#[derive(Debug, Default, Deserialize)]
struct RawResults {
    #[serde(default)]
    failed_checks: Option<Vec<Value>>,
}

pub fn parse_report(content: &str, check_id: &str) -> serde_json::Result<Vec<ViolationRecord>> {
    let reports: Vec<RawReport> = match serde_json::from_str(content)? {
        Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value::<RawReport>)
            .collect::<serde_json::Result<Vec<_>>>()?,
        single => vec![serde_json::from_value(single)?],
    };

    Ok(reports
        .into_iter()
        .filter_map(|r| r.results)
        .flat_map(|r| r.failed_checks.unwrap_or_default())
        .filter(|c| text(c, "check_id").is_some_and(|id| id.contains(check_id)))
        .map(|c| violation(&c))
        .collect())
}

/// String field of a check entry; anything else counts as missing.
fn text<'a>(check: &'a Value, key: &str) -> Option<&'a str> {
    check.get(key).and_then(Value::as_str)
}

fn text_or(check: &Value, key: &str, default: &str) -> String {
    text(check, key).unwrap_or(default).to_string()
}

fn violation(check: &Value) -> ViolationRecord {
    let range = check.get("file_line_range").and_then(Value::as_array);
    let line = |i: usize| range.and_then(|r| r.get(i)).and_then(Value::as_u64);
    let start_line = line(0).unwrap_or(0);
    let end_line = line(1).unwrap_or(start_line);

    let details = check
        .pointer("/check_result/evaluated_keys")
        .and_then(Value::as_array)
        .map(|keys| {
            keys.iter()
                .map(|key| match key {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect()
        })
        .unwrap_or_default();

    ViolationRecord {
        resource: text_or(check, "resource", UNKNOWN),
        file: text_or(check, "file_path", UNKNOWN),
        start_line,
        end_line,
        check_id: text_or(check, "check_id", UNKNOWN),
        message: text_or(check, "check_name", DEFAULT_MESSAGE),
        details,
    }
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
