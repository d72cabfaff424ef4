// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Required-tag evaluation for a single resource.
//!
//! One evaluator covers both scan modes:
//!
//! - [`Mode::Static`] reads declared configuration, where provider default
//!   tags are not merged yet. Tag keys only need to exist.
//! - [`Mode::Plan`] reads a resolved plan entry, where `tags_all` already
//!   holds the merged set. Tags must exist and hold a non-blank value.

pub mod normalize;

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::labels::RequiredLabels;

pub use normalize::{LabelField, is_blank, normalize};

/// Prefix of every failure detail.
pub const DETAIL_PREFIX: &str = "Missing tags: ";

/// Which kind of input the evaluator reads.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Declared resource configuration.
    #[default]
    Static,
    /// Resolved plan entry.
    Plan,
}

/// A single offending tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// Key not present at all.
    Missing(String),
    /// Key present with a blank value (plan mode only).
    Blank(String),
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::Missing(name) => write!(f, "{}", name),
            Finding::Blank(name) => write!(f, "{} (empty)", name),
        }
    }
}

/// Why a resource failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// One or more required tags missing or blank, in required order.
    Missing(Vec<Finding>),
    /// Effective tag data is not a mapping (static mode).
    Malformed,
}

impl Failure {
    /// Human-readable detail. `Malformed` carries none.
    pub fn detail(&self) -> Option<String> {
        match self {
            Failure::Missing(findings) => {
                let names: Vec<String> = findings.iter().map(ToString::to_string).collect();
                Some(format!("{}{}", DETAIL_PREFIX, names.join(", ")))
            }
            Failure::Malformed => None,
        }
    }
}

/// Outcome of evaluating one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    Failed(Failure),
    /// Resource exposes no tag attribute; not a tagging failure.
    Unknown,
}

impl Verdict {
    pub fn is_failed(&self) -> bool {
        matches!(self, Verdict::Failed(_))
    }

    pub fn detail(&self) -> Option<String> {
        match self {
            Verdict::Failed(failure) => failure.detail(),
            Verdict::Passed | Verdict::Unknown => None,
        }
    }

    /// Result name as the host engine spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Passed => "PASSED",
            Verdict::Failed(_) => "FAILED",
            Verdict::Unknown => "UNKNOWN",
        }
    }
}

/// Verdict for one addressed resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceVerdict {
    pub address: String,
    pub verdict: Verdict,
}

/// Checks resources against an injected required-tag set.
#[derive(Debug, Clone)]
pub struct Evaluator {
    labels: RequiredLabels,
    mode: Mode,
}

impl Evaluator {
    pub fn new(labels: RequiredLabels, mode: Mode) -> Self {
        Self { labels, mode }
    }

    pub fn labels(&self) -> &RequiredLabels {
        &self.labels
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Evaluate one resource configuration.
    pub fn evaluate(&self, conf: &Value) -> Verdict {
        let (tags, tags_all) = match conf {
            Value::Object(attrs) => (normalize(attrs.get("tags")), normalize(attrs.get("tags_all"))),
            _ => (LabelField::Absent, LabelField::Absent),
        };

        match self.mode {
            Mode::Static => self.evaluate_static(tags, tags_all),
            Mode::Plan => self.evaluate_plan(tags, tags_all),
        }
    }

    /// Evaluate every entry of an address → configuration mapping, in
    /// address order.
    pub fn evaluate_all(&self, resources: &Map<String, Value>) -> Vec<ResourceVerdict> {
        resources
            .iter()
            .map(|(address, conf)| {
                let verdict = self.evaluate(conf);
                tracing::debug!(address = %address, result = verdict.as_str(), "evaluated resource");
                ResourceVerdict {
                    address: address.clone(),
                    verdict,
                }
            })
            .collect()
    }

    fn evaluate_static(&self, tags: LabelField<'_>, tags_all: LabelField<'_>) -> Verdict {
        if !tags.is_populated() && !tags_all.is_populated() {
            return Verdict::Unknown;
        }

        // tags_all includes provider default_tags
        let effective = if tags_all.is_populated() {
            tags_all
        } else {
            tags
        };
        let Some(map) = effective.as_map() else {
            return Verdict::Failed(Failure::Malformed);
        };

        let findings = self
            .labels
            .iter()
            .filter(|name| !map.contains_key(*name))
            .map(|name| Finding::Missing(name.to_string()))
            .collect();
        verdict_from(findings)
    }

    fn evaluate_plan(&self, tags: LabelField<'_>, tags_all: LabelField<'_>) -> Verdict {
        if tags.is_absent() && tags_all.is_absent() {
            return Verdict::Unknown;
        }

        let empty = Map::new();
        let map = tags_all.as_map().or_else(|| tags.as_map()).unwrap_or(&empty);

        let findings = self
            .labels
            .iter()
            .filter_map(|name| match map.get(name) {
                None => Some(Finding::Missing(name.to_string())),
                Some(value) if is_blank(value) => Some(Finding::Blank(name.to_string())),
                Some(_) => None,
            })
            .collect();
        verdict_from(findings)
    }
}

fn verdict_from(findings: Vec<Finding>) -> Verdict {
    if findings.is_empty() {
        Verdict::Passed
    } else {
        Verdict::Failed(Failure::Missing(findings))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
