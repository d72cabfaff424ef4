// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rule registration surface for the host scanning engine.
//!
//! The host owns discovery, parsing and aggregation. It only needs to know
//! a rule's identity and to call [`Rule::scan_resource_conf`] once per
//! resource.

use serde_json::Value;

use crate::evaluate::{Evaluator, Mode, Verdict};
use crate::labels::RequiredLabels;

/// Stable identifier reported in the host's results.
pub const RULE_ID: &str = "CKV_AWS_TAG_001";

/// Substring shared by every rule in this family; used to pick our
/// findings out of an aggregated report.
pub const RULE_FAMILY: &str = "CKV_AWS_TAG";

/// Display name reported in the host's results.
pub const RULE_NAME: &str = "Ensure resource has all required tags";

/// Check categories understood by the host engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    GeneralSecurity,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::GeneralSecurity => "GENERAL_SECURITY",
        }
    }
}

/// A resource rule the host engine can run.
///
/// Object-safe so hosts can hold `Box<dyn Rule>`.
pub trait Rule {
    /// Human-readable rule name.
    fn name(&self) -> &'static str;

    /// Stable check identifier.
    fn id(&self) -> &'static str;

    fn categories(&self) -> &'static [Category];

    /// Resource type patterns; `*` matches every type.
    fn supported_resources(&self) -> &'static [&'static str];

    /// Evaluate one resource's configuration.
    fn scan_resource_conf(&self, conf: &Value) -> Verdict;

    /// Whether the rule applies to `resource_type`.
    fn supports(&self, resource_type: &str) -> bool {
        self.supported_resources()
            .iter()
            .any(|pattern| *pattern == "*" || *pattern == resource_type)
    }
}

/// The required-tags rule.
#[derive(Debug, Clone)]
pub struct RequiredLabelsRule {
    evaluator: Evaluator,
}

impl RequiredLabelsRule {
    pub fn new(labels: RequiredLabels, mode: Mode) -> Self {
        Self {
            evaluator: Evaluator::new(labels, mode),
        }
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }
}

impl Rule for RequiredLabelsRule {
    fn name(&self) -> &'static str {
        RULE_NAME
    }

    fn id(&self) -> &'static str {
        RULE_ID
    }

    fn categories(&self) -> &'static [Category] {
        &[Category::GeneralSecurity]
    }

    fn supported_resources(&self) -> &'static [&'static str] {
        &["*"]
    }

    fn scan_resource_conf(&self, conf: &Value) -> Verdict {
        self.evaluator.evaluate(conf)
    }
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
