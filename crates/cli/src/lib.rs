// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Required-tag checks for infrastructure-as-code resources.
//!
//! The library evaluates resource configurations against an ordered set of
//! required tags and renders the host scanner's aggregated results into a
//! CI summary. Scanning, parsing and aggregation belong to the host.

pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod env;
pub mod error;
pub mod evaluate;
pub mod labels;
pub mod output;
pub mod report;
pub mod rule;

pub use cli::{Cli, Command, EvaluateArgs, GenerateArgs, OutputFormat, ReportArgs};
pub use error::{Error, ExitCode, Result};
pub use evaluate::{Evaluator, Failure, Finding, Mode, ResourceVerdict, Verdict};
pub use labels::RequiredLabels;
pub use rule::{RequiredLabelsRule, Rule};

#[cfg(test)]
pub mod test_utils;
