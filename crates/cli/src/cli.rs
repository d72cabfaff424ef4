// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::evaluate::Mode;

/// Required-tag policy checks for infrastructure-as-code scans
#[derive(Parser)]
#[command(name = "tagwarden")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "TAGWARDEN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write the required-tags artifact (config.json)
    Generate(GenerateArgs),
    /// Evaluate resource configurations against the required tags
    Evaluate(EvaluateArgs),
    /// Summarize tag violations from scanner result files
    Report(ReportArgs),
}

#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Required tags, comma- or newline-separated
    #[arg(long, env = "REQUIRED_TAGS", default_value = "", hide_default_value = true)]
    pub tags: String,

    /// Directory to write config.json into
    #[arg(long, value_name = "DIR", env = "GITHUB_ACTION_PATH", default_value = ".")]
    pub out: PathBuf,
}

#[derive(clap::Args)]
pub struct EvaluateArgs {
    /// JSON object mapping resource address to resource configuration
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Treat input as resolved plan entries (also flags blank tag values)
    #[arg(long)]
    pub plan: bool,

    /// Required-tags artifact (default: $GITHUB_ACTION_PATH/config.json)
    #[arg(long, value_name = "FILE")]
    pub labels: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

impl EvaluateArgs {
    pub fn mode(&self) -> Mode {
        if self.plan { Mode::Plan } else { Mode::Static }
    }
}

#[derive(clap::Args)]
pub struct ReportArgs {
    /// Directory containing results_*.json files
    #[arg(value_name = "DIR", env = "TERRAFORM_DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Report violations without failing (SOFT_FAIL=true)
    #[arg(long, env = "SOFT_FAIL", value_parser = parse_soft_fail)]
    pub soft_fail: bool,

    /// Append step outputs to this file
    #[arg(long, value_name = "FILE", env = "GITHUB_OUTPUT")]
    pub github_output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

/// Soft-fail is on only for `true`, in any case; every other value,
/// including `yes` and `1`, leaves the step failing.
pub fn parse_soft_fail(value: &str) -> Result<bool, std::convert::Infallible> {
    Ok(value.trim().eq_ignore_ascii_case("true"))
}

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
