// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report command implementation.

use std::path::Path;

use anyhow::Context;

use tagwarden::cli::{Cli, OutputFormat, ReportArgs};
use tagwarden::discovery;
use tagwarden::error::ExitCode;
use tagwarden::output::json::{JsonFormatter, ReportOutput};
use tagwarden::report;

/// Run the report command.
pub fn run(cli: &Cli, args: &ReportArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = discovery::load_resolved(cli.config.as_deref(), &cwd)?;

    // An empty TERRAFORM_DIR means the working directory
    let dir = if args.dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        args.dir.as_path()
    };

    let rendered = report::render(dir, args.soft_fail, &config.report)?;

    for skipped in &rendered.scan.skipped {
        eprintln!(
            "tagwarden: warning: could not parse {}: {}",
            skipped.path.display(),
            skipped.reason
        );
    }

    match args.output {
        OutputFormat::Text => {
            println!("\n📊 Violations: {}", rendered.summary.violations_count);
            println!("{}", rendered.summary.text);
        }
        OutputFormat::Json => {
            let stdout = std::io::stdout();
            JsonFormatter::new(stdout.lock())
                .write(&ReportOutput::new(&rendered))
                .context("failed to write JSON output")?;
        }
    }

    if let Some(path) = args
        .github_output
        .as_deref()
        .filter(|p| !p.as_os_str().is_empty())
    {
        report::write_github_output(path, &rendered.summary)?;
    }

    Ok(rendered.exit_code)
}
