// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Evaluate command implementation.

use anyhow::Context;
use serde_json::Value;

use tagwarden::cli::{Cli, EvaluateArgs, OutputFormat};
use tagwarden::color::resolve_color;
use tagwarden::discovery;
use tagwarden::error::{Error, ExitCode};
use tagwarden::evaluate::Evaluator;
use tagwarden::labels::{self, RequiredLabels};
use tagwarden::output::json::{EvaluationOutput, JsonFormatter};
use tagwarden::output::text::TextFormatter;

/// Run the evaluate command.
pub fn run(cli: &Cli, args: &EvaluateArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = discovery::load_resolved(cli.config.as_deref(), &cwd)?;
    let mode = args.mode();

    let labels_path = labels::resolve_path(args.labels.as_deref(), config.labels.file.as_deref());
    let evaluator = Evaluator::new(
        RequiredLabels::load(&labels_path, config.labels.fallback_for(mode)),
        mode,
    );

    let content = std::fs::read_to_string(&args.file).map_err(|e| Error::Io {
        path: args.file.clone(),
        source: e,
    })?;
    let document: Value = serde_json::from_str(&content).map_err(|e| Error::Json {
        path: args.file.clone(),
        source: e,
    })?;
    let resources = document.as_object().ok_or_else(|| {
        Error::Argument(format!(
            "{}: expected an object mapping resource address to configuration",
            args.file.display()
        ))
    })?;

    let results = evaluator.evaluate_all(resources);
    let any_failed = results.iter().any(|r| r.verdict.is_failed());

    match args.output {
        OutputFormat::Text => {
            let mut formatter = TextFormatter::stdout(resolve_color(args.color, args.no_color));
            for result in &results {
                formatter.write_resource(result)?;
            }
            formatter.write_summary()?;
        }
        OutputFormat::Json => {
            let stdout = std::io::stdout();
            JsonFormatter::new(stdout.lock())
                .write(&EvaluationOutput::new(&evaluator, &results))
                .context("failed to write JSON output")?;
        }
    }

    Ok(if any_failed {
        ExitCode::CheckFailed
    } else {
        ExitCode::Success
    })
}
