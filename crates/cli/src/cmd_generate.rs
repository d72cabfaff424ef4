// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Generate command implementation.

use tagwarden::cli::GenerateArgs;
use tagwarden::error::ExitCode;
use tagwarden::labels::{self, RequiredLabels};

/// Run the generate command.
pub fn run(args: &GenerateArgs) -> anyhow::Result<ExitCode> {
    let tags = labels::parse_label_input(&args.tags);

    if tags.is_empty() {
        println!("⚠️  No required tags specified");
        return Ok(ExitCode::Success);
    }

    println!("📋 Required tags: {}", tags.join(", "));

    let path = labels::write_artifact(&args.out, &RequiredLabels::new(tags))?;
    tracing::debug!(path = %path.display(), "wrote required tags artifact");

    println!("✅ Generated config at {}", path.display());
    Ok(ExitCode::Success)
}
