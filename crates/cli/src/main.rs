// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tagwarden CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use tagwarden::cli::{Cli, Command};
use tagwarden::env::tagwarden_log_var;
use tagwarden::error::ExitCode;

mod cmd_evaluate;
mod cmd_generate;
mod cmd_report;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env(tagwarden_log_var()).unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("tagwarden: {:#}", e);
            match e.downcast_ref::<tagwarden::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Generate(args)) => cmd_generate::run(args),
        Some(Command::Evaluate(args)) => cmd_evaluate::run(&cli, args),
        Some(Command::Report(args)) => cmd_report::run(&cli, args),
    }
}
