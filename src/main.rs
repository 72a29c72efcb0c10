//! gemspec - gem specification display CLI tool
//!
//! Resolves a gem to its specification metadata, from the locally
//! installed gems and/or rubygems.org, and prints the result as YAML,
//! TOML or an exact binary encoding.

use clap::Parser;
use colored::Colorize;
use gemspec::cli::CliArgs;
use gemspec::error::AppError;
use gemspec::pipeline::Pipeline;
use std::io::{self, Write};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Run the main logic and handle errors
    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let pipeline = Pipeline::new(args);

    let mut stdout = io::stdout().lock();
    match pipeline.run(&mut stdout).await {
        Ok(()) => {
            stdout.flush()?;
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            report(&error);
            Ok(exit_code(&error))
        }
    }
}

/// Print an error the way the gem tooling does
fn report(error: &AppError) {
    eprintln!("{}  {}", "ERROR:".red().bold(), error);
}

/// Usage errors get a distinct status; everything else, including a
/// no-match result, exits with 1
fn exit_code(error: &AppError) -> ExitCode {
    match error {
        AppError::Usage(_) => ExitCode::from(2),
        _ => ExitCode::FAILURE,
    }
}
