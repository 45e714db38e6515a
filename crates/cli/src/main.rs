// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! bk - resumable batch processing with durable checkpoints

mod commands;
mod error;
mod logging;
mod output;

use anyhow::Result;
use bk_core::{RunOutcome, RunSummary};
use bk_engine::CancelFlag;
use clap::{ArgAction, Parser, Subcommand};
use commands::{generate, merge, status};
use error::BkError;
use output::OutputFormat;
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit code after Ctrl-C
const EXIT_INTERRUPTED: u8 = 130;

#[derive(Parser)]
#[command(
    name = "bk",
    version,
    about = "batchkeep - resumable batch processing with durable checkpoints"
)]
struct Cli {
    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Summary output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Produce one artifact per input file
    Generate(generate::GenerateArgs),
    /// Fold input files into a single accumulator, batch by batch
    Merge(merge::MergeArgs),
    /// Show the counts recorded in a checkpoint store
    Status(status::StatusArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let _guard = match logging::setup(cli.verbose, cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("error: cannot set up logging: {:#}", e);
            return ExitCode::from(error::EXIT_FAILURE);
        }
    };

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("command failed: {:#}", e);
            let report = BkError::explain(&e);
            eprint!("{}", report);
            ExitCode::from(report.exit_code)
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let format = cli.format;
    match cli.command {
        Commands::Generate(args) => {
            let summary = generate::handle(args, format, interrupt_flag()?).await?;
            Ok(outcome_code(&summary))
        }
        Commands::Merge(args) => {
            let summary = merge::handle(args, format, interrupt_flag()?).await?;
            Ok(outcome_code(&summary))
        }
        Commands::Status(args) => {
            status::handle(args, format)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// First Ctrl-C stops the run after in-flight work; a second one exits at once
fn interrupt_flag() -> Result<CancelFlag> {
    let cancel = CancelFlag::new();
    let flag = cancel.clone();

    ctrlc::set_handler(move || {
        if flag.is_cancelled() {
            std::process::exit(i32::from(EXIT_INTERRUPTED));
        }
        eprintln!("\nInterrupted, finishing in-flight work (Ctrl-C again to abort)");
        flag.cancel();
    })?;

    Ok(cancel)
}

fn outcome_code(summary: &RunSummary) -> ExitCode {
    match summary.outcome {
        RunOutcome::Completed => ExitCode::SUCCESS,
        RunOutcome::CompletedWithFailures | RunOutcome::Halted => {
            ExitCode::from(error::EXIT_FAILURE)
        }
        RunOutcome::Interrupted => ExitCode::from(EXIT_INTERRUPTED),
    }
}
