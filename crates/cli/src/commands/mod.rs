// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod generate;
pub mod merge;
pub mod status;

use crate::output::{self, OutputFormat};
use anyhow::Result;
use bk_adapters::{CommandProcessor, TracedProcessor};
use bk_core::{RunConfig, RunEvent, RunSummary};
use bk_engine::{CancelFlag, Runner};
use clap::Args;
use std::path::PathBuf;
use std::time::Duration;

/// Options shared by `generate` and `merge`
#[derive(Args)]
pub struct RunArgs {
    /// Directory holding the input files
    #[arg(long)]
    pub source: PathBuf,

    /// Done log path; `.failed`, `.skipped`, `.lock` and `.intent` files sit next to it
    #[arg(long)]
    pub checkpoint: PathBuf,

    /// Give items recorded as failed another attempt
    #[arg(long)]
    pub retry_fails: bool,

    /// Program invoked as `<processor> [args...] <inputs...> <output>`
    #[arg(long)]
    pub processor: PathBuf,

    /// Argument passed to the processor ahead of the paths (repeatable)
    #[arg(long = "processor-arg", allow_hyphen_values = true)]
    pub processor_args: Vec<String>,

    /// Kill an invocation that runs longer than this (e.g. 30s, 5m)
    #[arg(long, value_parser = parse_timeout)]
    pub timeout: Option<Duration>,
}

impl RunArgs {
    fn processor(&self) -> TracedProcessor<CommandProcessor> {
        TracedProcessor::new(
            CommandProcessor::new(self.processor.clone())
                .with_args(self.processor_args.clone())
                .with_timeout(self.timeout),
        )
    }
}

fn parse_timeout(s: &str) -> Result<Duration, String> {
    bk_core::parse_duration(s).map_err(|e| e.to_string())
}

/// Run the pipeline, printing progress as it goes and the summary at the end
async fn execute(
    config: RunConfig,
    args: &RunArgs,
    format: OutputFormat,
    cancel: CancelFlag,
) -> Result<RunSummary> {
    let runner = Runner::new(config, args.processor())
        .with_cancel(cancel)
        .with_observer(move |event: &RunEvent| {
            // JSON output is the summary alone so it stays parseable
            if let OutputFormat::Text = format {
                output::print_event(event);
            }
        });

    let summary = runner.run().await?;
    output::print(&summary, format);
    Ok(summary)
}
