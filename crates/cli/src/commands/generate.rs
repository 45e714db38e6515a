// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `bk generate` - one artifact per input file

use super::{execute, RunArgs};
use crate::output::OutputFormat;
use anyhow::Result;
use bk_core::{Mode, RunConfig, RunSummary, DEFAULT_MAX_SIZE_KB};
use bk_engine::CancelFlag;
use clap::Args;
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub run: RunArgs,

    /// Directory receiving the artifacts
    #[arg(long)]
    pub output_dir: PathBuf,

    /// Inputs larger than this many KB are recorded as skipped
    #[arg(long, default_value_t = DEFAULT_MAX_SIZE_KB)]
    pub max_size_kb: u64,

    /// Append this extension to each artifact name
    #[arg(long)]
    pub extension: Option<String>,

    /// Maximum concurrent processor invocations
    #[arg(long, default_value = "1")]
    pub jobs: NonZeroUsize,
}

impl GenerateArgs {
    pub fn config(&self) -> RunConfig {
        RunConfig {
            source_dir: self.run.source.clone(),
            checkpoint: self.run.checkpoint.clone(),
            retry_fails: self.run.retry_fails,
            timeout: self.run.timeout,
            mode: Mode::Independent {
                output_dir: self.output_dir.clone(),
                extension: self.extension.clone(),
                max_size_bytes: self.max_size_kb.saturating_mul(1024),
                jobs: self.jobs,
            },
        }
    }
}

pub async fn handle(args: GenerateArgs, format: OutputFormat, cancel: CancelFlag) -> Result<RunSummary> {
    execute(args.config(), &args.run, format, cancel).await
}
