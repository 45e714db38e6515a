// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `bk merge` - fold inputs into a single accumulator, batch by batch

use super::{execute, RunArgs};
use crate::output::OutputFormat;
use anyhow::Result;
use bk_core::{Mode, RunConfig, RunSummary};
use bk_engine::CancelFlag;
use clap::Args;
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Args)]
pub struct MergeArgs {
    #[command(flatten)]
    pub run: RunArgs,

    /// The accumulating artifact; replaced atomically after each batch
    #[arg(long)]
    pub accumulator: PathBuf,

    /// Items per processor invocation
    #[arg(long)]
    pub batch_size: NonZeroUsize,
}

impl MergeArgs {
    pub fn config(&self) -> RunConfig {
        RunConfig {
            source_dir: self.run.source.clone(),
            checkpoint: self.run.checkpoint.clone(),
            retry_fails: self.run.retry_fails,
            timeout: self.run.timeout,
            mode: Mode::Accumulator {
                accumulator: self.accumulator.clone(),
                batch_size: self.batch_size,
            },
        }
    }
}

pub async fn handle(args: MergeArgs, format: OutputFormat, cancel: CancelFlag) -> Result<RunSummary> {
    execute(args.config(), &args.run, format, cancel).await
}
