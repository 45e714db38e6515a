// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `bk status` - read-only view of a checkpoint store

use crate::output::{self, OutputFormat};
use anyhow::{Context, Result};
use bk_storage::{CheckpointPaths, CommitIntent, FileCheckpointStore};
use clap::Args;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Args)]
pub struct StatusArgs {
    /// Done log path of the store to inspect
    #[arg(long)]
    pub checkpoint: PathBuf,
}

#[derive(Serialize)]
struct StatusReport {
    checkpoint: String,
    done: usize,
    failed: usize,
    skipped: usize,
    /// Items of an accumulator commit a crashed run left unresolved
    pending_commit: Option<usize>,
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Checkpoint: {}", self.checkpoint)?;
        writeln!(f, "  Done:    {}", self.done)?;
        writeln!(f, "  Failed:  {}", self.failed)?;
        write!(f, "  Skipped: {}", self.skipped)?;
        if let Some(items) = self.pending_commit {
            write!(
                f,
                "\n  Pending commit of {} items (resolved on the next merge run)",
                items
            )?;
        }
        Ok(())
    }
}

pub fn handle(args: StatusArgs, format: OutputFormat) -> Result<()> {
    let paths = CheckpointPaths::new(&args.checkpoint);
    let state = FileCheckpointStore::load(&paths)
        .with_context(|| format!("cannot read checkpoint {}", args.checkpoint.display()))?;
    let intent = CommitIntent::read(&paths.intent)?;

    let totals = state.totals();
    let report = StatusReport {
        checkpoint: args.checkpoint.display().to_string(),
        done: totals.done,
        failed: totals.failed,
        skipped: totals.skipped,
        pending_commit: intent.map(|i| i.identities.len()),
    };

    output::print(&report, format);
    Ok(())
}
