// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Accumulator mode: fold batches of items into one growing artifact

use crate::discovery::{discover, DiscoveryPolicy};
use crate::error::EngineError;
use crate::recorder::{Committed, Recorder};
use crate::runner::RunContext;
use bk_adapters::ProcessorAdapter;
use bk_core::{chunk, RunEvent, RunOutcome, RunSummary};
use bk_storage::{remove_if_exists, CheckpointPaths, CheckpointStore};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tracing::Instrument;

pub(crate) struct Settings<'a> {
    pub accumulator: &'a Path,
    pub batch_size: NonZeroUsize,
}

/// Merge pending items batch by batch into the accumulator.
///
/// Each batch is merged into a temporary file that replaces the live
/// accumulator only on success. The first failed batch halts the run.
pub(crate) async fn run<P, S>(
    ctx: &RunContext<'_, P>,
    recorder: &mut Recorder<S>,
    paths: &CheckpointPaths,
    settings: Settings<'_>,
) -> Result<RunSummary, EngineError>
where
    P: ProcessorAdapter,
    S: CheckpointStore,
{
    let live = settings.accumulator;
    let temp = temp_path(live);

    if let Some(recovery) = recorder.recover_intent(&paths.intent, live)? {
        ctx.emit(RunEvent::IntentRecovered {
            applied: recovery.applied,
            items: recovery.items,
        });
    }
    if remove_if_exists(&temp)? {
        tracing::warn!(path = %temp.display(), "removed stale accumulator temp file");
    }

    let policy = DiscoveryPolicy {
        retry_fails: ctx.config.retry_fails,
        max_size_bytes: None,
    };
    let discovery = discover(&ctx.config.source_dir, recorder.store_mut(), policy)?;
    let pending = discovery.items.len();
    let batches = chunk(discovery.items, settings.batch_size);
    let total = batches.len();
    ctx.emit(RunEvent::Discovered {
        pending,
        batches: total,
    });

    let mut summary = RunSummary::new(ctx.config.mode.name());

    for batch in &batches {
        if ctx.cancel.is_cancelled() {
            summary.outcome = RunOutcome::Interrupted;
            break;
        }

        ctx.emit(RunEvent::BatchStarted {
            index: batch.index,
            total,
            items: batch.len(),
        });

        let mut inputs: Vec<PathBuf> = Vec::with_capacity(batch.len() + 1);
        if live.is_file() {
            inputs.push(live.to_path_buf());
        }
        inputs.extend(batch.items.iter().map(|item| item.path.clone()));

        let span = tracing::info_span!("batch", index = batch.index, items = batch.len());
        let result = ctx.processor.merge(&inputs, &temp).instrument(span).await;

        if result.is_err() && ctx.cancel.is_cancelled() {
            remove_if_exists(&temp)?;
            tracing::info!(index = batch.index, "interrupted, batch left pending");
            summary.outcome = RunOutcome::Interrupted;
            break;
        }

        match recorder.commit_batch(batch, &temp, live, &paths.intent, result)? {
            Committed::Done => {
                summary.done += batch.len();
                ctx.emit(RunEvent::BatchCommitted {
                    index: batch.index,
                    items: batch.len(),
                });
            }
            Committed::Failed { reason } => {
                summary.failed += batch.len();
                ctx.emit(RunEvent::BatchFailed {
                    index: batch.index,
                    reason,
                });
                let remaining_batches = total - batch.index - 1;
                ctx.emit(RunEvent::Halted { remaining_batches });
                summary.outcome = RunOutcome::Halted;
                break;
            }
        }
    }

    if summary.outcome == RunOutcome::Interrupted {
        ctx.emit(RunEvent::Interrupted);
    }
    summary.remaining = pending - summary.done - summary.failed;
    summary.totals = recorder.store().state().totals();
    Ok(summary)
}

/// `<accumulator>.tmp`, next to the live file so the rename stays on one filesystem
pub(crate) fn temp_path(live: &Path) -> PathBuf {
    let mut name = live.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    live.with_file_name(name)
}

#[cfg(test)]
#[path = "accumulator_tests.rs"]
mod tests;
