// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Independent mode: one item in, one artifact out

use crate::discovery::{discover, DiscoveryPolicy};
use crate::error::EngineError;
use crate::recorder::{Committed, Recorder};
use crate::runner::RunContext;
use bk_adapters::{ProcessorAdapter, ProcessorError};
use bk_core::{RunEvent, RunOutcome, RunSummary, WorkItem};
use bk_storage::{remove_if_exists, CheckpointStore};
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tokio::task::JoinSet;
use tracing::Instrument;

pub(crate) struct Settings<'a> {
    pub output_dir: &'a Path,
    pub extension: Option<&'a str>,
    pub max_size_bytes: u64,
    pub jobs: NonZeroUsize,
}

type Finished = (WorkItem, PathBuf, Result<(), ProcessorError>);

/// Process every pending item, at most `jobs` at a time.
///
/// Invocations run on tokio tasks; their outcomes come back to this loop,
/// which is the only place that writes to the recorder.
pub(crate) async fn run<P, S>(
    ctx: &RunContext<'_, P>,
    recorder: &mut Recorder<S>,
    settings: Settings<'_>,
) -> Result<RunSummary, EngineError>
where
    P: ProcessorAdapter,
    S: CheckpointStore,
{
    let policy = DiscoveryPolicy {
        retry_fails: ctx.config.retry_fails,
        max_size_bytes: Some(settings.max_size_bytes),
    };
    let discovery = discover(&ctx.config.source_dir, recorder.store_mut(), policy)?;

    let mut summary = RunSummary::new(ctx.config.mode.name());
    summary.skipped = discovery.newly_skipped.len();
    for item in &discovery.newly_skipped {
        ctx.emit(RunEvent::Skipped {
            identity: item.identity.clone(),
            size: item.size,
        });
    }

    let total = discovery.items.len();
    ctx.emit(RunEvent::Discovered {
        pending: total,
        batches: total,
    });

    let mut queue = discovery.items.into_iter();
    let mut in_flight: JoinSet<Finished> = JoinSet::new();
    // Outputs of spawned tasks that have not reported back yet
    let mut uncommitted: HashMap<String, PathBuf> = HashMap::new();
    let mut worker_error = None;
    let mut interrupted = false;

    loop {
        while in_flight.len() < settings.jobs.get() && worker_error.is_none() {
            if ctx.cancel.is_cancelled() {
                interrupted = true;
                break;
            }
            let Some(item) = queue.next() else {
                break;
            };

            let output = output_path(settings.output_dir, &item.identity, settings.extension);
            ctx.emit(RunEvent::ItemStarted {
                identity: item.identity.clone(),
            });

            uncommitted.insert(item.identity.clone(), output.clone());
            let processor = ctx.processor.clone();
            let span = tracing::info_span!("item", identity = %item.identity);
            in_flight.spawn(
                async move {
                    let result = processor.generate(&item.path, &output).await;
                    (item, output, result)
                }
                .instrument(span),
            );
        }

        let Some(joined) = in_flight.join_next().await else {
            break;
        };
        let (item, output, result) = match joined {
            Ok(finished) => finished,
            Err(e) => {
                // Siblings still get committed; nothing new is started
                tracing::error!(error = %e, "worker task failed");
                if worker_error.is_none() {
                    worker_error = Some(EngineError::Worker(e.to_string()));
                }
                continue;
            }
        };
        uncommitted.remove(&item.identity);

        // A child killed by the operator's interrupt is not a real failure
        if result.is_err() && ctx.cancel.is_cancelled() {
            remove_if_exists(&output)?;
            interrupted = true;
            tracing::info!(identity = %item.identity, "interrupted, left pending");
            continue;
        }

        match recorder.commit_item(&item, &output, result)? {
            Committed::Done => {
                summary.done += 1;
                ctx.emit(RunEvent::ItemDone {
                    identity: item.identity,
                });
            }
            Committed::Failed { reason } => {
                summary.failed += 1;
                ctx.emit(RunEvent::ItemFailed {
                    identity: item.identity,
                    reason,
                });
            }
        }
    }

    if let Some(err) = worker_error {
        for output in uncommitted.values() {
            remove_if_exists(output)?;
        }
        return Err(err);
    }

    summary.remaining = total - summary.done - summary.failed;
    summary.totals = recorder.store().state().totals();
    summary.outcome = if interrupted {
        ctx.emit(RunEvent::Interrupted);
        RunOutcome::Interrupted
    } else if summary.failed > 0 {
        RunOutcome::CompletedWithFailures
    } else {
        RunOutcome::Completed
    };

    Ok(summary)
}

/// Where the artifact for `identity` is written
pub(crate) fn output_path(dir: &Path, identity: &str, extension: Option<&str>) -> PathBuf {
    match extension {
        Some(ext) => dir.join(format!("{}.{}", identity, ext.trim_start_matches('.'))),
        None => dir.join(identity),
    }
}

#[cfg(test)]
#[path = "independent_tests.rs"]
mod tests;
