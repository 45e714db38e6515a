// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run orchestration: lock, load, discover, dispatch by mode

use crate::cancel::CancelFlag;
use crate::error::EngineError;
use crate::recorder::Recorder;
use crate::{accumulator, independent};
use bk_adapters::ProcessorAdapter;
use bk_core::{LogKind, Mode, RunConfig, RunEvent, RunSummary};
use bk_storage::{CheckpointPaths, CheckpointStore, FileCheckpointStore, RunLock};
use std::sync::Arc;
use tracing::Instrument;

/// Callback receiving progress events
pub type Observer = Arc<dyn Fn(&RunEvent) + Send + Sync>;

/// Drives one pipeline run against a checkpoint store
pub struct Runner<P> {
    config: RunConfig,
    processor: P,
    observer: Observer,
    cancel: CancelFlag,
}

impl<P: ProcessorAdapter> Runner<P> {
    pub fn new(config: RunConfig, processor: P) -> Self {
        Self {
            config,
            processor,
            observer: Arc::new(|_| {}),
            cancel: CancelFlag::new(),
        }
    }

    pub fn with_observer(mut self, observer: impl Fn(&RunEvent) + Send + Sync + 'static) -> Self {
        self.observer = Arc::new(observer);
        self
    }

    pub fn with_cancel(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Validate, take the run lock, open the file store and run
    pub async fn run(&self) -> Result<RunSummary, EngineError> {
        self.config.validate()?;

        let paths = CheckpointPaths::new(&self.config.checkpoint);
        let _lock = RunLock::acquire(&paths.lock)?;
        let store = FileCheckpointStore::open(paths.clone())?;

        self.run_with_store(store, &paths).await
    }

    /// Run against an already opened store
    pub async fn run_with_store<S: CheckpointStore>(
        &self,
        store: S,
        paths: &CheckpointPaths,
    ) -> Result<RunSummary, EngineError> {
        let span = tracing::info_span!("run", mode = self.config.mode.name());
        self.run_inner(store, paths).instrument(span).await
    }

    async fn run_inner<S: CheckpointStore>(
        &self,
        store: S,
        paths: &CheckpointPaths,
    ) -> Result<RunSummary, EngineError> {
        let mut recorder = Recorder::new(store);

        if self.config.retry_fails {
            recorder.store_mut().clear(LogKind::Failed)?;
        }

        let ctx = RunContext {
            config: &self.config,
            processor: &self.processor,
            observer: &self.observer,
            cancel: &self.cancel,
        };

        let summary = match &self.config.mode {
            Mode::Independent {
                output_dir,
                extension,
                max_size_bytes,
                jobs,
            } => {
                let settings = independent::Settings {
                    output_dir,
                    extension: extension.as_deref(),
                    max_size_bytes: *max_size_bytes,
                    jobs: *jobs,
                };
                independent::run(&ctx, &mut recorder, settings).await?
            }
            Mode::Accumulator {
                accumulator,
                batch_size,
            } => {
                let settings = accumulator::Settings {
                    accumulator,
                    batch_size: *batch_size,
                };
                accumulator::run(&ctx, &mut recorder, paths, settings).await?
            }
        };

        tracing::info!(
            outcome = ?summary.outcome,
            done = summary.done,
            failed = summary.failed,
            skipped = summary.skipped,
            remaining = summary.remaining,
            "run finished"
        );

        Ok(summary)
    }
}

/// Borrowed view of a runner shared with the mode loops
pub(crate) struct RunContext<'a, P> {
    pub config: &'a RunConfig,
    pub processor: &'a P,
    pub observer: &'a Observer,
    pub cancel: &'a CancelFlag,
}

impl<P> RunContext<'_, P> {
    pub fn emit(&self, event: RunEvent) {
        (self.observer)(&event);
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
