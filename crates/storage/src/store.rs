// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Checkpoint store: the source of truth for resumability

use crate::error::StoreError;
use crate::log::CheckpointLog;
use crate::paths::CheckpointPaths;
use crate::state::CheckpointState;
use bk_core::LogKind;

/// Durable record of which items are done, failed or skipped.
///
/// Loaded once at run start and passed to discovery and the recorder.
/// Implementations must make `record` durable before returning.
pub trait CheckpointStore: Send {
    /// Current membership, including entries recorded during this run
    fn state(&self) -> &CheckpointState;

    /// Durably record one identity in the given log
    fn record(&mut self, kind: LogKind, identity: &str) -> Result<(), StoreError>;

    /// Truncate one log
    fn clear(&mut self, kind: LogKind) -> Result<(), StoreError>;

    /// Record an identity only if the log does not already hold it.
    ///
    /// Returns true when a new entry was written.
    fn record_if_absent(&mut self, kind: LogKind, identity: &str) -> Result<bool, StoreError> {
        if self.state().contains(kind, identity) {
            return Ok(false);
        }
        self.record(kind, identity)?;
        Ok(true)
    }
}

/// Checkpoint store backed by three append-only flat files
pub struct FileCheckpointStore {
    paths: CheckpointPaths,
    state: CheckpointState,
    done: CheckpointLog,
    failed: CheckpointLog,
    skipped: CheckpointLog,
}

impl FileCheckpointStore {
    /// Open the logs for appending and load their contents
    pub fn open(paths: CheckpointPaths) -> Result<Self, StoreError> {
        let state = Self::load(&paths)?;

        let done = CheckpointLog::open(&paths.done)?;
        let failed = CheckpointLog::open(&paths.failed)?;
        let skipped = CheckpointLog::open(&paths.skipped)?;

        tracing::debug!(
            checkpoint = %paths.done.display(),
            done = state.done.len(),
            failed = state.failed.len(),
            skipped = state.skipped.len(),
            "checkpoint loaded"
        );

        Ok(Self {
            paths,
            state,
            done,
            failed,
            skipped,
        })
    }

    /// Read the logs without opening them for writing
    pub fn load(paths: &CheckpointPaths) -> Result<CheckpointState, StoreError> {
        Ok(CheckpointState {
            done: CheckpointLog::load(&paths.done)?,
            failed: CheckpointLog::load(&paths.failed)?,
            skipped: CheckpointLog::load(&paths.skipped)?,
        })
    }

    pub fn paths(&self) -> &CheckpointPaths {
        &self.paths
    }

    fn log_mut(&mut self, kind: LogKind) -> &mut CheckpointLog {
        match kind {
            LogKind::Done => &mut self.done,
            LogKind::Failed => &mut self.failed,
            LogKind::Skipped => &mut self.skipped,
        }
    }
}

impl CheckpointStore for FileCheckpointStore {
    fn state(&self) -> &CheckpointState {
        &self.state
    }

    fn record(&mut self, kind: LogKind, identity: &str) -> Result<(), StoreError> {
        self.log_mut(kind).append(identity)?;
        self.state.apply(kind, identity);
        tracing::trace!(%kind, identity, "recorded");
        Ok(())
    }

    fn clear(&mut self, kind: LogKind) -> Result<(), StoreError> {
        self.log_mut(kind).clear()?;
        self.state.clear(kind);
        tracing::info!(%kind, "log cleared");
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
