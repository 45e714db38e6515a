// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Result recorder: turns invocation outcomes into committed state
//!
//! Success in independent mode appends a done record. Success in accumulator
//! mode swaps the accumulator in one rename, then appends the batch. Failure
//! in either mode deletes the output and appends failed records.

use crate::error::EngineError;
use bk_adapters::ProcessorError;
use bk_core::{Batch, LogKind, WorkItem};
use bk_storage::{
    file_digest, remove_if_exists, replace_atomically, CheckpointStore, CommitIntent, StoreError,
};
use std::path::Path;

/// Committed result of one item or batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Committed {
    Done,
    Failed { reason: String },
}

/// Result of resolving a leftover commit intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntentRecovery {
    /// The accumulator swap had happened; missing done records were added
    pub applied: bool,
    pub items: usize,
}

/// Owns the checkpoint store for the duration of a run.
///
/// All writes go through here, so the logs have a single writer.
pub struct Recorder<S> {
    store: S,
}

impl<S: CheckpointStore> Recorder<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Commit an independent-mode invocation outcome
    pub fn commit_item(
        &mut self,
        item: &WorkItem,
        output: &Path,
        result: Result<(), ProcessorError>,
    ) -> Result<Committed, EngineError> {
        match result {
            Ok(()) => {
                self.store.record_if_absent(LogKind::Done, &item.identity)?;
                Ok(Committed::Done)
            }
            Err(e) => {
                remove_if_exists(output)?;
                self.store
                    .record_if_absent(LogKind::Failed, &item.identity)?;
                Ok(Committed::Failed {
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Commit an accumulator-mode invocation outcome.
    ///
    /// On success the intent is written before the rename and cleared after
    /// every identity is recorded, so a crash anywhere in between is
    /// recoverable with [`Recorder::recover_intent`].
    pub fn commit_batch(
        &mut self,
        batch: &Batch,
        temp: &Path,
        live: &Path,
        intent_path: &Path,
        result: Result<(), ProcessorError>,
    ) -> Result<Committed, EngineError> {
        if let Err(e) = result {
            remove_if_exists(temp)?;
            for item in &batch.items {
                self.store
                    .record_if_absent(LogKind::Failed, &item.identity)?;
            }
            return Ok(Committed::Failed {
                reason: e.to_string(),
            });
        }

        let digest = file_digest(temp)?.ok_or_else(|| StoreError::Io {
            path: temp.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "merge output vanished"),
        })?;
        let intent = CommitIntent {
            digest,
            identities: batch.items.iter().map(|i| i.identity.clone()).collect(),
        };

        intent.write(intent_path)?;
        replace_atomically(temp, live)?;
        self.record_done(&intent.identities)?;
        CommitIntent::clear(intent_path)?;

        Ok(Committed::Done)
    }

    /// Resolve an intent left by a run that died mid-commit.
    ///
    /// If the live accumulator matches the intent digest the batch is
    /// recorded done; otherwise the old accumulator is still live and the
    /// intent is dropped. A merge that left the accumulator byte-identical
    /// matches whether or not the rename ran, and either way the live file
    /// already holds that batch's merged result.
    pub fn recover_intent(
        &mut self,
        intent_path: &Path,
        live: &Path,
    ) -> Result<Option<IntentRecovery>, EngineError> {
        let Some(intent) = CommitIntent::read(intent_path)? else {
            return Ok(None);
        };

        let applied = file_digest(live)?.as_deref() == Some(intent.digest.as_str());
        if applied {
            self.record_done(&intent.identities)?;
        }
        CommitIntent::clear(intent_path)?;

        tracing::warn!(
            applied,
            items = intent.identities.len(),
            "resolved interrupted accumulator commit"
        );

        Ok(Some(IntentRecovery {
            applied,
            items: intent.identities.len(),
        }))
    }

    fn record_done(&mut self, identities: &[String]) -> Result<(), EngineError> {
        for identity in identities {
            self.store.record_if_absent(LogKind::Done, identity)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "recorder_tests.rs"]
mod tests;
