// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Materialized checkpoint state

use bk_core::{ItemState, LogKind, StoreTotals};
use std::collections::HashSet;

/// In-memory membership sets built from the checkpoint logs
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CheckpointState {
    pub done: HashSet<String>,
    pub failed: HashSet<String>,
    pub skipped: HashSet<String>,
}

impl CheckpointState {
    fn set(&self, kind: LogKind) -> &HashSet<String> {
        match kind {
            LogKind::Done => &self.done,
            LogKind::Failed => &self.failed,
            LogKind::Skipped => &self.skipped,
        }
    }

    fn set_mut(&mut self, kind: LogKind) -> &mut HashSet<String> {
        match kind {
            LogKind::Done => &mut self.done,
            LogKind::Failed => &mut self.failed,
            LogKind::Skipped => &mut self.skipped,
        }
    }

    pub fn contains(&self, kind: LogKind, identity: &str) -> bool {
        self.set(kind).contains(identity)
    }

    /// Resolve the state of an identity. Done wins over any other log.
    pub fn state_of(&self, identity: &str) -> ItemState {
        if self.done.contains(identity) {
            ItemState::Done
        } else if self.failed.contains(identity) {
            ItemState::Failed
        } else if self.skipped.contains(identity) {
            ItemState::Skipped
        } else {
            ItemState::Pending
        }
    }

    /// Apply a recorded entry. Returns false if it was already present.
    pub fn apply(&mut self, kind: LogKind, identity: &str) -> bool {
        self.set_mut(kind).insert(identity.to_string())
    }

    pub fn clear(&mut self, kind: LogKind) {
        self.set_mut(kind).clear();
    }

    pub fn totals(&self) -> StoreTotals {
        StoreTotals {
            done: self.done.len(),
            failed: self.failed.len(),
            skipped: self.skipped.len(),
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
