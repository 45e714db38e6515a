// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Work items and their checkpointed states

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// One input file tracked independently for completion state.
///
/// Identity is the file's base name, which is unique within a source
/// directory. Items are rebuilt from the directory listing on every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub identity: String,
    pub path: PathBuf,
    pub size: u64,
}

impl WorkItem {
    /// Build an item from a file path, or `None` when the path has no
    /// usable base name (non UTF-8, or containing a newline which would
    /// corrupt the line-oriented checkpoint logs).
    pub fn from_path(path: &Path, size: u64) -> Option<Self> {
        let identity = path.file_name()?.to_str()?;
        if identity.is_empty() || identity.contains(['\n', '\r']) {
            return None;
        }
        Some(Self {
            identity: identity.to_string(),
            path: path.to_path_buf(),
            size,
        })
    }
}

/// A persisted state category. Each kind owns one checkpoint log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    Done,
    Failed,
    Skipped,
}

impl LogKind {
    pub const ALL: [LogKind; 3] = [LogKind::Done, LogKind::Failed, LogKind::Skipped];

    /// Suffix appended to the checkpoint path to name this kind's log
    pub fn suffix(self) -> &'static str {
        match self {
            LogKind::Done => "",
            LogKind::Failed => ".failed",
            LogKind::Skipped => ".skipped",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LogKind::Done => "done",
            LogKind::Failed => "failed",
            LogKind::Skipped => "skipped",
        }
    }
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// State of an item as seen by the checkpoint store.
///
/// `Pending` is never stored: it is the absence of an identity from all logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemState {
    Pending,
    Done,
    Failed,
    Skipped,
}

impl ItemState {
    /// Check if this state has a checkpoint log entry
    pub fn is_recorded(&self) -> bool {
        !matches!(self, ItemState::Pending)
    }
}

impl From<LogKind> for ItemState {
    fn from(kind: LogKind) -> Self {
        match kind {
            LogKind::Done => ItemState::Done,
            LogKind::Failed => ItemState::Failed,
            LogKind::Skipped => ItemState::Skipped,
        }
    }
}

impl fmt::Display for ItemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemState::Pending => f.write_str("pending"),
            ItemState::Done => f.write_str("done"),
            ItemState::Failed => f.write_str("failed"),
            ItemState::Skipped => f.write_str("skipped"),
        }
    }
}

#[cfg(test)]
#[path = "item_tests.rs"]
mod tests;
