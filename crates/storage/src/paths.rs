// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File layout derived from the checkpoint path

use bk_core::LogKind;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Every file owned by one checkpoint store.
///
/// The done log lives at the checkpoint path itself; siblings are named by
/// appending a suffix to the full file name (`run.log` -> `run.log.failed`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckpointPaths {
    pub done: PathBuf,
    pub failed: PathBuf,
    pub skipped: PathBuf,
    pub lock: PathBuf,
    pub intent: PathBuf,
}

impl CheckpointPaths {
    pub fn new(checkpoint: &Path) -> Self {
        Self {
            done: checkpoint.to_path_buf(),
            failed: with_suffix(checkpoint, LogKind::Failed.suffix()),
            skipped: with_suffix(checkpoint, LogKind::Skipped.suffix()),
            lock: with_suffix(checkpoint, ".lock"),
            intent: with_suffix(checkpoint, ".intent"),
        }
    }

    pub fn log(&self, kind: LogKind) -> &Path {
        match kind {
            LogKind::Done => &self.done,
            LogKind::Failed => &self.failed,
            LogKind::Skipped => &self.skipped,
        }
    }
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

#[cfg(test)]
#[path = "paths_tests.rs"]
mod tests;
