// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Exclusive run lock for a checkpoint store

use crate::error::StoreError;
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Held for the duration of a run so only one process writes the logs.
///
/// The lock is released when this value is dropped.
#[derive(Debug)]
pub struct RunLock {
    path: PathBuf,
    // NOTE(lifetime): Held to maintain exclusive file lock; released on drop
    file: File,
}

impl RunLock {
    /// Acquire the lock without blocking
    pub fn acquire(path: &Path) -> Result<Self, StoreError> {
        let mut file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(path)
            .map_err(StoreError::io(path))?;

        file.try_lock_exclusive()
            .map_err(|_| StoreError::Locked(path.to_path_buf()))?;

        // Record the holder for operators; the lock itself is what matters
        file.set_len(0).map_err(StoreError::io(path))?;
        writeln!(file, "{}", std::process::id()).map_err(StoreError::io(path))?;

        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for RunLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

#[cfg(test)]
#[path = "lock_tests.rs"]
mod tests;
