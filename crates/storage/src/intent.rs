// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Commit intent for accumulator batches
//!
//! Replacing the accumulator and appending the batch's done records are two
//! separate writes. The intent is written durably before the replace and
//! removed after the appends, so a crash in between can be resolved on the
//! next start by comparing the live accumulator's digest with the intent.

use crate::artifact::{remove_if_exists, sync_parent};
use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

/// A batch that is about to become the live accumulator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitIntent {
    /// SHA-256 of the new accumulator contents
    pub digest: String,
    /// Identities folded into the new accumulator by this batch
    pub identities: Vec<String>,
}

impl CommitIntent {
    /// Write the intent durably (write, sync, rename)
    pub fn write(&self, path: &Path) -> Result<(), StoreError> {
        let json = serde_json::to_vec(self).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        let temp = path.with_extension("intent.tmp");
        {
            let mut file = File::create(&temp).map_err(StoreError::io(&temp))?;
            file.write_all(&json).map_err(StoreError::io(&temp))?;
            file.sync_all().map_err(StoreError::io(&temp))?;
        }
        fs::rename(&temp, path).map_err(StoreError::io(path))?;
        sync_parent(path)
    }

    /// Read a leftover intent, if any
    pub fn read(path: &Path) -> Result<Option<Self>, StoreError> {
        let bytes = match fs::read(path) {
            Ok(b) => b,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::io(path)(e)),
        };
        let intent = serde_json::from_slice(&bytes).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Some(intent))
    }

    /// Remove the intent once the batch is fully recorded
    pub fn clear(path: &Path) -> Result<(), StoreError> {
        remove_if_exists(path)?;
        sync_parent(path)
    }
}

#[cfg(test)]
#[path = "intent_tests.rs"]
mod tests;
