// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only checkpoint log
//!
//! One identity per line, no header, no escaping. The log is a membership
//! set: duplicates are harmless on read and blank lines are ignored.

use crate::error::StoreError;
use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Append handle for a single checkpoint log
pub struct CheckpointLog {
    path: PathBuf,
    file: File,
}

impl CheckpointLog {
    /// Open or create a log at the given path.
    ///
    /// A torn final line is terminated before any append so the next
    /// identity cannot fuse with it.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(path)
            .map_err(StoreError::io(path))?;

        if needs_terminator(&mut file).map_err(StoreError::io(path))? {
            tracing::warn!(log = %path.display(), "terminating unfinished last line");
            file.write_all(b"\n").map_err(StoreError::io(path))?;
            file.sync_all().map_err(StoreError::io(path))?;
        }

        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    /// Append one identity and sync it to disk before returning
    pub fn append(&mut self, identity: &str) -> Result<(), StoreError> {
        if identity.is_empty() || identity.contains(['\n', '\r']) {
            return Err(StoreError::InvalidIdentity(identity.to_string()));
        }
        writeln!(self.file, "{}", identity).map_err(StoreError::io(&self.path))?;
        self.file.sync_all().map_err(StoreError::io(&self.path))?;
        Ok(())
    }

    /// Truncate the log to empty
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.file.set_len(0).map_err(StoreError::io(&self.path))?;
        self.file.sync_all().map_err(StoreError::io(&self.path))?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every identity in the log. A missing log is an empty set.
    pub fn load(path: &Path) -> Result<HashSet<String>, StoreError> {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(HashSet::new()),
            Err(e) => return Err(StoreError::io(path)(e)),
        };

        let reader = BufReader::new(file);
        let mut identities = HashSet::new();

        for line in reader.lines() {
            let line = line.map_err(StoreError::io(path))?;
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            identities.insert(line.to_string());
        }

        Ok(identities)
    }
}

fn needs_terminator(file: &mut File) -> io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
