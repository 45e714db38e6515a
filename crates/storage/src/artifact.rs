// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Atomic artifact replacement helpers

use crate::error::StoreError;
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

/// Replace `live` with `temp` in a single rename.
///
/// `temp` is synced first and must be on the same filesystem as `live`.
/// A reader or a crash never observes a missing or truncated `live`.
pub fn replace_atomically(temp: &Path, live: &Path) -> Result<(), StoreError> {
    File::open(temp)
        .and_then(|f| f.sync_all())
        .map_err(StoreError::io(temp))?;

    // Atomic replace (rename is atomic on POSIX)
    fs::rename(temp, live).map_err(StoreError::io(live))?;

    sync_parent(live)?;
    Ok(())
}

/// Delete a file, treating "already gone" as success
pub fn remove_if_exists(path: &Path) -> Result<bool, StoreError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(StoreError::io(path)(e)),
    }
}

/// Hex SHA-256 of a file's contents, or `None` if it does not exist
pub fn file_digest(path: &Path) -> Result<Option<String>, StoreError> {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(StoreError::io(path)(e)),
    };

    let mut hasher = Sha256::new();
    let mut buf = [0u8; 64 * 1024];
    loop {
        let n = file.read(&mut buf).map_err(StoreError::io(path))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    let digest = hasher.finalize();
    Ok(Some(digest.iter().map(|b| format!("{:02x}", b)).collect()))
}

/// Persist a rename by syncing the containing directory
#[cfg(unix)]
pub(crate) fn sync_parent(path: &Path) -> Result<(), StoreError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    File::open(parent)
        .and_then(|d| d.sync_all())
        .map_err(StoreError::io(parent))
}

#[cfg(not(unix))]
pub(crate) fn sync_parent(_path: &Path) -> Result<(), StoreError> {
    Ok(())
}

#[cfg(test)]
#[path = "artifact_tests.rs"]
mod tests;
