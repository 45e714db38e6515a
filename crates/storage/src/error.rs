// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Storage error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in checkpoint storage.
///
/// All of them are fatal for a run: no work proceeds from an unreliable store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("JSON error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("checkpoint is locked by another run: {0}")]
    Locked(PathBuf),
    #[error("identity cannot be stored in a line-oriented log: {0:?}")]
    InvalidIdentity(String),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> StoreError {
        let path = path.into();
        move |source| StoreError::Io { path, source }
    }
}
