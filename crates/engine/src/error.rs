// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the batch engine

use bk_core::ConfigError;
use bk_storage::StoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a run.
///
/// Collaborator failures are not here: they are recorded outcomes, not errors.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
    #[error("cannot list source directory {path}: {source}")]
    Discovery {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("worker task failed: {0}")]
    Worker(String),
}
