// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run configuration for the two pipeline modes

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Default maximum input size for independent mode, in KB
pub const DEFAULT_MAX_SIZE_KB: u64 = 150;

/// Errors found while validating a run configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("source directory not found: {0}")]
    SourceNotFound(PathBuf),
    #[error("source is not a directory: {0}")]
    SourceNotDirectory(PathBuf),
    #[error("output directory not found: {0}")]
    OutputNotFound(PathBuf),
    #[error("output directory must differ from the source directory: {0}")]
    OutputIsSource(PathBuf),
    #[error("accumulator parent directory not found: {0}")]
    AccumulatorDirNotFound(PathBuf),
    #[error("accumulator must not live inside the source directory: {0}")]
    AccumulatorInSource(PathBuf),
    #[error("checkpoint path has no file name: {0}")]
    InvalidCheckpoint(PathBuf),
    #[error("checkpoint directory not found: {0}")]
    CheckpointDirNotFound(PathBuf),
    #[error("checkpoint must not live inside the source directory: {0}")]
    CheckpointInSource(PathBuf),
    #[error("invalid duration '{input}': {message}")]
    InvalidDuration { input: String, message: String },
}

/// Pipeline variant and its mode-specific settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// One item in, one artifact out; items do not depend on each other
    Independent {
        output_dir: PathBuf,
        /// Extension appended to output artifact names, if any
        extension: Option<String>,
        max_size_bytes: u64,
        jobs: NonZeroUsize,
    },
    /// Each batch is folded into a single accumulating artifact
    Accumulator {
        accumulator: PathBuf,
        batch_size: NonZeroUsize,
    },
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Independent { .. } => "independent",
            Mode::Accumulator { .. } => "accumulator",
        }
    }
}

/// Validated configuration for one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub source_dir: PathBuf,
    /// Path of the done log; failure and skip logs are derived from it
    pub checkpoint: PathBuf,
    pub retry_fails: bool,
    /// Upper bound on a single collaborator invocation
    pub timeout: Option<Duration>,
    pub mode: Mode,
}

impl RunConfig {
    /// Check the configuration against the filesystem.
    ///
    /// Touches nothing; a failure here means no state was mutated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.source_dir.exists() {
            return Err(ConfigError::SourceNotFound(self.source_dir.clone()));
        }
        if !self.source_dir.is_dir() {
            return Err(ConfigError::SourceNotDirectory(self.source_dir.clone()));
        }
        if self.checkpoint.file_name().is_none() {
            return Err(ConfigError::InvalidCheckpoint(self.checkpoint.clone()));
        }
        let checkpoint_dir = parent_dir(&self.checkpoint);
        if !checkpoint_dir.is_dir() {
            return Err(ConfigError::CheckpointDirNotFound(
                checkpoint_dir.to_path_buf(),
            ));
        }

        match &self.mode {
            Mode::Independent { output_dir, .. } => {
                if !output_dir.is_dir() {
                    return Err(ConfigError::OutputNotFound(output_dir.clone()));
                }
                if same_dir(output_dir, &self.source_dir) {
                    return Err(ConfigError::OutputIsSource(output_dir.clone()));
                }
            }
            Mode::Accumulator { accumulator, .. } => {
                let parent = parent_dir(accumulator);
                if !parent.is_dir() {
                    return Err(ConfigError::AccumulatorDirNotFound(parent.to_path_buf()));
                }
                if same_dir(parent, &self.source_dir) {
                    return Err(ConfigError::AccumulatorInSource(accumulator.clone()));
                }
            }
        }

        // The store's own files would otherwise be discovered as items
        if same_dir(checkpoint_dir, &self.source_dir) {
            return Err(ConfigError::CheckpointInSource(self.checkpoint.clone()));
        }

        Ok(())
    }
}

/// Parse a human-friendly duration such as `30s` or `5m`
pub fn parse_duration(input: &str) -> Result<Duration, ConfigError> {
    humantime::parse_duration(input).map_err(|e| ConfigError::InvalidDuration {
        input: input.to_string(),
        message: e.to_string(),
    })
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

fn same_dir(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
