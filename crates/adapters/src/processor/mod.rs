// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Processing invoker: the boundary to the external tool

mod command;

pub use command::CommandProcessor;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeProcessor, ProcessorCall};

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors from a collaborator invocation.
///
/// Every variant means the same thing to the engine: the output must be
/// discarded. The variants only differ in what gets logged.
#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("failed to start processor: {0}")]
    Spawn(String),
    #[error("processor exited with {status}: {stderr}")]
    Exited { status: String, stderr: String },
    #[error("processor timed out after {0:?}")]
    TimedOut(Duration),
    #[error("processor produced no artifact at {0}")]
    MissingOutput(PathBuf),
}

/// Adapter for the external generation/merge tool.
///
/// Calls are synchronous from the engine's point of view and carry no
/// partial-success signal: each either succeeds or fails.
#[async_trait]
pub trait ProcessorAdapter: Clone + Send + Sync + 'static {
    /// Produce one artifact at `output` from one input file
    async fn generate(&self, input: &Path, output: &Path) -> Result<(), ProcessorError>;

    /// Fold `inputs` (prior accumulator first, if any) into a new
    /// accumulator written at `output`
    async fn merge(&self, inputs: &[PathBuf], output: &Path) -> Result<(), ProcessorError>;
}
