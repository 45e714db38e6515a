// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrapper for consistent observability

use crate::processor::{ProcessorAdapter, ProcessorError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::Instrument;

/// Wrapper that adds tracing to any ProcessorAdapter
#[derive(Clone)]
pub struct TracedProcessor<P> {
    inner: P,
}

impl<P> TracedProcessor<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

#[async_trait]
impl<P: ProcessorAdapter> ProcessorAdapter for TracedProcessor<P> {
    async fn generate(&self, input: &Path, output: &Path) -> Result<(), ProcessorError> {
        let span = tracing::info_span!(
            "processor.generate",
            input = %input.display(),
            output = %output.display()
        );
        async {
            // Precondition: input must exist
            if !input.is_file() {
                tracing::error!("input file does not exist");
                return Err(ProcessorError::Spawn(format!(
                    "input file does not exist: {}",
                    input.display()
                )));
            }

            tracing::info!("starting");
            let start = std::time::Instant::now();
            let result = self.inner.generate(input, output).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(()) => tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "generated"),
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "generate failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }

    async fn merge(&self, inputs: &[PathBuf], output: &Path) -> Result<(), ProcessorError> {
        let span = tracing::info_span!(
            "processor.merge",
            inputs = inputs.len(),
            output = %output.display()
        );
        async {
            // Precondition: the output's directory must exist
            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    tracing::error!(parent = %parent.display(), "output directory does not exist");
                    return Err(ProcessorError::Spawn(format!(
                        "output directory does not exist: {}",
                        parent.display()
                    )));
                }
            }

            tracing::info!("starting");
            let start = std::time::Instant::now();
            let result = self.inner.merge(inputs, output).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(()) => tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "merged"),
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "merge failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
