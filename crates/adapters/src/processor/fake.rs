// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake processor adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ProcessorAdapter, ProcessorError};
use async_trait::async_trait;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Recorded processor call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessorCall {
    Generate { input: PathBuf, output: PathBuf },
    Merge { inputs: Vec<PathBuf>, output: PathBuf },
}

impl ProcessorCall {
    /// Base names of the call's inputs, in order
    pub fn input_names(&self) -> Vec<String> {
        let inputs: Vec<&PathBuf> = match self {
            ProcessorCall::Generate { input, .. } => vec![input],
            ProcessorCall::Merge { inputs, .. } => inputs.iter().collect(),
        };
        inputs.into_iter().map(|p| base_name(p)).collect()
    }
}

/// Fake processor that works on real files.
///
/// `generate` copies its input to the output; `merge` concatenates its
/// inputs. Calls touching an identity registered with `fail_on` fail after
/// writing a partial output, so rollback paths get exercised.
#[derive(Clone, Default)]
pub struct FakeProcessor {
    calls: Arc<Mutex<Vec<ProcessorCall>>>,
    failing: Arc<Mutex<HashSet<String>>>,
}

impl FakeProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail any call that includes an input with this base name
    pub fn fail_on(&self, identity: &str) {
        self.failing
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(identity.to_string());
    }

    /// Stop failing for this identity
    pub fn heal(&self, identity: &str) {
        self.failing
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(identity);
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ProcessorCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Base names of every input ever passed to the processor
    pub fn processed_names(&self) -> Vec<String> {
        self.calls()
            .iter()
            .flat_map(|c| c.input_names())
            .collect()
    }

    fn should_fail(&self, inputs: &[&Path]) -> bool {
        let failing = self.failing.lock().unwrap_or_else(|e| e.into_inner());
        inputs.iter().any(|p| failing.contains(&base_name(p)))
    }

    fn write(&self, inputs: &[&Path], output: &Path, fail: bool) -> Result<(), ProcessorError> {
        let mut content = Vec::new();
        for input in inputs {
            let bytes = std::fs::read(input).map_err(|e| ProcessorError::Spawn(e.to_string()))?;
            content.extend_from_slice(&bytes);
        }
        if fail {
            // Leave a truncated artifact behind, like a tool dying mid-write
            content.truncate(content.len() / 2);
        }
        std::fs::write(output, &content).map_err(|e| ProcessorError::Spawn(e.to_string()))?;

        if fail {
            return Err(ProcessorError::Exited {
                status: "exit status: 1".to_string(),
                stderr: "scripted failure".to_string(),
            });
        }
        Ok(())
    }
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[async_trait]
impl ProcessorAdapter for FakeProcessor {
    async fn generate(&self, input: &Path, output: &Path) -> Result<(), ProcessorError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(ProcessorCall::Generate {
                input: input.to_path_buf(),
                output: output.to_path_buf(),
            });

        let fail = self.should_fail(&[input]);
        self.write(&[input], output, fail)
    }

    async fn merge(&self, inputs: &[PathBuf], output: &Path) -> Result<(), ProcessorError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(ProcessorCall::Merge {
                inputs: inputs.to_vec(),
                output: output.to_path_buf(),
            });

        let refs: Vec<&Path> = inputs.iter().map(PathBuf::as_path).collect();
        let fail = self.should_fail(&refs);
        self.write(&refs, output, fail)
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
