// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Child-process processor adapter

use super::{ProcessorAdapter, ProcessorError};
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Output;
use std::time::Duration;
use tokio::process::Command;

/// Runs the external tool as a child process.
///
/// The argv is `program [args...] <inputs...> <output>`. Exit status 0 maps
/// to success; anything else, including a timeout, is a failure.
#[derive(Clone, Debug)]
pub struct CommandProcessor {
    program: PathBuf,
    args: Vec<String>,
    timeout: Option<Duration>,
}

impl CommandProcessor {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout: None,
        }
    }

    /// Fixed arguments placed before the input paths
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    async fn run(&self, paths: Vec<OsString>) -> Result<(), ProcessorError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).args(paths).kill_on_drop(true);

        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, cmd.output())
                .await
                .map_err(|_| ProcessorError::TimedOut(limit))?,
            None => cmd.output().await,
        }
        .map_err(|e| ProcessorError::Spawn(format!("{}: {}", self.program.display(), e)))?;

        check_status(&output)
    }
}

fn check_status(output: &Output) -> Result<(), ProcessorError> {
    if !output.stderr.is_empty() {
        tracing::debug!(
            stderr = %String::from_utf8_lossy(&output.stderr),
            "processor stderr"
        );
    }

    if output.status.success() {
        return Ok(());
    }

    Err(ProcessorError::Exited {
        status: output.status.to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    })
}

#[async_trait]
impl ProcessorAdapter for CommandProcessor {
    async fn generate(&self, input: &Path, output: &Path) -> Result<(), ProcessorError> {
        self.run(vec![input.into(), output.into()]).await?;

        // A zero exit without a readable artifact is still a failure
        match tokio::fs::metadata(output).await {
            Ok(meta) if meta.is_file() && meta.len() > 0 => Ok(()),
            _ => Err(ProcessorError::MissingOutput(output.to_path_buf())),
        }
    }

    async fn merge(&self, inputs: &[PathBuf], output: &Path) -> Result<(), ProcessorError> {
        let mut argv: Vec<OsString> = inputs.iter().map(|p| p.as_os_str().to_owned()).collect();
        argv.push(output.into());
        self.run(argv).await?;

        match tokio::fs::metadata(output).await {
            Ok(meta) if meta.is_file() => Ok(()),
            _ => Err(ProcessorError::MissingOutput(output.to_path_buf())),
        }
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
