// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! Engine errors are translated into a message, the likely cause, and what
//! the operator can do about it. Nothing here changes state.

use bk_core::ConfigError;
use bk_engine::EngineError;
use bk_storage::StoreError;
use std::fmt;

/// Exit code for an invalid configuration
pub const EXIT_CONFIG: u8 = 2;
/// Exit code for every other error
pub const EXIT_FAILURE: u8 = 1;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct BkError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Process exit code
    pub exit_code: u8,
}

impl BkError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            exit_code: EXIT_FAILURE,
        }
    }

    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    fn with_exit_code(mut self, code: u8) -> Self {
        self.exit_code = code;
        self
    }

    /// Explain an error returned by a command
    pub fn explain(err: &anyhow::Error) -> Self {
        if let Some(engine) = err.downcast_ref::<EngineError>() {
            return Self::from_engine(engine);
        }
        if let Some(config) = err.downcast_ref::<ConfigError>() {
            return Self::config(config);
        }

        let mut report = BkError::new(err.to_string());
        for cause in err.chain().skip(1) {
            report = report.with_context(cause.to_string());
        }
        report
    }

    fn from_engine(err: &EngineError) -> Self {
        match err {
            EngineError::Config(e) => Self::config(e),
            EngineError::Store(StoreError::Locked(path)) => {
                BkError::new("checkpoint is in use by another run")
                    .with_context(format!("lock file: {}", path.display()))
                    .with_suggestion("Wait for the other run to finish")
                    .with_suggestion("Use a different --checkpoint for an unrelated run")
            }
            EngineError::Store(e) => BkError::new("checkpoint storage failed")
                .with_context(e.to_string())
                .with_suggestion("Fix the storage problem and rerun; recorded items are not redone"),
            EngineError::Discovery { path, source } => {
                BkError::new(format!("cannot list {}", path.display()))
                    .with_context(source.to_string())
                    .with_suggestion("Check that the source directory is readable")
            }
            EngineError::Worker(e) => BkError::new("processor task failed").with_context(e.clone()),
        }
    }

    fn config(err: &ConfigError) -> Self {
        BkError::new(format!("invalid configuration: {}", err))
            .with_suggestion("Nothing was changed; fix the arguments and rerun")
            .with_exit_code(EXIT_CONFIG)
    }
}

impl fmt::Display for BkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}
