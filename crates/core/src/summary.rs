// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-of-run summary

use serde::Serialize;
use std::fmt;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    /// Every attempted item/batch succeeded (or there was nothing to do)
    Completed,
    /// Independent mode: at least one item failed, the rest continued
    CompletedWithFailures,
    /// Accumulator mode: a batch failed and the run stopped
    Halted,
    /// Operator requested a stop; in-flight work was not recorded
    Interrupted,
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Completed)
    }
}

/// Membership counts of the checkpoint store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreTotals {
    pub done: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// Counts for a single run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub mode: &'static str,
    pub outcome: RunOutcome,
    /// Items recorded done during this run
    pub done: usize,
    /// Items recorded failed during this run
    pub failed: usize,
    /// Items newly recorded skipped during this run
    pub skipped: usize,
    /// Discovered items left pending when the run ended
    pub remaining: usize,
    /// Store membership after the run
    pub totals: StoreTotals,
}

impl RunSummary {
    pub fn new(mode: &'static str) -> Self {
        Self {
            mode,
            outcome: RunOutcome::Completed,
            done: 0,
            failed: 0,
            skipped: 0,
            remaining: 0,
            totals: StoreTotals::default(),
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} run: {} ===", self.mode, outcome_label(self.outcome))?;
        writeln!(f, "Done:      {}", self.done)?;
        writeln!(f, "Failed:    {}", self.failed)?;
        writeln!(f, "Skipped:   {}", self.skipped)?;
        writeln!(f, "Remaining: {}", self.remaining)?;
        write!(
            f,
            "Totals:    {} done, {} failed, {} skipped",
            self.totals.done, self.totals.failed, self.totals.skipped
        )
    }
}

fn outcome_label(outcome: RunOutcome) -> &'static str {
    match outcome {
        RunOutcome::Completed => "completed",
        RunOutcome::CompletedWithFailures => "completed with failures",
        RunOutcome::Halted => "halted",
        RunOutcome::Interrupted => "interrupted",
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
