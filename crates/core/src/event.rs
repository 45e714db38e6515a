// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Progress events emitted while a run executes

use serde::Serialize;

/// Observable milestones of a run, in the order they happen.
///
/// Purely informational: nothing durable depends on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RunEvent {
    /// A leftover commit intent from a crashed run was resolved
    IntentRecovered { applied: bool, items: usize },
    /// Discovery finished
    Discovered { pending: usize, batches: usize },
    /// An oversized item was recorded as skipped
    Skipped { identity: String, size: u64 },
    ItemStarted { identity: String },
    ItemDone { identity: String },
    ItemFailed { identity: String, reason: String },
    BatchStarted {
        index: usize,
        total: usize,
        items: usize,
    },
    BatchCommitted { index: usize, items: usize },
    BatchFailed { index: usize, reason: String },
    /// Accumulator run stopped after a failed batch
    Halted { remaining_batches: usize },
    /// Run stopped early on operator request
    Interrupted,
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
