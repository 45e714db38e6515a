// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use bk_core::RunEvent;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Print output in the specified format
pub fn print<T: Serialize + std::fmt::Display>(value: &T, format: OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", value),
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(value) {
                println!("{}", json);
            }
        }
    }
}

/// Print one progress line for a run event
pub fn print_event(event: &RunEvent) {
    println!("{}", event_line(event));
}

fn event_line(event: &RunEvent) -> String {
    match event {
        RunEvent::IntentRecovered { applied, items } => {
            let action = if *applied { "recorded as done" } else { "discarded" };
            format!("Recovered interrupted commit: {} items {}", items, action)
        }
        RunEvent::Discovered { pending: 0, .. } => "Nothing to process".to_string(),
        RunEvent::Discovered { pending, .. } => format!("Found {} pending items", pending),
        RunEvent::Skipped { identity, size } => {
            format!("skipped  {} ({} bytes, over the size limit)", identity, size)
        }
        RunEvent::ItemStarted { identity } => format!("start    {}", identity),
        RunEvent::ItemDone { identity } => format!("done     {}", identity),
        RunEvent::ItemFailed { identity, reason } => format!("FAILED   {}: {}", identity, reason),
        RunEvent::BatchStarted {
            index,
            total,
            items,
        } => format!("[{}/{}] merging {} items", index + 1, total, items),
        RunEvent::BatchCommitted { index, items } => {
            format!("[{}] committed {} items", index + 1, items)
        }
        RunEvent::BatchFailed { index, reason } => format!("[{}] FAILED: {}", index + 1, reason),
        RunEvent::Halted { remaining_batches } => {
            format!("Halted, {} batches not attempted", remaining_batches)
        }
        RunEvent::Interrupted => "Interrupted, unfinished items stay pending".to_string(),
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
