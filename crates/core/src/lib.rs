// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! bk-core: shared types for the batchkeep pipeline
//!
//! This crate provides:
//! - Work items and their checkpointed states
//! - Batching of pending work into ordered chunks
//! - Validated run configuration for both pipeline modes
//! - Run events and the end-of-run summary

pub mod batch;
pub mod config;
pub mod event;
pub mod item;
pub mod summary;

pub use batch::{chunk, Batch};
pub use config::{parse_duration, ConfigError, Mode, RunConfig, DEFAULT_MAX_SIZE_KB};
pub use event::RunEvent;
pub use item::{ItemState, LogKind, WorkItem};
pub use summary::{RunOutcome, RunSummary, StoreTotals};
