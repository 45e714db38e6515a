// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Durable checkpoint storage for batchkeep

mod artifact;
mod error;
mod intent;
mod lock;
mod log;
mod paths;
mod state;
mod store;

pub use artifact::{file_digest, remove_if_exists, replace_atomically};
pub use error::StoreError;
pub use intent::CommitIntent;
pub use lock::RunLock;
pub use log::CheckpointLog;
pub use paths::CheckpointPaths;
pub use state::CheckpointState;
pub use store::{CheckpointStore, FileCheckpointStore};
