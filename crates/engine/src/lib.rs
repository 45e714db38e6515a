// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! batchkeep pipeline engine

mod accumulator;
mod cancel;
mod discovery;
mod error;
mod independent;
mod recorder;
mod runner;

pub use cancel::CancelFlag;
pub use discovery::{discover, Discovery, DiscoveryPolicy};
pub use error::EngineError;
pub use recorder::{Committed, IntentRecovery, Recorder};
pub use runner::{Observer, Runner};
