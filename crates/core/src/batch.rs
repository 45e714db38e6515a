// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Partitioning of pending work into ordered batches

use crate::item::WorkItem;
use std::num::NonZeroUsize;

/// A contiguous, ordered slice of the pending work list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    /// Zero-based position of this batch in the run
    pub index: usize,
    pub items: Vec<WorkItem>,
}

impl Batch {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn identities(&self) -> Vec<&str> {
        self.items.iter().map(|i| i.identity.as_str()).collect()
    }
}

/// Split `items` into batches of exactly `batch_size`, except possibly the
/// last. Order is preserved both across and within batches.
pub fn chunk(items: Vec<WorkItem>, batch_size: NonZeroUsize) -> Vec<Batch> {
    let size = batch_size.get();
    let mut batches = Vec::with_capacity(items.len().div_ceil(size));
    let mut iter = items.into_iter().peekable();

    while iter.peek().is_some() {
        let items: Vec<WorkItem> = iter.by_ref().take(size).collect();
        batches.push(Batch {
            index: batches.len(),
            items,
        });
    }

    batches
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod tests;
