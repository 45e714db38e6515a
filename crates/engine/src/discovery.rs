// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Work discovery and filtering

use crate::error::EngineError;
use bk_core::{LogKind, WorkItem};
use bk_storage::CheckpointStore;
use std::fs;
use std::path::Path;

/// Filtering rules applied to discovered files
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscoveryPolicy {
    /// Failed items are eligible again
    pub retry_fails: bool,
    /// Items larger than this are recorded as skipped (independent mode)
    pub max_size_bytes: Option<u64>,
}

/// Result of a discovery pass
#[derive(Debug, Default)]
pub struct Discovery {
    /// Pending items, sorted by identity
    pub items: Vec<WorkItem>,
    /// Oversized items newly written to the skip log during this pass
    pub newly_skipped: Vec<WorkItem>,
}

/// List the files directly inside `source_dir` and drop those already
/// accounted for by the store.
///
/// Filesystem enumeration order is unspecified, so items are sorted by
/// identity; accumulator mode relies on this for a reproducible fold order.
pub fn discover<S: CheckpointStore>(
    source_dir: &Path,
    store: &mut S,
    policy: DiscoveryPolicy,
) -> Result<Discovery, EngineError> {
    let discovery_err = |source| EngineError::Discovery {
        path: source_dir.to_path_buf(),
        source,
    };

    let mut candidates = Vec::new();
    for entry in fs::read_dir(source_dir).map_err(discovery_err)? {
        let entry = entry.map_err(discovery_err)?;
        let path = entry.path();

        // Follows symlinks; entries that vanished or are not files are ignored
        let meta = match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => meta,
            _ => continue,
        };

        match WorkItem::from_path(&path, meta.len()) {
            Some(item) => candidates.push(item),
            None => tracing::warn!(path = %path.display(), "ignoring file with unusable name"),
        }
    }
    candidates.sort_by(|a, b| a.identity.cmp(&b.identity));

    let mut discovery = Discovery::default();
    for item in candidates {
        let state = store.state();
        if state.contains(LogKind::Done, &item.identity) {
            continue;
        }
        if !policy.retry_fails && state.contains(LogKind::Failed, &item.identity) {
            continue;
        }

        if let Some(max) = policy.max_size_bytes {
            if item.size > max {
                if store.record_if_absent(LogKind::Skipped, &item.identity)? {
                    tracing::info!(identity = %item.identity, size = item.size, max, "skipped oversized item");
                    discovery.newly_skipped.push(item);
                }
                continue;
            }
        }

        discovery.items.push(item);
    }

    tracing::debug!(
        source = %source_dir.display(),
        pending = discovery.items.len(),
        skipped = discovery.newly_skipped.len(),
        "discovery complete"
    );

    Ok(discovery)
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
