// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch layout: `src/` inputs, `out/` artifacts, checkpoint at the root
pub struct Workspace {
    temp: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        fs::create_dir(temp.path().join("src")).expect("Failed to create src");
        fs::create_dir(temp.path().join("out")).expect("Failed to create out");
        Self { temp }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn source(&self) -> PathBuf {
        self.path().join("src")
    }

    pub fn output(&self) -> PathBuf {
        self.path().join("out")
    }

    pub fn checkpoint(&self) -> PathBuf {
        self.path().join("progress.log")
    }

    pub fn accumulator(&self) -> PathBuf {
        self.path().join("merged.txt")
    }

    /// Write an input file named `name` holding `name`
    pub fn input(&self, name: &str) {
        fs::write(self.source().join(name), format!("{}\n", name)).expect("Failed to write input");
    }

    /// Write an executable shell script and return its path
    pub fn script(&self, name: &str, body: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("Failed to write script");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to make script executable");
        path
    }

    /// Lines of a file, empty if it does not exist
    pub fn lines(&self, path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap_or_default()
            .lines()
            .map(String::from)
            .collect()
    }
}
