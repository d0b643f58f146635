// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

pub const DEMO_LOG_LINE: &str = "User Ambrosio created, with email ambrosio_1234@hotmail.com";

/// The `hark` binary with a predictable log filter
pub fn hark() -> Command {
    let mut cmd = Command::cargo_bin("hark").expect("hark binary should be built");
    cmd.env("RUST_LOG", "info");
    cmd
}

/// Write `contents` to a config file in a fresh temp directory.
/// Keep the TempDir alive for as long as the path is used.
pub fn config_file(contents: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let path = temp.path().join("hark.toml");
    std::fs::write(&path, contents).expect("Failed to write config");
    (temp, path)
}

pub fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

pub fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
