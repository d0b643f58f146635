// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI integration tests for user registration
//!
//! Registration publishes `user_creation`; the log listener writes exactly
//! one line per registered user to stderr.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(deprecated)]

mod common;

use common::{config_file, hark, stderr_of, stdout_of, DEMO_LOG_LINE};

#[test]
fn no_subcommand_registers_the_demo_user_once() {
    let output = hark().output().unwrap();

    assert!(output.status.success());
    assert_eq!(stderr_of(&output).matches(DEMO_LOG_LINE).count(), 1);
}

#[test]
fn register_writes_nothing_to_stdout() {
    let output = hark().arg("register").output().unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "");
    assert_eq!(stderr_of(&output).matches(DEMO_LOG_LINE).count(), 1);
}

#[test]
fn register_flags_override_the_defaults() {
    let output = hark()
        .args(["register", "--name", "Beatriz", "--email", "bea@x.com"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = stderr_of(&output);
    assert!(
        stderr.contains("User Beatriz created, with email bea@x.com"),
        "stderr: {}",
        stderr
    );
    assert!(!stderr.contains("Ambrosio"));
}

#[test]
fn register_reads_user_from_config() {
    let (_temp, path) = config_file(
        r#"
[register]
name = "Carmen"
email = "carmen@x.com"
"#,
    );

    let output = hark()
        .arg("--config")
        .arg(&path)
        .arg("register")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(stderr_of(&output).contains("User Carmen created, with email carmen@x.com"));
}

#[test]
fn password_never_reaches_the_logs() {
    let output = hark()
        .env("RUST_LOG", "trace")
        .args(["register", "--password", "s3cr3t-value"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(!stderr_of(&output).contains("s3cr3t-value"));
}

#[test]
fn user_log_target_can_be_silenced() {
    let output = hark()
        .env("RUST_LOG", "info,hark::user_log=off")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(!stderr_of(&output).contains(DEMO_LOG_LINE));
}

#[test]
fn no_user_log_flag_still_registers_silently() {
    let output = hark().args(["--no-user-log", "register"]).output().unwrap();

    assert!(output.status.success());
    let stderr = stderr_of(&output);
    assert!(!stderr.contains(DEMO_LOG_LINE), "stderr: {}", stderr);
    assert!(stderr.contains("user registered"), "stderr: {}", stderr);
}
