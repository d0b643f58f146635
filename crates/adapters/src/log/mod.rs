// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Logging sink implementations

mod noop;
mod tracing_sink;

pub use noop::NoOpLogSink;
pub use tracing_sink::{TracingLogSink, USER_LOG_TARGET};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeLogSink;
