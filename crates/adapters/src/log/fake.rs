// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake logging sink for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use hark_core::{LogSink, SinkError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Fake sink that records every message
///
/// Clones share the recorded messages. `set_failing(true)` makes every
/// subsequent call fail without recording.
#[derive(Clone, Default)]
pub struct FakeLogSink {
    messages: Arc<Mutex<Vec<String>>>,
    failing: Arc<AtomicBool>,
}

impl FakeLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded messages
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

impl LogSink for FakeLogSink {
    fn log(&self, message: &str) -> Result<(), SinkError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(SinkError::Unavailable("fake sink set to fail".to_string()));
        }
        self.messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message.to_string());
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
