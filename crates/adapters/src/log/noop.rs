// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op sink for when user logging is disabled (`hark --no-user-log`).

use hark_core::{LogSink, SinkError};

/// Sink that accepts and drops every message.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpLogSink;

impl NoOpLogSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for NoOpLogSink {
    fn log(&self, _message: &str) -> Result<(), SinkError> {
        Ok(())
    }
}
