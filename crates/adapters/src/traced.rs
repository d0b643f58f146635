// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced sink wrapper for consistent observability

use hark_core::{LogSink, SinkError};

/// Wrapper that adds tracing to any LogSink
#[derive(Clone, Debug, Default)]
pub struct TracedLogSink<S> {
    inner: S,
}

impl<S> TracedLogSink<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: LogSink> LogSink for TracedLogSink<S> {
    fn log(&self, message: &str) -> Result<(), SinkError> {
        let span = tracing::debug_span!("sink.log", message_len = message.len());
        let _guard = span.enter();

        // Precondition: nothing to log
        if message.trim().is_empty() {
            tracing::warn!("rejecting empty message");
            return Err(SinkError::Rejected("empty message".to_string()));
        }

        let start = std::time::Instant::now();
        let result = self.inner.log(message);
        let elapsed = start.elapsed();

        match &result {
            Ok(()) => tracing::trace!(elapsed_us = elapsed.as_micros() as u64, "logged"),
            Err(e) => tracing::error!(
                elapsed_us = elapsed.as_micros() as u64,
                error = %e,
                "sink failed"
            ),
        }

        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
pub(crate) mod tests;
