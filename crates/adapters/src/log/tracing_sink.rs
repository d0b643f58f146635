// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sink that writes user log lines as tracing events

use hark_core::{LogSink, SinkError};

/// Target of the events emitted by [`TracingLogSink`]
pub const USER_LOG_TARGET: &str = "hark::user_log";

/// Emits each message as an `info` event on [`USER_LOG_TARGET`]
///
/// Where the line ends up is decided by the installed subscriber.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogSink;

impl TracingLogSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for TracingLogSink {
    fn log(&self, message: &str) -> Result<(), SinkError> {
        tracing::info!(target: USER_LOG_TARGET, "{}", message);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traced::tests::with_tracing;

    #[test]
    fn message_is_emitted_on_user_log_target() {
        let (logs, result) = with_tracing(|| {
            TracingLogSink::new().log("User Ambrosio created, with email ambrosio_1234@hotmail.com")
        });

        assert!(result.is_ok());
        assert!(logs.contains("INFO"), "got: {}", logs);
        assert!(logs.contains(USER_LOG_TARGET), "got: {}", logs);
        assert!(logs.contains("User Ambrosio created, with email ambrosio_1234@hotmail.com"));
    }
}
