// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Logging sink trait
//!
//! Implementations live in `hark-adapters`.

use std::sync::Arc;
use thiserror::Error;

/// Errors from a logging sink
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    #[error("sink unavailable: {0}")]
    Unavailable(String),
    #[error("sink rejected message: {0}")]
    Rejected(String),
}

/// Destination for human-readable log lines
pub trait LogSink: Send + Sync + 'static {
    fn log(&self, message: &str) -> Result<(), SinkError>;
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn log(&self, message: &str) -> Result<(), SinkError> {
        (**self).log(message)
    }
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn log(&self, message: &str) -> Result<(), SinkError> {
        (**self).log(message)
    }
}
