// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Identifier and reset-code generation

use crate::store::UserId;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Generates user identifiers and password reset codes
pub trait IdGen: Send + Sync {
    fn user_id(&self) -> UserId;

    fn reset_code(&self) -> String;
}

/// UUID-based generator for production use
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidIdGen;

impl IdGen for UuidIdGen {
    fn user_id(&self) -> UserId {
        UserId(uuid::Uuid::new_v4().to_string())
    }

    /// Eight uppercase hex digits
    fn reset_code(&self) -> String {
        let simple = uuid::Uuid::new_v4().simple().to_string();
        simple[..8].to_uppercase()
    }
}

/// Sequential generator for testing
///
/// Ids and codes draw from one shared counter, so clones continue the same
/// sequence.
#[derive(Clone, Debug)]
pub struct SequentialIdGen {
    prefix: String,
    counter: Arc<AtomicU64>,
}

impl SequentialIdGen {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: Arc::new(AtomicU64::new(1)),
        }
    }

    fn bump(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst)
    }
}

impl Default for SequentialIdGen {
    fn default() -> Self {
        Self::new("user")
    }
}

impl IdGen for SequentialIdGen {
    fn user_id(&self) -> UserId {
        UserId(format!("{}-{}", self.prefix, self.bump()))
    }

    fn reset_code(&self) -> String {
        format!("{:06}", self.bump())
    }
}
