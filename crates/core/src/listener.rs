// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log listener: forwards user creation to a logging sink

use crate::events::{EventRegistry, SubscriberError};
use crate::registration::USER_CREATION;
use crate::sink::LogSink;
use crate::store::UserRecord;
use std::sync::Arc;

/// Turns `user_creation` events into log lines
pub struct LogListener<S> {
    sink: Arc<S>,
}

impl<S: LogSink> LogListener<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink: Arc::new(sink),
        }
    }

    /// The line written for a newly created user
    pub fn format(user: &UserRecord) -> String {
        format!("User {} created, with email {}", user.name, user.email)
    }

    /// Forward one created user to the sink
    pub fn handle_user_created(&self, user: &UserRecord) -> Result<(), SubscriberError> {
        self.sink
            .log(&Self::format(user))
            .map_err(|e| SubscriberError::new(format!("log listener: {}", e)))
    }

    /// Subscribe this listener to `user_creation` on `registry`
    ///
    /// Call once at startup, before any registration happens.
    pub fn attach(self, registry: &EventRegistry<UserRecord>) {
        tracing::debug!(event = USER_CREATION, "attaching log listener");
        registry.subscribe(USER_CREATION, move |user: &UserRecord| {
            self.handle_user_created(user)
        });
    }
}

impl<S> Clone for LogListener<S> {
    fn clone(&self) -> Self {
        Self {
            sink: Arc::clone(&self.sink),
        }
    }
}

#[cfg(test)]
#[path = "listener_tests.rs"]
mod tests;
