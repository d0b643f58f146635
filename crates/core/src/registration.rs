// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User registration

use crate::events::EventRegistry;
use crate::store::{UserRecord, UserStore};

/// Event published after a user record is stored
pub const USER_CREATION: &str = "user_creation";

/// Creates users and announces them on the event registry
#[derive(Clone, Debug)]
pub struct RegistrationService {
    store: UserStore,
    events: EventRegistry<UserRecord>,
}

impl RegistrationService {
    pub fn new(store: UserStore, events: EventRegistry<UserRecord>) -> Self {
        Self { store, events }
    }

    /// Store a new user, then publish `user_creation` with the stored record
    ///
    /// The record is in the store before any subscriber runs. Subscriber
    /// failures are logged by the registry and do not fail registration.
    pub fn register_new_user(&self, name: &str, password: &str, email: &str) -> UserRecord {
        let user = self.store.create_user(name, password, email);
        tracing::info!(id = %user.id, name, email, "user registered");

        let report = self.events.publish(USER_CREATION, &user);
        if !report.is_clean() {
            tracing::warn!(
                id = %user.id,
                failed = report.failures.len(),
                notified = report.succeeded(),
                "some user_creation subscribers failed"
            );
        }

        user
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }

    pub fn events(&self) -> &EventRegistry<UserRecord> {
        &self.events
    }
}

#[cfg(test)]
#[path = "registration_tests.rs"]
mod tests;
