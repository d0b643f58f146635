// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process wiring: registry, store, services and listeners

use hark_core::{
    EventRegistry, LogListener, LogSink, RegistrationService, UserRecord, UserStore,
};

/// Services shared by every command
pub struct App {
    pub registration: RegistrationService,
}

impl App {
    /// Build the services and attach the log listener to `sink`
    ///
    /// The listener is attached before anything can register a user.
    pub fn wire(sink: impl LogSink) -> Self {
        let events = EventRegistry::<UserRecord>::new();
        LogListener::new(sink).attach(&events);

        Self {
            registration: RegistrationService::new(UserStore::new(), events),
        }
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
