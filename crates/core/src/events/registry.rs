// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event registry for routing payloads to named subscribers

use super::name::EventName;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Error returned by a subscriber that could not handle a payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SubscriberError {
    message: String,
}

impl SubscriberError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Callback invoked with the payload of every publish on its event name
pub type Subscriber<P> = Arc<dyn Fn(&P) -> Result<(), SubscriberError> + Send + Sync>;

/// A subscriber that failed during a publish
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberFailure {
    /// Position of the subscriber in the call order (0-based)
    pub position: usize,
    pub error: SubscriberError,
}

/// Outcome of a single publish
///
/// Failures are isolated: every subscriber runs even when an earlier one
/// fails, and each failure is recorded here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    pub event: EventName,
    /// Number of subscribers the payload was delivered to, including the
    /// ones that failed
    pub delivered: usize,
    pub failures: Vec<SubscriberFailure>,
}

impl PublishReport {
    fn empty(event: EventName) -> Self {
        Self {
            event,
            delivered: 0,
            failures: Vec::new(),
        }
    }

    /// Number of subscribers that handled the payload without error
    pub fn succeeded(&self) -> usize {
        self.delivered - self.failures.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// The event registry maps event names to ordered subscriber lists
///
/// Clones share the same table, so a registry can be handed to every
/// service that needs to publish or subscribe.
pub struct EventRegistry<P> {
    subscribers: Arc<RwLock<HashMap<EventName, Vec<Subscriber<P>>>>>,
}

impl<P> EventRegistry<P> {
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Append a subscriber to the list for `event`
    ///
    /// Subscribing the same callback twice registers it twice.
    pub fn subscribe<F>(&self, event: impl Into<EventName>, subscriber: F)
    where
        F: Fn(&P) -> Result<(), SubscriberError> + Send + Sync + 'static,
    {
        let event = event.into();
        let mut subs = self.subscribers.write().unwrap_or_else(|e| e.into_inner());
        let list = subs.entry(event.clone()).or_default();
        list.push(Arc::new(subscriber));

        tracing::debug!(%event, subscribers = list.len(), "subscribed");
    }

    /// Remove every subscriber for `event`
    ///
    /// Returns false when nothing was subscribed. A miss is logged, never
    /// raised.
    pub fn unsubscribe(&self, event: impl Into<EventName>) -> bool {
        let event = event.into();
        let removed = self
            .subscribers
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&event);

        match removed {
            Some(list) => {
                tracing::debug!(%event, removed = list.len(), "unsubscribed");
                true
            }
            None => {
                tracing::warn!(%event, "unsubscribe: no subscribers registered");
                false
            }
        }
    }

    /// Deliver `payload` to every subscriber of `event`, in subscription order
    ///
    /// The subscriber list is snapshotted before delivery, so subscribers may
    /// call back into the registry. Changes they make apply to the next
    /// publish.
    pub fn publish(&self, event: impl Into<EventName>, payload: &P) -> PublishReport {
        let event = event.into();

        let snapshot: Vec<Subscriber<P>> = {
            let subs = self.subscribers.read().unwrap_or_else(|e| e.into_inner());
            match subs.get(&event) {
                Some(list) => list.clone(),
                None => return PublishReport::empty(event),
            }
        };

        tracing::debug!(%event, subscribers = snapshot.len(), "publishing");

        let mut failures = Vec::new();
        for (position, subscriber) in snapshot.iter().enumerate() {
            if let Err(error) = subscriber(payload) {
                tracing::warn!(%event, position, %error, "subscriber failed");
                failures.push(SubscriberFailure { position, error });
            }
        }

        PublishReport {
            event,
            delivered: snapshot.len(),
            failures,
        }
    }

    /// Number of subscribers registered for `event`
    pub fn subscriber_count(&self, event: impl Into<EventName>) -> usize {
        self.subscribers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&event.into())
            .map_or(0, Vec::len)
    }

    /// All event names with at least one subscriber, sorted
    pub fn event_names(&self) -> Vec<EventName> {
        let mut names: Vec<EventName> = self
            .subscribers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_empty()
    }
}

impl<P> Default for EventRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for EventRegistry<P> {
    fn clone(&self) -> Self {
        Self {
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

impl<P> std::fmt::Debug for EventRegistry<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventRegistry")
            .field("events", &self.event_names())
            .finish()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
