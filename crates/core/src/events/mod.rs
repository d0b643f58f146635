// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Events system for loose coupling between services
//!
//! This module provides:
//! - `EventRegistry` - Deliver payloads to the subscribers of a named event
//! - `EventName` - Opaque key identifying an event
//! - `PublishReport` - What happened during one publish

mod name;
mod registry;

pub use name::EventName;
pub use registry::{EventRegistry, PublishReport, Subscriber, SubscriberError, SubscriberFailure};
