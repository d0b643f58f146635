// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! hark-core: in-process event registry and the services wired through it
//!
//! This crate provides:
//! - `EventRegistry` - named publish/subscribe table with ordered fan-out
//! - `UserStore` - in-memory user records with lookup and password reset
//! - `RegistrationService` - creates users and announces them
//! - `LogListener` - forwards user creation to a `LogSink`
//! - Interchangeable list classifiers and the `ListReader` client
//! - TOML configuration for the demonstration flows

pub mod config;
pub mod events;
pub mod id;
pub mod listener;
pub mod registration;
pub mod sink;
pub mod store;
pub mod strategy;

#[cfg(test)]
mod test_support;

pub use config::{ClassifyConfig, ConfigError, HarkConfig, RegisterConfig};
pub use events::{EventName, EventRegistry, PublishReport, SubscriberError, SubscriberFailure};
pub use id::{IdGen, SequentialIdGen, UuidIdGen};
pub use listener::LogListener;
pub use registration::{RegistrationService, USER_CREATION};
pub use sink::{LogSink, SinkError};
pub use store::{PasswordDigest, StoreError, UserId, UserRecord, UserStore};
pub use strategy::{
    classifier_fn, BlackHoleClassifier, Classification, Classifier, FnClassifier,
    InitialIndexClassifier, ListReader, RandomClassifier, RemoveIndicesClassifier,
    ReversedClassifier, SortingClassifier, StrategyDef,
};
