// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory user store
//!
//! Records are append-only and kept in creation order. Email is not unique:
//! lookups return the first record with a matching email. Password resets
//! target a record by its id, so every record can be reset even when it
//! shares an email with another.

use crate::id::{IdGen, UuidIdGen};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Unique identifier for a user record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors from user store operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("user with email {email} not found")]
    UserNotFound { email: String },
    #[error("user {id} not found")]
    UnknownUser { id: UserId },
    #[error("invalid reset code")]
    InvalidResetCode,
}

/// SHA-256 digest of a password
///
/// The plain text is never stored. `Debug` does not print the digest either.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest([u8; 32]);

impl PasswordDigest {
    pub fn of(password: &str) -> Self {
        let digest = Sha256::digest(password.as_bytes());
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&digest);
        Self(bytes)
    }

    pub fn matches(&self, password: &str) -> bool {
        *self == Self::of(password)
    }
}

impl std::fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PasswordDigest(<redacted>)")
    }
}

/// A registered user
///
/// Serializes to `{ id, name, email }`; credentials are skipped.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(skip)]
    password: PasswordDigest,
    #[serde(skip)]
    reset_code: Option<String>,
}

impl UserRecord {
    fn new(id: UserId, name: &str, password: &str, email: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            password: PasswordDigest::of(password),
            reset_code: None,
        }
    }

    pub fn verify_password(&self, candidate: &str) -> bool {
        self.password.matches(candidate)
    }

    pub fn reset_code(&self) -> Option<&str> {
        self.reset_code.as_deref()
    }

    /// Replace the password if `code` equals the issued reset code
    ///
    /// A record with no issued code rejects every code. The code is consumed
    /// on success. Only reached through [`UserStore::reset_password`], which
    /// applies it to the stored record.
    pub(crate) fn reset_password(
        &mut self,
        code: &str,
        new_password: &str,
    ) -> Result<(), StoreError> {
        if self.reset_code.as_deref() != Some(code) {
            return Err(StoreError::InvalidResetCode);
        }
        self.password = PasswordDigest::of(new_password);
        self.reset_code = None;
        Ok(())
    }
}

impl std::fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRecord")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("has_reset_code", &self.reset_code.is_some())
            .finish_non_exhaustive()
    }
}

impl std::fmt::Display for UserRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

/// Append-only store of user records
///
/// Clones share the same records.
#[derive(Clone)]
pub struct UserStore {
    users: Arc<RwLock<Vec<UserRecord>>>,
    id_gen: Arc<dyn IdGen>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::with_id_gen(UuidIdGen)
    }

    pub fn with_id_gen(id_gen: impl IdGen + 'static) -> Self {
        Self {
            users: Arc::new(RwLock::new(Vec::new())),
            id_gen: Arc::new(id_gen),
        }
    }

    /// Append a new record and return a copy of it
    ///
    /// No validation and no uniqueness check.
    pub fn create_user(&self, name: &str, password: &str, email: &str) -> UserRecord {
        let record = UserRecord::new(self.id_gen.user_id(), name, password, email);

        let mut users = self.users.write().unwrap_or_else(|e| e.into_inner());
        users.push(record.clone());

        tracing::debug!(id = %record.id, email, total = users.len(), "user created");
        record
    }

    /// First record whose email equals `email` exactly
    pub fn find_user(&self, email: &str) -> Result<UserRecord, StoreError> {
        self.users
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .find(|u| u.email == email)
            .cloned()
            .ok_or_else(|| StoreError::UserNotFound {
                email: email.to_string(),
            })
    }

    /// Issue a fresh reset code for the stored record with `id`
    ///
    /// Replaces any code issued earlier.
    pub fn issue_reset_code(&self, id: &UserId) -> Result<String, StoreError> {
        let code = self.id_gen.reset_code();
        self.with_user_mut(id, |user| {
            user.reset_code = Some(code.clone());
            Ok(())
        })?;

        tracing::debug!(%id, "reset code issued");
        Ok(code)
    }

    /// Reset the password of the stored copy of `user`
    ///
    /// `user` may be any copy returned by the store; the change is applied
    /// to the stored record with the same id.
    pub fn reset_password(
        &self,
        user: &UserRecord,
        code: &str,
        new_password: &str,
    ) -> Result<(), StoreError> {
        let result = self.with_user_mut(&user.id, |stored| {
            stored.reset_password(code, new_password)
        });
        match &result {
            Ok(()) => tracing::info!(id = %user.id, "password reset"),
            Err(e) => tracing::warn!(id = %user.id, error = %e, "password reset rejected"),
        }
        result
    }

    fn with_user_mut<T>(
        &self,
        id: &UserId,
        f: impl FnOnce(&mut UserRecord) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut users = self.users.write().unwrap_or_else(|e| e.into_inner());
        let user = users
            .iter_mut()
            .find(|u| u.id == *id)
            .ok_or_else(|| StoreError::UnknownUser { id: id.clone() })?;
        f(user)
    }

    /// Snapshot of every record in creation order
    pub fn all(&self) -> Vec<UserRecord> {
        self.users.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn len(&self) -> usize {
        self.users.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for UserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserStore")
            .field("users", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
