// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Meridian Portal Contributors

//! In-memory user store.
//!
//! Stands in for the database behind the user-lookup collaborator
//! interface the guards consume. The store owns the only shared mutable
//! state in the system (role and NDA fields); callers serialize access
//! through the `RwLock` in [`AppState`](crate::state::AppState).
//!
//! Guard-facing reads go through [`InMemoryStore::lookup_access`], which
//! returns `Result` so that callers handle unavailability explicitly and
//! fail closed. The in-memory implementation itself can only report
//! `NotFound`.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::auth::Role;
use crate::models::{User, UserAccess};

/// Default page size for the roster listing.
const DEFAULT_PAGE_SIZE: usize = 20;

/// Maximum page size for the roster listing.
const MAX_PAGE_SIZE: usize = 100;

/// Store failure modes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No record with the given id or email.
    #[error("user not found")]
    NotFound,
    /// A user with this email already exists.
    #[error("email already registered")]
    DuplicateEmail,
    /// Backend failure or timeout. Authorization callers must treat this
    /// as a denial, never a permit.
    #[error("user store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Default)]
pub struct InMemoryStore {
    users: HashMap<String, User>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a user with the default role and no NDA acceptance.
    pub fn create_user(
        &mut self,
        email: impl Into<String>,
        name: Option<String>,
        password_hash: impl Into<String>,
    ) -> Result<User, StoreError> {
        let email = email.into();
        if self.find_by_email(&email).is_some() {
            return Err(StoreError::DuplicateEmail);
        }

        let id = Uuid::new_v4().to_string();
        let user = User {
            id: id.clone(),
            email,
            name,
            password_hash: password_hash.into(),
            role: Role::default(),
            nda_accepted_at: None,
            is_accredited: false,
            created_at: Utc::now(),
        };
        self.users.insert(id, user.clone());
        Ok(user)
    }

    pub fn find_by_id(&self, id: &str) -> Option<User> {
        self.users.get(id).cloned()
    }

    pub fn find_by_email(&self, email: &str) -> Option<User> {
        self.users.values().find(|u| u.email == email).cloned()
    }

    /// Point-in-time read of the fields the guards check.
    pub fn lookup_access(&self, id: &str) -> Result<UserAccess, StoreError> {
        self.users
            .get(id)
            .map(|u| UserAccess {
                role: u.role,
                nda_accepted_at: u.nda_accepted_at,
            })
            .ok_or(StoreError::NotFound)
    }

    /// Record NDA acceptance.
    ///
    /// One-way transition: the first acceptance sets the timestamp, later
    /// calls leave it untouched. Returns the timestamp now in effect.
    pub fn accept_nda(&mut self, id: &str) -> Result<DateTime<Utc>, StoreError> {
        let user = self.users.get_mut(id).ok_or(StoreError::NotFound)?;
        let accepted_at = *user.nda_accepted_at.get_or_insert_with(Utc::now);
        Ok(accepted_at)
    }

    /// Assign a role. Administration-time only; no route exposes this.
    pub fn set_role(&mut self, id: &str, role: Role) -> Result<(), StoreError> {
        let user = self.users.get_mut(id).ok_or(StoreError::NotFound)?;
        user.role = role;
        Ok(())
    }

    /// List users newest-first with cursor pagination.
    ///
    /// The cursor is the id of the last user on the previous page. Returns
    /// the page and, when more rows remain, the cursor for the next page.
    pub fn list_users(
        &self,
        limit: Option<usize>,
        cursor: Option<&str>,
    ) -> (Vec<User>, Option<String>) {
        let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);

        let mut users: Vec<&User> = self.users.values().collect();
        users.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        let start = match cursor {
            Some(cursor_id) => match users.iter().position(|u| u.id == cursor_id) {
                Some(pos) => pos + 1,
                // Unknown cursor yields an empty page rather than restarting.
                None => users.len(),
            },
            None => 0,
        };

        let page: Vec<User> = users
            .into_iter()
            .skip(start)
            .take(limit + 1)
            .cloned()
            .collect();

        if page.len() > limit {
            let mut page = page;
            page.truncate(limit);
            let next_cursor = page.last().map(|u| u.id.clone());
            (page, next_cursor)
        } else {
            (page, None)
        }
    }

    /// All users newest-first, for the CSV export.
    pub fn all_users(&self) -> Vec<User> {
        let mut users: Vec<User> = self.users.values().cloned().collect();
        users.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        users
    }
}
