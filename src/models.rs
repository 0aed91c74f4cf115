// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Meridian Portal Contributors

//! # API Data Models
//!
//! Request and response structures for the REST API, plus the stored
//! [`User`] entity. Response types derive `Serialize` and `ToSchema` for
//! JSON handling and OpenAPI documentation; wire field names are
//! camelCase to match the frontend contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::auth::Role;

// =============================================================================
// Stored User Entity
// =============================================================================

/// A registered user.
///
/// Owned by the store. The password hash never leaves this type; response
/// models copy out only the public fields. `nda_accepted_at` starts as
/// `None` and is set exactly once - there is no un-accept transition.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique identifier (UUID v4).
    pub id: String,
    /// Login email, unique across users.
    pub email: String,
    /// Optional display name.
    pub name: Option<String>,
    /// bcrypt hash of the password.
    pub password_hash: String,
    /// Current role. Assigned at creation or by an operator.
    pub role: Role,
    /// When the NDA was accepted, if ever.
    pub nda_accepted_at: Option<DateTime<Utc>>,
    /// Accredited-investor flag (set out-of-band).
    pub is_accredited: bool,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

/// The slice of a user record the authorization guards read.
///
/// This is the collaborator interface between the guards and the store:
/// one point-in-time read of the current role and NDA state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccess {
    /// Current role (not the token's role).
    pub role: Role,
    /// NDA acceptance timestamp, if accepted.
    pub nda_accepted_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Auth Requests/Responses
// =============================================================================

/// Request to register a new account.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// Login email. Must look like an email address.
    pub email: String,
    /// Password, minimum 8 characters.
    pub password: String,
    /// Optional display name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Request to log in.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Login email.
    pub email: String,
    /// Password.
    pub password: String,
}

/// Generic success acknowledgement.
#[derive(Debug, Serialize, ToSchema)]
pub struct OkResponse {
    /// Always `true`.
    pub ok: bool,
}

impl OkResponse {
    pub fn new() -> Self {
        Self { ok: true }
    }
}

impl Default for OkResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Response for GET /auth/me.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    /// User's unique ID.
    pub id: String,
    /// Login email.
    pub email: String,
    /// Display name, if set.
    pub name: Option<String>,
    /// Current role.
    pub role: Role,
    /// Whether the NDA has been accepted.
    pub nda_accepted: bool,
}

impl From<&User> for MeResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
            nda_accepted: user.nda_accepted_at.is_some(),
        }
    }
}

// =============================================================================
// NDA Models
// =============================================================================

/// Request to accept the NDA.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AcceptNdaRequest {
    /// Must be `true`; an explicit `false` is rejected.
    pub accepted: bool,
}

// =============================================================================
// Investor Models
// =============================================================================

/// Response for GET /investor/signed-url.
#[derive(Debug, Serialize, ToSchema)]
pub struct SignedUrlResponse {
    /// Always `true`.
    pub ok: bool,
    /// Signed download URL. Currently always `null` (issuance not wired).
    pub url: Option<String>,
}

// =============================================================================
// Admin Models
// =============================================================================

/// Query parameters for the admin user list.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListUsersParams {
    /// Page size (default 20, max 100).
    pub limit: Option<usize>,
    /// Opaque cursor from a previous page (`nextCursor`).
    pub cursor: Option<String>,
}

/// One user in the admin roster.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    /// User's unique ID.
    pub id: String,
    /// Login email.
    pub email: String,
    /// Display name, if set.
    pub name: Option<String>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// Whether the NDA has been accepted.
    pub nda_accepted: bool,
    /// Accredited-investor flag.
    pub is_accredited: bool,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            created_at: user.created_at,
            nda_accepted: user.nda_accepted_at.is_some(),
            is_accredited: user.is_accredited,
        }
    }
}

/// Paginated admin user list.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserListResponse {
    /// Users on this page, newest first.
    pub items: Vec<UserSummary>,
    /// Cursor for the next page, absent on the last page.
    pub next_cursor: Option<String>,
}
