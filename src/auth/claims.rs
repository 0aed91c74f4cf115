// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Meridian Portal Contributors

//! Per-request authorization context.

use serde::Serialize;
use utoipa::ToSchema;

use super::roles::Role;
use super::token::Claim;

/// Identity and role attached to a request after a guard succeeds.
///
/// Derived state only: produced by a guard, consumed by the handler,
/// never persisted. Depending on the guard, `role` is either the role
/// claimed at token issuance ([`Auth`](super::Auth)) or the current role
/// from the user record ([`AdminOnly`](super::AdminOnly),
/// [`NdaAccepted`](super::NdaAccepted)).
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthContext {
    /// Canonical user ID
    pub user_id: String,
    /// Role the guard established
    pub role: Role,
}

impl From<Claim> for AuthContext {
    /// Take the identity and role straight from a verified claim.
    fn from(claim: Claim) -> Self {
        Self {
            user_id: claim.user_id,
            role: claim.role,
        }
    }
}
