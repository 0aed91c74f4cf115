// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Meridian Portal Contributors

//! Axum extractors enforcing the three authorization policies.
//!
//! Use a guard in a handler signature to gate the route:
//!
//! ```rust,ignore
//! async fn my_handler(Auth(ctx): Auth) -> impl IntoResponse {
//!     // ctx is AuthContext
//! }
//! ```
//!
//! All three guards resolve the session cookie themselves, so a request
//! with no valid session is always rejected `Unauthorized` before any
//! role or NDA state is considered.
//!
//! ## Role freshness
//!
//! [`Auth`] trusts the role claimed in the token, so a role change takes
//! effect only after re-login or token expiry. [`AdminOnly`] and
//! [`NdaAccepted`] re-read the user record on every request and decide on
//! the *current* state, closing that staleness window for the
//! higher-privilege gates.

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;
use tracing::warn;

use super::claims::AuthContext;
use super::error::AuthError;
use super::session;
use super::token::Claim;
use crate::models::UserAccess;
use crate::state::AppState;
use crate::store::StoreError;

/// Require an authenticated session.
///
/// On success the context carries the identity and role from the token.
pub struct Auth(pub AuthContext);

impl FromRequestParts<AppState> for Auth {
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let claim = resolve_session(parts, state)?;
        Ok(Auth(claim.into()))
    }
}

/// Require an authenticated session whose user record *currently* has the
/// admin role.
///
/// The token's role claim is ignored for the decision; a demoted admin is
/// locked out on their next request, valid session or not.
pub struct AdminOnly(pub AuthContext);

impl FromRequestParts<AppState> for AdminOnly {
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let claim = resolve_session(parts, state)?;
        let access = live_access(state, &claim.user_id, AuthError::Forbidden).await?;

        if !access.role.is_admin() {
            return Err(AuthError::Forbidden);
        }

        Ok(AdminOnly(AuthContext {
            user_id: claim.user_id,
            role: access.role,
        }))
    }
}

/// Require an authenticated session whose user record has accepted the NDA.
///
/// Failure is `nda_required` (distinct from `forbidden`) so the client
/// can redirect into the acceptance flow.
pub struct NdaAccepted(pub AuthContext);

impl FromRequestParts<AppState> for NdaAccepted {
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let claim = resolve_session(parts, state)?;
        let access = live_access(state, &claim.user_id, AuthError::NdaRequired).await?;

        if access.nda_accepted_at.is_none() {
            return Err(AuthError::NdaRequired);
        }

        Ok(NdaAccepted(AuthContext {
            user_id: claim.user_id,
            role: access.role,
        }))
    }
}

/// Resolve the session cookie from request parts.
///
/// Authentication failure takes precedence over every other check, so
/// this runs first in all three guards.
fn resolve_session(parts: &Parts, state: &AppState) -> Result<Claim, AuthError> {
    let jar = CookieJar::from_headers(&parts.headers);
    session::resolve(&jar, &state.tokens).ok_or(AuthError::Unauthorized)
}

/// Read the current role and NDA state for a user.
///
/// Fails closed: a missing record yields the guard's own denial
/// (`missing`), and a store outage is logged and denied rather than
/// permitted.
async fn live_access(
    state: &AppState,
    user_id: &str,
    missing: AuthError,
) -> Result<UserAccess, AuthError> {
    match state.store.read().await.lookup_access(user_id) {
        Ok(access) => Ok(access),
        Err(StoreError::NotFound) => Err(missing),
        Err(e) => {
            warn!(user_id, error = %e, "user record lookup failed; denying request");
            Err(AuthError::StoreUnavailable)
        }
    }
}
