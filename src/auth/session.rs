// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Meridian Portal Contributors

//! Session cookie handling.
//!
//! The session token travels in a single `HttpOnly` cookie. Resolution is
//! a pure lookup: read the cookie, verify the token, and collapse every
//! failure (absent, tampered, expired) into `None`. Callers must treat
//! `None` as "no authenticated identity" and never tell the client which
//! failure occurred.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::debug;

use super::token::{Claim, TokenCodec, VerifyError, SESSION_TTL_SECS};

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "auth";

/// Extract and verify the session claim from a request's cookies.
///
/// Returns `None` when the cookie is absent or the token does not verify.
/// The absent/invalid distinction is logged here and goes no further.
pub fn resolve(jar: &CookieJar, codec: &TokenCodec) -> Option<Claim> {
    let cookie = jar.get(SESSION_COOKIE)?;

    match codec.verify(cookie.value()) {
        Ok(claim) => Some(claim),
        Err(VerifyError::Expired) => {
            debug!("session cookie rejected: token expired");
            None
        }
        Err(VerifyError::Malformed) => {
            debug!("session cookie rejected: malformed token");
            None
        }
    }
}

/// Build the session cookie carrying a freshly issued token.
///
/// `HttpOnly` and `SameSite=Lax` always; `Secure` only in production so
/// local development over plain HTTP keeps working. Max-age matches the
/// token lifetime.
pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(time::Duration::seconds(SESSION_TTL_SECS))
        .build()
}

/// Build the removal cookie used on logout (expires immediately).
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::ZERO)
        .build()
}
