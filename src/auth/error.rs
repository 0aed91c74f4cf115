// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Meridian Portal Contributors

//! Authorization rejections.
//!
//! Every guard failure terminates the request with one of these. The wire
//! contract is deliberately narrow: clients only ever see `unauthorized`,
//! `forbidden`, or `nda_required`. Internal distinctions (expired vs
//! malformed token, lookup outage vs missing record) are logged, not
//! surfaced.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Terminal authorization failure for a request.
#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    /// No valid session (absent, tampered, or expired token).
    Unauthorized,
    /// Authenticated but the current role is insufficient.
    Forbidden,
    /// Authenticated, role sufficient, but the NDA has not been accepted.
    NdaRequired,
    /// User record lookup failed or timed out. Fails closed: the client
    /// sees a plain denial, the outage is logged where it is raised.
    StoreUnavailable,
}

#[derive(Serialize)]
struct RejectionBody {
    ok: bool,
    error: &'static str,
}

impl AuthError {
    /// Wire error code, one of `unauthorized`, `forbidden`, `nda_required`.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::Unauthorized => "unauthorized",
            AuthError::Forbidden => "forbidden",
            AuthError::NdaRequired => "nda_required",
            // Deny-on-ambiguity is indistinguishable from a plain denial.
            AuthError::StoreUnavailable => "forbidden",
        }
    }

    /// HTTP status for this rejection.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Unauthorized => StatusCode::UNAUTHORIZED,
            AuthError::Forbidden | AuthError::NdaRequired | AuthError::StoreUnavailable => {
                StatusCode::FORBIDDEN
            }
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::Unauthorized => write!(f, "No valid session"),
            AuthError::Forbidden => write!(f, "Insufficient role for this operation"),
            AuthError::NdaRequired => write!(f, "NDA acceptance is required"),
            AuthError::StoreUnavailable => write!(f, "User record lookup unavailable"),
        }
    }
}

impl std::error::Error for AuthError {}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = Json(RejectionBody {
            ok: false,
            error: self.error_code(),
        });
        (self.status_code(), body).into_response()
    }
}
