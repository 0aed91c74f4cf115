// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Meridian Portal Contributors

//! # Authorization Core
//!
//! Stateless cookie sessions and the three guards that gate the API.
//!
//! ## Session Flow
//!
//! 1. Login verifies the password and issues a signed JWT
//!    (`{ sub, role, iat, exp }`, HS256, 7-day expiry)
//! 2. The token travels in an `HttpOnly` cookie named `auth`
//! 3. On each request a guard:
//!    - reads and verifies the cookie (signature + expiry)
//!    - optionally re-reads the user record for live role/NDA state
//!    - attaches [`AuthContext`] to the request, or rejects it
//!
//! ## Security
//!
//! - Identity is only ever taken from a verified token, never from
//!   request bodies or unverified headers
//! - Absent cookie vs invalid token is never distinguished to the client
//! - Authentication failure always wins over role/NDA failures (401
//!   before any 403)
//! - Everything ambiguous denies: missing records, store outages,
//!   unparseable tokens

pub mod claims;
pub mod error;
pub mod guards;
pub mod roles;
pub mod session;
pub mod token;

pub use claims::AuthContext;
pub use error::AuthError;
pub use guards::{AdminOnly, Auth, NdaAccepted};
pub use roles::Role;
pub use session::{removal_cookie, resolve, session_cookie, SESSION_COOKIE};
pub use token::{Claim, TokenCodec, VerifyError};
