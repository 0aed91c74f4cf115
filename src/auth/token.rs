// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Meridian Portal Contributors

//! Session token codec.
//!
//! Sessions are stateless: the server signs a JWT carrying the user id and
//! role, hands it to the client in a cookie, and verifies it on every
//! request. Nothing is persisted server-side, so rotating the signing
//! secret invalidates every outstanding session (accepted tradeoff - there
//! is no revocation list).

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::roles::Role;

/// Session lifetime: 7 days.
pub const SESSION_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// Clock skew tolerance (60 seconds).
const CLOCK_SKEW_LEEWAY: u64 = 60;

/// Signed claims carried by a session token.
#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    /// Subject (user ID)
    sub: String,
    /// Role at issuance time
    role: Role,
    /// Issued at (Unix timestamp)
    iat: i64,
    /// Expiration (Unix timestamp)
    exp: i64,
}

/// Verified payload of a session token.
///
/// Produced fresh on every request; never cached beyond the request.
/// The role is the role *at issuance time* - callers that need the
/// current role must re-read the user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    /// Canonical user ID
    pub user_id: String,
    /// Role claimed at issuance
    pub role: Role,
}

/// Why a token failed verification.
///
/// The distinction is for logging only. Callers surface both variants to
/// the client as a single unauthenticated outcome.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerifyError {
    /// Signature valid but the token is past its expiry.
    #[error("session token has expired")]
    Expired,
    /// Unparseable token or signature mismatch.
    #[error("session token is malformed or has an invalid signature")]
    Malformed,
}

/// Issues and verifies signed session tokens.
///
/// The secret is process-wide configuration loaded once at startup and
/// never mutated at runtime.
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenCodec {
    /// Create a codec from the configured signing secret.
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a signed session token for `user_id` with `role`.
    ///
    /// Pure function of inputs + secret + clock. Expiry is fixed at
    /// [`SESSION_TTL_SECS`] from issuance.
    pub fn issue(&self, user_id: &str, role: Role) -> String {
        self.issue_at(user_id, role, Utc::now())
    }

    /// Issue with an explicit issuance instant. Split out for tests that
    /// need to mint already-expired tokens.
    fn issue_at(&self, user_id: &str, role: Role, now: DateTime<Utc>) -> String {
        let claims = SessionClaims {
            sub: user_id.to_string(),
            role,
            iat: now.timestamp(),
            exp: now.timestamp() + SESSION_TTL_SECS,
        };

        // HS256 with a server-held secret key cannot fail to sign.
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .expect("HS256 signing is infallible for secret keys")
    }

    /// Verify a token's signature and expiry.
    pub fn verify(&self, token: &str) -> Result<Claim, VerifyError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = CLOCK_SKEW_LEEWAY;

        let data = decode::<SessionClaims>(token, &self.decoding, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => VerifyError::Expired,
                _ => VerifyError::Malformed,
            }
        })?;

        Ok(Claim {
            user_id: data.claims.sub,
            role: data.claims.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn codec() -> TokenCodec {
        TokenCodec::new("test_secret")
    }

    #[test]
    fn verify_round_trips_issue() {
        let codec = codec();
        let token = codec.issue("user_123", Role::User);
        let claim = codec.verify(&token).unwrap();
        assert_eq!(claim.user_id, "user_123");
        assert_eq!(claim.role, Role::User);
    }

    #[test]
    fn verify_round_trips_admin_role() {
        let codec = codec();
        let token = codec.issue("admin_1", Role::Admin);
        let claim = codec.verify(&token).unwrap();
        assert_eq!(claim.role, Role::Admin);
    }

    #[test]
    fn expired_token_is_rejected() {
        let codec = codec();
        // Issued long enough ago that expiry plus leeway has passed.
        let issued = Utc::now() - Duration::seconds(SESSION_TTL_SECS + 3600);
        let token = codec.issue_at("user_123", Role::User, issued);
        assert_eq!(codec.verify(&token), Err(VerifyError::Expired));
    }

    #[test]
    fn foreign_secret_is_rejected() {
        let token = TokenCodec::new("other_secret").issue("user_123", Role::Admin);
        assert_eq!(codec().verify(&token), Err(VerifyError::Malformed));
    }

    #[test]
    fn tampered_token_is_rejected() {
        let codec = codec();
        let mut token = codec.issue("user_123", Role::User);
        // Flip a character in the payload segment.
        let dot = token.find('.').unwrap() + 1;
        let replacement = if token.as_bytes()[dot] == b'A' { "B" } else { "A" };
        token.replace_range(dot..dot + 1, replacement);
        assert_eq!(codec.verify(&token), Err(VerifyError::Malformed));
    }

    #[test]
    fn garbage_is_malformed() {
        assert_eq!(codec().verify("not.a.jwt"), Err(VerifyError::Malformed));
        assert_eq!(codec().verify(""), Err(VerifyError::Malformed));
    }
}
