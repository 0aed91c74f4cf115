// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Meridian Portal Contributors

//! Account endpoints: register, login, me, logout.
//!
//! Login and registration are the only places the password is handled;
//! everything downstream works from the session cookie. Login failures
//! never reveal whether the email or the password was wrong.

use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::CookieJar;
use tracing::info;

use crate::auth::{removal_cookie, session_cookie, Auth};
use crate::error::ApiError;
use crate::models::{LoginRequest, MeResponse, OkResponse, RegisterRequest};
use crate::state::AppState;
use crate::store::StoreError;

/// bcrypt work factor, matching the original deployment.
const BCRYPT_COST: u32 = 12;

/// Register a new account.
///
/// New accounts get the default role; roles are never taken from the
/// request.
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "Auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = OkResponse),
        (status = 400, description = "Invalid email or password too short"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<OkResponse>), ApiError> {
    if !is_plausible_email(&body.email) || body.password.len() < 8 {
        return Err(ApiError::bad_request("invalid_body"));
    }

    let password_hash =
        bcrypt::hash(&body.password, BCRYPT_COST).map_err(|_| ApiError::internal())?;

    let user = state
        .store
        .write()
        .await
        .create_user(body.email, body.name, password_hash)
        .map_err(|e| match e {
            StoreError::DuplicateEmail => ApiError::conflict("email_exists"),
            _ => ApiError::internal(),
        })?;

    info!(user_id = %user.id, "account registered");
    Ok((StatusCode::CREATED, Json(OkResponse::new())))
}

/// Log in and receive a session cookie.
///
/// Unknown email and wrong password are indistinguishable on the wire.
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in; session cookie set", body = OkResponse),
        (status = 400, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginRequest>,
) -> Result<(CookieJar, Json<OkResponse>), ApiError> {
    let user = state
        .store
        .read()
        .await
        .find_by_email(&body.email)
        .ok_or_else(|| ApiError::bad_request("invalid_credentials"))?;

    let password_ok = bcrypt::verify(&body.password, &user.password_hash).unwrap_or(false);
    if !password_ok {
        return Err(ApiError::bad_request("invalid_credentials"));
    }

    let token = state.tokens.issue(&user.id, user.role);
    let jar = jar.add(session_cookie(token, state.secure_cookies));

    info!(user_id = %user.id, "login succeeded");
    Ok((jar, Json(OkResponse::new())))
}

/// Get the current user's profile.
///
/// Reads the user record fresh, so `ndaAccepted` reflects acceptance made
/// after the session was issued.
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "Auth",
    responses(
        (status = 200, description = "Current user", body = MeResponse),
        (status = 401, description = "No valid session")
    )
)]
pub async fn me(
    Auth(ctx): Auth,
    State(state): State<AppState>,
) -> Result<Json<MeResponse>, ApiError> {
    // A valid token for a deleted record is still no identity.
    let user = state
        .store
        .read()
        .await
        .find_by_id(&ctx.user_id)
        .ok_or_else(ApiError::unauthorized)?;

    Ok(Json(MeResponse::from(&user)))
}

/// Log out by clearing the session cookie.
///
/// Stateless sessions have nothing to revoke server-side; the token
/// simply ages out.
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = "Auth",
    responses(
        (status = 200, description = "Session cookie cleared", body = OkResponse)
    )
)]
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<OkResponse>) {
    (jar.add(removal_cookie()), Json(OkResponse::new()))
}

/// Minimal email plausibility check: something before and after one `@`.
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_plausibility() {
        assert!(is_plausible_email("a@x.com"));
        assert!(!is_plausible_email("ax.com"));
        assert!(!is_plausible_email("@x.com"));
        assert!(!is_plausible_email("a@"));
        assert!(!is_plausible_email(""));
    }

    #[tokio::test]
    async fn register_rejects_short_password() {
        let state = AppState::new(
            crate::store::InMemoryStore::new(),
            &crate::config::AppConfig::for_tests(),
        );
        let body = RegisterRequest {
            email: "a@x.com".into(),
            password: "short".into(),
            name: None,
        };

        let err = register(State(state), Json(body)).await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, "invalid_body");
    }

    #[tokio::test]
    async fn register_rejects_duplicate_email() {
        let state = AppState::new(
            crate::store::InMemoryStore::new(),
            &crate::config::AppConfig::for_tests(),
        );
        let body = RegisterRequest {
            email: "a@x.com".into(),
            password: "pw12345678".into(),
            name: None,
        };

        register(State(state.clone()), Json(body.clone())).await.unwrap();
        let err = register(State(state), Json(body)).await.unwrap_err();
        assert_eq!(err.status, StatusCode::CONFLICT);
        assert_eq!(err.code, "email_exists");
    }

    #[tokio::test]
    async fn login_rejects_unknown_email_and_wrong_password_alike() {
        let state = AppState::new(
            crate::store::InMemoryStore::new(),
            &crate::config::AppConfig::for_tests(),
        );
        register(
            State(state.clone()),
            Json(RegisterRequest {
                email: "a@x.com".into(),
                password: "pw12345678".into(),
                name: None,
            }),
        )
        .await
        .unwrap();

        let unknown = login(
            State(state.clone()),
            CookieJar::new(),
            Json(LoginRequest {
                email: "b@x.com".into(),
                password: "pw12345678".into(),
            }),
        )
        .await
        .unwrap_err();

        let wrong_pw = login(
            State(state),
            CookieJar::new(),
            Json(LoginRequest {
                email: "a@x.com".into(),
                password: "wrongpassword".into(),
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(unknown.status, StatusCode::BAD_REQUEST);
        assert_eq!(unknown.code, "invalid_credentials");
        assert_eq!(wrong_pw.status, StatusCode::BAD_REQUEST);
        assert_eq!(wrong_pw.code, "invalid_credentials");
    }

    #[tokio::test]
    async fn login_sets_session_cookie_verifiable_by_codec() {
        let state = AppState::new(
            crate::store::InMemoryStore::new(),
            &crate::config::AppConfig::for_tests(),
        );
        register(
            State(state.clone()),
            Json(RegisterRequest {
                email: "a@x.com".into(),
                password: "pw12345678".into(),
                name: None,
            }),
        )
        .await
        .unwrap();

        let (jar, _) = login(
            State(state.clone()),
            CookieJar::new(),
            Json(LoginRequest {
                email: "a@x.com".into(),
                password: "pw12345678".into(),
            }),
        )
        .await
        .unwrap();

        let cookie = jar.get(crate::auth::SESSION_COOKIE).unwrap();
        let claim = state.tokens.verify(cookie.value()).unwrap();
        let user = state.store.read().await.find_by_email("a@x.com").unwrap();
        assert_eq!(claim.user_id, user.id);
    }
}
