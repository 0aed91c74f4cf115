// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Meridian Portal Contributors

//! NDA acceptance endpoint.

use axum::{extract::State, Json};
use tracing::info;

use crate::auth::Auth;
use crate::error::ApiError;
use crate::models::{AcceptNdaRequest, OkResponse};
use crate::state::AppState;
use crate::store::StoreError;

/// Accept the NDA for the authenticated user.
///
/// The body must carry an explicit `accepted: true`; acceptance is a
/// one-way transition and repeat calls are harmless.
#[utoipa::path(
    post,
    path = "/nda/accept",
    tag = "NDA",
    request_body = AcceptNdaRequest,
    responses(
        (status = 200, description = "NDA acceptance recorded", body = OkResponse),
        (status = 400, description = "Body did not carry accepted: true"),
        (status = 401, description = "No valid session")
    )
)]
pub async fn accept(
    Auth(ctx): Auth,
    State(state): State<AppState>,
    Json(body): Json<AcceptNdaRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    if !body.accepted {
        return Err(ApiError::bad_request("invalid_body"));
    }

    state
        .store
        .write()
        .await
        .accept_nda(&ctx.user_id)
        .map_err(|e| match e {
            // Valid session but the record is gone: no identity.
            StoreError::NotFound => ApiError::unauthorized(),
            _ => ApiError::internal(),
        })?;

    info!(user_id = %ctx.user_id, "nda accepted");
    Ok(Json(OkResponse::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthContext, Role};
    use crate::config::AppConfig;
    use crate::store::InMemoryStore;
    use axum::http::StatusCode;

    fn state_with_user() -> (AppState, String) {
        let mut store = InMemoryStore::new();
        let user = store.create_user("a@x.com", None, "hash").unwrap();
        (AppState::new(store, &AppConfig::for_tests()), user.id)
    }

    fn ctx(user_id: &str) -> Auth {
        Auth(AuthContext {
            user_id: user_id.to_string(),
            role: Role::User,
        })
    }

    #[tokio::test]
    async fn accept_requires_explicit_true() {
        let (state, user_id) = state_with_user();
        let err = accept(
            ctx(&user_id),
            State(state.clone()),
            Json(AcceptNdaRequest { accepted: false }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, "invalid_body");

        // Nothing was recorded.
        let user = state.store.read().await.find_by_id(&user_id).unwrap();
        assert!(user.nda_accepted_at.is_none());
    }

    #[tokio::test]
    async fn accept_records_timestamp_once() {
        let (state, user_id) = state_with_user();

        accept(
            ctx(&user_id),
            State(state.clone()),
            Json(AcceptNdaRequest { accepted: true }),
        )
        .await
        .unwrap();
        let first = state
            .store
            .read()
            .await
            .find_by_id(&user_id)
            .unwrap()
            .nda_accepted_at
            .unwrap();

        accept(
            ctx(&user_id),
            State(state.clone()),
            Json(AcceptNdaRequest { accepted: true }),
        )
        .await
        .unwrap();
        let second = state
            .store
            .read()
            .await
            .find_by_id(&user_id)
            .unwrap()
            .nda_accepted_at
            .unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn accept_for_vanished_record_is_unauthorized() {
        let (state, _user_id) = state_with_user();
        let err = accept(
            ctx("ghost"),
            State(state),
            Json(AcceptNdaRequest { accepted: true }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }
}
