// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Meridian Portal Contributors

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{
        AcceptNdaRequest, LoginRequest, MeResponse, OkResponse, RegisterRequest,
        SignedUrlResponse, UserListResponse, UserSummary,
    },
    state::AppState,
};

pub mod admin;
pub mod auth;
pub mod health;
pub mod investor;
pub mod nda;

/// Build the application router.
///
/// The frontend talks to this API with credentialed requests, so CORS is
/// pinned to a single origin rather than a wildcard.
pub fn router(state: AppState, cors_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(cors_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    let routes = Router::new()
        .route("/health", get(health::health))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/me", get(auth::me))
        .route("/auth/logout", post(auth::logout))
        .route("/nda/accept", post(nda::accept))
        .route("/investor/positioning", get(investor::positioning))
        .route("/investor/signed-url", get(investor::signed_url))
        .route("/admin/users", get(admin::list_users))
        .route("/admin/export/users.csv", get(admin::export_users_csv))
        .with_state(state);

    routes
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        auth::register,
        auth::login,
        auth::me,
        auth::logout,
        nda::accept,
        investor::positioning,
        investor::signed_url,
        admin::list_users,
        admin::export_users_csv
    ),
    components(
        schemas(
            OkResponse,
            RegisterRequest,
            LoginRequest,
            MeResponse,
            AcceptNdaRequest,
            SignedUrlResponse,
            UserSummary,
            UserListResponse
        )
    ),
    tags(
        (name = "Health", description = "Liveness probe"),
        (name = "Auth", description = "Registration, login, and session management"),
        (name = "NDA", description = "NDA acceptance"),
        (name = "Investor", description = "NDA-gated investor material"),
        (name = "Admin", description = "User roster administration")
    )
)]
struct ApiDoc;
