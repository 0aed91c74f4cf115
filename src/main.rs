// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Meridian Portal Contributors

use std::net::SocketAddr;

use axum::http::HeaderValue;
use tracing::info;
use tracing_subscriber::EnvFilter;

use investor_portal_server::{
    api::router,
    auth::Role,
    config::AppConfig,
    state::AppState,
    store::InMemoryStore,
};

#[tokio::main]
async fn main() {
    init_tracing();

    let config = AppConfig::from_env().expect("invalid configuration");

    let mut store = InMemoryStore::new();
    seed_admin(&mut store);

    let state = AppState::new(store, &config);

    let cors_origin: HeaderValue = config
        .cors_origin
        .parse()
        .expect("CORS_ORIGIN is not a valid header value");
    let app = router(state, cors_origin);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Failed to parse bind address");

    info!(%addr, production = config.production, "investor portal listening (docs at /docs)");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server failed");
}

/// Initialize tracing. `LOG_FORMAT=json` switches to structured output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Seed an initial admin account when `SEED_ADMIN_EMAIL` and
/// `SEED_ADMIN_PASSWORD` are set, so a fresh in-memory deployment has an
/// operator.
fn seed_admin(store: &mut InMemoryStore) {
    let (Ok(email), Ok(password)) = (
        std::env::var("SEED_ADMIN_EMAIL"),
        std::env::var("SEED_ADMIN_PASSWORD"),
    ) else {
        return;
    };

    let hash = bcrypt::hash(&password, 12).expect("Failed to hash seed admin password");
    match store.create_user(email, None, hash) {
        Ok(user) => {
            store
                .set_role(&user.id, Role::Admin)
                .expect("seeded user exists");
            info!(user_id = %user.id, "seeded admin account");
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to seed admin account");
        }
    }
}
