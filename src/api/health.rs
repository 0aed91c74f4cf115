// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Meridian Portal Contributors

use axum::Json;

use crate::models::OkResponse;

/// Health check endpoint handler.
///
/// Unauthenticated liveness probe; the process being up is the only check.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = OkResponse)
    )
)]
pub async fn health() -> Json<OkResponse> {
    Json(OkResponse::new())
}
