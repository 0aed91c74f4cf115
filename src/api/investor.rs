// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Meridian Portal Contributors

//! Investor material endpoints, gated on NDA acceptance.

use axum::Json;

use crate::auth::NdaAccepted;
use crate::models::SignedUrlResponse;

/// Positioning document, served only after NDA acceptance.
#[utoipa::path(
    get,
    path = "/investor/positioning",
    tag = "Investor",
    responses(
        (status = 200, description = "Positioning content", body = String),
        (status = 401, description = "No valid session"),
        (status = 403, description = "NDA not accepted (nda_required)")
    )
)]
pub async fn positioning(NdaAccepted(_ctx): NdaAccepted) -> &'static str {
    // Placeholder until the content pipeline lands.
    "Investor positioning content placeholder"
}

/// Issue a signed download URL for gated documents.
///
/// URL issuance against object storage is not wired up yet; the endpoint
/// exists so clients can integrate against the final shape.
#[utoipa::path(
    get,
    path = "/investor/signed-url",
    tag = "Investor",
    responses(
        (status = 200, description = "Signed URL (currently null)", body = SignedUrlResponse),
        (status = 401, description = "No valid session"),
        (status = 403, description = "NDA not accepted (nda_required)")
    )
)]
pub async fn signed_url(NdaAccepted(_ctx): NdaAccepted) -> Json<SignedUrlResponse> {
    Json(SignedUrlResponse {
        ok: true,
        url: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_url_response_serializes_null_url() {
        let response = SignedUrlResponse {
            ok: true,
            url: None,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"ok":true,"url":null}"#);
    }
}
