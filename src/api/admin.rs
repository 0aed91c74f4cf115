// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Meridian Portal Contributors

//! Admin-only endpoints: user roster and CSV export.
//!
//! Both routes sit behind [`AdminOnly`], which checks the *live* role on
//! every request.

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};

use crate::auth::AdminOnly;
use crate::models::{ListUsersParams, User, UserListResponse, UserSummary};
use crate::state::AppState;

/// List registered users, newest first.
///
/// Cursor pagination: pass `nextCursor` from the previous page as
/// `cursor`. Limit is clamped to 100.
#[utoipa::path(
    get,
    path = "/admin/users",
    tag = "Admin",
    params(ListUsersParams),
    responses(
        (status = 200, description = "Paginated user roster", body = UserListResponse),
        (status = 401, description = "No valid session"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn list_users(
    AdminOnly(_ctx): AdminOnly,
    Query(params): Query<ListUsersParams>,
    State(state): State<AppState>,
) -> Json<UserListResponse> {
    let (users, next_cursor) = state
        .store
        .read()
        .await
        .list_users(params.limit, params.cursor.as_deref());

    Json(UserListResponse {
        items: users.iter().map(UserSummary::from).collect(),
        next_cursor,
    })
}

/// Export the full user roster as CSV.
#[utoipa::path(
    get,
    path = "/admin/export/users.csv",
    tag = "Admin",
    responses(
        (status = 200, description = "CSV attachment", body = String, content_type = "text/csv"),
        (status = 401, description = "No valid session"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn export_users_csv(
    AdminOnly(_ctx): AdminOnly,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let users = state.store.read().await.all_users();

    (
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"users.csv\"",
            ),
        ],
        render_users_csv(&users),
    )
}

/// Render the roster CSV: header row plus one line per user.
fn render_users_csv(users: &[User]) -> String {
    let mut csv = String::from("id,email,name,createdAt,ndaAccepted,isAccredited\n");
    for user in users {
        csv.push_str(&format!(
            "{},{},{},{},{},{}\n",
            user.id,
            user.email,
            user.name.as_deref().unwrap_or(""),
            user.created_at.to_rfc3339(),
            user.nda_accepted_at.is_some(),
            user.is_accredited,
        ));
    }
    csv
}
