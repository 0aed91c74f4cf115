// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Meridian Portal Contributors

//! Investor Portal - Access-Control Backend
//!
//! A small web backend gating investor material behind three policies:
//! authenticated, admin role, and NDA accepted. Sessions are stateless
//! signed tokens carried in an `HttpOnly` cookie.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Session tokens and authorization guards
//! - `store` - In-memory user store (stands in for the database)

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod store;
