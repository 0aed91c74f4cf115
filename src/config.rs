// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Meridian Portal Contributors

//! # Runtime Configuration
//!
//! Configuration is loaded from the environment once at startup and never
//! mutated afterwards. Rotating the session secret therefore means a
//! restart, which invalidates all outstanding sessions.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `SESSION_SECRET` | Signing secret for session tokens | Required in production |
//! | `APP_ENV` | `production` enables the `Secure` cookie attribute | `development` |
//! | `CORS_ORIGIN` | Allowed browser origin (credentialed CORS) | `http://localhost:5173` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `3000` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::env;

use thiserror::Error;

/// Environment variable name for the session signing secret.
pub const SESSION_SECRET_ENV: &str = "SESSION_SECRET";

/// Environment variable name for the deployment environment.
pub const APP_ENV_ENV: &str = "APP_ENV";

/// Environment variable name for the allowed CORS origin.
pub const CORS_ORIGIN_ENV: &str = "CORS_ORIGIN";

/// Development-only fallback secret. Never used when `APP_ENV=production`.
const DEV_SESSION_SECRET: &str = "dev_session_secret";

/// Configuration failure at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SESSION_SECRET must be set when APP_ENV=production")]
    MissingSecret,
    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),
}

/// Process-wide configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Signing secret for session tokens.
    pub session_secret: String,
    /// Whether this is a production deployment.
    pub production: bool,
    /// Browser origin allowed to send credentialed requests.
    pub cors_origin: String,
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// In production a missing `SESSION_SECRET` is a hard error; in
    /// development a fixed fallback keeps the local loop convenient.
    pub fn from_env() -> Result<Self, ConfigError> {
        let production = env::var(APP_ENV_ENV)
            .map(|v| v.eq_ignore_ascii_case("production"))
            .unwrap_or(false);

        let session_secret = match env::var(SESSION_SECRET_ENV) {
            Ok(secret) if !secret.is_empty() => secret,
            _ if production => return Err(ConfigError::MissingSecret),
            _ => DEV_SESSION_SECRET.to_string(),
        };

        let port_raw = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let port: u16 = port_raw
            .parse()
            .map_err(|_| ConfigError::InvalidPort(port_raw))?;

        Ok(Self {
            session_secret,
            production,
            cors_origin: env::var(CORS_ORIGIN_ENV)
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
        })
    }

    /// Fixed configuration for tests: development mode, known secret.
    pub fn for_tests() -> Self {
        Self {
            session_secret: "test_secret".to_string(),
            production: false,
            cors_origin: "http://localhost:5173".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
        }
    }
}
