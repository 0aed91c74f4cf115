// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Meridian Portal Contributors

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::auth::TokenCodec;
use crate::config::AppConfig;
use crate::store::InMemoryStore;

/// Shared application state.
///
/// The token codec and configuration are immutable after startup; the
/// store is the only mutable resource and is serialized by the lock.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<InMemoryStore>>,
    pub tokens: Arc<TokenCodec>,
    /// Whether session cookies carry the `Secure` attribute.
    pub secure_cookies: bool,
}

impl AppState {
    pub fn new(store: InMemoryStore, config: &AppConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            tokens: Arc::new(TokenCodec::new(&config.session_secret)),
            secure_cookies: config.production,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_is_cloneable_and_shares_the_store() {
        let config = AppConfig::for_tests();
        let state = AppState::new(InMemoryStore::new(), &config);
        let clone = state.clone();
        assert!(Arc::ptr_eq(&state.store, &clone.store));
        assert!(Arc::ptr_eq(&state.tokens, &clone.tokens));
    }
}
