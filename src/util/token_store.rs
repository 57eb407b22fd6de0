//! Durable persistence for the refresh token and last-known account.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only state that survives a page reload. The access token is memory-only
//! and must never land here. Session code talks to the `TokenStore` trait so
//! the browser backing can be swapped for an in-memory one in tests and on
//! the server.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use crate::net::types::User;

pub const REFRESH_TOKEN_KEY: &str = "classboard_refresh_token";
pub const USER_KEY: &str = "classboard_user";

/// What the durable store held at read time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StoredSession {
    pub refresh_token: Option<String>,
    pub user: Option<User>,
}

/// Durable key-value persistence for the credential that crosses reloads.
/// No network calls, no business logic.
pub trait TokenStore {
    /// Non-blocking, synchronous read of both entries.
    fn read(&self) -> StoredSession;
    /// Overwrite both entries back-to-back.
    fn save(&mut self, refresh_token: &str, user: &User);
    /// Remove both entries. Idempotent.
    fn clear(&mut self);
}

/// `localStorage`-backed store. Off-hydrate every read is absent and every
/// write is a no-op, keeping server rendering deterministic.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for BrowserTokenStore {
    fn read(&self) -> StoredSession {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return StoredSession::default();
            };
            let refresh_token = storage.get_item(REFRESH_TOKEN_KEY).ok().flatten().filter(|t| !t.is_empty());
            // A corrupt persisted profile reads as absent rather than failing.
            let user = storage
                .get_item(USER_KEY)
                .ok()
                .flatten()
                .and_then(|raw| serde_json::from_str(&raw).ok());
            StoredSession { refresh_token, user }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            StoredSession::default()
        }
    }

    fn save(&mut self, refresh_token: &str, user: &User) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            let _ = storage.set_item(REFRESH_TOKEN_KEY, refresh_token);
            if let Ok(raw) = serde_json::to_string(user) {
                let _ = storage.set_item(USER_KEY, &raw);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (refresh_token, user);
        }
    }

    fn clear(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(REFRESH_TOKEN_KEY);
                let _ = storage.remove_item(USER_KEY);
            }
        }
    }
}

/// Plain-field store for tests and non-browser targets.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    refresh_token: Option<String>,
    user: Option<User>,
}

impl MemoryTokenStore {
    /// Seed the store as if a prior session had persisted these entries.
    pub fn seeded(refresh_token: Option<&str>, user: Option<User>) -> Self {
        Self { refresh_token: refresh_token.map(str::to_owned), user }
    }
}

impl TokenStore for MemoryTokenStore {
    fn read(&self) -> StoredSession {
        StoredSession { refresh_token: self.refresh_token.clone(), user: self.user.clone() }
    }

    fn save(&mut self, refresh_token: &str, user: &User) {
        self.refresh_token = Some(refresh_token.to_owned());
        self.user = Some(user.clone());
    }

    fn clear(&mut self) {
        self.refresh_token = None;
        self.user = None;
    }
}
