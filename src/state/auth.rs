//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single source of truth consulted by route guards, the app shell, and
//! every authenticated request. Held in an `RwSignal` provided via context
//! from `app.rs`; mutated only through the operations in
//! [`crate::state::session`], never written directly by consumers.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state: the signed-in account, its in-memory access token,
/// and the bootstrap flag.
///
/// `access_token` never leaves process memory; only the refresh token is
/// persisted, by the token store. `epoch` is a generation counter bumped on
/// every session reset so a state-mutating operation that was started
/// before the reset cannot commit after it.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub access_token: Option<String>,
    /// True only during the bootstrap window; transitions to false exactly
    /// once per process lifetime.
    pub loading: bool,
    pub epoch: u64,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, access_token: None, loading: true, epoch: 0 }
    }
}

impl AuthState {
    /// Derived flag: a session is authenticated iff a user is present.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn role(&self) -> Option<crate::net::types::Role> {
        self.user.as_ref().map(|u| u.role)
    }
}
