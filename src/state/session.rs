//! Session lifecycle operations: bootstrap, login, logout, profile refresh.
//!
//! DESIGN
//! ======
//! Every mutation of [`AuthState`] funnels through the commit functions in
//! this module. Commits are plain functions over `&mut AuthState` plus a
//! [`TokenStore`], so the whole lifecycle is exercised by native tests; the
//! `spawn_*` helpers are the thin hydrate-only glue that runs the network
//! calls and applies exactly one commit per flow.
//!
//! Race policy: operations capture `epoch` when they start and their commit
//! is discarded if a reset happened in between. A logout can therefore never
//! be undone by a login (or forced logout) that was already in flight.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::error::ErrorKind;
use crate::net::types::{LoginData, User};
use crate::state::auth::AuthState;
use crate::util::token_store::TokenStore;

#[cfg(feature = "hydrate")]
use leptos::prelude::{GetUntracked, RwSignal, Update};
#[cfg(feature = "hydrate")]
use crate::util::token_store::BrowserTokenStore;

/// Result of the bootstrap network phase, fed to [`resolve_bootstrap`].
/// `None` attempt means the store held no refresh token.
#[derive(Clone, Debug)]
pub enum BootstrapAttempt {
    Success { access_token: String, user: User },
    Failure(ErrorKind),
}

/// Capture the current generation before starting a mutating flow.
pub fn begin_mutation(state: &AuthState) -> u64 {
    state.epoch
}

/// Terminal commit of the bootstrap sequence. Runs exactly once per process;
/// every branch ends the bootstrap window.
///
/// Failure policy: a credential-class rejection tears down both the store
/// and the in-memory state. A transient failure leaves the store untouched
/// so the next reload can retry, but surfaces no user in memory: an
/// authenticated-looking session without a usable access token would break
/// the `is_authenticated == user present` invariant.
pub fn resolve_bootstrap(
    state: &mut AuthState,
    store: &mut dyn TokenStore,
    attempt: Option<BootstrapAttempt>,
) {
    match attempt {
        None => {
            // No refresh token: drop any orphaned profile entry.
            store.clear();
        }
        Some(BootstrapAttempt::Success { access_token, user }) => {
            if let Some(refresh_token) = store.read().refresh_token {
                store.save(&refresh_token, &user);
            }
            state.user = Some(user);
            state.access_token = Some(access_token);
        }
        Some(BootstrapAttempt::Failure(kind)) => {
            if kind.is_credential_failure() {
                store.clear();
            }
            state.user = None;
            state.access_token = None;
        }
    }
    state.loading = false;
}

/// Commit a successful login. Returns false (and leaves everything
/// untouched) when the session generation moved since the flow began.
pub fn commit_login(
    state: &mut AuthState,
    store: &mut dyn TokenStore,
    began: u64,
    login: LoginData,
) -> bool {
    if state.epoch != began {
        return false;
    }
    store.save(&login.refresh_token, &login.user);
    state.user = Some(login.user);
    state.access_token = Some(login.access_token);
    true
}

/// Replace the profile wholesale after a fresh fetch and re-persist it.
pub fn commit_user(state: &mut AuthState, store: &mut dyn TokenStore, user: User) {
    if let Some(refresh_token) = store.read().refresh_token {
        store.save(&refresh_token, &user);
    }
    state.user = Some(user);
}

/// Unconditional local teardown: clear the store, drop user and access
/// token, bump the generation. The single path out of an authenticated
/// state. Never touches `loading`.
pub fn reset_session(state: &mut AuthState, store: &mut dyn TokenStore) {
    store.clear();
    state.user = None;
    state.access_token = None;
    state.epoch += 1;
}

/// Forced teardown for a credential rejection observed on an authenticated
/// call. Idempotent per generation: a second 401 from the same (already
/// reset) session finds no user and changes nothing further.
pub fn force_logout_on_credential_failure(
    state: &mut AuthState,
    store: &mut dyn TokenStore,
    kind: ErrorKind,
) {
    if kind == ErrorKind::CredentialInvalid && state.user.is_some() {
        reset_session(state, store);
    }
}

/// Run the bootstrap sequence: read the store, refresh, fetch the profile,
/// commit. Never throws; every error resolves into a terminal state.
#[cfg(feature = "hydrate")]
pub fn spawn_bootstrap(auth: RwSignal<AuthState>) {
    leptos::task::spawn_local(async move {
        let mut store = BrowserTokenStore;
        let stored = store.read();
        let attempt = match stored.refresh_token {
            None => None,
            Some(refresh_token) => Some(match crate::net::auth::refresh(&refresh_token).await {
                Ok(refreshed) => match crate::net::auth::me(&refreshed.access_token).await {
                    Ok(user) => BootstrapAttempt::Success { access_token: refreshed.access_token, user },
                    Err(err) => BootstrapAttempt::Failure(err.kind),
                },
                Err(err) => BootstrapAttempt::Failure(err.kind),
            }),
        };
        if let Some(BootstrapAttempt::Failure(kind)) = &attempt {
            leptos::logging::warn!("session bootstrap failed: {kind:?}");
        }
        auth.update(|state| resolve_bootstrap(state, &mut store, attempt));
    });
}

/// Log out: best-effort server notification, then guaranteed local reset and
/// a hard hop to the login page.
#[cfg(feature = "hydrate")]
pub fn spawn_logout(auth: RwSignal<AuthState>) {
    leptos::task::spawn_local(async move {
        let mut store = BrowserTokenStore;
        let access_token = auth.get_untracked().access_token;
        let refresh_token = store.read().refresh_token;
        // The server call may fail or time out; the local reset still runs.
        let _ = crate::net::auth::logout(access_token.as_deref(), refresh_token.as_deref()).await;
        auth.update(|state| reset_session(state, &mut store));
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    });
}

/// Central error hook for authenticated calls: a 401 means the session is
/// gone, everything else is left for the caller to display.
#[cfg(feature = "hydrate")]
pub fn handle_api_error(auth: RwSignal<AuthState>, err: &crate::net::error::ApiError) {
    if err.kind == ErrorKind::CredentialInvalid {
        auth.update(|state| {
            force_logout_on_credential_failure(state, &mut BrowserTokenStore, err.kind);
        });
    }
}
