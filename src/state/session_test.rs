use super::*;
use crate::net::types::Role;
use crate::util::token_store::{MemoryTokenStore, StoredSession};

fn user(id: &str, role: Role) -> User {
    User {
        id: id.to_owned(),
        code: None,
        full_name: "Test User".to_owned(),
        email: "user@example.com".to_owned(),
        role,
        is_active: true,
    }
}

fn login_data(user: User) -> LoginData {
    LoginData {
        access_token: "at-1".to_owned(),
        refresh_token: "rt-1".to_owned(),
        user,
    }
}

// =============================================================
// Bootstrap
// =============================================================

#[test]
fn bootstrap_without_refresh_token_ends_unauthenticated() {
    let mut state = AuthState::default();
    // An orphaned profile entry (no token) is stale state to be dropped.
    let mut store = MemoryTokenStore::seeded(None, Some(user("u0", Role::Admin)));

    resolve_bootstrap(&mut state, &mut store, None);

    assert!(!state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(store.read(), StoredSession::default());
}

#[test]
fn bootstrap_success_restores_session_and_repersists() {
    let mut state = AuthState::default();
    let mut store = MemoryTokenStore::seeded(Some("rt-1"), None);

    // Profile arrives with lowercase role; the wire layer normalizes it.
    let restored: User = serde_json::from_str(
        r#"{"id":"u1","full_name":"T","email":"t@x.y","role":"teacher","is_active":true}"#,
    )
    .unwrap();
    resolve_bootstrap(
        &mut state,
        &mut store,
        Some(BootstrapAttempt::Success { access_token: "at-1".to_owned(), user: restored }),
    );

    assert!(state.is_authenticated());
    assert_eq!(state.access_token.as_deref(), Some("at-1"));
    assert_eq!(state.role(), Some(Role::Teacher));
    assert!(!state.loading);
    let stored = store.read();
    assert_eq!(stored.refresh_token.as_deref(), Some("rt-1"));
    assert_eq!(stored.user.unwrap().id, "u1");
}

#[test]
fn bootstrap_expired_refresh_token_tears_everything_down() {
    let mut state = AuthState::default();
    let mut store = MemoryTokenStore::seeded(Some("rt-expired"), Some(user("u1", Role::Teacher)));

    resolve_bootstrap(&mut state, &mut store, Some(BootstrapAttempt::Failure(ErrorKind::CredentialInvalid)));

    assert!(!state.is_authenticated());
    assert!(state.access_token.is_none());
    assert!(!state.loading);
    assert_eq!(store.read(), StoredSession::default());
}

#[test]
fn bootstrap_transient_failure_preserves_the_store() {
    let mut state = AuthState::default();
    let mut store = MemoryTokenStore::seeded(Some("rt-1"), Some(user("u1", Role::Teacher)));

    resolve_bootstrap(&mut state, &mut store, Some(BootstrapAttempt::Failure(ErrorKind::Network)));

    // Unauthenticated in memory, but the next reload can retry the refresh.
    assert!(!state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(store.read().refresh_token.as_deref(), Some("rt-1"));
}

#[test]
fn bootstrap_server_failure_is_treated_as_transient() {
    let mut state = AuthState::default();
    let mut store = MemoryTokenStore::seeded(Some("rt-1"), None);

    resolve_bootstrap(&mut state, &mut store, Some(BootstrapAttempt::Failure(ErrorKind::Server)));

    assert_eq!(store.read().refresh_token.as_deref(), Some("rt-1"));
    assert!(!state.loading);
}

#[test]
fn bootstrap_ends_loading_in_every_branch() {
    for attempt in [
        None,
        Some(BootstrapAttempt::Success { access_token: "at".to_owned(), user: user("u", Role::Admin) }),
        Some(BootstrapAttempt::Failure(ErrorKind::CredentialInvalid)),
        Some(BootstrapAttempt::Failure(ErrorKind::Network)),
    ] {
        let mut state = AuthState::default();
        let mut store = MemoryTokenStore::seeded(Some("rt"), None);
        resolve_bootstrap(&mut state, &mut store, attempt);
        assert!(!state.loading);
        // Later resets never reopen the bootstrap window.
        reset_session(&mut state, &mut store);
        assert!(!state.loading);
    }
}

// =============================================================
// Login / logout
// =============================================================

#[test]
fn login_commit_populates_state_and_store() {
    let mut state = AuthState::default();
    state.loading = false;
    let mut store = MemoryTokenStore::default();

    let began = begin_mutation(&state);
    assert!(commit_login(&mut state, &mut store, began, login_data(user("u1", Role::Admin))));

    assert!(state.is_authenticated());
    assert_eq!(state.access_token.as_deref(), Some("at-1"));
    assert_eq!(store.read().refresh_token.as_deref(), Some("rt-1"));
}

#[test]
fn logout_resets_state_and_clears_store() {
    let mut state = AuthState::default();
    state.loading = false;
    let mut store = MemoryTokenStore::default();
    let began = begin_mutation(&state);
    commit_login(&mut state, &mut store, began, login_data(user("u1", Role::Admin)));

    reset_session(&mut state, &mut store);

    assert!(!state.is_authenticated());
    assert!(state.access_token.is_none());
    assert_eq!(store.read(), StoredSession::default());
}

#[test]
fn stale_login_cannot_resurrect_a_logged_out_session() {
    let mut state = AuthState::default();
    state.loading = false;
    let mut store = MemoryTokenStore::default();

    // Login flow starts...
    let began = begin_mutation(&state);
    // ...logout wins the race before the response lands.
    reset_session(&mut state, &mut store);
    // The late commit must be discarded wholesale.
    assert!(!commit_login(&mut state, &mut store, began, login_data(user("u1", Role::Admin))));

    assert!(!state.is_authenticated());
    assert!(state.access_token.is_none());
    assert_eq!(store.read(), StoredSession::default());
}

#[test]
fn update_user_replaces_profile_and_repersists() {
    let mut state = AuthState::default();
    state.loading = false;
    let mut store = MemoryTokenStore::default();
    let began = begin_mutation(&state);
    commit_login(&mut state, &mut store, began, login_data(user("u1", Role::Teacher)));

    let mut renamed = user("u1", Role::Teacher);
    renamed.full_name = "Renamed".to_owned();
    commit_user(&mut state, &mut store, renamed);

    assert_eq!(state.user.as_ref().unwrap().full_name, "Renamed");
    assert_eq!(store.read().user.unwrap().full_name, "Renamed");
    assert!(state.is_authenticated());
}

// =============================================================
// Forced logout on 401
// =============================================================

#[test]
fn credential_failure_after_login_forces_logout() {
    let mut state = AuthState::default();
    state.loading = false;
    let mut store = MemoryTokenStore::default();
    let began = begin_mutation(&state);
    commit_login(&mut state, &mut store, began, login_data(user("u1", Role::Student)));

    force_logout_on_credential_failure(&mut state, &mut store, ErrorKind::CredentialInvalid);

    assert!(!state.is_authenticated());
    assert_eq!(store.read(), StoredSession::default());
    // The next navigation decision is a login redirect, not forbidden.
    assert_eq!(
        crate::util::auth::decide_auth(&state),
        crate::util::auth::RouteDecision::RedirectLogin
    );
}

#[test]
fn forced_logout_runs_at_most_once_per_session() {
    let mut state = AuthState::default();
    state.loading = false;
    let mut store = MemoryTokenStore::default();
    let began = begin_mutation(&state);
    commit_login(&mut state, &mut store, began, login_data(user("u1", Role::Student)));

    force_logout_on_credential_failure(&mut state, &mut store, ErrorKind::CredentialInvalid);
    let epoch_after_first = state.epoch;
    // A second 401 from the same dead session is a no-op.
    force_logout_on_credential_failure(&mut state, &mut store, ErrorKind::CredentialInvalid);
    assert_eq!(state.epoch, epoch_after_first);
}

#[test]
fn non_credential_errors_do_not_force_logout() {
    let mut state = AuthState::default();
    state.loading = false;
    let mut store = MemoryTokenStore::default();
    let began = begin_mutation(&state);
    commit_login(&mut state, &mut store, began, login_data(user("u1", Role::Student)));

    for kind in [ErrorKind::Forbidden, ErrorKind::NotFound, ErrorKind::Server, ErrorKind::Network] {
        force_logout_on_credential_failure(&mut state, &mut store, kind);
        assert!(state.is_authenticated(), "{kind:?} must not end the session");
    }
}

// =============================================================
// Invariants
// =============================================================

#[test]
fn authenticated_flag_matches_user_presence_in_all_reachable_states() {
    let mut state = AuthState::default();
    let mut store = MemoryTokenStore::seeded(Some("rt-1"), None);
    let consistent = |s: &AuthState| s.is_authenticated() == s.user.is_some();

    assert!(consistent(&state));
    resolve_bootstrap(
        &mut state,
        &mut store,
        Some(BootstrapAttempt::Success { access_token: "at".to_owned(), user: user("u1", Role::Admin) }),
    );
    assert!(consistent(&state));
    reset_session(&mut state, &mut store);
    assert!(consistent(&state));
    let began = begin_mutation(&state);
    commit_login(&mut state, &mut store, began, login_data(user("u2", Role::Teacher)));
    assert!(consistent(&state));
    commit_user(&mut state, &mut store, user("u2", Role::Teacher));
    assert!(consistent(&state));
    force_logout_on_credential_failure(&mut state, &mut store, ErrorKind::CredentialInvalid);
    assert!(consistent(&state));
}
