use super::*;
use crate::net::types::User;

fn user_with_role(role: Role) -> User {
    User {
        id: "u1".to_owned(),
        code: None,
        full_name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        role,
        is_active: true,
    }
}

fn authed(role: Role) -> AuthState {
    let mut state = AuthState::default();
    state.loading = false;
    state.user = Some(user_with_role(role));
    state.access_token = Some("at-1".to_owned());
    state
}

fn anonymous() -> AuthState {
    let mut state = AuthState::default();
    state.loading = false;
    state
}

#[test]
fn auth_gate_renders_placeholder_while_loading() {
    let state = AuthState::default();
    assert!(state.loading);
    assert_eq!(decide_auth(&state), RouteDecision::Loading);
}

#[test]
fn auth_gate_redirects_unauthenticated_to_login() {
    assert_eq!(decide_auth(&anonymous()), RouteDecision::RedirectLogin);
}

#[test]
fn auth_gate_renders_when_authenticated() {
    assert_eq!(decide_auth(&authed(Role::Student)), RouteDecision::Render);
}

#[test]
fn role_gate_allows_listed_role() {
    assert_eq!(decide_role(&authed(Role::Admin), ADMIN_ROLES), RouteDecision::Render);
    assert_eq!(decide_role(&authed(Role::SuperAdmin), ADMIN_ROLES), RouteDecision::Render);
}

#[test]
fn role_gate_forbids_role_outside_allow_set() {
    // "Not allowed" must be distinguishable from "not authenticated".
    assert_eq!(decide_role(&authed(Role::Student), ADMIN_ROLES), RouteDecision::RedirectForbidden);
    assert_eq!(decide_role(&authed(Role::Teacher), COMPLIANCE_ROLES), RouteDecision::RedirectForbidden);
}

#[test]
fn role_gate_forbids_unknown_role() {
    assert_eq!(decide_role(&authed(Role::Unknown), ADMIN_ROLES), RouteDecision::RedirectForbidden);
    assert_eq!(decide_role(&authed(Role::Unknown), STUDENT_ROLES), RouteDecision::RedirectForbidden);
}

#[test]
fn role_gate_without_user_redirects_to_login() {
    assert_eq!(decide_role(&anonymous(), ADMIN_ROLES), RouteDecision::RedirectLogin);
}

#[test]
fn role_gate_waits_for_bootstrap() {
    assert_eq!(decide_role(&AuthState::default(), ADMIN_ROLES), RouteDecision::Loading);
}

#[test]
fn login_redirect_preserves_requested_location() {
    assert_eq!(login_redirect_target("/app/admin/teachers"), "/login?from=/app/admin/teachers");
}

#[test]
fn login_redirect_drops_trivial_locations() {
    assert_eq!(login_redirect_target("/"), "/login");
    assert_eq!(login_redirect_target(""), "/login");
    assert_eq!(login_redirect_target("/login"), "/login");
}

#[test]
fn return_target_accepts_local_paths_only() {
    assert_eq!(return_target(Some("/app/admin")), "/app/admin");
    assert_eq!(return_target(Some("//evil.example.com")), "/");
    assert_eq!(return_target(Some("https://evil.example.com")), "/");
    assert_eq!(return_target(None), "/");
}
