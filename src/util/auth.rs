//! Route-access decisions shared by the guard components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards must agree on one decision table: loading renders a neutral
//! placeholder, missing authentication redirects to login, a role outside the
//! allow-set redirects to the forbidden page. Decisions are pure functions of
//! auth state so every branch is testable off-browser.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Role;
use crate::state::auth::AuthState;

/// Roles allowed into the admin module.
pub const ADMIN_ROLES: &[Role] = &[Role::Admin, Role::SuperAdmin];
/// Roles allowed into the teacher module.
pub const TEACHER_ROLES: &[Role] = &[Role::Teacher];
/// Roles allowed into the student/parent module.
pub const STUDENT_ROLES: &[Role] = &[Role::Student, Role::Parent];
/// Roles allowed into the compliance module.
pub const COMPLIANCE_ROLES: &[Role] = &[Role::Compliance];

/// Outcome of evaluating a navigation against the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Bootstrap still in flight: render a placeholder, decide nothing yet.
    Loading,
    /// Render the nested content.
    Render,
    /// Not authenticated: go to `/login`.
    RedirectLogin,
    /// Authenticated but not permitted: go to `/403`.
    RedirectForbidden,
}

/// Authentication gate: only cares whether a user is present.
pub fn decide_auth(state: &AuthState) -> RouteDecision {
    if state.loading {
        return RouteDecision::Loading;
    }
    if state.is_authenticated() {
        RouteDecision::Render
    } else {
        RouteDecision::RedirectLogin
    }
}

/// Role gate: requires a user whose role is in `allow`. An absent user
/// still redirects to login even though the authentication gate composes
/// outward of this one. Unknown roles always fall through to forbidden.
pub fn decide_role(state: &AuthState, allow: &[Role]) -> RouteDecision {
    if state.loading {
        return RouteDecision::Loading;
    }
    let Some(user) = &state.user else {
        return RouteDecision::RedirectLogin;
    };
    if allow.contains(&user.role) {
        RouteDecision::Render
    } else {
        RouteDecision::RedirectForbidden
    }
}

/// Login URL carrying the originally requested location, so a successful
/// sign-in can return the user there.
pub fn login_redirect_target(requested: &str) -> String {
    if requested.is_empty() || requested == "/" || requested == "/login" {
        return "/login".to_owned();
    }
    crate::net::api::with_query("/login", &[("from", requested.to_owned())])
}

/// Where to land after login: the preserved location if it is a safe local
/// path, the profile page otherwise.
pub fn return_target(from: Option<&str>) -> String {
    match from {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_owned(),
        _ => "/".to_owned(),
    }
}
