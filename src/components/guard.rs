//! Route guard components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `RequireAuth` composes outward of `RequireRole` in the router tree. Both
//! render a neutral loader until bootstrap settles, since protected content
//! must neither flash nor redirect prematurely. Both issue their redirects
//! from an effect so the decision re-runs on every auth-state change.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::loader::FullScreenLoader;
use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::util::auth::{decide_auth, decide_role, login_redirect_target, RouteDecision};

fn replace_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..Default::default() }
}

/// Authentication gate: renders nested routes for a signed-in session,
/// redirects to `/login` otherwise, preserving the requested location.
#[component]
pub fn RequireAuth() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let location = use_location();

    Effect::new(move || {
        let state = auth.get();
        if decide_auth(&state) == RouteDecision::RedirectLogin {
            let requested = location.pathname.get_untracked();
            navigate(&login_redirect_target(&requested), replace_options());
        }
    });

    view! {
        <Show
            when=move || decide_auth(&auth.get()) == RouteDecision::Render
            fallback=|| view! { <FullScreenLoader/> }
        >
            <Outlet/>
        </Show>
    }
}

/// Role gate: renders nested routes only for roles in `allow`. Anything
/// else, including an unrecognized role, lands on the forbidden page; a
/// missing user still redirects to login.
#[component]
pub fn RequireRole(allow: &'static [Role]) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let location = use_location();

    Effect::new(move || {
        let state = auth.get();
        match decide_role(&state, allow) {
            RouteDecision::RedirectLogin => {
                let requested = location.pathname.get_untracked();
                navigate(&login_redirect_target(&requested), replace_options());
            }
            RouteDecision::RedirectForbidden => navigate("/403", replace_options()),
            RouteDecision::Loading | RouteDecision::Render => {}
        }
    });

    view! {
        <Show
            when=move || decide_role(&auth.get(), allow) == RouteDecision::Render
            fallback=|| view! { <FullScreenLoader/> }
        >
            <Outlet/>
        </Show>
    }
}
