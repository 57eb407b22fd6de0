//! Login page: email + password sign-in.
//!
//! A failed sign-in surfaces the backend message and leaves the session
//! untouched; a successful one returns the user to the location preserved by
//! the auth gate, or the profile page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::auth::AuthState;
use crate::util::form;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let username_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let username_value = username.get().trim().to_owned();
        let password_value = password.get();
        username_error.set(form::email(&username_value).err());
        password_error.set(form::password(&password_value).err());
        if username_error.get().is_some() || password_error.get().is_some() {
            return;
        }
        busy.set(true);
        error.set(None);
        let target = crate::util::auth::return_target(query.get_untracked().get("from").as_deref());
        let navigate = navigate.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let began = crate::state::session::begin_mutation(&auth.get_untracked());
            match crate::net::auth::login(&username_value, &password_value).await {
                Ok(data) => {
                    let mut committed = false;
                    auth.update(|state| {
                        committed = crate::state::session::commit_login(
                            state,
                            &mut crate::util::token_store::BrowserTokenStore,
                            began,
                            data,
                        );
                    });
                    if committed {
                        navigate(&target, NavigateOptions::default());
                    } else {
                        busy.set(false);
                    }
                }
                Err(err) => {
                    error.set(Some(err.message));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username_value, password_value, target, navigate, auth);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"EduCenter"</h1>
                <p class="auth-card__subtitle">"Sign in"</p>
                <Show when=move || error.get().is_some()>
                    <p class="auth-card__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email Address"
                        <input
                            class="auth-form__input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                        <Show when=move || username_error.get().is_some()>
                            <span class="auth-form__field-error">
                                {move || username_error.get().unwrap_or_default()}
                            </span>
                        </Show>
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <Show when=move || password_error.get().is_some()>
                            <span class="auth-form__field-error">
                                {move || password_error.get().unwrap_or_default()}
                            </span>
                        </Show>
                    </label>
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <div class="auth-card__links">
                    <A href="/forgot-password">"Forgot password?"</A>
                    <A href="/register">"Don't have an account? Sign Up"</A>
                </div>
            </div>
        </div>
    }
}
