//! Reset-password form, reached from the emailed link. The reset token
//! arrives in the `token` query parameter.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::util::form;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let navigate = use_navigate();
    let query = use_query_map();

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let password_error = RwSignal::new(None::<String>);
    let confirm_error = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let missing_token = move || query.get().get("token").unwrap_or_default().is_empty();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let token = query.get_untracked().get("token").unwrap_or_default();
        if token.is_empty() {
            error.set(Some("This reset link is invalid or has expired.".to_owned()));
            return;
        }
        let password_value = password.get();
        password_error.set(form::password(&password_value).err());
        confirm_error.set(form::confirm(&confirm.get(), &password_value).err());
        if password_error.get().is_some() || confirm_error.get().is_some() {
            return;
        }
        busy.set(true);
        error.set(None);
        let navigate = navigate.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::auth::reset_password(&token, &password_value).await {
                Ok(_) => navigate("/login", NavigateOptions::default()),
                Err(err) => {
                    error.set(Some(err.message));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, password_value, navigate);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"EduCenter"</h1>
                <p class="auth-card__subtitle">"Choose a new password"</p>
                <Show when=missing_token>
                    <p class="auth-card__error">"This reset link is missing its token."</p>
                </Show>
                <Show when=move || error.get().is_some()>
                    <p class="auth-card__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "New Password"
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
                    <label class="auth-form__label">
                        "Confirm New Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                        <Show when=move || confirm_error.get().is_some()>
                            <span class="auth-form__field-error">
                                {move || confirm_error.get().unwrap_or_default()}
                            </span>
                        </Show>
                    </label>
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Reset Password" }}
                    </button>
                </form>
                <div class="auth-card__links">
                    <A href="/login">"Back to sign in"</A>
                </div>
            </div>
        </div>
    }
}
